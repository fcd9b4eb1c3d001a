//! Local navigation routes.
//!
//! Navigation is a path string selecting which view renders. Routes that
//! require authentication are redirected to the login view by the front
//! end when no user is signed in.

use serde::{Deserialize, Serialize};

/// A navigable view of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Member search (the landing page)
    Home,
    /// Sign-in view
    Login,
    /// Conversation list and chat window
    Messages,
    /// Profile editor for the signed-in member
    Profile,
    /// Account settings
    Settings,
    /// Terms of service
    Terms,
    /// Public profile of a single member
    UserDetail(String),
    /// Fallback for unknown paths
    NotFound(String),
}

impl Route {
    /// Parses a path string into a route.
    ///
    /// Trailing slashes are ignored; unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/messages" => Route::Messages,
            "/profile" => Route::Profile,
            "/settings" => Route::Settings,
            "/terms" => Route::Terms,
            _ => {
                if let Some(id) = trimmed.strip_prefix("/users/")
                    && !id.is_empty()
                    && !id.contains('/')
                {
                    Route::UserDetail(id.to_string())
                } else {
                    Route::NotFound(path.to_string())
                }
            }
        }
    }

    /// Renders the route back to its path string.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Terms => "/terms".to_string(),
            Route::UserDetail(id) => format!("/users/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Returns true when the view needs a signed-in member.
    pub fn requires_auth(&self) -> bool {
        match self {
            Route::Home
            | Route::Messages
            | Route::Profile
            | Route::Settings
            | Route::UserDetail(_) => true,
            Route::Login | Route::Terms | Route::NotFound(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/messages/"), Route::Messages);
        assert_eq!(Route::parse("/settings"), Route::Settings);
        assert_eq!(
            Route::parse("/users/abc-123"),
            Route::UserDetail("abc-123".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(
            Route::parse("/nowhere"),
            Route::NotFound("/nowhere".to_string())
        );
        assert_eq!(Route::parse("/users/"), Route::NotFound("/users/".to_string()));
        assert_eq!(
            Route::parse("/users/a/b"),
            Route::NotFound("/users/a/b".to_string())
        );
    }

    #[test]
    fn test_path_round_trips() {
        for path in ["/", "/login", "/messages", "/profile", "/users/xyz"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_requires_auth() {
        assert!(Route::Home.requires_auth());
        assert!(Route::Messages.requires_auth());
        assert!(Route::UserDetail("x".to_string()).requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Terms.requires_auth());
    }
}
