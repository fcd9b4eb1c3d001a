//! Authentication service trait.

use crate::error::Result;
use crate::profile::{UpdateProfileRequest, UserProfile};

/// Service managing the single authenticated member.
///
/// At most one member is authenticated at a time (or none). The
/// operations model asynchronous network calls: each resolves after a
/// configured delay and has no transport failure path. Implementations
/// must keep the profile store consistent with the authenticated record
/// so directory search reflects profile edits.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Returns the currently authenticated profile, if any.
    async fn current_user(&self) -> Option<UserProfile>;

    /// Returns true when a member is authenticated.
    async fn is_authenticated(&self) -> bool {
        self.current_user().await.is_some()
    }

    /// Signs in as the demo account.
    ///
    /// Resolves after the configured delay and sets the current user to
    /// the first seeded profile.
    ///
    /// # Returns
    ///
    /// - `Ok(UserProfile)`: The now-authenticated profile
    /// - `Err(GradnetError)`: Error if the profile store is empty
    async fn sign_in(&self) -> Result<UserProfile>;

    /// Signs out the current user.
    ///
    /// Resolves after the configured delay and clears the current-user
    /// slot. Signing out while not signed in is a no-op.
    async fn sign_out(&self) -> Result<()>;

    /// Merges the provided fields into the authenticated profile.
    ///
    /// Resolves after the configured delay. The merged record replaces
    /// the stored profile so the directory reflects the edit.
    ///
    /// # Arguments
    ///
    /// * `request` - The fields to change; absent fields are untouched
    ///
    /// # Returns
    ///
    /// - `Ok(UserProfile)`: The updated profile
    /// - `Err(GradnetError::Unauthenticated)`: No user is signed in
    /// - `Err(GradnetError::Validation)`: The request failed validation
    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_default_profiles;
    use std::sync::Mutex;

    // Mock AuthService for testing the trait's default method
    struct MockAuthService {
        current: Mutex<Option<UserProfile>>,
    }

    impl MockAuthService {
        fn new() -> Self {
            Self {
                current: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl AuthService for MockAuthService {
        async fn current_user(&self) -> Option<UserProfile> {
            self.current.lock().unwrap().clone()
        }

        async fn sign_in(&self) -> Result<UserProfile> {
            let profile = get_default_profiles().remove(0);
            *self.current.lock().unwrap() = Some(profile.clone());
            Ok(profile)
        }

        async fn sign_out(&self) -> Result<()> {
            *self.current.lock().unwrap() = None;
            Ok(())
        }

        async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile> {
            let mut current = self.current.lock().unwrap();
            let profile = current
                .as_mut()
                .ok_or(crate::GradnetError::Unauthenticated)?;
            request.apply_to(profile);
            Ok(profile.clone())
        }
    }

    #[tokio::test]
    async fn test_is_authenticated_tracks_the_slot() {
        let auth = MockAuthService::new();
        assert!(!auth.is_authenticated().await);

        auth.sign_in().await.unwrap();
        assert!(auth.is_authenticated().await);

        auth.sign_out().await.unwrap();
        assert!(!auth.is_authenticated().await);
    }
}
