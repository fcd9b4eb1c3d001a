//! Member directory use case.
//!
//! Auth-guarded wrapper around the directory filter: search never shows
//! the signed-in member, and both search and detail lookup redirect to
//! login (via `Unauthenticated`) when nobody is signed in.

use std::sync::Arc;

use gradnet_core::GradnetError;
use gradnet_core::auth::AuthService;
use gradnet_core::error::Result;
use gradnet_core::profile::{ProfileRepository, UserProfile};
use gradnet_core::search::{SearchFilters, filter_profiles};

/// Service backing the member search and user detail views.
#[derive(Clone)]
pub struct DirectoryService {
    profiles: Arc<dyn ProfileRepository>,
    auth: Arc<dyn AuthService>,
}

impl DirectoryService {
    /// Creates a directory service over the given stores and services.
    pub fn new(profiles: Arc<dyn ProfileRepository>, auth: Arc<dyn AuthService>) -> Self {
        Self { profiles, auth }
    }

    /// Runs a directory search for the signed-in member.
    ///
    /// The result preserves directory order and never contains the
    /// signed-in member themself.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<UserProfile>> {
        let current = self
            .auth
            .current_user()
            .await
            .ok_or(GradnetError::Unauthenticated)?;

        let profiles = self.profiles.get_all().await?;
        let matches = filter_profiles(&profiles, filters, &current.id);
        tracing::debug!(
            "[DirectoryService] {} of {} profiles match",
            matches.len(),
            profiles.len()
        );
        Ok(matches)
    }

    /// Returns a single member profile for the detail view.
    pub async fn get_profile(&self, id: &str) -> Result<UserProfile> {
        if self.auth.current_user().await.is_none() {
            return Err(GradnetError::Unauthenticated);
        }
        self.profiles
            .find_by_id(id)
            .await?
            .ok_or_else(|| GradnetError::not_found("UserProfile", id))
    }
}
