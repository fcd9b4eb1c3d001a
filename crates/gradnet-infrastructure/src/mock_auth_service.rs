//! Mock authentication service.
//!
//! Holds the single current-user slot and simulates the sign-in,
//! sign-out and profile-update round trips with configurable timer
//! delays. There is no real identity provider behind it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::sleep;

use gradnet_core::GradnetError;
use gradnet_core::auth::AuthService;
use gradnet_core::config::DelayConfig;
use gradnet_core::error::Result;
use gradnet_core::profile::{ProfileRepository, UpdateProfileRequest, UserProfile};

/// Authentication service over the seeded profile repository.
///
/// Only the profile ID is kept in the slot; the record itself is read
/// from the repository on demand so profile edits are visible
/// immediately.
pub struct MockAuthService {
    profiles: Arc<dyn ProfileRepository>,
    current_user_id: RwLock<Option<String>>,
    delays: DelayConfig,
}

impl MockAuthService {
    /// Creates a signed-out service over the given profile repository.
    pub fn new(profiles: Arc<dyn ProfileRepository>, delays: DelayConfig) -> Self {
        Self {
            profiles,
            current_user_id: RwLock::new(None),
            delays,
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn current_user(&self) -> Option<UserProfile> {
        let id = self.current_user_id.read().await.clone()?;
        self.profiles.find_by_id(&id).await.ok().flatten()
    }

    async fn sign_in(&self) -> Result<UserProfile> {
        sleep(self.delays.sign_in()).await;

        let profile = self
            .profiles
            .get_all()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GradnetError::data_access("profile store is empty"))?;

        *self.current_user_id.write().await = Some(profile.id.clone());
        tracing::info!("[MockAuthService] Signed in as {}", profile.display_name);

        Ok(profile)
    }

    async fn sign_out(&self) -> Result<()> {
        sleep(self.delays.sign_out()).await;

        *self.current_user_id.write().await = None;
        tracing::info!("[MockAuthService] Signed out");

        Ok(())
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile> {
        request.validate().map_err(GradnetError::Validation)?;

        sleep(self.delays.profile_update()).await;

        let id = self
            .current_user_id
            .read()
            .await
            .clone()
            .ok_or(GradnetError::Unauthenticated)?;

        let mut profile = self
            .profiles
            .find_by_id(&id)
            .await?
            .ok_or_else(|| GradnetError::not_found("UserProfile", &id))?;

        request.apply_to(&mut profile);
        self.profiles.save(&profile).await?;

        tracing::debug!("[MockAuthService] Updated profile {}", profile.id);

        Ok(profile)
    }
}
