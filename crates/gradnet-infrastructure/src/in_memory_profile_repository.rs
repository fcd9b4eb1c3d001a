//! In-memory profile repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use gradnet_core::error::Result;
use gradnet_core::profile::{ProfileRepository, UserProfile, get_default_profiles};

/// Profile repository backed by an in-memory list.
///
/// Directory order is the insertion order of the seed data. Saving a
/// profile with a new ID appends it; saving an existing ID replaces the
/// stored record.
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<UserProfile>>,
}

impl InMemoryProfileRepository {
    /// Creates a repository over the given profiles.
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Creates a repository seeded with the default demo profiles.
    pub fn with_default_profiles() -> Self {
        Self::new(get_default_profiles())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_all(&self) -> Result<Vec<UserProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }
}
