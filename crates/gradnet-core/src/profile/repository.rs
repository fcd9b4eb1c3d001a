//! Profile repository trait.
//!
//! Defines the interface for member profile storage.

use super::model::UserProfile;
use crate::error::Result;

/// An abstract repository for managing member profiles.
///
/// This trait defines the contract for storing and retrieving profiles,
/// decoupling the application's core logic from the specific storage
/// mechanism (in-memory seed data today, a real backend eventually).
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieves all profiles in directory order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<UserProfile>)`: All stored profiles
    /// - `Err(GradnetError)`: Error if retrieval fails
    async fn get_all(&self) -> Result<Vec<UserProfile>>;

    /// Finds a profile by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the profile to find
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserProfile))`: Profile found
    /// - `Ok(None)`: Profile not found
    /// - `Err(GradnetError)`: Error occurred during retrieval
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>>;

    /// Saves a profile, replacing any stored profile with the same ID.
    ///
    /// # Arguments
    ///
    /// * `profile` - The profile to save
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Profile saved successfully
    /// - `Err(GradnetError)`: Error if save fails
    async fn save(&self, profile: &UserProfile) -> Result<()>;
}
