//! Member profile domain module.
//!
//! This module contains all profile-related domain models, repository
//! interfaces, and seeded presets.
//!
//! # Module Structure
//!
//! - `model`: Core profile domain models (`UserProfile`, `UserRole`)
//! - `preset`: Default seeded member profiles
//! - `repository`: Repository trait for profile storage
//! - `request`: Partial-update request for the profile editor
//!
//! # Usage
//!
//! ```ignore
//! use gradnet_core::profile::{UserProfile, UserRole, ProfileRepository, get_default_profiles};
//! ```

mod model;
mod preset;
mod repository;
pub mod request;

// Re-export public API
pub use model::{UserProfile, UserRole};
pub use preset::{SUZUKI_UUID, TANAKA_UUID, get_default_profiles};
pub use repository::ProfileRepository;
pub use request::UpdateProfileRequest;
