//! Directory search functionality.
//!
//! This module provides the filter model and the pure predicate used by
//! the member directory: a linear scan over the seeded profiles with
//! role, consultation-availability, and free-text criteria.

pub mod model;
pub mod service;

pub use model::SearchFilters;
pub use service::{filter_profiles, matches_filters};
