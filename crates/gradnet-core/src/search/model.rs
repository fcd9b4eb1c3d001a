//! Search domain models.

use serde::{Deserialize, Serialize};

use crate::profile::UserRole;

/// Filters to refine directory search results.
///
/// Held only in view state; resetting a search means replacing the value
/// with `SearchFilters::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restrict to one account category; `None` shows every category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    /// Hide graduates who are not currently accepting consultations.
    /// Prospects are unaffected by this flag.
    #[serde(default = "default_accepting_consultations")]
    pub accepting_consultations: bool,

    /// Case-insensitive free-text match on name, affiliation and
    /// interests. Empty means no text constraint.
    #[serde(default)]
    pub query: String,
}

fn default_accepting_consultations() -> bool {
    true
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            role: None,
            accepting_consultations: true,
            query: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_accepting_only() {
        let filters = SearchFilters::default();
        assert!(filters.role.is_none());
        assert!(filters.accepting_consultations);
        assert!(filters.query.is_empty());
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let filters: SearchFilters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, SearchFilters::default());
    }
}
