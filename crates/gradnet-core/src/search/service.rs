//! Directory filter predicate.

use crate::profile::{UserProfile, UserRole};
use crate::search::SearchFilters;

/// Returns true when `profile` matches `filters`.
///
/// The three criteria are conjunctive:
/// - a role filter, when set, must equal the profile's role;
/// - when the consultation filter is on, graduates must be accepting
///   consultations (prospects always pass);
/// - a non-empty query must match at least one of display name,
///   institution, department, field, or a research interest,
///   case-insensitively. Absent optional fields never match.
pub fn matches_filters(profile: &UserProfile, filters: &SearchFilters) -> bool {
    if let Some(role) = filters.role
        && profile.role != role
    {
        return false;
    }

    if filters.accepting_consultations
        && profile.role == UserRole::Graduate
        && !profile.accepting_consultations
    {
        return false;
    }

    if !filters.query.is_empty() && !matches_query(profile, &filters.query) {
        return false;
    }

    true
}

fn matches_query(profile: &UserProfile, query: &str) -> bool {
    let query = query.to_lowercase();
    let contains = |value: &str| value.to_lowercase().contains(&query);

    contains(&profile.display_name)
        || profile.institution.as_deref().map_or(false, &contains)
        || profile.department.as_deref().map_or(false, &contains)
        || profile.field.as_deref().map_or(false, &contains)
        || profile.research_interests.iter().any(|i| contains(i))
}

/// Applies `filters` to `profiles`, always excluding `exclude_id` (the
/// signed-in member never appears in their own results).
///
/// No ranking: the output preserves the input order.
pub fn filter_profiles(
    profiles: &[UserProfile],
    filters: &SearchFilters,
    exclude_id: &str,
) -> Vec<UserProfile> {
    profiles
        .iter()
        .filter(|profile| profile.id != exclude_id)
        .filter(|profile| matches_filters(profile, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{SUZUKI_UUID, TANAKA_UUID, get_default_profiles};

    fn profiles() -> Vec<UserProfile> {
        get_default_profiles()
    }

    #[test]
    fn test_result_is_subset_excluding_self() {
        let profiles = profiles();
        let result = filter_profiles(&profiles, &SearchFilters::default(), TANAKA_UUID);
        assert!(result.iter().all(|p| p.id != TANAKA_UUID));
        assert!(
            result
                .iter()
                .all(|p| profiles.iter().any(|seed| seed.id == p.id))
        );
    }

    #[test]
    fn test_role_filter_keeps_only_that_role() {
        let profiles = profiles();
        let filters = SearchFilters {
            role: Some(UserRole::Prospect),
            ..Default::default()
        };
        let result = filter_profiles(&profiles, &filters, TANAKA_UUID);
        assert!(result.iter().all(|p| p.role == UserRole::Prospect));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_consultation_filter_excludes_closed_graduates_only() {
        let mut profiles = profiles();
        // Close the seeded graduate for consultations
        profiles[0].accepting_consultations = false;

        let filters = SearchFilters::default();
        let result = filter_profiles(&profiles, &filters, "someone-else");

        // The closed graduate is hidden, the prospect is untouched even
        // though prospects never accept consultations themselves
        assert!(result.iter().all(|p| p.id != TANAKA_UUID));
        assert!(result.iter().any(|p| p.id == SUZUKI_UUID));
    }

    #[test]
    fn test_consultation_filter_off_shows_closed_graduates() {
        let mut profiles = profiles();
        profiles[0].accepting_consultations = false;

        let filters = SearchFilters {
            accepting_consultations: false,
            ..Default::default()
        };
        let result = filter_profiles(&profiles, &filters, "someone-else");
        assert!(result.iter().any(|p| p.id == TANAKA_UUID));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut profiles = profiles();
        profiles[0].institution = Some("Tokyo Institute".to_string());

        let filters = SearchFilters {
            query: "tokyo".to_string(),
            ..Default::default()
        };
        let result = filter_profiles(&profiles, &filters, "someone-else");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, TANAKA_UUID);
    }

    #[test]
    fn test_query_matches_each_field() {
        let profiles = profiles();
        for query in ["田中", "東京大学", "工学系研究科", "情報工学", "機械学習"] {
            let filters = SearchFilters {
                query: query.to_string(),
                ..Default::default()
            };
            let result = filter_profiles(&profiles, &filters, "someone-else");
            assert!(
                result.iter().any(|p| p.id == TANAKA_UUID),
                "query {query:?} should match the graduate profile"
            );
        }
    }

    #[test]
    fn test_query_ignores_absent_optional_fields() {
        let mut profiles = profiles();
        profiles[1].institution = None;
        profiles[1].department = None;
        profiles[1].field = None;

        let filters = SearchFilters {
            query: "京都".to_string(),
            ..Default::default()
        };
        let result = filter_profiles(&profiles, &filters, "someone-else");
        assert!(result.is_empty());
    }

    #[test]
    fn test_graduate_accepting_example() {
        // One graduate accepting consultations plus one prospect; the
        // combined filter returns exactly the graduate.
        let profiles = profiles();
        let filters = SearchFilters {
            role: Some(UserRole::Graduate),
            accepting_consultations: true,
            query: String::new(),
        };
        let result = filter_profiles(&profiles, &filters, "someone-else");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, TANAKA_UUID);
    }

    #[test]
    fn test_empty_filters_keep_seed_order() {
        let profiles = profiles();
        let result = filter_profiles(&profiles, &SearchFilters::default(), "someone-else");
        let ids: Vec<_> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![TANAKA_UUID, SUZUKI_UUID]);
    }
}
