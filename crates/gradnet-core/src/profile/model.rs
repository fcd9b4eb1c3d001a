//! Member profile domain model.
//!
//! Represents the people listed in the matching directory: current
//! graduate students and prospective applicants looking for advice.

use serde::{Deserialize, Serialize};

/// Account category of a member.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Prospective applicant considering graduate school
    Prospect,
    /// Current graduate student
    Graduate,
}

/// A member profile in the matching directory.
///
/// Profiles are seeded in memory and changed only through the
/// authenticated update flow; they are never deleted. Each profile has a
/// unique UUID identifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Name shown on member cards and in chat
    pub display_name: String,
    /// Contact e-mail address
    pub email: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Account category (prospect or graduate)
    pub role: UserRole,
    /// Affiliated university or institution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    /// Faculty or graduate school
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Major or research field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Free-form self introduction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Research interest tags, in display order
    #[serde(default)]
    pub research_interests: Vec<String>,
    /// Whether a graduate is currently open to consultations.
    /// Meaningful only when `role` is `Graduate`.
    #[serde(default)]
    pub accepting_consultations: bool,
    /// Timestamp when the profile was created (ISO 8601 format)
    pub created_at: String,
}

impl UserProfile {
    /// Returns true for current graduate students.
    pub fn is_graduate(&self) -> bool {
        self.role == UserRole::Graduate
    }

    /// Adds a research interest tag.
    ///
    /// The tag is trimmed; blank or duplicate tags are ignored. Returns
    /// true if the tag was added.
    pub fn add_research_interest(&mut self, interest: &str) -> bool {
        let interest = interest.trim();
        if interest.is_empty() || self.research_interests.iter().any(|i| i == interest) {
            return false;
        }
        self.research_interests.push(interest.to_string());
        true
    }

    /// Removes a research interest tag. Returns true if it was present.
    pub fn remove_research_interest(&mut self, interest: &str) -> bool {
        let before = self.research_interests.len();
        self.research_interests.retain(|i| i != interest);
        self.research_interests.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "profile-1".to_string(),
            display_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            photo_url: None,
            role: UserRole::Graduate,
            institution: None,
            department: None,
            field: None,
            bio: None,
            research_interests: vec![],
            accepting_consultations: true,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::Graduate).unwrap(),
            "\"graduate\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Prospect).unwrap(),
            "\"prospect\""
        );
    }

    #[test]
    fn test_add_research_interest_trims_and_dedupes() {
        let mut profile = sample_profile();
        assert!(profile.add_research_interest("  機械学習  "));
        assert!(!profile.add_research_interest("機械学習"));
        assert!(!profile.add_research_interest("   "));
        assert_eq!(profile.research_interests, vec!["機械学習"]);
    }

    #[test]
    fn test_remove_research_interest() {
        let mut profile = sample_profile();
        profile.add_research_interest("データサイエンス");
        assert!(profile.remove_research_interest("データサイエンス"));
        assert!(!profile.remove_research_interest("データサイエンス"));
        assert!(profile.research_interests.is_empty());
    }
}
