//! Profile update request model.

use serde::{Deserialize, Serialize};

use super::model::{UserProfile, UserRole};

/// Partial update of the authenticated member's profile.
///
/// Every field is optional; absent fields leave the stored value
/// untouched. This is the unified request model used by both the profile
/// editor and the account-type switcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// New account category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    /// New institution; an empty string clears the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,

    /// New department; an empty string clears the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// New research field; an empty string clears the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// New self introduction; an empty string clears the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Full replacement for the research interest tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_interests: Option<Vec<String>>,

    /// New consultation availability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepting_consultations: Option<bool>,
}

impl UpdateProfileRequest {
    /// Validate the request and return errors if any.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.display_name
            && name.trim().is_empty()
        {
            return Err("Display name cannot be empty".to_string());
        }
        Ok(())
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.role.is_none()
            && self.institution.is_none()
            && self.department.is_none()
            && self.field.is_none()
            && self.bio.is_none()
            && self.research_interests.is_none()
            && self.accepting_consultations.is_none()
    }

    /// Merges the provided fields into `profile`.
    ///
    /// Optional text fields treat an empty string as "clear".
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.display_name {
            profile.display_name = name.trim().to_string();
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(institution) = &self.institution {
            profile.institution = non_empty(institution);
        }
        if let Some(department) = &self.department {
            profile.department = non_empty(department);
        }
        if let Some(field) = &self.field {
            profile.field = non_empty(field);
        }
        if let Some(bio) = &self.bio {
            profile.bio = non_empty(bio);
        }
        if let Some(interests) = &self.research_interests {
            profile.research_interests = interests
                .iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect();
        }
        if let Some(accepting) = self.accepting_consultations {
            profile.accepting_consultations = accepting;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_default_profiles;

    #[test]
    fn test_validate_rejects_blank_display_name() {
        let request = UpdateProfileRequest {
            display_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_request() {
        let request = UpdateProfileRequest::default();
        assert!(request.validate().is_ok());
        assert!(request.is_empty());
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut profile = get_default_profiles().remove(0);
        let email_before = profile.email.clone();

        let request = UpdateProfileRequest {
            display_name: Some("田中 次郎".to_string()),
            accepting_consultations: Some(false),
            ..Default::default()
        };
        request.apply_to(&mut profile);

        assert_eq!(profile.display_name, "田中 次郎");
        assert!(!profile.accepting_consultations);
        // Untouched fields survive the merge
        assert_eq!(profile.email, email_before);
        assert_eq!(profile.institution.as_deref(), Some("東京大学"));
    }

    #[test]
    fn test_apply_clears_optional_field_on_empty_string() {
        let mut profile = get_default_profiles().remove(0);
        let request = UpdateProfileRequest {
            bio: Some(String::new()),
            ..Default::default()
        };
        request.apply_to(&mut profile);
        assert!(profile.bio.is_none());
    }

    #[test]
    fn test_apply_filters_blank_interests() {
        let mut profile = get_default_profiles().remove(0);
        let request = UpdateProfileRequest {
            research_interests: Some(vec![
                " ロボティクス ".to_string(),
                String::new(),
                "自然言語処理".to_string(),
            ]),
            ..Default::default()
        };
        request.apply_to(&mut profile);
        assert_eq!(profile.research_interests, vec!["ロボティクス", "自然言語処理"]);
    }
}
