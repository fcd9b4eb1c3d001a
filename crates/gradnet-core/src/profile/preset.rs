//! Default profile presets.
//!
//! Provides the seeded member profiles that populate the demo directory.

use super::model::{UserProfile, UserRole};

/// UUID for the seeded graduate profile (deterministic UUID v5 from "Tanaka")
pub const TANAKA_UUID: &str = "5b8e7c2d-93a4-5f06-8d1a-2c7e4b9f3a61";

/// UUID for the seeded prospect profile (deterministic UUID v5 from "Suzuki")
pub const SUZUKI_UUID: &str = "e3a1f7b4-6c2d-5e98-b0a5-9d4c8f2e7b13";

/// Returns the seeded member profiles, in directory order.
///
/// The first entry doubles as the demo sign-in account:
/// - **田中 太郎**: graduate student in informatics, open to consultations
/// - **鈴木 花子**: undergraduate in physics, considering graduate school
pub fn get_default_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: TANAKA_UUID.to_string(),
            display_name: "田中 太郎".to_string(),
            email: "tanaka@example.com".to_string(),
            photo_url: Some("https://i.pravatar.cc/150?img=11".to_string()),
            role: UserRole::Graduate,
            institution: Some("東京大学".to_string()),
            department: Some("工学系研究科".to_string()),
            field: Some("情報工学".to_string()),
            bio: Some(
                "情報工学を専攻する大学院生です。AIとデータサイエンスに興味があります。".to_string(),
            ),
            research_interests: vec![
                "人工知能".to_string(),
                "データサイエンス".to_string(),
                "機械学習".to_string(),
            ],
            accepting_consultations: true,
            created_at: chrono::Utc::now().to_rfc3339(),
        },
        UserProfile {
            id: SUZUKI_UUID.to_string(),
            display_name: "鈴木 花子".to_string(),
            email: "suzuki@example.com".to_string(),
            photo_url: Some("https://i.pravatar.cc/150?img=5".to_string()),
            role: UserRole::Prospect,
            institution: Some("京都大学".to_string()),
            department: Some("理学部".to_string()),
            field: Some("物理学".to_string()),
            bio: Some("物理学専攻の学部生です。大学院進学を検討しています。".to_string()),
            research_interests: vec!["量子物理学".to_string(), "素粒子物理学".to_string()],
            accepting_consultations: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        },
    ]
}
