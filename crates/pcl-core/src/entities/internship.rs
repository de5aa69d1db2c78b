use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::enums::InternshipType;

/// An internship posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub internship_type: Option<InternshipType>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub perks: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub internship_code: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_applications: i64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_and_null_lists() {
        let internship: Internship = serde_json::from_str(
            r#"{
                "id": 9,
                "title": "Data Analyst Intern",
                "internship_type": "hybrid",
                "skills": ["SQL", "Python"],
                "perks": null,
                "slug": "data-analyst-intern",
                "is_active": true,
                "total_applications": 14
            }"#,
        )
        .unwrap();
        assert_eq!(internship.internship_type, Some(InternshipType::Hybrid));
        assert_eq!(internship.skills, vec!["SQL", "Python"]);
        assert!(internship.perks.is_empty());
        assert_eq!(internship.total_applications, 14);
    }
}
