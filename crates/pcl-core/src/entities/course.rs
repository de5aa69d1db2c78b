use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A course in the public catalog.
///
/// Pricing fields (`price`, `original_price`, `course_fees`, `total_amount`,
/// `discount`) are free-form strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub students: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub course_fees: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub total_amount: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

const fn active_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURSE_JSON: &str = r#"{
        "id": 3,
        "title": "Full Stack Web Development",
        "description": null,
        "level": "Beginner to Advanced",
        "rating": 4.8,
        "students": "1200",
        "price": "24999",
        "category": "Web Development",
        "slug": "full-stack-web-development",
        "features": null,
        "is_active": false,
        "created_at": "2024-05-01T09:30:00.123456",
        "updated_at": "2024-05-02T10:00:00"
    }"#;

    #[test]
    fn parses_backend_course_with_nulls() {
        let course: Course = serde_json::from_str(COURSE_JSON).unwrap();
        assert_eq!(course.id, 3);
        assert_eq!(course.description, None);
        assert!(course.features.is_empty());
        assert!(!course.is_active);
        assert_eq!(course.price.as_deref(), Some("24999"));
        assert!(course.created_at.is_some());
        assert_eq!(course.instructor, None);
    }

    #[test]
    fn missing_is_active_defaults_to_active() {
        let course: Course =
            serde_json::from_str(r#"{"id": 1, "title": "Rust", "slug": "rust"}"#).unwrap();
        assert!(course.is_active);
    }
}
