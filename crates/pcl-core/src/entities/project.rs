use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A project posting. Carries the same string pricing fields as a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Project {
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
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_enrollments: i64,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub course_fees: Option<String>,
    #[serde(default)]
    pub total_amount: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub students_count: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}
