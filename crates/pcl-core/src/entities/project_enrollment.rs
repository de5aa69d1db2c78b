use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::PaymentStatus;

/// A student's paid enrollment in a project, listed on the project payments tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectEnrollment {
    pub id: i64,
    pub enrollment_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub team_size: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub preferred_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub payment_screenshot: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
