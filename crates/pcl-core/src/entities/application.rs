use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::ApplicationStatus;

/// An internship application. `payment_status` is the review decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InternshipApplication {
    pub id: i64,
    pub enrollment_id: String,
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub internship_title: Option<String>,
    #[serde(default)]
    pub internship_slug: Option<String>,
    #[serde(default)]
    pub internship_code: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(default)]
    pub resume_path: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub billing_address: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub preferred_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    pub payment_status: ApplicationStatus,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl InternshipApplication {
    /// `fname lname`, skipping whichever part is missing.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (self.fname.as_deref(), self.lname.as_deref()) {
            (None, None) => None,
            (first, last) => Some(
                [first, last]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}
