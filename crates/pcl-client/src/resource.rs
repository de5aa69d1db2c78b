//! Typed admin and catalog resources.
//!
//! Each entity names its URL segment and the envelope key holding its list,
//! so one generic fetcher serves every dashboard tab.

use pcl_core::CoreError;
use pcl_core::drafts::{CourseDraft, InternshipDraft, ProjectDraft};
use pcl_core::entities::{
    Course, Internship, InternshipApplication, Payment, Project, ProjectEnrollment,
};
use pcl_core::enums::{ApplicationStatus, PaymentStatus};
use pcl_core::form::MultipartPayload;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A collection listed under `/admin/<PATH>`.
pub trait AdminResource: DeserializeOwned {
    /// URL segment under `/admin/`.
    const PATH: &'static str;
    /// Envelope key of the list.
    const LIST_KEY: &'static str;
    /// Human name for messages, plural.
    const LABEL: &'static str;
}

/// A catalog entity created and updated through a multipart form.
pub trait EditableResource: AdminResource {
    type Draft;
    /// Singular name used in messages ("course").
    const NOUN: &'static str;

    /// Build the multipart body for `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the draft is incomplete.
    fn payload(draft: &Self::Draft) -> Result<MultipartPayload, CoreError>;
}

/// A resource deleted with `DELETE /admin/<PATH>/:id`.
pub trait DeletableResource: AdminResource {
    const NOUN: &'static str;
}

/// A record whose status is changed with `PUT /admin/<PATH>/:id/status`.
pub trait StatusResource: AdminResource {
    type Status: Serialize + Copy + std::fmt::Display + 'static;
    const NOUN: &'static str;
}

/// A public list under `/api/<PATH>` with `/api/<PATH>/:slug` detail.
pub trait CatalogResource: DeserializeOwned {
    const PATH: &'static str;
    const LIST_KEY: &'static str;
    const ITEM_KEY: &'static str;
    const NOUN: &'static str;
}

macro_rules! admin_resource {
    ($ty:ty, $path:literal, $key:literal, $label:literal) => {
        impl AdminResource for $ty {
            const PATH: &'static str = $path;
            const LIST_KEY: &'static str = $key;
            const LABEL: &'static str = $label;
        }
    };
}

admin_resource!(Course, "courses", "courses", "courses");
admin_resource!(Internship, "internships", "internships", "internships");
admin_resource!(Project, "projects", "projects", "projects");
admin_resource!(Payment, "payments", "payments", "payments");
admin_resource!(ProjectEnrollment, "project-enrollments", "enrollments", "enrollments");
admin_resource!(
    InternshipApplication,
    "internship-applications",
    "applications",
    "applications"
);

impl EditableResource for Course {
    type Draft = CourseDraft;
    const NOUN: &'static str = "course";

    fn payload(draft: &CourseDraft) -> Result<MultipartPayload, CoreError> {
        draft.to_payload()
    }
}

impl EditableResource for Internship {
    type Draft = InternshipDraft;
    const NOUN: &'static str = "internship";

    fn payload(draft: &InternshipDraft) -> Result<MultipartPayload, CoreError> {
        draft.to_payload()
    }
}

impl EditableResource for Project {
    type Draft = ProjectDraft;
    const NOUN: &'static str = "project";

    fn payload(draft: &ProjectDraft) -> Result<MultipartPayload, CoreError> {
        draft.to_payload()
    }
}

impl DeletableResource for Course {
    const NOUN: &'static str = "course";
}
impl DeletableResource for Internship {
    const NOUN: &'static str = "internship";
}
impl DeletableResource for Project {
    const NOUN: &'static str = "project";
}
impl DeletableResource for InternshipApplication {
    const NOUN: &'static str = "application";
}

impl StatusResource for Payment {
    type Status = PaymentStatus;
    const NOUN: &'static str = "payment";
}
impl StatusResource for ProjectEnrollment {
    type Status = PaymentStatus;
    const NOUN: &'static str = "enrollment";
}
impl StatusResource for InternshipApplication {
    type Status = ApplicationStatus;
    const NOUN: &'static str = "application";
}

impl CatalogResource for Course {
    const PATH: &'static str = "courses";
    const LIST_KEY: &'static str = "courses";
    const ITEM_KEY: &'static str = "course";
    const NOUN: &'static str = "Course";
}
impl CatalogResource for Internship {
    const PATH: &'static str = "internships";
    const LIST_KEY: &'static str = "internships";
    const ITEM_KEY: &'static str = "internship";
    const NOUN: &'static str = "Internship";
}
impl CatalogResource for Project {
    const PATH: &'static str = "projects";
    const LIST_KEY: &'static str = "projects";
    const ITEM_KEY: &'static str = "project";
    const NOUN: &'static str = "Project";
}

/// Decode the list under `key`, skipping records that do not parse.
///
/// A single malformed record (unknown status, wrong type) is logged and
/// dropped instead of failing the whole tab.
///
/// # Errors
///
/// Returns the missing key's name when `key` is absent or not an array.
pub fn decode_list<T: DeserializeOwned>(
    body: &mut Map<String, Value>,
    key: &str,
) -> Result<Vec<T>, String> {
    let Some(Value::Array(items)) = body.remove(key) else {
        return Err(format!("response has no `{key}` list"));
    };
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(%error, key, index, "skipping malformed record");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::debug!(key, kept = records.len(), total, "decoded list with skips");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn malformed_records_are_skipped() {
        let mut body = object(json!({
            "success": true,
            "payments": [
                {"id": 1, "payment_id": "PAY_1", "payment_status": "completed", "amount": 100.0},
                {"id": 2, "payment_id": "PAY_2", "payment_status": "refunded"},
                {"id": 3, "payment_id": "PAY_3", "payment_status": "pending"},
            ]
        }));
        let payments: Vec<Payment> = decode_list(&mut body, Payment::LIST_KEY).unwrap();
        assert_eq!(payments.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn missing_list_key_is_an_error() {
        let mut body = object(json!({"success": true}));
        let err = decode_list::<Course>(&mut body, "courses").unwrap_err();
        assert!(err.contains("courses"));
    }

    #[test]
    fn project_enrollments_use_enrollments_key() {
        assert_eq!(ProjectEnrollment::PATH, "project-enrollments");
        assert_eq!(ProjectEnrollment::LIST_KEY, "enrollments");
        assert_eq!(<InternshipApplication as AdminResource>::LIST_KEY, "applications");
    }
}
