//! Entity records mirrored from the institute backend's JSON.
//!
//! Records carry no lifecycle logic. Every optional field tolerates `null` or
//! absence, and list-valued fields read `null` as empty.

mod admin;
mod application;
mod course;
mod internship;
mod payment;
mod project;
mod project_enrollment;

pub use admin::AdminUser;
pub use application::InternshipApplication;
pub use course::Course;
pub use internship::Internship;
pub use payment::Payment;
pub use project::Project;
pub use project_enrollment::ProjectEnrollment;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
