//! Status enums, dashboard tabs, and catalog classifications.
//!
//! All enums serialize to the lowercase strings the backend stores. Status
//! enums list the transitions the admin dashboard offers; the backend itself
//! accepts any value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Parse `raw` against the `as_str()` form of every variant, ignoring case
/// and treating `_` and `-` as equal.
fn parse_variant<T: Copy>(
    raw: &str,
    all: &[T],
    as_str: impl Fn(T) -> &'static str,
    field: &str,
) -> Result<T, CoreError> {
    let wanted = raw.trim().replace('_', "-");
    all.iter()
        .copied()
        .find(|variant| as_str(*variant).replace('_', "-").eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| CoreError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Status of a course payment or a project enrollment payment.
///
/// ```text
/// pending → completed
///         → failed → pending (retry, project payments only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Failed];

    /// Moves offered on the course payments tab.
    #[must_use]
    pub const fn course_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed, Self::Failed],
            Self::Failed | Self::Completed => &[],
        }
    }

    /// Moves offered on the project payments tab, which can retry a failed payment.
    #[must_use]
    pub const fn project_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed, Self::Failed],
            Self::Failed => &[Self::Pending],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "payment status")
    }
}

// ---------------------------------------------------------------------------
// ApplicationStatus
// ---------------------------------------------------------------------------

/// Review status of an internship application.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Capitalized label used in exports and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "application status")
    }
}

// ---------------------------------------------------------------------------
// InternshipType
// ---------------------------------------------------------------------------

/// Where an internship takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipType {
    Remote,
    Onsite,
    Hybrid,
}

impl InternshipType {
    pub const ALL: [Self; 3] = [Self::Remote, Self::Onsite, Self::Hybrid];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Onsite => "onsite",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for InternshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InternshipType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "internship type")
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

/// How a student pays for a course or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Neft,
    Gpay,
    Razorpay,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Neft, Self::Gpay, Self::Razorpay];

    /// Bank transfers are verified manually against an uploaded screenshot.
    #[must_use]
    pub const fn requires_screenshot(self) -> bool {
        matches!(self, Self::Neft | Self::Gpay)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neft => "neft",
            Self::Gpay => "gpay",
            Self::Razorpay => "razorpay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "payment method")
    }
}

// ---------------------------------------------------------------------------
// DashboardTab
// ---------------------------------------------------------------------------

/// Which status vocabulary a tab's status filter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Catalog tabs: no status filter.
    None,
    /// `pending` / `completed` / `failed`.
    Payment,
    /// `pending` / `approved` / `rejected`.
    Application,
}

/// One of the fixed admin dashboard views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Courses,
    Payments,
    Internships,
    Projects,
    ProjectPayments,
    InternshipEnrollments,
}

impl DashboardTab {
    pub const ALL: [Self; 6] = [
        Self::Courses,
        Self::Payments,
        Self::Internships,
        Self::Projects,
        Self::ProjectPayments,
        Self::InternshipEnrollments,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Payments => "payments",
            Self::Internships => "internships",
            Self::Projects => "projects",
            Self::ProjectPayments => "project-payments",
            Self::InternshipEnrollments => "internship-enrollments",
        }
    }

    /// Heading shown above the tab's list.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Courses => "Course Management",
            Self::Payments => "Payment Management",
            Self::Internships => "Internship Management",
            Self::Projects => "Project Management",
            Self::ProjectPayments => "Project Payments",
            Self::InternshipEnrollments => "Internship Enrollments",
        }
    }

    #[must_use]
    pub const fn status_kind(self) -> StatusKind {
        match self {
            Self::Courses | Self::Internships | Self::Projects => StatusKind::None,
            Self::Payments | Self::ProjectPayments => StatusKind::Payment,
            Self::InternshipEnrollments => StatusKind::Application,
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "tab")
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Client-side status predicate: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    #[must_use]
    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<S: fmt::Display> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => status.fmt(f),
        }
    }
}
