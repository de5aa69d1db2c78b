//! Search and status predicates for the admin tabs.
//!
//! Every function is order-preserving and returns borrowed records. An empty
//! search term matches everything; a missing field never matches a non-empty
//! term.

use crate::entities::{Course, Internship, InternshipApplication, Payment, Project, ProjectEnrollment};
use crate::enums::{ApplicationStatus, PaymentStatus, StatusFilter};
use crate::text::any_contains_ci;

/// Records that can be matched by the dashboard search box.
pub trait Searchable {
    fn matches_search(&self, term: &str) -> bool;
}

impl Searchable for Course {
    fn matches_search(&self, term: &str) -> bool {
        any_contains_ci(&[Some(self.title.as_str()), self.category.as_deref()], term)
    }
}

impl Searchable for Internship {
    fn matches_search(&self, term: &str) -> bool {
        any_contains_ci(&[Some(self.title.as_str()), self.category.as_deref()], term)
    }
}

impl Searchable for Project {
    fn matches_search(&self, term: &str) -> bool {
        any_contains_ci(&[Some(self.title.as_str()), self.category.as_deref()], term)
    }
}

impl Searchable for Payment {
    fn matches_search(&self, term: &str) -> bool {
        any_contains_ci(
            &[
                self.student_name.as_deref(),
                self.email.as_deref(),
                self.course_title.as_deref(),
            ],
            term,
        )
    }
}

impl Searchable for ProjectEnrollment {
    fn matches_search(&self, term: &str) -> bool {
        any_contains_ci(
            &[
                self.student_name.as_deref(),
                self.email.as_deref(),
                self.project_title.as_deref(),
                Some(self.enrollment_id.as_str()),
            ],
            term,
        )
    }
}

impl Searchable for InternshipApplication {
    fn matches_search(&self, term: &str) -> bool {
        let name = self.full_name();
        any_contains_ci(
            &[
                name.as_deref(),
                self.email.as_deref(),
                self.internship_title.as_deref(),
                Some(self.enrollment_id.as_str()),
            ],
            term,
        )
    }
}

/// Keep the records matching `search` and `keep`, in their original order.
pub fn filter_by<'a, T, F>(items: &'a [T], search: &str, keep: F) -> Vec<&'a T>
where
    T: Searchable,
    F: Fn(&T) -> bool,
{
    let term = search.trim();
    items
        .iter()
        .filter(|item| keep(item) && item.matches_search(term))
        .collect()
}

#[must_use]
pub fn filter_courses<'a>(courses: &'a [Course], search: &str) -> Vec<&'a Course> {
    filter_by(courses, search, |_| true)
}

#[must_use]
pub fn filter_internships<'a>(internships: &'a [Internship], search: &str) -> Vec<&'a Internship> {
    filter_by(internships, search, |_| true)
}

#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], search: &str) -> Vec<&'a Project> {
    filter_by(projects, search, |_| true)
}

#[must_use]
pub fn filter_payments<'a>(
    payments: &'a [Payment],
    search: &str,
    status: StatusFilter<PaymentStatus>,
) -> Vec<&'a Payment> {
    filter_by(payments, search, |p| status.matches(p.payment_status))
}

#[must_use]
pub fn filter_project_enrollments<'a>(
    enrollments: &'a [ProjectEnrollment],
    search: &str,
    status: StatusFilter<PaymentStatus>,
) -> Vec<&'a ProjectEnrollment> {
    filter_by(enrollments, search, |e| status.matches(e.payment_status))
}

#[must_use]
pub fn filter_applications<'a>(
    applications: &'a [InternshipApplication],
    search: &str,
    status: StatusFilter<ApplicationStatus>,
) -> Vec<&'a InternshipApplication> {
    filter_by(applications, search, |a| status.matches(a.payment_status))
}
