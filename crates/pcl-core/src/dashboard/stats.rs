//! Aggregates recomputed from the current collections on every render.

use serde::Serialize;

use crate::entities::{Course, Internship, InternshipApplication, Payment, Project, ProjectEnrollment};
use crate::enums::{ApplicationStatus, PaymentStatus};

/// Headline numbers shown above the dashboard tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_courses: usize,
    pub active_courses: usize,
    pub total_payments: usize,
    pub completed_payments: usize,
    /// Sum of `amount` over completed payments. Missing amounts count as 0.
    pub total_revenue: f64,
    pub total_internships: usize,
    pub active_internships: usize,
    pub total_projects: usize,
    pub active_projects: usize,
    pub project_payments_completed: usize,
    pub project_payments_pending: usize,
    pub project_revenue: f64,
    pub applications_pending: usize,
    pub applications_approved: usize,
    pub applications_rejected: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(
        courses: &[Course],
        payments: &[Payment],
        internships: &[Internship],
        projects: &[Project],
        project_payments: &[ProjectEnrollment],
        applications: &[InternshipApplication],
    ) -> Self {
        let project_counts = StatusCounts::payments(project_payments.iter().map(|e| e.payment_status));
        let application_counts =
            StatusCounts::applications(applications.iter().map(|a| a.payment_status));

        Self {
            total_courses: courses.len(),
            active_courses: courses.iter().filter(|c| c.is_active).count(),
            total_payments: payments.len(),
            completed_payments: payments
                .iter()
                .filter(|p| p.payment_status == PaymentStatus::Completed)
                .count(),
            total_revenue: completed_revenue(payments.iter().map(|p| (p.payment_status, p.amount))),
            total_internships: internships.len(),
            active_internships: internships.iter().filter(|i| i.is_active).count(),
            total_projects: projects.len(),
            active_projects: projects.iter().filter(|p| p.is_active).count(),
            project_payments_completed: project_counts.get(PaymentStatus::Completed.as_str()),
            project_payments_pending: project_counts.get(PaymentStatus::Pending.as_str()),
            project_revenue: completed_revenue(
                project_payments.iter().map(|e| (e.payment_status, e.amount)),
            ),
            applications_pending: application_counts.get(ApplicationStatus::Pending.as_str()),
            applications_approved: application_counts.get(ApplicationStatus::Approved.as_str()),
            applications_rejected: application_counts.get(ApplicationStatus::Rejected.as_str()),
        }
    }
}

fn completed_revenue(rows: impl Iterator<Item = (PaymentStatus, Option<f64>)>) -> f64 {
    rows.filter(|(status, _)| *status == PaymentStatus::Completed)
        .map(|(_, amount)| amount.unwrap_or(0.0))
        .sum()
}

/// Per-status breakdown for one tab, in the status enum's declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub by_status: Vec<(&'static str, usize)>,
}

impl StatusCounts {
    fn tally<S: Copy + PartialEq>(
        statuses: impl IntoIterator<Item = S>,
        all: &[S],
        as_str: fn(S) -> &'static str,
    ) -> Self {
        let mut by_status: Vec<(&'static str, usize)> = all.iter().map(|s| (as_str(*s), 0)).collect();
        let mut total = 0;
        for status in statuses {
            total += 1;
            if let Some(pos) = all.iter().position(|s| *s == status) {
                by_status[pos].1 += 1;
            }
        }
        Self { total, by_status }
    }

    pub fn payments(statuses: impl IntoIterator<Item = PaymentStatus>) -> Self {
        Self::tally(statuses, &PaymentStatus::ALL, PaymentStatus::as_str)
    }

    pub fn applications(statuses: impl IntoIterator<Item = ApplicationStatus>) -> Self {
        Self::tally(statuses, &ApplicationStatus::ALL, ApplicationStatus::as_str)
    }

    /// Count for one status name, 0 when unknown.
    #[must_use]
    pub fn get(&self, status: &str) -> usize {
        self.by_status
            .iter()
            .find(|(name, _)| *name == status)
            .map_or(0, |(_, count)| *count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payments() -> Vec<Payment> {
        serde_json::from_value(json!([
            {"id": 1, "payment_id": "P1", "payment_status": "completed", "amount": 1500.0},
            {"id": 2, "payment_id": "P2", "payment_status": "completed", "amount": null},
            {"id": 3, "payment_id": "P3", "payment_status": "pending", "amount": 900.0},
            {"id": 4, "payment_id": "P4", "payment_status": "completed", "amount": 250.5},
        ]))
        .unwrap()
    }

    #[test]
    fn revenue_sums_completed_payments_only() {
        let stats = DashboardStats::compute(&[], &payments(), &[], &[], &[], &[]);
        assert_eq!(stats.total_payments, 4);
        assert_eq!(stats.completed_payments, 3);
        assert!((stats.total_revenue - 1750.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_collections_give_zeroes() {
        let stats = DashboardStats::compute(&[], &[], &[], &[], &[], &[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn active_courses_counted() {
        let courses: Vec<Course> = serde_json::from_value(json!([
            {"id": 1, "title": "A", "slug": "a", "is_active": true},
            {"id": 2, "title": "B", "slug": "b", "is_active": false},
            {"id": 3, "title": "C", "slug": "c"},
        ]))
        .unwrap();
        let stats = DashboardStats::compute(&courses, &[], &[], &[], &[], &[]);
        assert_eq!(stats.total_courses, 3);
        assert_eq!(stats.active_courses, 2);
    }

    #[test]
    fn status_counts_keep_declaration_order() {
        let counts = StatusCounts::applications([
            ApplicationStatus::Rejected,
            ApplicationStatus::Pending,
            ApplicationStatus::Pending,
        ]);
        assert_eq!(counts.total, 3);
        assert_eq!(
            counts.by_status,
            vec![("pending", 2), ("approved", 0), ("rejected", 1)]
        );
        assert_eq!(counts.get("missing"), 0);
    }
}
