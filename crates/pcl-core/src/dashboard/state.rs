use std::collections::BTreeMap;
use std::fmt::Display;

use super::filter;
use super::stats::{DashboardStats, StatusCounts};
use crate::entities::{Course, Internship, InternshipApplication, Payment, Project, ProjectEnrollment};
use crate::enums::{ApplicationStatus, DashboardTab, PaymentStatus, StatusFilter, StatusKind};
use crate::errors::CoreError;

/// Active status filter. The variant always matches the active tab's
/// [`StatusKind`]; switching tabs resets it to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusChoice {
    #[default]
    All,
    Payment(PaymentStatus),
    Application(ApplicationStatus),
}

impl StatusChoice {
    #[must_use]
    pub const fn payment_filter(self) -> StatusFilter<PaymentStatus> {
        match self {
            Self::Payment(status) => StatusFilter::Only(status),
            Self::All | Self::Application(_) => StatusFilter::All,
        }
    }

    #[must_use]
    pub const fn application_filter(self) -> StatusFilter<ApplicationStatus> {
        match self {
            Self::Application(status) => StatusFilter::Only(status),
            Self::All | Self::Payment(_) => StatusFilter::All,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Payment(status) => status.as_str(),
            Self::Application(status) => status.as_str(),
        }
    }
}

/// One tab's freshly fetched collection.
#[derive(Debug, Clone, PartialEq)]
pub enum TabData {
    Courses(Vec<Course>),
    Payments(Vec<Payment>),
    Internships(Vec<Internship>),
    Projects(Vec<Project>),
    ProjectPayments(Vec<ProjectEnrollment>),
    InternshipEnrollments(Vec<InternshipApplication>),
}

impl TabData {
    #[must_use]
    pub const fn tab(&self) -> DashboardTab {
        match self {
            Self::Courses(_) => DashboardTab::Courses,
            Self::Payments(_) => DashboardTab::Payments,
            Self::Internships(_) => DashboardTab::Internships,
            Self::Projects(_) => DashboardTab::Projects,
            Self::ProjectPayments(_) => DashboardTab::ProjectPayments,
            Self::InternshipEnrollments(_) => DashboardTab::InternshipEnrollments,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Courses(v) => v.len(),
            Self::Payments(v) => v.len(),
            Self::Internships(v) => v.len(),
            Self::Projects(v) => v.len(),
            Self::ProjectPayments(v) => v.len(),
            Self::InternshipEnrollments(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for one in-flight fetch. Only the newest ticket per tab may
/// replace that tab's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub tab: DashboardTab,
    pub generation: u64,
}

/// What [`DashboardState::complete_fetch`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { tab: DashboardTab, count: usize },
    Failed { tab: DashboardTab },
    /// A newer ticket for the same tab was issued; the result was dropped.
    Stale { tab: DashboardTab },
}

/// The admin dashboard's client-held state.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    active_tab: DashboardTab,
    search_term: String,
    status: StatusChoice,
    courses: Vec<Course>,
    payments: Vec<Payment>,
    internships: Vec<Internship>,
    projects: Vec<Project>,
    project_payments: Vec<ProjectEnrollment>,
    applications: Vec<InternshipApplication>,
    next_generation: u64,
    latest: BTreeMap<DashboardTab, u64>,
    in_flight: BTreeMap<DashboardTab, u64>,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn status(&self) -> StatusChoice {
        self.status
    }

    /// True while the newest ticket of any tab is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Switch tabs: clears the search, resets the status filter, and issues
    /// exactly one fetch for the new tab (also when it is already active).
    pub fn select_tab(&mut self, tab: DashboardTab) -> FetchTicket {
        self.active_tab = tab;
        self.search_term.clear();
        self.status = StatusChoice::All;
        self.begin_fetch(tab)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Parse `raw` against the active tab's status vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidValue`] when `raw` is not `all` or a
    /// status valid for the active tab.
    pub fn set_status_filter(&mut self, raw: &str) -> Result<(), CoreError> {
        let choice = match self.active_tab.status_kind() {
            StatusKind::Payment => match raw.parse::<StatusFilter<PaymentStatus>>()? {
                StatusFilter::All => StatusChoice::All,
                StatusFilter::Only(status) => StatusChoice::Payment(status),
            },
            StatusKind::Application => match raw.parse::<StatusFilter<ApplicationStatus>>()? {
                StatusFilter::All => StatusChoice::All,
                StatusFilter::Only(status) => StatusChoice::Application(status),
            },
            StatusKind::None if raw.trim().eq_ignore_ascii_case("all") => StatusChoice::All,
            StatusKind::None => {
                return Err(CoreError::InvalidValue {
                    field: format!("status filter for {}", self.active_tab),
                    value: raw.to_string(),
                });
            }
        };
        self.status = choice;
        Ok(())
    }

    /// Issue a new ticket for `tab` and mark it in flight.
    pub fn begin_fetch(&mut self, tab: DashboardTab) -> FetchTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.latest.insert(tab, generation);
        self.in_flight.insert(tab, generation);
        tracing::debug!(%tab, generation, "fetch started");
        FetchTicket { tab, generation }
    }

    /// Re-fetch the active tab, e.g. after a mutation.
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch(self.active_tab)
    }

    /// Issue one ticket per tab, for the initial load.
    pub fn refresh_all(&mut self) -> Vec<FetchTicket> {
        DashboardTab::ALL.iter().map(|tab| self.begin_fetch(*tab)).collect()
    }

    /// Apply a fetch result.
    ///
    /// Errors are logged and leave the previous collection in place. Results
    /// for a ticket older than the newest one issued for its tab are dropped.
    pub fn complete_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<TabData, E>,
    ) -> FetchOutcome {
        let tab = ticket.tab;
        if self.latest.get(&tab) != Some(&ticket.generation) {
            tracing::debug!(%tab, generation = ticket.generation, "stale fetch result dropped");
            return FetchOutcome::Stale { tab };
        }
        self.in_flight.remove(&tab);

        match result {
            Ok(data) if data.tab() == tab => {
                let count = data.len();
                self.store(data);
                FetchOutcome::Applied { tab, count }
            }
            Ok(data) => {
                tracing::warn!(%tab, got = %data.tab(), "fetch returned data for another tab");
                FetchOutcome::Failed { tab }
            }
            Err(e) => {
                tracing::warn!(%tab, %e, "fetch failed");
                FetchOutcome::Failed { tab }
            }
        }
    }

    fn store(&mut self, data: TabData) {
        match data {
            TabData::Courses(v) => self.courses = v,
            TabData::Payments(v) => self.payments = v,
            TabData::Internships(v) => self.internships = v,
            TabData::Projects(v) => self.projects = v,
            TabData::ProjectPayments(v) => self.project_payments = v,
            TabData::InternshipEnrollments(v) => self.applications = v,
        }
    }

    // -- raw collections ---------------------------------------------------

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    #[must_use]
    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn project_payments(&self) -> &[ProjectEnrollment] {
        &self.project_payments
    }

    #[must_use]
    pub fn applications(&self) -> &[InternshipApplication] {
        &self.applications
    }

    // -- derived views -----------------------------------------------------

    #[must_use]
    pub fn visible_courses(&self) -> Vec<&Course> {
        filter::filter_courses(&self.courses, &self.search_term)
    }

    #[must_use]
    pub fn visible_internships(&self) -> Vec<&Internship> {
        filter::filter_internships(&self.internships, &self.search_term)
    }

    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        filter::filter_projects(&self.projects, &self.search_term)
    }

    #[must_use]
    pub fn visible_payments(&self) -> Vec<&Payment> {
        filter::filter_payments(&self.payments, &self.search_term, self.status.payment_filter())
    }

    #[must_use]
    pub fn visible_project_payments(&self) -> Vec<&ProjectEnrollment> {
        filter::filter_project_enrollments(
            &self.project_payments,
            &self.search_term,
            self.status.payment_filter(),
        )
    }

    #[must_use]
    pub fn visible_applications(&self) -> Vec<&InternshipApplication> {
        filter::filter_applications(
            &self.applications,
            &self.search_term,
            self.status.application_filter(),
        )
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(
            &self.courses,
            &self.payments,
            &self.internships,
            &self.projects,
            &self.project_payments,
            &self.applications,
        )
    }

    /// Status breakdown of the active tab's full collection, if it has statuses.
    #[must_use]
    pub fn status_counts(&self) -> Option<StatusCounts> {
        match self.active_tab {
            DashboardTab::Payments => Some(StatusCounts::payments(
                self.payments.iter().map(|p| p.payment_status),
            )),
            DashboardTab::ProjectPayments => Some(StatusCounts::payments(
                self.project_payments.iter().map(|e| e.payment_status),
            )),
            DashboardTab::InternshipEnrollments => Some(StatusCounts::applications(
                self.applications.iter().map(|a| a.payment_status),
            )),
            DashboardTab::Courses | DashboardTab::Internships | DashboardTab::Projects => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn courses(titles: &[&str]) -> TabData {
        let rows: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"id": i, "title": t, "slug": t.to_lowercase()}))
            .collect();
        TabData::Courses(serde_json::from_value(json!(rows)).unwrap())
    }

    fn payments() -> TabData {
        TabData::Payments(
            serde_json::from_value(json!([
                {"id": 1, "payment_id": "P1", "student_name": "Asha", "payment_status": "pending"},
                {"id": 2, "payment_id": "P2", "student_name": "Bala", "payment_status": "completed"},
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn select_tab_clears_search_and_issues_one_ticket() {
        let mut state = DashboardState::new();
        state.set_search("java");
        let before = state.next_generation;
        let ticket = state.select_tab(DashboardTab::Payments);
        assert_eq!(ticket.tab, DashboardTab::Payments);
        assert_eq!(state.next_generation, before + 1);
        assert_eq!(state.search_term(), "");
        assert!(state.is_loading());
    }

    #[test]
    fn reselecting_same_tab_still_fetches_and_clears() {
        let mut state = DashboardState::new();
        let first = state.select_tab(DashboardTab::Courses);
        state.set_search("rust");
        let second = state.select_tab(DashboardTab::Courses);
        assert!(second.generation > first.generation);
        assert_eq!(state.search_term(), "");
    }

    #[test]
    fn tab_switch_resets_status_filter() {
        let mut state = DashboardState::new();
        state.select_tab(DashboardTab::InternshipEnrollments);
        state.set_status_filter("approved").unwrap();
        assert_eq!(state.status(), StatusChoice::Application(ApplicationStatus::Approved));
        state.select_tab(DashboardTab::Payments);
        assert_eq!(state.status(), StatusChoice::All);
    }

    #[test]
    fn status_filter_validated_against_active_tab() {
        let mut state = DashboardState::new();
        state.select_tab(DashboardTab::Payments);
        assert!(state.set_status_filter("approved").is_err());
        state.set_status_filter("completed").unwrap();
        state.select_tab(DashboardTab::Courses);
        assert!(state.set_status_filter("pending").is_err());
        assert!(state.set_status_filter("all").is_ok());
    }

    #[test]
    fn successful_fetch_replaces_collection() {
        let mut state = DashboardState::new();
        let ticket = state.select_tab(DashboardTab::Courses);
        let outcome = state.complete_fetch::<String>(ticket, Ok(courses(&["Rust", "Go"])));
        assert_eq!(outcome, FetchOutcome::Applied { tab: DashboardTab::Courses, count: 2 });
        assert_eq!(state.courses().len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_previous_collection() {
        let mut state = DashboardState::new();
        let ticket = state.select_tab(DashboardTab::Courses);
        state.complete_fetch::<String>(ticket, Ok(courses(&["Rust"])));

        let ticket = state.refresh();
        let outcome = state.complete_fetch(ticket, Err("connection refused"));
        assert_eq!(outcome, FetchOutcome::Failed { tab: DashboardTab::Courses });
        assert_eq!(state.courses().len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_ticket_never_overwrites_newer_collection() {
        let mut state = DashboardState::new();
        let old = state.select_tab(DashboardTab::Courses);
        let new = state.refresh();

        state.complete_fetch::<String>(new, Ok(courses(&["Fresh"])));
        let outcome = state.complete_fetch::<String>(old, Ok(courses(&["Old", "Older"])));

        assert_eq!(outcome, FetchOutcome::Stale { tab: DashboardTab::Courses });
        assert_eq!(state.courses()[0].title, "Fresh");
    }

    #[test]
    fn loading_clears_only_for_newest_ticket() {
        let mut state = DashboardState::new();
        let old = state.select_tab(DashboardTab::Courses);
        let new = state.refresh();

        state.complete_fetch::<String>(old, Ok(courses(&["Old"])));
        assert!(state.is_loading());
        state.complete_fetch::<String>(new, Ok(courses(&["New"])));
        assert!(!state.is_loading());
    }

    #[test]
    fn mismatched_data_is_not_stored() {
        let mut state = DashboardState::new();
        let ticket = state.select_tab(DashboardTab::Courses);
        let outcome = state.complete_fetch::<String>(ticket, Ok(payments()));
        assert_eq!(outcome, FetchOutcome::Failed { tab: DashboardTab::Courses });
        assert!(state.payments().is_empty());
    }

    #[test]
    fn visible_payments_apply_search_and_status() {
        let mut state = DashboardState::new();
        let ticket = state.select_tab(DashboardTab::Payments);
        state.complete_fetch::<String>(ticket, Ok(payments()));

        assert_eq!(state.visible_payments().len(), 2);
        state.set_status_filter("pending").unwrap();
        assert_eq!(state.visible_payments().len(), 1);
        state.set_search("bala");
        assert!(state.visible_payments().is_empty());
        state.set_status_filter("all").unwrap();
        assert_eq!(state.visible_payments().len(), 1);
    }

    #[test]
    fn refresh_all_tracks_every_tab() {
        let mut state = DashboardState::new();
        let tickets = state.refresh_all();
        assert_eq!(tickets.len(), 6);
        for ticket in tickets {
            assert!(state.is_loading());
            state.complete_fetch(ticket, Err("offline"));
        }
        assert!(!state.is_loading());
    }

    #[test]
    fn status_counts_only_for_status_tabs() {
        let mut state = DashboardState::new();
        let ticket = state.select_tab(DashboardTab::Payments);
        state.complete_fetch::<String>(ticket, Ok(payments()));
        let counts = state.status_counts().unwrap();
        assert_eq!(counts.get("pending"), 1);
        assert_eq!(counts.get("completed"), 1);
        state.select_tab(DashboardTab::Courses);
        assert!(state.status_counts().is_none());
    }
}
