//! `pcl dashboard`: load every tab concurrently, then show the stats and
//! the filtered list of the selected tab.

use std::collections::HashMap;
use std::future::Future;

use pcl_client::ClientError;
use pcl_core::dashboard::{
    DashboardState, DashboardStats, FetchOutcome, FetchTicket, StatusCounts, TabData,
};
use pcl_core::enums::DashboardTab;
use serde::Serialize;
use serde_json::Value;
use tokio::task::{Id, JoinSet};

use crate::cli::root_commands::DashboardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::{output, output_list};
use crate::progress::Progress;

#[derive(Serialize)]
struct DashboardView<'a> {
    tab: DashboardTab,
    title: &'static str,
    search: &'a str,
    status: &'static str,
    loading: bool,
    stats: DashboardStats,
    status_counts: Option<StatusCounts>,
    total_rows: usize,
    rows: Value,
}

pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tab: DashboardTab = parse_value(&args.tab, "tab")?;
    let client = ctx.admin_client()?;

    let mut state = DashboardState::new();
    let tickets = plan_fetches(&mut state, tab);

    let progress = Progress::spinner("Loading dashboard...");
    let mut fetches = Fetches::default();
    for ticket in tickets {
        let client = client.clone();
        fetches.spawn(ticket, async move { client.fetch_tab(ticket.tab).await });
    }
    let drained = fetches.drain(&mut state, &progress).await;
    if drained.is_err() {
        progress.finish_err("session rejected");
    } else {
        progress.finish_clear();
    }
    drained?;

    if let Some(search) = args.search.as_deref() {
        state.set_search(search);
    }
    if let Some(status) = args.status.as_deref() {
        state.set_status_filter(status)?;
    }

    let limit = flags.row_limit(ctx.config.general.default_limit);
    match flags.format {
        OutputFormat::Table => print_table(&state, limit),
        OutputFormat::Json | OutputFormat::Raw => {
            let (total_rows, rows) = rows_value(&state, limit)?;
            let view = DashboardView {
                tab,
                title: tab.title(),
                search: state.search_term(),
                status: state.status().as_str(),
                loading: state.is_loading(),
                stats: state.stats(),
                status_counts: state.status_counts(),
                total_rows,
                rows,
            };
            output(&view, flags.format)
        }
    }
}

/// In-flight tab fetches, keyed by task so a panicked task still settles its ticket.
#[derive(Default)]
struct Fetches {
    set: JoinSet<Result<TabData, ClientError>>,
    tickets: HashMap<Id, FetchTicket>,
}

impl Fetches {
    fn spawn<F>(&mut self, ticket: FetchTicket, fetch: F)
    where
        F: Future<Output = Result<TabData, ClientError>> + Send + 'static,
    {
        let handle = self.set.spawn(fetch);
        self.tickets.insert(handle.id(), ticket);
    }

    fn settle(
        &mut self,
        id: Id,
        complete: impl FnOnce(FetchTicket) -> FetchOutcome,
    ) -> Option<FetchOutcome> {
        self.tickets.remove(&id).map(complete)
    }

    /// Settle every ticket in `state`. Failed tabs keep their previous (empty)
    /// collection; only a rejected session stops the command.
    async fn drain(mut self, state: &mut DashboardState, progress: &Progress) -> Result<(), ClientError> {
        while let Some(joined) = self.set.join_next_with_id().await {
            let outcome = match joined {
                Ok((_, Err(ClientError::Unauthorized))) => {
                    self.set.abort_all();
                    return Err(ClientError::Unauthorized);
                }
                Ok((id, result)) => self.settle(id, |ticket| state.complete_fetch(ticket, result)),
                Err(error) => {
                    let id = error.id();
                    self.settle(id, |ticket| state.complete_fetch(ticket, Err::<TabData, _>(error)))
                }
            };
            match outcome {
                Some(FetchOutcome::Applied { tab, count }) => {
                    progress.set_message(&format!("Loaded {count} {tab}"));
                }
                Some(FetchOutcome::Failed { tab }) => {
                    progress.set_message(&format!("{tab} did not load"));
                }
                Some(FetchOutcome::Stale { .. }) | None => {}
            }
        }
        Ok(())
    }
}

/// The active tab's ticket first, then one per remaining tab.
fn plan_fetches(state: &mut DashboardState, tab: DashboardTab) -> Vec<FetchTicket> {
    let mut tickets = vec![state.select_tab(tab)];
    for other in DashboardTab::ALL.into_iter().filter(|other| *other != tab) {
        tickets.push(state.begin_fetch(other));
    }
    tickets
}

fn limited<T: Serialize>(items: &[&T], limit: usize) -> anyhow::Result<(usize, Value)> {
    let shown = &items[..items.len().min(limit)];
    Ok((items.len(), serde_json::to_value(shown)?))
}

fn rows_value(state: &DashboardState, limit: usize) -> anyhow::Result<(usize, Value)> {
    match state.active_tab() {
        DashboardTab::Courses => limited(&state.visible_courses(), limit),
        DashboardTab::Payments => limited(&state.visible_payments(), limit),
        DashboardTab::Internships => limited(&state.visible_internships(), limit),
        DashboardTab::Projects => limited(&state.visible_projects(), limit),
        DashboardTab::ProjectPayments => limited(&state.visible_project_payments(), limit),
        DashboardTab::InternshipEnrollments => limited(&state.visible_applications(), limit),
    }
}

fn print_table(state: &DashboardState, limit: usize) -> anyhow::Result<()> {
    let tab = state.active_tab();
    output(&state.stats(), OutputFormat::Table)?;
    println!();
    println!("{}", tab.title());
    if let Some(counts) = state.status_counts() {
        println!("{}", status_line(&counts));
    }

    let format = OutputFormat::Table;
    match tab {
        DashboardTab::Courses => output_list(&state.visible_courses(), limit, format),
        DashboardTab::Payments => output_list(&state.visible_payments(), limit, format),
        DashboardTab::Internships => output_list(&state.visible_internships(), limit, format),
        DashboardTab::Projects => output_list(&state.visible_projects(), limit, format),
        DashboardTab::ProjectPayments => {
            output_list(&state.visible_project_payments(), limit, format)
        }
        DashboardTab::InternshipEnrollments => {
            output_list(&state.visible_applications(), limit, format)
        }
    }
}

fn status_line(counts: &StatusCounts) -> String {
    let parts = counts
        .by_status
        .iter()
        .map(|(status, count)| format!("{status}: {count}"))
        .collect::<Vec<_>>();
    format!("{}  (total {})", parts.join("  "), counts.total)
}

#[cfg(test)]
mod tests {
    use pcl_core::enums::PaymentStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{FakeBackend, quiet_flags};

    #[test]
    fn active_tab_is_fetched_first_and_every_tab_once() {
        let mut state = DashboardState::new();
        let tickets = plan_fetches(&mut state, DashboardTab::Payments);
        assert_eq!(tickets.len(), DashboardTab::ALL.len());
        assert_eq!(tickets[0].tab, DashboardTab::Payments);
        let mut tabs = tickets.iter().map(|t| t.tab).collect::<Vec<_>>();
        tabs.sort();
        tabs.dedup();
        assert_eq!(tabs.len(), DashboardTab::ALL.len());
        assert_eq!(state.active_tab(), DashboardTab::Payments);
        assert!(state.is_loading());
    }

    #[test]
    fn status_line_lists_each_status() {
        let counts = StatusCounts::payments([
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Pending,
        ]);
        assert_eq!(status_line(&counts), "pending: 2  completed: 1  failed: 0  (total 3)");
    }

    fn empty(tab: DashboardTab) -> TabData {
        match tab {
            DashboardTab::Courses => TabData::Courses(Vec::new()),
            DashboardTab::Payments => TabData::Payments(Vec::new()),
            DashboardTab::Internships => TabData::Internships(Vec::new()),
            DashboardTab::Projects => TabData::Projects(Vec::new()),
            DashboardTab::ProjectPayments => TabData::ProjectPayments(Vec::new()),
            DashboardTab::InternshipEnrollments => TabData::InternshipEnrollments(Vec::new()),
        }
    }

    fn crash() -> Result<TabData, ClientError> {
        panic!("fetch task crashed")
    }

    #[tokio::test]
    async fn crashed_fetch_task_still_settles_its_ticket() {
        let mut state = DashboardState::new();
        let mut fetches = Fetches::default();
        for ticket in plan_fetches(&mut state, DashboardTab::Courses) {
            if ticket.tab == DashboardTab::Payments {
                fetches.spawn(ticket, async { crash() });
            } else {
                fetches.spawn(ticket, async move { Ok(empty(ticket.tab)) });
            }
        }
        fetches.drain(&mut state, &Progress::spinner("loading")).await.unwrap();
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn failed_tabs_are_settled_and_the_rest_applied() {
        let mut state = DashboardState::new();
        let mut fetches = Fetches::default();
        for ticket in plan_fetches(&mut state, DashboardTab::Payments) {
            fetches.spawn(ticket, async move {
                if ticket.tab == DashboardTab::Payments {
                    Err(ClientError::Api { status: 500, message: "db down".into() })
                } else {
                    Ok(empty(ticket.tab))
                }
            });
        }
        fetches.drain(&mut state, &Progress::spinner("loading")).await.unwrap();
        assert!(!state.is_loading());
        assert!(state.visible_payments().is_empty());
    }

    #[tokio::test]
    async fn rejected_session_stops_the_drain() {
        let mut state = DashboardState::new();
        let mut fetches = Fetches::default();
        for ticket in plan_fetches(&mut state, DashboardTab::Courses) {
            fetches.spawn(ticket, async { Err(ClientError::Unauthorized) });
        }
        let result = fetches.drain(&mut state, &Progress::spinner("loading")).await;
        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn backend_errors_on_the_active_tab_still_render() {
        let backend = FakeBackend::start(|_, url| match url {
            "/admin/courses" => (200, r#"{"success": true, "courses": []}"#),
            _ => (500, r#"{"error": "db down"}"#),
        });
        let dir = tempfile::tempdir().unwrap();
        let ctx = backend.admin_context(dir.path());
        let args = DashboardArgs {
            tab: "payments".to_string(),
            search: None,
            status: Some("pending".to_string()),
        };
        handle(&args, &ctx, &quiet_flags()).await.unwrap();
        assert_eq!(backend.seen().len(), DashboardTab::ALL.len());
    }

    #[tokio::test]
    async fn expired_login_fails_the_dashboard() {
        let backend = FakeBackend::start(|_, _| (401, r#"{"success": false}"#));
        let dir = tempfile::tempdir().unwrap();
        let ctx = backend.admin_context(dir.path());
        let args = DashboardArgs { tab: "courses".to_string(), search: None, status: None };
        let err = handle(&args, &ctx, &quiet_flags()).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<ClientError>(), Some(ClientError::Unauthorized)));
    }

    #[test]
    fn rows_respect_the_limit_but_report_the_total() {
        let state = DashboardState::new();
        let (total, rows) = rows_value(&state, 5).unwrap();
        assert_eq!(total, 0);
        assert_eq!(rows, serde_json::json!([]));
    }
}
