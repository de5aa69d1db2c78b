//! List and set-status flows shared by the payment, project payment, and
//! application commands.

use std::str::FromStr;

use pcl_client::{ApiClient, StatusResource};
use pcl_core::CoreError;
use pcl_core::dashboard::filter::Searchable;
use pcl_core::entities::{InternshipApplication, Payment, ProjectEnrollment};
use pcl_core::enums::{ApplicationStatus, PaymentStatus, StatusFilter};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::payment::SetStatusArgs;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::fetch::rows_or_empty;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::{TableRow, output_list};
use crate::ui;

/// A record with a reviewable status.
pub trait StatusRecord: StatusResource + Searchable + Serialize + TableRow + Clone {
    fn record_id(&self) -> i64;
    fn current_status(&self) -> Self::Status;
    /// Statuses the dashboard offers from `from`.
    fn allowed_next(from: Self::Status) -> &'static [Self::Status];
    /// Confirmation question for moving this record to `to`.
    fn prompt(&self, to: Self::Status) -> String;
}

impl StatusRecord for Payment {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn current_status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn allowed_next(from: PaymentStatus) -> &'static [PaymentStatus] {
        from.course_next_states()
    }

    fn prompt(&self, to: PaymentStatus) -> String {
        format!("Mark payment {} as {to}?", self.payment_id)
    }
}

impl StatusRecord for ProjectEnrollment {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn current_status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn allowed_next(from: PaymentStatus) -> &'static [PaymentStatus] {
        from.project_next_states()
    }

    fn prompt(&self, to: PaymentStatus) -> String {
        format!("Mark enrollment {} as {to}?", self.enrollment_id)
    }
}

impl StatusRecord for InternshipApplication {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn current_status(&self) -> ApplicationStatus {
        self.payment_status
    }

    fn allowed_next(from: ApplicationStatus) -> &'static [ApplicationStatus] {
        from.allowed_next_states()
    }

    fn prompt(&self, to: ApplicationStatus) -> String {
        let name = self.full_name().unwrap_or_else(|| self.enrollment_id.clone());
        match to {
            ApplicationStatus::Approved => format!("Approve {name}'s application?"),
            ApplicationStatus::Rejected => format!("Reject {name}'s application?"),
            ApplicationStatus::Pending => format!("Move {name}'s application back to pending?"),
        }
    }
}

/// Keep the records matching `search` and `status`, in order.
fn keep_matching<T>(records: Vec<T>, search: Option<&str>, filter: StatusFilter<T::Status>) -> Vec<T>
where
    T: StatusRecord,
    T::Status: PartialEq,
{
    let term = search.unwrap_or_default().trim().to_string();
    records
        .into_iter()
        .filter(|record| filter.matches(record.current_status()) && record.matches_search(&term))
        .collect()
}

/// Fetch every record, keep those matching `search` and `status`.
///
/// # Errors
///
/// Fails on a bad status or when the fetch fails.
pub async fn fetch_filtered<T>(
    client: &ApiClient,
    search: Option<&str>,
    status: &str,
) -> anyhow::Result<Vec<T>>
where
    T: StatusRecord,
    T::Status: FromStr<Err = CoreError> + PartialEq,
{
    let filter: StatusFilter<T::Status> = parse_value(status, "status")?;
    let records = client.fetch_all::<T>().await?;
    Ok(keep_matching(records, search, filter))
}

pub async fn list<T>(
    search: Option<&str>,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    T: StatusRecord,
    T::Status: FromStr<Err = CoreError> + PartialEq,
{
    let filter: StatusFilter<T::Status> = parse_value(status, "status")?;
    let client = ctx.admin_client()?;
    let records = rows_or_empty(T::LABEL, client.fetch_all::<T>().await)?;
    let records = keep_matching(records, search, filter);
    let limit = flags.row_limit(ctx.config.general.default_limit);
    output_list(&records.iter().collect::<Vec<_>>(), limit, flags.format)
}

/// Check the move against the dashboard's transitions unless forced.
pub fn check_transition<T>(record: &T, to: T::Status, force: bool) -> Result<(), CoreError>
where
    T: StatusRecord,
    T::Status: PartialEq,
{
    let from = record.current_status();
    if force || T::allowed_next(from).contains(&to) {
        return Ok(());
    }
    Err(CoreError::InvalidTransition {
        entity_type: <T as StatusResource>::NOUN.to_string(),
        id: record.record_id().to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

pub async fn set_status<T>(
    args: &SetStatusArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    T: StatusRecord,
    T::Status: FromStr<Err = CoreError> + PartialEq,
{
    let client = ctx.admin_client()?;
    let to: T::Status = parse_value(&args.status, "status")?;

    let records = client.fetch_all::<T>().await?;
    let record = records
        .iter()
        .find(|record| record.record_id() == args.id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: <T as StatusResource>::NOUN.to_string(),
            id: args.id.to_string(),
        })?;

    if let Err(error) = check_transition(record, to, args.force) {
        let allowed = T::allowed_next(record.current_status())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if allowed.is_empty() {
            ui::note("no further status changes are offered for this record; use --force to override");
        } else {
            ui::note(&format!("allowed: {}; use --force to override", allowed.join(", ")));
        }
        return Err(error.into());
    }

    if !confirm(&record.prompt(to), ctx.assume_yes(flags.yes))? {
        ui::note("cancelled");
        return Ok(());
    }

    let receipt = client.update_status::<T>(args.id, to).await?;
    ui::note(receipt.message().unwrap_or("Status updated"));

    let refreshed = rows_or_empty(T::LABEL, client.fetch_all::<T>().await)?;
    let updated = refreshed
        .iter()
        .filter(|record| record.record_id() == args.id)
        .collect::<Vec<_>>();
    output_list(&updated, 1, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::testing::{FakeBackend, quiet_flags};

    fn payment(status: &str) -> Payment {
        serde_json::from_value(json!({
            "id": 7, "payment_id": "PAY_7", "payment_status": status
        }))
        .unwrap()
    }

    fn application(status: &str) -> InternshipApplication {
        serde_json::from_value(json!({
            "id": 2, "enrollment_id": "INT_ENR_2", "fname": "Ravi", "lname": "Kumar",
            "payment_status": status
        }))
        .unwrap()
    }

    #[test]
    fn prompts_name_the_record() {
        assert_eq!(
            payment("pending").prompt(PaymentStatus::Completed),
            "Mark payment PAY_7 as completed?"
        );
        let app = application("pending");
        assert_eq!(app.prompt(ApplicationStatus::Approved), "Approve Ravi Kumar's application?");
        assert_eq!(app.prompt(ApplicationStatus::Rejected), "Reject Ravi Kumar's application?");
    }

    fn enrollment(status: &str) -> ProjectEnrollment {
        serde_json::from_value(json!({
            "id": 9, "enrollment_id": "PROJ_ENR_9", "payment_status": status
        }))
        .unwrap()
    }

    #[test]
    fn failed_course_payment_is_not_retried_unless_forced() {
        let err = check_transition(&payment("failed"), PaymentStatus::Pending, false).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(check_transition(&payment("failed"), PaymentStatus::Pending, true).is_ok());
    }

    #[test]
    fn failed_project_payment_may_be_retried() {
        assert!(check_transition(&enrollment("failed"), PaymentStatus::Pending, false).is_ok());
        assert!(check_transition(&enrollment("failed"), PaymentStatus::Completed, false).is_err());
    }

    #[test]
    fn completed_payment_is_terminal_unless_forced() {
        let err = check_transition(&payment("completed"), PaymentStatus::Pending, false)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTransition {
                entity_type: "payment".to_string(),
                id: "7".to_string(),
                from: "completed".to_string(),
                to: "pending".to_string(),
            }
        );
        assert!(check_transition(&payment("completed"), PaymentStatus::Pending, true).is_ok());
    }

    #[test]
    fn decided_application_cannot_flip() {
        let approved = application("approved");
        assert!(check_transition(&approved, ApplicationStatus::Rejected, false).is_err());
    }

    #[tokio::test]
    async fn list_renders_nothing_when_the_backend_fails() {
        let backend = FakeBackend::start(|_, _| (500, r#"{"error": "db down"}"#));
        let dir = tempfile::tempdir().unwrap();
        let ctx = backend.admin_context(dir.path());
        list::<Payment>(None, "all", &ctx, &quiet_flags()).await.unwrap();
        list::<InternshipApplication>(Some("ravi"), "pending", &ctx, &quiet_flags())
            .await
            .unwrap();
        assert_eq!(backend.seen().len(), 2);
    }

    #[tokio::test]
    async fn list_still_rejects_a_bad_status_filter() {
        let backend = FakeBackend::start(|_, _| (500, r#"{"error": "db down"}"#));
        let dir = tempfile::tempdir().unwrap();
        let ctx = backend.admin_context(dir.path());
        let err = list::<Payment>(None, "approved", &ctx, &quiet_flags()).await.unwrap_err();
        assert!(err.to_string().contains("status"));
        assert!(backend.seen().is_empty());
    }

    #[test]
    fn matching_keeps_order_and_applies_both_filters() {
        let records: Vec<Payment> = serde_json::from_value(json!([
            {"id": 1, "payment_id": "P1", "student_name": "Asha Rao", "payment_status": "pending"},
            {"id": 2, "payment_id": "P2", "student_name": "Asha Rao", "payment_status": "failed"},
            {"id": 3, "payment_id": "P3", "student_name": "Bala", "payment_status": "pending"},
            {"id": 4, "payment_id": "P4", "student_name": "asha k", "payment_status": "pending"},
        ]))
        .unwrap();
        let kept = keep_matching(records, Some("  ASHA "), StatusFilter::Only(PaymentStatus::Pending));
        assert_eq!(kept.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4]);
    }
}
