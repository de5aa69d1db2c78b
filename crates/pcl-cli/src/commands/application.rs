use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use pcl_client::AdminResource;
use pcl_core::CoreError;
use pcl_core::entities::InternshipApplication;
use pcl_core::export::{applications_csv_filename, applications_to_csv};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ApplicationCommands;
use crate::cli::subcommands::application::ApplicationFilterArgs;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::fetch::rows_or_empty;
use crate::commands::shared::status;
use crate::context::AppContext;
use crate::output::{output, output_list};
use crate::ui;

#[derive(Serialize)]
struct ExportResponse {
    path: String,
    rows: usize,
}

/// Handle `pcl application <subcommand>`.
pub async fn handle(
    action: &ApplicationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ApplicationCommands::List(filter) => {
            status::list::<InternshipApplication>(
                filter.search.as_deref(),
                &filter.status,
                ctx,
                flags,
            )
            .await
        }
        ApplicationCommands::SetStatus(args) => {
            status::set_status::<InternshipApplication>(args, ctx, flags).await
        }
        ApplicationCommands::Delete { id } => delete(*id, ctx, flags).await,
        ApplicationCommands::Export { filter, output } => {
            export(filter, output.as_deref(), ctx, flags).await
        }
    }
}

async fn delete(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.admin_client()?;
    let applications = client.fetch_all::<InternshipApplication>().await?;
    let application = applications
        .iter()
        .find(|application| application.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "application".to_string(),
            id: id.to_string(),
        })?;

    let name = application
        .full_name()
        .unwrap_or_else(|| application.enrollment_id.clone());
    let prompt = format!("Are you sure you want to delete {name}'s application?");
    if !confirm(&prompt, ctx.assume_yes(flags.yes))? {
        ui::note("cancelled");
        return Ok(());
    }

    let receipt = client.delete::<InternshipApplication>(id).await?;
    ui::note(receipt.message().unwrap_or("Application deleted"));

    let remaining = rows_or_empty(
        InternshipApplication::LABEL,
        client.fetch_all::<InternshipApplication>().await,
    )?;
    let limit = flags.row_limit(ctx.config.general.default_limit);
    output_list(&remaining.iter().collect::<Vec<_>>(), limit, flags.format)
}

/// Write the applications matching the filter (not just the shown page) as CSV.
async fn export(
    filter: &ApplicationFilterArgs,
    path: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.admin_client()?;
    let applications = status::fetch_filtered::<InternshipApplication>(
        &client,
        filter.search.as_deref(),
        &filter.status,
    )
    .await?;

    let path = export_path(path, Local::now().date_naive());
    let csv = applications_to_csv(&applications);
    std::fs::write(&path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(rows = applications.len(), path = %path.display(), "applications exported");

    output(
        &ExportResponse {
            path: path.display().to_string(),
            rows: applications.len(),
        },
        flags.format,
    )
}

fn export_path(path: Option<&Path>, today: chrono::NaiveDate) -> PathBuf {
    path.map_or_else(
        || PathBuf::from(applications_csv_filename(today)),
        Path::to_path_buf,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_export_name_uses_the_date() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(
            export_path(None, today),
            PathBuf::from("internship-applications-2025-03-09.csv")
        );
        assert_eq!(
            export_path(Some(Path::new("out/apps.csv")), today),
            PathBuf::from("out/apps.csv")
        );
    }
}
