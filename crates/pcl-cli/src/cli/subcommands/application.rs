use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::payment::SetStatusArgs;

/// Internship application commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ApplicationCommands {
    /// List applications, filtered by search and status.
    List(ApplicationFilterArgs),
    /// Approve or reject an application.
    SetStatus(SetStatusArgs),
    /// Delete an application.
    Delete { id: i64 },
    /// Export the filtered applications as CSV.
    Export {
        #[command(flatten)]
        filter: ApplicationFilterArgs,
        /// Output path (defaults to internship-applications-<date>.csv).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ApplicationFilterArgs {
    #[arg(long)]
    pub search: Option<String>,
    /// `all`, `pending`, `approved`, or `rejected`.
    #[arg(long, default_value = "all")]
    pub status: String,
}
