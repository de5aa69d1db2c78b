use clap::{Args, Subcommand};

/// Shared by `pcl payment` and `pcl project-payment`.
#[derive(Clone, Debug, Subcommand)]
pub enum PaymentCommands {
    /// List records, filtered by search and status.
    List(PaymentListArgs),
    /// Change a record's payment status.
    SetStatus(SetStatusArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PaymentListArgs {
    #[arg(long)]
    pub search: Option<String>,
    /// `all`, `pending`, `completed`, or `failed`.
    #[arg(long, default_value = "all")]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct SetStatusArgs {
    /// Numeric record id.
    pub id: i64,
    /// Target status.
    pub status: String,
    /// Allow transitions the dashboard does not offer.
    #[arg(long)]
    pub force: bool,
}
