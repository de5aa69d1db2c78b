use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ApplyCommands {
    /// Submit an internship application.
    Internship(InternshipApplyArgs),
    /// Send a quick enquiry about an internship role.
    Enquiry(EnquiryArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum PayCommands {
    /// Submit a course payment.
    Course(CoursePayArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum EnrollCommands {
    /// Submit a project enrollment.
    Project(ProjectEnrollArgs),
}

/// Billing fields shared by every public form.
#[derive(Clone, Debug, Default, Args)]
pub struct BillingArgs {
    #[arg(long)]
    pub gstin: Option<String>,
    #[arg(long)]
    pub billing_address: Option<String>,
    #[arg(long)]
    pub landmark: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InternshipApplyArgs {
    pub slug: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub mobile: String,
    /// Resume (PDF, DOC, DOCX; max 5MB).
    #[arg(long)]
    pub resume: PathBuf,
    /// Why you want this internship (at least 50 characters).
    #[arg(long, conflicts_with = "motivation_file")]
    pub motivation: Option<String>,
    #[arg(long)]
    pub motivation_file: Option<PathBuf>,
    #[arg(long)]
    pub experience_level: Option<String>,
    #[arg(long)]
    pub portfolio_url: Option<String>,
    #[arg(long)]
    pub github_url: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub preferred_time: Option<String>,
    #[arg(long)]
    pub availability: Option<String>,
    /// Validation code shown on the form.
    #[arg(long)]
    pub code: String,
    #[command(flatten)]
    pub billing: BillingArgs,
}

/// Name, email, mobile, and message shared by both enquiry forms.
#[derive(Clone, Debug, Args)]
pub struct EnquirerArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub message: String,
}

#[derive(Clone, Debug, Args)]
pub struct EnquiryArgs {
    /// FULL STACK DEVELOPER, UI UX DESIGNER, DATA ANALYST, DIGITAL MARKETING,
    /// CYBER SECURITY, DATA SCIENCE, DEVOPS, ROBOTICS AUTOMATION, or your own.
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub mobile: String,
    /// CV (PDF, DOC, DOCX; max 5MB).
    #[arg(long)]
    pub cv: Option<PathBuf>,
    #[command(flatten)]
    pub enquirer: EnquirerArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub mobile: String,
    #[command(flatten)]
    pub enquirer: EnquirerArgs,
}

#[derive(Clone, Debug, Args)]
pub struct CoursePayArgs {
    pub slug: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub mobile: String,
    /// neft, gpay, or razorpay
    #[arg(long, default_value = "neft")]
    pub method: String,
    /// Payment screenshot (required for NEFT and GPay).
    #[arg(long)]
    pub screenshot: Option<PathBuf>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub training_mode: Option<String>,
    #[arg(long)]
    pub batch: Option<String>,
    #[arg(long)]
    pub code: String,
    #[command(flatten)]
    pub billing: BillingArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectEnrollArgs {
    pub slug: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub mobile: String,
    #[arg(long, default_value = "neft")]
    pub method: String,
    #[arg(long)]
    pub screenshot: Option<PathBuf>,
    /// 1 for individual, a number, or 5+.
    #[arg(long)]
    pub team_size: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub preferred_time: Option<String>,
    #[arg(long)]
    pub code: String,
    #[command(flatten)]
    pub billing: BillingArgs,
}
