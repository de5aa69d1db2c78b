use clap::{Args, Subcommand};

use super::subcommands::{
    ApplicationCommands, ApplyCommands, AuthCommands, CatalogCommands, CourseCommands,
    EnrollCommands, InternshipCommands, PayCommands, PaymentCommands, ProjectCommands,
};
use super::subcommands::submit::ContactArgs;

/// Root command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Admin login, logout, and session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Dashboard stats plus the filtered list of one tab.
    Dashboard(DashboardArgs),
    /// Manage courses (admin).
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Manage internships (admin).
    Internship {
        #[command(subcommand)]
        action: InternshipCommands,
    },
    /// Manage projects (admin).
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Course payments (admin).
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Project enrollments and their payments (admin).
    ProjectPayment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Internship applications (admin).
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },
    /// Browse the public catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Send a message to the institute.
    Contact(ContactArgs),
    /// Apply for an internship, or send a quick enquiry about one.
    Apply {
        #[command(subcommand)]
        action: ApplyCommands,
    },
    /// Submit a course payment.
    Pay {
        #[command(subcommand)]
        action: PayCommands,
    },
    /// Enroll in a project.
    Enroll {
        #[command(subcommand)]
        action: EnrollCommands,
    },
    /// Countdown to the configured limited-time offer deadline.
    Offer(OfferArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// courses, payments, internships, projects, project-payments, internship-enrollments
    #[arg(long, default_value = "courses")]
    pub tab: String,
    /// Case-insensitive search over the tab's search fields.
    #[arg(long)]
    pub search: Option<String>,
    /// Status filter for the tab (`all` or a status).
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct OfferArgs {
    /// Keep ticking until the offer ends.
    #[arg(long)]
    pub watch: bool,
}
