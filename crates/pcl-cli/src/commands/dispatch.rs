use pcl_core::entities::{Payment, ProjectEnrollment};

use crate::cli::subcommands::PaymentCommands;
use crate::cli::{Commands, GlobalFlags};
use crate::commands::shared::status;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => super::auth::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => super::dashboard::handle(&args, ctx, flags).await,
        Commands::Course { action } => super::course::handle(&action, ctx, flags).await,
        Commands::Internship { action } => super::internship::handle(&action, ctx, flags).await,
        Commands::Project { action } => super::project::handle(&action, ctx, flags).await,
        Commands::Payment { action } => match action {
            PaymentCommands::List(args) => {
                status::list::<Payment>(args.search.as_deref(), &args.status, ctx, flags).await
            }
            PaymentCommands::SetStatus(args) => {
                status::set_status::<Payment>(&args, ctx, flags).await
            }
        },
        Commands::ProjectPayment { action } => match action {
            PaymentCommands::List(args) => {
                status::list::<ProjectEnrollment>(args.search.as_deref(), &args.status, ctx, flags)
                    .await
            }
            PaymentCommands::SetStatus(args) => {
                status::set_status::<ProjectEnrollment>(&args, ctx, flags).await
            }
        },
        Commands::Application { action } => super::application::handle(&action, ctx, flags).await,
        Commands::Catalog { action } => super::catalog::handle(&action, ctx, flags).await,
        Commands::Contact(args) => super::submit::contact(&args, ctx, flags).await,
        Commands::Apply { action } => super::submit::apply(&action, ctx, flags).await,
        Commands::Pay { action } => super::submit::pay(&action, ctx, flags).await,
        Commands::Enroll { action } => super::submit::enroll(&action, ctx, flags).await,
        Commands::Offer(args) => super::offer::handle(&args, ctx, flags).await,
    }
}
