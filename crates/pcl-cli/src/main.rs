use anyhow::Context;
use clap::Parser;
use pcl_client::ClientError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
#[cfg(test)]
mod testing;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pcl error: {error:#}");
        if let Some(hint) = hint_for(&error) {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config).context("failed to initialize pcl client")?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let default_directive = match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "pcl=debug,pcl_client=debug,pcl_auth=debug,pcl_core=debug,warn",
        (false, false) => "warn",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PCL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

/// Extra guidance for failures the message alone does not explain.
fn hint_for(error: &anyhow::Error) -> Option<&'static str> {
    match error.downcast_ref::<ClientError>()? {
        ClientError::Http(e) if e.is_connect() || e.is_timeout() => Some(
            "is the backend running? Set api.base_url, PCL_API__BASE_URL, or --base-url",
        ),
        ClientError::Api { status: 413, .. } => Some("uploads are limited to 5MB"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::hint_for;
    use pcl_client::ClientError;

    #[test]
    fn plain_errors_have_no_hint() {
        assert!(hint_for(&anyhow::anyhow!("invalid tab 'settings'")).is_none());
        let rejected = anyhow::Error::new(ClientError::Rejected("Login failed".into()));
        assert!(hint_for(&rejected).is_none());
    }

    #[test]
    fn oversized_upload_is_explained() {
        let error = anyhow::Error::new(ClientError::Api {
            status: 413,
            message: "Failed to submit application".into(),
        });
        assert_eq!(hint_for(&error), Some("uploads are limited to 5MB"));
    }
}
