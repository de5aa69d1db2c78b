use std::io::{BufRead, IsTerminal};

use anyhow::Context;
use pcl_auth::Session;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
    email: Option<String>,
    expires_at: Option<String>,
    stored_in: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match args.password.as_deref() {
        Some(password) => password.to_string(),
        None => read_password()?,
    };
    if args.username.trim().is_empty() || password.is_empty() {
        anyhow::bail!("auth login: username and password are required");
    }

    let login = with_spinner(
        "Signing in...",
        "login failed",
        ctx.client.login(args.username.trim(), &password),
    )
    .await?;

    let expires_at = pcl_auth::expiry::decode_expiry(&login.access_token)
        .map(|at| at.to_rfc3339())
        .map_err(|error| tracing::debug!(%error, "token carries no readable expiry"))
        .ok();

    let session = Session::new(login.access_token, login.admin);
    ctx.sessions.save(&session).context("failed to store admin session")?;
    let stored_in = ctx
        .sessions
        .load()
        .map_or_else(|| "nowhere".to_string(), |(_, source)| source.to_string());

    output(
        &AuthLoginResponse {
            authenticated: true,
            username: session
                .username()
                .map_or_else(|| args.username.trim().to_string(), ToString::to_string),
            email: session.admin.as_ref().and_then(|admin| admin.email.clone()),
            expires_at,
            stored_in,
        },
        flags.format,
    )
}

/// First line of stdin. Prompts on stderr when stdin is a terminal.
fn read_password() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(trim_newline(&line).to_string())
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::trim_newline;

    #[test]
    fn only_line_endings_are_trimmed() {
        assert_eq!(trim_newline("s3cret \r\n"), "s3cret ");
        assert_eq!(trim_newline("pw"), "pw");
    }
}
