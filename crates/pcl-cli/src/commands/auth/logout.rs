use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sessions.clear()?;
    let note = std::env::var_os(pcl_auth::session_store::TOKEN_ENV).map(|_| {
        format!(
            "{} is still set and will keep authenticating",
            pcl_auth::session_store::TOKEN_ENV
        )
    });
    output(&AuthLogoutResponse { cleared: true, note }, flags.format)
}
