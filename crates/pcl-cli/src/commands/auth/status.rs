use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: Option<String>,
    source: Option<String>,
    expires_at: Option<String>,
    expired: bool,
    backend: String,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let backend = ctx.client.base_url().to_string();
    let status = match ctx.sessions.load() {
        Some((session, source)) => {
            let expires_at = pcl_auth::expiry::decode_expiry(&session.token).ok();
            let expired = pcl_auth::expiry::is_expired(&session.token, Utc::now());
            AuthStatusResponse {
                authenticated: !expired,
                username: session.username().map(ToString::to_string),
                source: Some(source.to_string()),
                expires_at: expires_at.map(|at| at.to_rfc3339()),
                expired,
                backend,
                note: expired.then(|| "session expired, run `pcl auth login`".to_string()),
            }
        }
        None => AuthStatusResponse {
            authenticated: false,
            username: None,
            source: None,
            expires_at: None,
            expired: false,
            backend,
            note: Some("no stored session".to_string()),
        },
    };
    output(&status, flags.format)
}
