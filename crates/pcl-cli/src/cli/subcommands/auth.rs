use clap::{Args, Subcommand};

/// Admin session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with admin credentials and store the session.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show who is logged in and when the token expires.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub username: String,
    /// Password. Read from stdin when omitted.
    #[arg(long, env = "PCL_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
