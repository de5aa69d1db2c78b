use anyhow::Context;
use pcl_auth::{AuthError, Session, SessionStore};
use pcl_client::ApiClient;
use pcl_config::PclConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PclConfig,
    /// Unauthenticated client for `/api/*`.
    pub client: ApiClient,
    pub sessions: SessionStore,
}

impl AppContext {
    pub fn init(config: PclConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;
        let sessions = SessionStore::new()?;
        Ok(Self {
            config,
            client,
            sessions,
        })
    }

    /// The stored admin session, rejecting expired tokens before any request.
    pub fn session(&self) -> Result<Session, AuthError> {
        let session = self.sessions.require()?;
        if pcl_auth::expiry::is_expired(&session.token, chrono::Utc::now()) {
            return Err(AuthError::SessionExpired);
        }
        Ok(session)
    }

    /// Client carrying the admin bearer token. Fails without a session.
    pub fn admin_client(&self) -> anyhow::Result<ApiClient> {
        let session = self.session()?;
        if let Some(username) = session.username() {
            tracing::debug!(username, "using stored admin session");
        }
        Ok(self.client.clone().with_token(session.token))
    }

    /// Confirmation prompts are skipped by `--yes` or `general.assume_yes`.
    pub const fn assume_yes(&self, flag: bool) -> bool {
        flag || self.config.general.assume_yes
    }
}
