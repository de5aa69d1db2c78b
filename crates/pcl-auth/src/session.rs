use chrono::{DateTime, Utc};
use pcl_core::entities::AdminUser;
use serde::{Deserialize, Serialize};

/// A logged-in admin: bearer token plus the user the backend returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub admin: Option<AdminUser>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, admin: Option<AdminUser>) -> Self {
        Self {
            token: token.into(),
            admin,
            saved_at: Some(Utc::now()),
        }
    }

    /// A session built from a bare token (env override).
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            admin: None,
            saved_at: None,
        }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.admin.as_ref().map(|a| a.username.as_str())
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
