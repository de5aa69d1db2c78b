//! Persistence for the admin session.
//!
//! Lookup order: `PCL_AUTH__TOKEN` env (token only) → OS keyring →
//! `~/.pcl/session.json`. Saving prefers the keyring and falls back to the
//! file (mode 0600 inside a 0700 directory).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::Session;

pub const TOKEN_ENV: &str = "PCL_AUTH__TOKEN";
const DEFAULT_KEYRING_SERVICE: &str = "pcl-cli";
const KEYRING_USER: &str = "admin-session";
const SESSION_FILE_NAME: &str = "session.json";

/// Where a loaded session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Env,
    Keyring,
    File,
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Env => "env",
            Self::Keyring => "keyring",
            Self::File => "file",
        })
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    /// `None` disables the keyring tier.
    keyring_service: Option<String>,
    file_path: PathBuf,
}

impl SessionStore {
    /// Store backed by the OS keyring and `~/.pcl/session.json`.
    ///
    /// The keyring service defaults to `pcl-cli`; `PCL_KEYRING_SERVICE`
    /// overrides it so tests never touch real credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when no home directory is known.
    pub fn new() -> Result<Self, AuthError> {
        let file_path = dirs::home_dir()
            .map(|h| h.join(".pcl").join(SESSION_FILE_NAME))
            .ok_or_else(|| {
                AuthError::SessionStore("home directory not found — cannot store session".into())
            })?;
        let service = std::env::var("PCL_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self {
            keyring_service: Some(service),
            file_path,
        })
    }

    /// File-only store at an explicit path.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            file_path: path.into(),
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Persist `session`, preferring the keyring.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if both keyring and file storage fail.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;

        if let Some(entry) = self.keyring_entry() {
            match entry.set_password(&json) {
                Ok(()) => {
                    // A stale file would shadow nothing, but keep one source of truth.
                    self.remove_file()?;
                    return Ok(());
                }
                Err(error) => tracing::warn!(%error, "keyring store failed; falling back to file"),
            }
        }
        write_session_file(&self.file_path, &json)
    }

    /// Load the current session, if any.
    #[must_use]
    pub fn load(&self) -> Option<(Session, SessionSource)> {
        if let Some(token) = std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()) {
            return Some((Session::from_token(token.trim()), SessionSource::Env));
        }

        if let Some(entry) = self.keyring_entry() {
            if let Ok(json) = entry.get_password() {
                match serde_json::from_str::<Session>(&json) {
                    Ok(session) if !session.token.is_empty() => {
                        return Some((session, SessionSource::Keyring));
                    }
                    Ok(_) => {}
                    Err(error) => tracing::warn!(%error, "ignoring unreadable keyring session"),
                }
            }
        }

        read_session_file(&self.file_path).map(|s| (s, SessionSource::File))
    }

    /// Load the session or fail with [`AuthError::NotAuthenticated`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when no session is stored.
    pub fn require(&self) -> Result<Session, AuthError> {
        self.load()
            .map(|(session, _)| session)
            .ok_or(AuthError::NotAuthenticated)
    }

    /// Remove the session from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the session file cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            let _ = entry.delete_credential();
        }
        self.remove_file()
    }

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn remove_file(&self) -> Result<(), AuthError> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path).map_err(|e| {
                AuthError::SessionStore(format!(
                    "failed to delete {}: {e}",
                    self.file_path.display()
                ))
            })?;
        }
        Ok(())
    }
}

fn write_session_file(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
    }
    Ok(())
}

fn read_session_file(path: &Path) -> Option<Session> {
    let content = fs::read_to_string(path).ok()?;
    if content.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Session>(&content) {
        Ok(session) if !session.token.is_empty() => Some(session),
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable session file");
            None
        }
    }
}
