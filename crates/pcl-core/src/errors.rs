//! Cross-cutting error types for the pcl crates.
//!
//! Transport and persistence errors live in their own crates
//! (`ClientError`, `AuthError`, `ConfigError`); they converge into `anyhow`
//! in `pcl-cli`.

use thiserror::Error;

/// Errors raised by pure domain logic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A record lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A status change the dashboard does not offer for the current status.
    #[error("cannot move {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Form or upload data failed client-side validation.
    ///
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// A raw value could not be parsed into a domain enum.
    #[error("invalid {field} '{value}'")]
    InvalidValue { field: String, value: String },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
