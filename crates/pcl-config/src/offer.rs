//! Limited-time offer shown on the course catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OfferConfig {
    /// Offer end time, RFC 3339 (e.g. `2025-12-31T23:59:59+05:30`).
    #[serde(default)]
    pub deadline: Option<String>,
}

impl OfferConfig {
    pub fn is_configured(&self) -> bool {
        self.deadline.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    /// Parse the configured deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the deadline is not RFC 3339.
    pub fn deadline(&self) -> Result<Option<DateTime<Utc>>, ConfigError> {
        let Some(raw) = self.deadline.as_deref().map(str::trim).filter(|d| !d.is_empty()) else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(raw)
            .map(|d| Some(d.with_timezone(&Utc)))
            .map_err(|e| ConfigError::Invalid {
                field: "offer.deadline",
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unset_deadline_is_none() {
        let config = OfferConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.deadline().unwrap(), None);
    }

    #[test]
    fn parses_offset_deadline_to_utc() {
        let config = OfferConfig {
            deadline: Some("2025-01-01T05:30:00+05:30".to_string()),
        };
        assert_eq!(
            config.deadline().unwrap(),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        let config = OfferConfig {
            deadline: Some("next friday".to_string()),
        };
        assert!(config.deadline().is_err());
    }
}
