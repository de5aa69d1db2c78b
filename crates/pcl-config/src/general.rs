use serde::{Deserialize, Serialize};

const DEFAULT_ROW_LIMIT: u32 = 50;

const fn default_limit() -> u32 {
    DEFAULT_ROW_LIMIT
}

/// `[general]`: list size and prompt behaviour.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Rows printed by list and dashboard commands when `--limit` is absent.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Answer yes to delete and status-change prompts.
    #[serde(default)]
    pub assume_yes: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { default_limit: DEFAULT_ROW_LIMIT, assume_yes: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_on_and_fifty_rows_by_default() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 50);
        assert!(!config.assume_yes);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        use figment::providers::{Format, Toml};

        let config: GeneralConfig = figment::Figment::from(Toml::string("assume_yes = true"))
            .extract()
            .unwrap();
        assert_eq!(config.default_limit, 50);
        assert!(config.assume_yes);
    }
}
