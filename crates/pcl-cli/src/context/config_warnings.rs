use pcl_config::PclConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PclConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PclConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = PclConfig::default();
    let mut warnings = Vec::new();

    if config.api == defaults.api && has_single_underscore_key(&env_keys, "PCL_API") {
        warnings.push(
            "API config appears default while PCL_API_* env vars exist. Use double underscores (example: PCL_API__BASE_URL)."
                .to_string(),
        );
    }

    if !config.offer.is_configured() && has_single_underscore_key(&env_keys, "PCL_OFFER") {
        warnings.push(
            "Offer deadline is unset while PCL_OFFER_* env vars exist. Use double underscores (example: PCL_OFFER__DEADLINE)."
                .to_string(),
        );
    }

    warnings
}

/// `PCL_API_BASE_URL` rather than `PCL_API__BASE_URL`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[&str]) -> Vec<(String, String)> {
        pairs.iter().map(|k| ((*k).to_string(), "x".to_string())).collect()
    }

    #[test]
    fn warns_on_single_underscore_api_key() {
        let warnings =
            collect_unconfigured_warnings(&PclConfig::default(), env(&["PCL_API_BASE_URL"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("PCL_API__BASE_URL"));
    }

    #[test]
    fn double_underscore_is_fine() {
        let warnings = collect_unconfigured_warnings(
            &PclConfig::default(),
            env(&["PCL_API__BASE_URL", "PCL_OFFER__DEADLINE", "PCL_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_on_offer_typo() {
        let warnings =
            collect_unconfigured_warnings(&PclConfig::default(), env(&["PCL_OFFER_DEADLINE"]));
        assert_eq!(warnings.len(), 1);
    }
}
