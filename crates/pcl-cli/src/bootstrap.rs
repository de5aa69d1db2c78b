use anyhow::Context;
use pcl_config::PclConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, then apply the `--base-url` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PclConfig> {
    let mut config = PclConfig::load_with_dotenv().context("failed to load pcl configuration")?;
    apply_overrides(&mut config, flags)?;
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}

fn apply_overrides(config: &mut PclConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .api
            .validate()
            .context("invalid --base-url")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(base_url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            limit: None,
            quiet: false,
            verbose: false,
            yes: false,
            base_url: base_url.map(str::to_string),
        }
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let mut config = PclConfig::default();
        apply_overrides(&mut config, &flags(Some("https://api.pclinfotech.example"))).unwrap();
        assert_eq!(config.api.base_url, "https://api.pclinfotech.example");
    }

    #[test]
    fn invalid_base_url_flag_is_rejected() {
        let mut config = PclConfig::default();
        let err = apply_overrides(&mut config, &flags(Some("ftp://nope"))).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --base-url"));
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = PclConfig::default();
        apply_overrides(&mut config, &flags(None)).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:7000");
    }
}
