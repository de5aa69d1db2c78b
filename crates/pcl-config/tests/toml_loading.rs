//! Integration tests for TOML and environment layering.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pcl_config::PclConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.pclinfotech.example"
timeout_secs = 10

[general]
default_limit = 25
assume_yes = true

[offer]
deadline = "2025-12-31T23:59:59+05:30"
"#,
        )?;

        let config: PclConfig = Figment::from(Serialized::defaults(PclConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.pclinfotech.example");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 25);
        assert!(config.general.assume_yes);
        assert!(config.offer.deadline().unwrap().is_some());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\ntimeout_secs = 5\n")?;

        let config: PclConfig = Figment::from(Serialized::defaults(PclConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:7000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\nbase_url = \"http://from-toml:7000\"\n")?;
        jail.set_env("PCL_API__BASE_URL", "http://from-env:7000");
        jail.set_env("PCL_GENERAL__DEFAULT_LIMIT", "7");

        let config: PclConfig = Figment::from(Serialized::defaults(PclConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PCL_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://from-env:7000");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pcl")?;
        jail.create_file(".pcl/config.toml", "[general]\nassume_yes = true\n")?;

        let config = PclConfig::load().expect("config loads");
        assert!(config.general.assume_yes);
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("PCL_API__BASE_URL", "ftp://nope");
        assert!(PclConfig::load().is_err());
        Ok(())
    });
}
