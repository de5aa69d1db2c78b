use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `PCL_*` variable could not be merged or extracted.
    #[error("could not read pcl configuration: {0}")]
    Load(#[from] figment::Error),

    /// A value parsed but is unusable, e.g. a non-HTTP `api.base_url`.
    #[error("bad value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
