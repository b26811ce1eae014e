use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of environment overrides, e.g. `FHUB__INGEST__MAX_FILE_BYTES`.
pub const ENV_PREFIX: &str = "FHUB";

/// Base file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "fonthub";

/// The base file [`load_config`] reads for `path`.
#[must_use]
pub fn effective_config_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf())
}

/// Custom error type for config loading.
#[fhub_derive::fhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path` with any extension the `config` crate understands (`fonthub.toml`,
///    `fonthub.json`, ...). Defaults to `"fonthub"`. The file is optional so a bare
///    binary still starts with [`Default`] values.
/// 2. **Environment Overrides**: variables prefixed with `FHUB__`. Nested keys use double
///    underscores (`FHUB__LOGGER__LEVEL` maps to `logger.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source is malformed or the merged values do not
/// match `T`.
///
/// # Example
/// ```rust
/// use fhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = effective_config_path(path);

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ingest.extensions")
                .convert_case(config::Case::Snake),
        );

    debug!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
