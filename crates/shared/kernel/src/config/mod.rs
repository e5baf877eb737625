use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of every environment override (`BTS__TARGET_ENVIRONMENT`).
pub const ENV_PREFIX: &str = "BTS";
pub const ENV_SEPARATOR: &str = "__";

const DEFAULT_CONFIG_PATH: &str = "bindings";

/// Custom error type for config loading.
#[bts_derive::bts_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `bindings.toml`; TOML, YAML or JSON,
///    inferred from the extension). If no path is provided, it defaults to `"bindings"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `BTS__`.
///    Nested structures are accessed using double underscores (e.g., `BTS__NAME` maps to `name`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_prefix(path, ENV_PREFIX)
}

/// Same as [`load_config`], with environment overrides read from `{prefix}__*` instead.
///
/// Useful when the target structure rejects unknown fields and must not see unrelated
/// `BTS__` variables.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_prefix<T>(
    path: Option<impl AsRef<Path>>,
    prefix: &str,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment(prefix));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context(format!("Failed to deserialize config from {}", effective_path.display()))?;

    Ok(config)
}

/// Environment source with the workspace conventions (`__` separator, snake case keys).
#[must_use]
pub fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix).separator(ENV_SEPARATOR).convert_case(config::Case::Snake)
}
