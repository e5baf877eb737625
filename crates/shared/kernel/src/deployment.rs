use crate::config::{ConfigError, ConfigErrorExt, ENV_PREFIX, environment};
use bts_domain::TargetEnvironment;
use config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeploymentSettings {
    target_environment: Option<TargetEnvironment>,
}

/// Where the current deployment goes.
///
/// A plain value handed to host resolution; there is no process-wide "current environment".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentContext {
    target_environment: TargetEnvironment,
}

impl DeploymentContext {
    #[must_use]
    pub const fn new(target_environment: TargetEnvironment) -> Self {
        Self { target_environment }
    }

    /// Reads `BTS__TARGET_ENVIRONMENT` from the process environment.
    ///
    /// Returns `Ok(None)` when the variable is not set.
    ///
    /// # Errors
    /// [`ConfigError::Config`] when the variable holds an unknown environment.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_source(environment(ENV_PREFIX))
    }

    /// Same as [`DeploymentContext::from_env`] over an explicit environment source.
    ///
    /// # Errors
    /// [`ConfigError::Config`] when the source holds an unknown environment.
    pub fn from_source(source: Environment) -> Result<Option<Self>, ConfigError> {
        let settings = Config::builder()
            .add_source(source)
            .build()
            .context("Failed to read deployment settings")?
            .try_deserialize::<DeploymentSettings>()
            .context("Invalid BTS__TARGET_ENVIRONMENT")?;

        debug!(target_environment = ?settings.target_environment, "deployment settings read");
        Ok(settings.target_environment.map(Self::new))
    }

    #[must_use]
    pub const fn target_environment(&self) -> TargetEnvironment {
        self.target_environment
    }
}

impl From<TargetEnvironment> for DeploymentContext {
    fn from(target_environment: TargetEnvironment) -> Self {
        Self::new(target_environment)
    }
}
