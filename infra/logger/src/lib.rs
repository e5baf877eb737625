//! # Logger
//!
//! Installs the global `tracing` subscriber for the workspace binaries.
//!
//! * Console output goes to **stderr** so that report output on stdout stays machine readable.
//! * Optional rolling log files (non-blocking writer) via [`LoggerBuilder::file`].
//! * Filtering: a default level plus optional directives (e.g. `"bts_hosting=trace"`);
//!   `RUST_LOG` is honoured when no explicit directives are given.
//! * With the `json` feature, file output can be switched to JSON lines.
//!
//! ## Example
//!
//! ```rust
//! # use bts_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("bts-hosts")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    targets: bool,
    dir: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    #[cfg(feature = "json")]
    json: bool,
    directives: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            targets: false,
            dir: None,
            level: LevelFilter::WARN,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            #[cfg(feature = "json")]
            json: false,
            directives: None,
        }
    }
}

/// Builder state: no log directory configured.
#[derive(Debug)]
pub struct NoFile;
/// Builder state: logs are also written to rolling files.
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures and installs the global subscriber.
///
/// File-only knobs ([`rotation`](LoggerBuilder::rotation), [`max_files`](LoggerBuilder::max_files))
/// only exist once a directory has been set with [`file`](LoggerBuilder::file).
#[derive(Debug)]
pub struct LoggerBuilder<F: Sealed = NoFile> {
    name: String,
    config: LoggerConfig,
    file: PhantomData<F>,
}

impl LoggerBuilder<NoFile> {
    /// Also writes logs to rolling files in `dir`, prefixed with the logger name.
    pub fn file(self, dir: impl Into<PathBuf>) -> LoggerBuilder<WithFile> {
        let mut config = self.config;
        config.dir = Some(dir.into());
        LoggerBuilder { name: self.name, config, file: PhantomData }
    }
}

impl LoggerBuilder<WithFile> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Number of rotated files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Writes the file output as JSON lines.
    #[cfg(feature = "json")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<F> {
    /// Minimum level emitted when no directive says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Explicit filter directives (e.g. `bts_hosting=trace,config=warn`).
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.config.directives = Some(directives.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Prints event targets (module paths) on the console.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn targets(mut self, enabled: bool) -> Self {
        self.config.targets = enabled;
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the background writer of the file output and must be
    /// kept alive until shutdown, otherwise buffered lines are lost.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`, bad
    ///   directives or when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate(&self.name, &self.config)?;
        let filter = env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(
                layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(self.config.targets)
                    .with_ansi(true)
                    .boxed(),
            );
        }

        let guard = match &self.config.dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.config.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.config.max_files)
                    .build(dir)
                    .context(format!("Log directory {}", dir.display()))?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);

                #[cfg(feature = "json")]
                let boxed =
                    if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };
                #[cfg(not(feature = "json"))]
                let boxed = file_layer.boxed();

                layers.push(boxed);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(layers)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(logger = %self.name, "logging initialized");
        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Holds the background writer guard of the file output, if any.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger; `name` prefixes rolling log files (`name.2026-10-18.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), config: LoggerConfig::default(), file: PhantomData }
    }

    /// Whether file output is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

fn validate(name: &str, config: &LoggerConfig) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid filter directives '{directives}': {e}").into(),
                context: None,
            })
        },
    }
}
