//! Host configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Environment variable overriding the auto-reset delay (milliseconds).
pub const AUTO_RESET_ENV: &str = "REWIND_AUTO_RESET_MS";

/// How game state is written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ASCII board with a status line.
    #[default]
    #[display("text")]
    Text,
    /// One JSON `GameState` object per update.
    #[display("json")]
    Json,
}

/// Configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Delay before a finished game resets itself; 0 disables auto-reset.
    #[serde(default = "default_auto_reset_delay_ms")]
    auto_reset_delay_ms: u64,

    /// Output format for rendered state.
    #[serde(default)]
    output: OutputFormat,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_auto_reset_delay_ms() -> u64 {
    1500
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            auto_reset_delay_ms: default_auto_reset_delay_ms(),
            output: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            auto_reset_delay_ms = config.auto_reset_delay_ms,
            output = %config.output,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Resolves configuration: an explicit file, else [`DEFAULT_CONFIG_FILE`]
    /// if present, else defaults. [`AUTO_RESET_ENV`] then overrides the delay.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Ok(raw) = std::env::var(AUTO_RESET_ENV) {
            config.override_auto_reset(&raw)?;
        }
        Ok(config)
    }

    /// Overrides the auto-reset delay from a raw millisecond string.
    #[instrument(skip(self))]
    pub fn override_auto_reset(&mut self, raw: &str) -> Result<(), ConfigError> {
        let ms = raw.trim().parse::<u64>().map_err(|e| {
            ConfigError::new(format!("Invalid {} value {:?}: {}", AUTO_RESET_ENV, raw, e))
        })?;
        debug!(ms, "Auto-reset delay overridden");
        self.auto_reset_delay_ms = ms;
        Ok(())
    }

    /// Sets the auto-reset delay.
    pub fn with_auto_reset_delay_ms(mut self, ms: u64) -> Self {
        self.auto_reset_delay_ms = ms;
        self
    }

    /// Sets the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// The auto-reset delay, or `None` when disabled.
    pub fn auto_reset_delay(&self) -> Option<Duration> {
        (self.auto_reset_delay_ms > 0).then(|| Duration::from_millis(self.auto_reset_delay_ms))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
