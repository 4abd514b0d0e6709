//! Runtime settings.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! `SLEEPWISE_*` environment variables. Command-line flags are applied on top
//! by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::SleepwiseError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONFIG_FILE: &str = "sleepwise.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prediction service URL
    pub endpoint: String,
    /// Upper bound on a single prediction request
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from `path` (or `sleepwise.toml` if present) and the
    /// environment.
    ///
    /// # Errors
    /// Fails if an explicitly given file cannot be read, if a file does not
    /// parse, or if the result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, SleepwiseError> {
        let mut settings = Self::default();

        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };
        if let Some(file) = file {
            let raw = std::fs::read_to_string(&file)?;
            settings.apply_toml(&raw)?;
            tracing::debug!(path = %file.display(), "Loaded settings file");
        }

        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_toml(&mut self, raw: &str) -> Result<(), SleepwiseError> {
        let file: FileSettings =
            toml::from_str(raw).map_err(|e| SleepwiseError::Config(e.to_string()))?;
        if let Some(endpoint) = file.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = file.timeout_secs {
            self.timeout_secs = timeout;
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), SleepwiseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SLEEPWISE_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("SLEEPWISE_TIMEOUT_SECS") {
            self.timeout_secs = v.trim().parse().map_err(|_| {
                SleepwiseError::Config(format!("SLEEPWISE_TIMEOUT_SECS is not a number: {v}"))
            })?;
        }
        Ok(())
    }

    /// Check invariants after all overrides have been applied.
    ///
    /// # Errors
    /// Returns `SleepwiseError::Config` for an empty endpoint or zero timeout.
    pub fn validate(&self) -> Result<(), SleepwiseError> {
        if self.endpoint.trim().is_empty() {
            return Err(SleepwiseError::Config("endpoint must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(SleepwiseError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
