//! Fixtures
//!
//! Named schedule sets loaded from YAML files under `fixtures/{set}/`, used
//! by the demos and integration tests. The shipped sets are `default` (the
//! reference four-day week), `weekend` (Sunday only) and `closed` (all
//! entries inactive).

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::schedule::ScheduleConfig;

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// A schedule configuration loaded from a named fixture set.
#[derive(Debug, Clone)]
pub struct Fixture {
    config: ScheduleConfig,
}

impl Fixture {
    /// Load a fixture set from the default `./fixtures` base path.
    ///
    /// # Errors
    ///
    /// Returns an error if the set's schedule file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::with_base_path("./fixtures", name)
    }

    /// Load a fixture set from a custom base path.
    ///
    /// # Errors
    ///
    /// Returns an error if the set's schedule file cannot be read or parsed.
    pub fn with_base_path(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let file_path = base_path.into().join(name).join("schedule.yml");
        let contents = fs::read_to_string(&file_path)?;
        let config: ScheduleConfig = serde_norway::from_str(&contents)?;

        Ok(Self { config })
    }

    /// The loaded schedule configuration.
    #[must_use]
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Consume the fixture, yielding the configuration.
    #[must_use]
    pub fn into_config(self) -> ScheduleConfig {
        self.config
    }
}
