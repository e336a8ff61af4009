//! Schedule persistence seam
//!
//! The engine never loads or saves anything itself; collaborators hand it a
//! [`ScheduleConfig`](crate::schedule::ScheduleConfig) snapshot per call.
//! [`ScheduleRepository`] is the seam those collaborators implement, and
//! [`BlobRepository`] is the injected key-value-blob implementation the
//! admin surface uses in place of real storage: configs round-trip through
//! a YAML blob, so persisted admin edits survive re-parsing unchanged.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::schedule::ScheduleConfig;

/// Default blob key for the schedule configuration.
const SCHEDULE_KEY: &str = "schedule-config";

/// Errors from loading or saving a schedule configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored blob did not parse as a schedule configuration.
    #[error("failed to parse stored schedule: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Load/save seam for the schedule configuration.
///
/// `load` returns `Ok(None)` when nothing was persisted yet, in which case
/// callers fall back to [`ScheduleConfig::default`].
pub trait ScheduleRepository {
    /// Load the persisted configuration, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when persisted data exists but cannot be
    /// decoded.
    fn load(&self) -> Result<Option<ScheduleConfig>, StoreError>;

    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the configuration cannot be encoded.
    fn save(&mut self, config: &ScheduleConfig) -> Result<(), StoreError>;
}

/// In-memory key-value blob store holding schedules as YAML strings.
#[derive(Debug, Clone, Default)]
pub struct BlobRepository {
    blobs: FxHashMap<String, String>,
    key: Option<String>,
}

impl BlobRepository {
    /// An empty repository using the default schedule key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty repository storing the schedule under a custom key.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            blobs: FxHashMap::default(),
            key: Some(key.into()),
        }
    }

    /// Seed a raw blob, standing in for externally persisted data.
    pub fn insert_blob(&mut self, key: impl Into<String>, blob: impl Into<String>) {
        self.blobs.insert(key.into(), blob.into());
    }

    fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(SCHEDULE_KEY)
    }
}

impl ScheduleRepository for BlobRepository {
    fn load(&self) -> Result<Option<ScheduleConfig>, StoreError> {
        let Some(blob) = self.blobs.get(self.key()) else {
            return Ok(None);
        };

        Ok(Some(serde_norway::from_str(blob)?))
    }

    fn save(&mut self, config: &ScheduleConfig) -> Result<(), StoreError> {
        let blob = serde_norway::to_string(config)?;

        self.blobs.insert(self.key().to_string(), blob);

        Ok(())
    }
}
