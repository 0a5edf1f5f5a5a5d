//! Whole-state persistence.
//!
//! The full [`PairingState`] is written and read as one JSON blob under a
//! single key. Two backends are provided:
//!
//! - [`JsonFileStore`]: `<dir>/<key>.json`, written atomically.
//! - [`MemoryStore`]: string blobs keyed by name with an optional byte
//!   quota, mirroring browser local storage.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::PairingState;
use crate::validation::{validate_state, ValidationError};

/// Key the state is stored under by default.
pub const DEFAULT_STORAGE_KEY: &str = "golfPairingsData";

/// Persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No saved data under key '{key}'")]
    MissingKey { key: String },

    #[error("Storage quota exceeded: {size} bytes (limit {limit})")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("Saved data is inconsistent: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A backend that saves and restores the whole pairing state.
pub trait StateStore {
    /// Writes the full state, replacing any previous save.
    fn save(&mut self, state: &PairingState) -> Result<(), StoreError>;

    /// Reads the saved state.
    fn load(&self) -> Result<PairingState, StoreError>;
}

fn encode(state: &PairingState) -> Result<String, StoreError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a blob and rejects inconsistent state.
fn decode(blob: &str) -> Result<PairingState, StoreError> {
    let state: PairingState = serde_json::from_str(blob)?;
    validate_state(&state).map_err(StoreError::Invalid)?;
    Ok(state)
}

/// File-backed store: one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir` using the default key.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Uses a different key (file stem).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Path of the saved file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(data)?;
            file.flush()?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn save(&mut self, state: &PairingState) -> Result<(), StoreError> {
        let blob = encode(state)?;
        let path = self.path();
        Self::write_atomic(&path, blob.as_bytes())?;
        log::debug!("saved {} bytes to {:?}", blob.len(), path);
        Ok(())
    }

    fn load(&self) -> Result<PairingState, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Err(StoreError::MissingKey {
                key: self.key.clone(),
            });
        }
        let blob = fs::read_to_string(&path)?;
        let state = decode(&blob)?;
        log::debug!("loaded {} bytes from {:?}", blob.len(), path);
        Ok(state)
    }
}

/// In-memory key/value store with an optional size quota.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    key: String,
    quota: Option<usize>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store using the default key and no quota.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            key: DEFAULT_STORAGE_KEY.to_string(),
            quota: None,
        }
    }

    /// Uses a different key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Limits the size of a single saved blob.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Raw blob stored under a key.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores a raw blob, bypassing serialization.
    pub fn put_raw(&mut self, key: impl Into<String>, blob: impl Into<String>) {
        self.entries.insert(key.into(), blob.into());
    }
}

impl StateStore for MemoryStore {
    fn save(&mut self, state: &PairingState) -> Result<(), StoreError> {
        let blob = encode(state)?;
        if let Some(limit) = self.quota {
            if blob.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    size: blob.len(),
                    limit,
                });
            }
        }
        self.entries.insert(self.key.clone(), blob);
        Ok(())
    }

    fn load(&self) -> Result<PairingState, StoreError> {
        let blob = self.raw(&self.key).ok_or_else(|| StoreError::MissingKey {
            key: self.key.clone(),
        })?;
        decode(blob)
    }
}
