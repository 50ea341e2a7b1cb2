//! Preference file layout and errors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Current prefs file version
pub const CURRENT_PREFS_VERSION: u32 = 1;

/// Name of the prefs file inside the data directory
pub const PREFS_FILE_NAME: &str = "prefs.json";

/// The root prefs file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefsFile {
    pub version: u32,
    /// RFC 3339 local time of the last write
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<String, i32>,
}

impl Default for PrefsFile {
    fn default() -> Self {
        PrefsFile {
            version: CURRENT_PREFS_VERSION,
            updated_at: None,
            values: BTreeMap::new(),
        }
    }
}

/// Error types for prefs operations
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported prefs version: {0}")]
    UnsupportedVersion(u32),
}
