//! PrefsStore: load, query, update and save preferences
//!
//! Values live in memory; `save()` writes them out only when something
//! changed since the last write.

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct PrefsStore {
    /// `None` for a memory-only store that never touches disk
    file_path: Option<PathBuf>,
    file: PrefsFile,
    dirty: bool,
}

impl PrefsStore {
    /// Default data directory: `~/.boost_blitz`, or `./.boost_blitz` without a home
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".boost_blitz"))
            .unwrap_or_else(|| PathBuf::from("./.boost_blitz"))
    }

    /// Opens the store in `directory`, creating the directory if needed
    ///
    /// A missing prefs file is not an error: the store starts empty.
    pub fn open(directory: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let directory = directory.as_ref();

        if !directory.exists() {
            fs::create_dir_all(directory)?;
        }

        let file_path = directory.join(PREFS_FILE_NAME);
        let file = if file_path.exists() {
            let json = fs::read_to_string(&file_path)?;
            let file: PrefsFile = serde_json::from_str(&json)?;

            if file.version > CURRENT_PREFS_VERSION {
                return Err(PrefsError::UnsupportedVersion(file.version));
            }
            debug!(path = %file_path.display(), keys = file.values.len(), "prefs loaded");
            file
        } else {
            PrefsFile::default()
        };

        Ok(PrefsStore {
            file_path: Some(file_path),
            file,
            dirty: false,
        })
    }

    /// A store that keeps values for this session only
    pub fn in_memory() -> Self {
        PrefsStore {
            file_path: None,
            file: PrefsFile::default(),
            dirty: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.file.values.get(key).copied().unwrap_or(default)
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        if self.file.values.get(key) != Some(&value) {
            self.file.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.file.values.contains_key(key)
    }

    pub fn delete_key(&mut self, key: &str) {
        if self.file.values.remove(key).is_some() {
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes pending changes to disk
    pub fn save(&mut self) -> Result<(), PrefsError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(path) = &self.file_path {
            self.file.version = CURRENT_PREFS_VERSION;
            self.file.updated_at = Some(chrono::Local::now().to_rfc3339());

            let json = serde_json::to_string_pretty(&self.file)?;
            fs::write(path, json)?;
            info!(path = %path.display(), "prefs saved");
        }

        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::HIGH_SCORE_KEY;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::open(dir.path().join("nested")).unwrap();

        assert_eq!(store.get_int(HIGH_SCORE_KEY, 0), 0);
        assert!(!store.has_key(HIGH_SCORE_KEY));
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PrefsStore::open(dir.path()).unwrap();
        store.set_int(HIGH_SCORE_KEY, 321);
        assert!(store.is_dirty());
        store.save().unwrap();
        assert!(!store.is_dirty());

        let reopened = PrefsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get_int(HIGH_SCORE_KEY, 0), 321);

        let raw = fs::read_to_string(dir.path().join(PREFS_FILE_NAME)).unwrap();
        let file: PrefsFile = serde_json::from_str(&raw).unwrap();
        assert_eq!(file.version, CURRENT_PREFS_VERSION);
        assert!(file.updated_at.is_some());
    }

    #[test]
    fn test_clean_store_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PrefsStore::open(dir.path()).unwrap();
        store.save().unwrap();
        assert!(!dir.path().join(PREFS_FILE_NAME).exists());
    }

    #[test]
    fn test_setting_same_value_is_not_a_change() {
        let mut store = PrefsStore::in_memory();
        store.set_int("Volume", 5);
        store.save().unwrap();
        store.set_int("Volume", 5);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_delete_key() {
        let mut store = PrefsStore::in_memory();
        store.set_int(HIGH_SCORE_KEY, 9);
        store.delete_key(HIGH_SCORE_KEY);
        assert!(!store.has_key(HIGH_SCORE_KEY));
        assert_eq!(store.get_int(HIGH_SCORE_KEY, -1), -1);
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PREFS_FILE_NAME),
            r#"{ "version": 99, "values": { "HighScore": 5 } }"#,
        )
        .unwrap();

        assert!(matches!(
            PrefsStore::open(dir.path()),
            Err(PrefsError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILE_NAME), "HighScore=5").unwrap();

        assert!(matches!(
            PrefsStore::open(dir.path()),
            Err(PrefsError::Serialization(_))
        ));
    }
}
