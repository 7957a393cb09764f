//! JSON file backend
//!
//! `highscores.json` lives in the working directory by default, or in the
//! user's config directory when settings ask for a private location.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HighScoreStorage, StorageError, decode, encode};
use crate::highscores::HighScoreEntry;

/// Default file name
pub const HIGH_SCORE_FILE: &str = "highscores.json";

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `highscores.json` in the working directory
    pub fn desktop() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }

    /// `highscores.json` in the per-user config directory, falling back to the
    /// working directory when there is none
    #[cfg(not(target_arch = "wasm32"))]
    pub fn private() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join("rush-tunnel"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(HIGH_SCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStorage for FileStorage {
    fn load(&self) -> Result<Vec<HighScoreEntry>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => decode(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encode(entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("none.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested/highscores.json"));
        let entries = vec![HighScoreEntry::new("Jay", 42)];
        storage.save(&entries).unwrap();
        assert_eq!(storage.load().unwrap(), entries);
    }

    #[test]
    fn test_private_path() {
        let storage = FileStorage::private();
        assert!(storage.path().ends_with(HIGH_SCORE_FILE));
        if let Some(config) = dirs::config_dir() {
            assert_eq!(storage.path(), config.join("rush-tunnel").join(HIGH_SCORE_FILE));
        }
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");
        fs::write(&path, "garbage").unwrap();
        assert!(FileStorage::new(path).load().is_err());
    }
}
