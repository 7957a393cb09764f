//! High score persistence
//!
//! The table is stored as a JSON list of `{ "name": ..., "score": ... }`
//! records. Backends:
//! - `file`: JSON file on disk (working directory or user config dir)
//! - `memory`: in-process store for tests and headless runs
//! - `web`: browser LocalStorage (wasm32 only)

pub mod file;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

use thiserror::Error;

use crate::highscores::HighScoreEntry;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("high score I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score data is corrupt: {0}")]
    Json(#[from] serde_json::Error),
    #[error("high score storage unavailable: {0}")]
    Unavailable(String),
}

/// Platform store for the high score table
pub trait HighScoreStorage {
    /// Up to five entries in rank order. A store that has never been written
    /// returns an empty list rather than an error.
    fn load(&self) -> Result<Vec<HighScoreEntry>, StorageError>;

    /// Replace the stored table
    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StorageError>;
}

impl<S: HighScoreStorage + ?Sized> HighScoreStorage for Box<S> {
    fn load(&self) -> Result<Vec<HighScoreEntry>, StorageError> {
        (**self).load()
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StorageError> {
        (**self).save(entries)
    }
}

pub fn encode(entries: &[HighScoreEntry]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(entries)?)
}

pub fn decode(json: &str) -> Result<Vec<HighScoreEntry>, StorageError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let entries = vec![HighScoreEntry::new("AAA", 100), HighScoreEntry::empty()];
        let json = encode(&entries).unwrap();
        assert_eq!(json, r#"[{"name":"AAA","score":100},{"name":"","score":0}]"#);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("{not json"), Err(StorageError::Json(_))));
        assert!(matches!(
            decode(r#"[{"name":"A","score":-5}]"#),
            Err(StorageError::Json(_))
        ));
    }
}
