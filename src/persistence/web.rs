//! Browser LocalStorage backend

use super::{HighScoreStorage, StorageError, decode, encode};
use crate::highscores::HighScoreEntry;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    const STORAGE_KEY: &'static str = "rush_highscores";

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("no LocalStorage".into()))
    }
}

impl HighScoreStorage for LocalStorage {
    fn load(&self) -> Result<Vec<HighScoreEntry>, StorageError> {
        match Self::storage()?.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => decode(&json),
            Ok(None) => Ok(Vec::new()),
            Err(_) => Err(StorageError::Unavailable("getItem failed".into())),
        }
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StorageError> {
        let json = encode(entries)?;
        Self::storage()?
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StorageError::Unavailable("setItem failed".into()))
    }
}
