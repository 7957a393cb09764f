//! In-memory backend
//!
//! Clones share the same store, so a test can hand one clone to the game and
//! inspect what was written through the other.

use std::cell::RefCell;
use std::rc::Rc;

use super::{HighScoreStorage, StorageError, decode, encode};
use crate::highscores::HighScoreEntry;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    json: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw JSON (may be corrupt on purpose)
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Rc::new(RefCell::new(Some(json.into()))),
        }
    }
}

impl HighScoreStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<HighScoreEntry>, StorageError> {
        match self.json.borrow().as_deref() {
            Some(json) => decode(json),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), StorageError> {
        *self.json.borrow_mut() = Some(encode(entries)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_store() {
        let reader = MemoryStorage::new();
        let mut writer = reader.clone();
        writer.save(&[HighScoreEntry::new("A", 1)]).unwrap();
        assert_eq!(reader.load().unwrap(), vec![HighScoreEntry::new("A", 1)]);
    }
}
