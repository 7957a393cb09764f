//! High score table
//!
//! Exactly five ranked slots, highest first. Empty slots hold `("", 0)`.
//! Loaded once at start-up and written back after every insertion.

use serde::{Deserialize, Serialize};

use crate::persistence::HighScoreStorage;

/// Number of slots in the table
pub const HIGH_SCORE_SLOTS: usize = 5;

/// Longest name the entry screen can produce
pub const MAX_NAME_LEN: usize = 8;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Unused slot
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Five-slot leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighScoreTable {
    entries: [HighScoreEntry; HIGH_SCORE_SLOTS],
}

impl HighScoreTable {
    /// All slots empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored list, padding or truncating to five slots
    pub fn from_entries(list: impl IntoIterator<Item = HighScoreEntry>) -> Self {
        let mut table = Self::new();
        for (slot, entry) in table.entries.iter_mut().zip(list) {
            *slot = entry;
        }
        table
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Strictly beats the fifth-place score
    pub fn is_high_score(&self, score: u32) -> bool {
        score > self.entries[HIGH_SCORE_SLOTS - 1].score
    }

    /// Insert at the first slot with a strictly lower score, shifting the rest
    /// down and dropping the last. Returns the 0-based slot written.
    pub fn insert_ranked(&mut self, name: impl Into<String>, score: u32) -> Option<usize> {
        let pos = self.entries.iter().position(|e| score > e.score)?;
        // Rotate the doomed last slot up to `pos`, then overwrite it
        self.entries[pos..].rotate_right(1);
        self.entries[pos] = HighScoreEntry::new(name, score);
        Some(pos)
    }

    /// Load from storage; any failure yields an empty table
    pub fn load(storage: &dyn HighScoreStorage) -> Self {
        match storage.load() {
            Ok(list) if !is_well_formed(&list) => {
                log::warn!("Stored high scores are out of order or malformed, starting fresh");
                Self::new()
            }
            Ok(list) => {
                let table = Self::from_entries(list);
                log::info!(
                    "Loaded high scores (top score {})",
                    table.entries[0].score
                );
                table
            }
            Err(e) => {
                log::warn!("Could not load high scores, starting fresh: {e}");
                Self::new()
            }
        }
    }

    /// Persist all five slots; write failures are logged and dropped
    pub fn save(&self, storage: &mut dyn HighScoreStorage) {
        match storage.save(&self.entries) {
            Ok(()) => log::info!("High scores saved"),
            Err(e) => log::warn!("Could not save high scores: {e}"),
        }
    }
}

/// Ranked highest first, with names the entry screen could have produced
fn is_well_formed(list: &[HighScoreEntry]) -> bool {
    let sorted = list.windows(2).all(|w| w[0].score >= w[1].score);
    let names_ok = list.iter().all(|e| {
        e.name.chars().count() <= MAX_NAME_LEN
            && e.name.chars().all(|c| c.is_ascii_graphic() || c == ' ')
    });
    sorted && names_ok
}
