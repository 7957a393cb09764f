//! High score name entry
//!
//! A 5x13 glyph grid navigated with the arrow keys or by tapping a cell. The
//! last row holds the digits and a space glyph; choosing the space glyph ends
//! entry. Two boxes on the right erase the last character and end entry.

use glam::IVec2;

use crate::highscores::MAX_NAME_LEN;
use crate::platform::input::{self, InputSource, Key};
use crate::sim::Rect;

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 13;

/// Glyph rows; the last row is two cells short
const GRID: [&str; GRID_ROWS] = [
    "ABCDEFGHIJKLM",
    "NOPQRSTUVWXYZ",
    "abcdefghijklm",
    "nopqrstuvwxyz",
    "0123456789 ",
];

/// Name used when the player ends entry without typing anything
pub const DEFAULT_NAME: &str = "Player";

/// Ticks the erase/end boxes stay highlighted after use
pub const HIGHLIGHT_TICKS: u32 = 8;

/// Screen origin and pitch of the glyph grid
pub const GRID_ORIGIN: IVec2 = IVec2::new(2, 29);
pub const CELL_SIZE: i32 = 8;

/// Tap targets, inclusive of their far edges
pub const ERASE_BOX: Rect = Rect {
    min: IVec2::new(110, 40),
    max: IVec2::new(151, 58),
};
pub const END_BOX: Rect = Rect {
    min: IVec2::new(110, 58),
    max: IVec2::new(151, 76),
};

/// Glyph at a grid cell, `None` for the unused cells
pub fn glyph_at(row: usize, col: usize) -> Option<char> {
    GRID.get(row)?.chars().nth(col)
}

/// Number of usable cells in a row
pub fn row_len(row: usize) -> usize {
    GRID.get(row).map_or(0, |r| r.chars().count())
}

/// Screen rectangle of a grid cell
pub fn cell_rect(row: usize, col: usize) -> Rect {
    Rect::from_size(
        GRID_ORIGIN.x + col as i32 * CELL_SIZE,
        GRID_ORIGIN.y + row as i32 * CELL_SIZE,
        CELL_SIZE,
        CELL_SIZE,
    )
}

/// What the entry screen wants the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntryAction {
    None,
    Typed(char),
    Erased,
    /// Entry finished with this name
    Commit(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    pub buffer: String,
    /// Insertion point in characters
    pub position: usize,
    pub row: usize,
    pub col: usize,
    pub erase_highlight: u32,
    pub end_highlight: u32,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn move_up(&mut self) {
        self.row = (self.row + GRID_ROWS - 1) % GRID_ROWS;
    }

    pub fn move_down(&mut self) {
        self.row = (self.row + 1) % GRID_ROWS;
    }

    /// Horizontal moves wrap at the width of the current row
    pub fn move_left(&mut self) {
        let width = row_len(self.row);
        self.col = if self.col == 0 || self.col > width {
            width - 1
        } else {
            self.col - 1
        };
    }

    pub fn move_right(&mut self) {
        let width = row_len(self.row);
        self.col = if self.col + 1 >= width { 0 } else { self.col + 1 };
    }

    /// Type the glyph under the cursor; the space glyph ends entry
    pub fn select(&mut self) -> NameEntryAction {
        match glyph_at(self.row, self.col) {
            Some(' ') => self.end(),
            Some(ch) if self.position < MAX_NAME_LEN => {
                let byte = self
                    .buffer
                    .char_indices()
                    .nth(self.position)
                    .map_or(self.buffer.len(), |(i, _)| i);
                self.buffer.insert(byte, ch);
                self.position += 1;
                NameEntryAction::Typed(ch)
            }
            _ => NameEntryAction::None,
        }
    }

    /// Remove the character before the insertion point
    pub fn erase(&mut self) -> NameEntryAction {
        if self.position == 0 {
            return NameEntryAction::None;
        }
        self.position -= 1;
        if let Some((i, _)) = self.buffer.char_indices().nth(self.position) {
            self.buffer.remove(i);
        }
        self.erase_highlight = HIGHLIGHT_TICKS;
        NameEntryAction::Erased
    }

    /// Finish entry with the typed name, or the default when nothing was typed
    pub fn end(&mut self) -> NameEntryAction {
        self.end_highlight = HIGHLIGHT_TICKS;
        let name = if self.buffer.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            self.buffer.clone()
        };
        NameEntryAction::Commit(name)
    }

    /// Handle a click or tap at `p`
    pub fn tap(&mut self, p: IVec2) -> NameEntryAction {
        if ERASE_BOX.contains_inclusive(p) {
            return self.erase();
        }
        if END_BOX.contains_inclusive(p) {
            return self.end();
        }
        for row in 0..GRID_ROWS {
            for col in 0..row_len(row) {
                if cell_rect(row, col).contains(p) {
                    self.row = row;
                    self.col = col;
                    return self.select();
                }
            }
        }
        NameEntryAction::None
    }

    /// Count the cosmetic highlight timers down
    pub fn tick_highlights(&mut self) {
        self.erase_highlight = self.erase_highlight.saturating_sub(1);
        self.end_highlight = self.end_highlight.saturating_sub(1);
    }

    /// Process one tick of input. A `Commit` stops further processing.
    pub fn update<I: InputSource + ?Sized>(&mut self, input: &I) -> NameEntryAction {
        if input.key_just_pressed(Key::Up) {
            self.move_up();
        }
        if input.key_just_pressed(Key::Down) {
            self.move_down();
        }
        if input.key_just_pressed(Key::Left) {
            self.move_left();
        }
        if input.key_just_pressed(Key::Right) {
            self.move_right();
        }

        let mut last = NameEntryAction::None;
        let taps: Vec<IVec2> = input::taps(input).collect();
        for p in taps {
            match self.tap(p) {
                NameEntryAction::Commit(name) => return NameEntryAction::Commit(name),
                NameEntryAction::None => {}
                other => last = other,
            }
        }

        if input.key_just_pressed(Key::Enter) {
            match self.select() {
                NameEntryAction::Commit(name) => return NameEntryAction::Commit(name),
                NameEntryAction::None => {}
                other => last = other,
            }
        }
        if input.key_just_pressed(Key::Backspace) && self.erase() == NameEntryAction::Erased {
            last = NameEntryAction::Erased;
        }
        if input.key_just_pressed(Key::Space) {
            return self.end();
        }
        last
    }
}
