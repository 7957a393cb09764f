//! Title screen menu

use glam::IVec2;

use crate::sim::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    Help,
    About,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::NewGame,
        MenuItem::Help,
        MenuItem::About,
        MenuItem::Exit,
    ];

    /// Click/tap target drawn over the title art
    pub fn rect(&self) -> Rect {
        let i = *self as i32;
        Rect::from_size(122, 8 + i * 15, 34, 9)
    }
}

/// Menu cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleMenu {
    pub choice: usize,
}

impl TitleMenu {
    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.choice]
    }

    pub fn next(&mut self) {
        self.choice = (self.choice + 1) % MenuItem::ALL.len();
    }

    pub fn prev(&mut self) {
        self.choice = (self.choice + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    /// Move the cursor to the item under `p`, if any
    pub fn hit(&mut self, p: IVec2) -> Option<MenuItem> {
        let idx = MenuItem::ALL.iter().position(|item| item.rect().contains(p))?;
        self.choice = idx;
        Some(MenuItem::ALL[idx])
    }
}
