//! Screen-level UI state that sits around the simulation

pub mod menu;
pub mod message;
pub mod name_entry;

pub use menu::{MenuItem, TitleMenu};
pub use message::{Message, TIPS};
pub use name_entry::{NameEntry, NameEntryAction};
