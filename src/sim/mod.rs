//! Deterministic simulation module
//!
//! All Playing-state logic lives here. This module must stay deterministic:
//! - One call to `tick` per fixed frame
//! - Randomness only through the caller's seeded RNG
//! - No rendering, input-device or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;
pub mod tunnel;

pub use collision::{check_crash, collect_pickups, hits_wall, out_of_bounds};
pub use geom::Rect;
pub use state::{
    Collectible, CrashKind, GameEvent, Player, Session, Slope, TunnelSegment, random_item_spacing,
};
pub use tick::{PlayInput, tick};
