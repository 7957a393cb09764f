//! Rush Out the Tunnel - a scrolling submarine tunnel arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tunnel generator, physics, collisions)
//! - `game`: Screen state machine driving the simulation and the UI
//! - `platform`: Keyboard/mouse/touch input abstraction
//! - `persistence`: High score storage backends
//! - `renderer`: Draw commands issued against a host-provided render target
//! - `resources`: Load-once image cache keyed by resource id

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod resources;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{AppContext, Game, Screen};
pub use highscores::{HighScoreEntry, HighScoreTable};
pub use settings::{HighScoreLocation, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical screen size (pixels)
    pub const SCREEN_WIDTH: i32 = 160;
    pub const SCREEN_HEIGHT: i32 = 80;

    /// Host tick rate the countdown and message durations assume
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Submarine hitbox (matches the sprite)
    pub const PLAYER_WIDTH: i32 = 8;
    pub const PLAYER_HEIGHT: i32 = 4;
    /// Upward acceleration while ascending
    pub const ASCEND_ACCEL: f32 = 0.2;
    /// Downward drift when not ascending
    pub const GRAVITY: f32 = 0.1;
    pub const MAX_VY: f32 = 1.0;

    /// Tunnel generation
    pub const SEGMENT_WIDTH: f32 = 10.0;
    pub const INITIAL_TUNNEL_HEIGHT: f32 = 50.0;
    pub const INITIAL_TUNNEL_TOP: f32 = 15.0;
    pub const MIN_TUNNEL_HEIGHT: f32 = 20.0;
    /// Closest the gap may come to the top or bottom of the screen
    pub const TUNNEL_MARGIN: f32 = 10.0;
    pub const SCROLL_SPEED: f32 = 1.0;
    pub const SLOPE_INTERVAL: u32 = 10;
    pub const SHRINK_INTERVAL: u32 = 200;
    pub const SCORE_INTERVAL: u32 = 40;

    /// Distance at which the run is won
    pub const WIN_DISTANCE: u32 = 4000;

    /// Coins
    pub const COIN_WIDTH: i32 = 3;
    pub const COIN_HEIGHT: i32 = 5;
    pub const COIN_SPAWN_X: f32 = 157.0;
    pub const COIN_SCORE: u32 = 5;
    pub const MAX_COLLECTIBLES: usize = 5;
    /// Coin spacing is a multiple of this, 1..=5 times
    pub const ITEM_SPACING_UNIT: u32 = 32;
    /// No coins are spawned past this distance
    pub const LAST_ITEM_DISTANCE: u32 = 3840;

    /// Bombs
    pub const STARTING_BOMBS: u32 = 3;
    pub const BOMB_FLASH_TICKS: u32 = 15;
    pub const BOMB_ICON_WIDTH: i32 = 6;

    /// Screen timers
    pub const COUNTDOWN_TICKS: u32 = 3 * TICKS_PER_SECOND;
    pub const EXPLOSION_FRAMES: u32 = 30;
    pub const WIN_LETTER_TICKS: u32 = 15;
    pub const TIP_INTERVAL: u32 = 200;
    pub const MESSAGE_TICKS: u32 = 60;
    pub const COIN_MESSAGE_TICKS: u32 = 30;

    /// On-screen touch buttons
    pub const BUTTON_SIZE: i32 = 40;
    pub const BUTTON_MARGIN: i32 = 5;
}
