//! Session state and core simulation types
//!
//! Everything that changes during a run lives in [`Session`]; it is rebuilt
//! from scratch whenever a new game begins.

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;
use crate::resources::ResourceId;

/// Vertical drift applied to the tunnel's top boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Slope {
    /// Top wall moves toward the top of the screen
    Up,
    #[default]
    Flat,
    /// Top wall moves toward the bottom of the screen
    Down,
}

impl Slope {
    pub const ALL: [Slope; 3] = [Slope::Up, Slope::Flat, Slope::Down];

    /// Uniform pick among the three modes
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// The submarine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the hitbox; x never changes after spawn
    pub pos: Vec2,
    /// Vertical velocity, kept within [-MAX_VY, MAX_VY]
    pub vy: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, vy: 0.0 }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Integrate one tick of vertical motion
    pub fn integrate(&mut self, ascending: bool) {
        if ascending {
            self.vy -= ASCEND_ACCEL;
        } else {
            self.vy += GRAVITY;
        }
        self.pos.y += self.vy;
        self.vy = self.vy.clamp(-MAX_VY, MAX_VY);
    }
}

/// One column of tunnel: a top wall and a bottom wall around a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunnelSegment {
    pub x: f32,
    pub top_y: f32,
    pub height: f32,
    pub width: f32,
}

impl TunnelSegment {
    pub fn new(x: f32, top_y: f32, height: f32) -> Self {
        Self {
            x,
            top_y,
            height,
            width: SEGMENT_WIDTH,
        }
    }

    /// Bottom edge of the gap
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.top_y + self.height
    }

    pub fn top_wall(&self) -> Rect {
        Rect::new(
            self.x as i32,
            0,
            (self.x + self.width) as i32,
            self.top_y as i32,
        )
    }

    pub fn bottom_wall(&self) -> Rect {
        Rect::new(
            self.x as i32,
            self.bottom_y() as i32,
            (self.x + self.width) as i32,
            SCREEN_HEIGHT,
        )
    }

    /// Fully scrolled past the left edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// A pickup drifting through the tunnel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: IVec2,
    /// Sprite drawn for this pickup, resolved through the resource cache
    pub sprite: ResourceId,
}

impl Collectible {
    pub fn coin(pos: Vec2) -> Self {
        Self {
            pos,
            size: IVec2::new(COIN_WIDTH, COIN_HEIGHT),
            sprite: ResourceId::Coin,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, self.size.x, self.size.y)
    }

    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x as f32 <= 0.0
    }
}

/// Why a run ended in a crash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashKind {
    /// Left the top or bottom of the screen
    Boundary,
    /// Hit a tunnel wall
    Wall,
}

/// Things that happened during a Playing tick, for the controller and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BombLaunched { remaining: u32 },
    /// Bomb flash expired and the obstacle field was wiped
    FieldCleared,
    CoinCollected,
    CoinSpawned,
    Won,
    Crashed(CrashKind),
}

/// Complete per-run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub player: Player,
    /// Ordered left to right by x
    pub segments: Vec<TunnelSegment>,
    pub collectibles: Vec<Collectible>,
    pub distance: u32,
    pub score: u32,
    pub bombs: u32,
    pub bombing: bool,
    pub bomb_timer: u32,
    pub countdown: u32,
    /// Gap parameters used for the next spawned segment
    pub tunnel_top: f32,
    pub tunnel_height: f32,
    pub slope: Slope,
    /// Distance between the last coin spawn and the next one
    pub next_item: u32,
    /// Distance at the last coin spawn
    pub this_item: u32,
    /// Playing ticks since the run started, drives the tip cadence
    pub tip_timer: u32,
}

impl Session {
    /// Fresh run state
    pub fn new(rng: &mut impl Rng) -> Self {
        let tunnel_top = INITIAL_TUNNEL_TOP;
        let tunnel_height = INITIAL_TUNNEL_HEIGHT;
        Self {
            player: Player::new(Vec2::new(
                (SCREEN_WIDTH / 4) as f32,
                tunnel_top + tunnel_height / 2.0,
            )),
            segments: Vec::new(),
            collectibles: Vec::new(),
            distance: 0,
            score: 0,
            bombs: STARTING_BOMBS,
            bombing: false,
            bomb_timer: 0,
            countdown: COUNTDOWN_TICKS,
            tunnel_top,
            tunnel_height,
            slope: Slope::Up,
            next_item: random_item_spacing(rng),
            this_item: 0,
            tip_timer: 0,
        }
    }

    /// Highest allowed top boundary for the current gap height
    #[inline]
    pub fn max_tunnel_top(&self) -> f32 {
        SCREEN_HEIGHT as f32 - self.tunnel_height - TUNNEL_MARGIN
    }
}

/// Random coin spacing: one of 32, 64, 96, 128, 160
pub fn random_item_spacing(rng: &mut impl Rng) -> u32 {
    rng.random_range(1..=5) * ITEM_SPACING_UNIT
}
