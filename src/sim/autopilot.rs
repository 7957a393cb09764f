//! Demo autopilot
//!
//! Steers the submarine toward the middle of the gap just ahead of it. Used by
//! the headless attract-mode host; it is not part of normal play.

use super::state::Session;
use super::tick::PlayInput;
use crate::consts::*;

/// How far ahead of the nose the autopilot looks (pixels)
const LOOKAHEAD: f32 = 12.0;
/// Ticks of velocity to project when deciding to ascend
const VELOCITY_LEAD: f32 = 4.0;

/// Gap (top, bottom) the submarine must fit through next
pub fn upcoming_gap(session: &Session) -> (f32, f32) {
    let left = session.player.pos.x;
    let right = left + PLAYER_WIDTH as f32 + LOOKAHEAD;

    session
        .segments
        .iter()
        .filter(|s| s.x < right && s.x + s.width > left)
        .fold(None, |gap: Option<(f32, f32)>, s| match gap {
            Some((top, bottom)) => Some((top.max(s.top_y), bottom.min(s.bottom_y()))),
            None => Some((s.top_y, s.bottom_y())),
        })
        .unwrap_or((
            session.tunnel_top,
            session.tunnel_top + session.tunnel_height,
        ))
}

/// Decide this tick's input
pub fn steer(session: &Session) -> PlayInput {
    let (top, bottom) = upcoming_gap(session);
    let target = (top + bottom) / 2.0;
    let center = session.player.pos.y + PLAYER_HEIGHT as f32 / 2.0;
    let projected = center + session.player.vy * VELOCITY_LEAD;

    PlayInput {
        ascend: projected > target,
        bomb: false,
    }
}
