//! One Playing tick
//!
//! Order matters and is fixed: bomb window, bomb trigger, distance and win
//! check, tunnel generation, player physics, collectible scroll, fatal
//! collisions, pickups.

use rand::Rng;

use super::collision::{check_crash, collect_pickups};
use super::state::{GameEvent, Session};
use super::tunnel::{advance_distance, generate, scroll_collectibles};
use crate::consts::*;

/// Unified gameplay input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayInput {
    /// Ascend (level-triggered: held key, held pointer or touch)
    pub ascend: bool,
    /// Launch a bomb (edge-triggered)
    pub bomb: bool,
}

/// Advance the session by one tick. The caller reacts to `Won` and `Crashed`.
pub fn tick(session: &mut Session, input: &PlayInput, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Bomb flash freezes everything until it expires
    if session.bombing {
        session.bomb_timer = session.bomb_timer.saturating_sub(1);
        if session.bomb_timer == 0 {
            session.bombing = false;
            session.segments.clear();
            session.collectibles.clear();
            events.push(GameEvent::FieldCleared);
        }
        return events;
    }

    if input.bomb && session.bombs > 0 {
        session.bombs -= 1;
        session.bombing = true;
        session.bomb_timer = BOMB_FLASH_TICKS;
        events.push(GameEvent::BombLaunched {
            remaining: session.bombs,
        });
        return events;
    }

    advance_distance(session);
    if session.distance >= WIN_DISTANCE {
        events.push(GameEvent::Won);
        return events;
    }

    generate(session, rng, &mut events);

    session.player.integrate(input.ascend);
    scroll_collectibles(session);

    if let Some(kind) = check_crash(session) {
        events.push(GameEvent::Crashed(kind));
        return events;
    }

    for _ in 0..collect_pickups(session) {
        events.push(GameEvent::CoinCollected);
    }

    session.tip_timer += 1;
    events
}
