//! Procedural tunnel and coin generation
//!
//! The tunnel is a queue of fixed-width segments. Each tick one segment is
//! appended at the right edge with the current gap shape and every segment
//! scrolls left, so the shape of a segment never changes after it is spawned.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, GameEvent, Session, Slope, TunnelSegment, random_item_spacing};
use crate::consts::*;

/// Advance the distance counter and award the distance score
pub fn advance_distance(session: &mut Session) {
    session.distance += 1;
    if session.distance % SCORE_INTERVAL == 0 {
        session.score += 1;
    }
}

/// Re-pick the slope, narrow the gap and drift the top boundary
pub fn reshape(session: &mut Session, rng: &mut impl Rng) {
    if session.distance % SLOPE_INTERVAL == 0 {
        session.slope = Slope::random(rng);
    }
    if session.distance % SHRINK_INTERVAL == 0 && session.tunnel_height > MIN_TUNNEL_HEIGHT {
        session.tunnel_height -= 1.0;
    }
    match session.slope {
        Slope::Up if session.tunnel_top > TUNNEL_MARGIN => session.tunnel_top -= 1.0,
        Slope::Down if session.tunnel_top < session.max_tunnel_top() => {
            session.tunnel_top += 1.0
        }
        _ => {}
    }
}

/// Spawn a segment at the right edge, scroll, and drop what left the screen
pub fn scroll_segments(session: &mut Session) {
    session.segments.push(TunnelSegment::new(
        (SCREEN_WIDTH - 1) as f32,
        session.tunnel_top,
        session.tunnel_height,
    ));
    for seg in &mut session.segments {
        seg.x -= SCROLL_SPEED;
    }
    session.segments.retain(|s| !s.is_off_screen());
}

/// Coin spawn cadence. Returns true if a coin was placed.
pub fn spawn_collectibles(session: &mut Session, rng: &mut impl Rng) -> bool {
    if session.distance > LAST_ITEM_DISTANCE {
        return false;
    }
    if session.distance - session.this_item != session.next_item {
        return false;
    }

    let mut spawned = false;
    if session.collectibles.len() < MAX_COLLECTIBLES {
        match coin_offset(session.tunnel_height, rng) {
            Some(offset) => {
                let y = session.tunnel_top + offset;
                session
                    .collectibles
                    .push(Collectible::coin(Vec2::new(COIN_SPAWN_X, y)));
                spawned = true;
            }
            None => log::debug!(
                "gap too narrow for a coin (height {})",
                session.tunnel_height
            ),
        }
    }

    session.this_item = session.distance;
    session.next_item = random_item_spacing(rng);
    spawned
}

/// Random vertical offset for a coin within the gap, or None when the gap
/// leaves no valid range
fn coin_offset(tunnel_height: f32, rng: &mut impl Rng) -> Option<f32> {
    let range = tunnel_height as i32 - 10;
    if range <= 0 {
        return None;
    }
    Some(rng.random_range(0..range) as f32)
}

/// Scroll collectibles left; off-screen ones are dropped by the pickup pass
pub fn scroll_collectibles(session: &mut Session) {
    for c in &mut session.collectibles {
        c.pos.x -= SCROLL_SPEED;
    }
}

/// Run the generator for one tick, returning any spawn events
pub fn generate(session: &mut Session, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    reshape(session, rng);
    scroll_segments(session);
    if spawn_collectibles(session, rng) {
        events.push(GameEvent::CoinSpawned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> (Session, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(42);
        let s = Session::new(&mut rng);
        (s, rng)
    }

    #[test]
    fn test_score_every_40() {
        let (mut s, _) = session();
        for _ in 0..39 {
            advance_distance(&mut s);
        }
        assert_eq!(s.score, 0);
        advance_distance(&mut s);
        assert_eq!(s.score, 1);
        for _ in 0..80 {
            advance_distance(&mut s);
        }
        assert_eq!(s.score, 3);
    }

    #[test]
    fn test_shrink_has_floor() {
        let (mut s, mut rng) = session();
        s.tunnel_height = 21.0;
        s.distance = 200;
        reshape(&mut s, &mut rng);
        assert_eq!(s.tunnel_height, 20.0);
        s.distance = 400;
        reshape(&mut s, &mut rng);
        assert_eq!(s.tunnel_height, 20.0);
    }

    #[test]
    fn test_slope_clamps() {
        let (mut s, mut rng) = session();
        s.distance = 1; // no re-pick
        s.slope = Slope::Up;
        s.tunnel_top = 10.0;
        reshape(&mut s, &mut rng);
        assert_eq!(s.tunnel_top, 10.0);

        s.slope = Slope::Down;
        s.tunnel_top = s.max_tunnel_top();
        reshape(&mut s, &mut rng);
        assert_eq!(s.tunnel_top, 20.0);

        s.tunnel_top = 12.0;
        reshape(&mut s, &mut rng);
        assert_eq!(s.tunnel_top, 13.0);
    }

    #[test]
    fn test_one_segment_per_tick() {
        let (mut s, _) = session();
        scroll_segments(&mut s);
        assert_eq!(s.segments.len(), 1);
        assert_eq!(s.segments[0].x, 158.0);
        scroll_segments(&mut s);
        assert_eq!(s.segments.len(), 2);
        assert_eq!(s.segments[0].x, 157.0);
        assert_eq!(s.segments[1].x, 158.0);
    }

    #[test]
    fn test_segment_count_is_bounded() {
        let (mut s, _) = session();
        for _ in 0..1000 {
            scroll_segments(&mut s);
        }
        // Live segments span x in (-10, 158]
        assert_eq!(s.segments.len(), 168);
        assert!(s.segments.iter().all(|seg| seg.x + seg.width > 0.0));
    }

    #[test]
    fn test_existing_segments_keep_their_shape() {
        let (mut s, _) = session();
        scroll_segments(&mut s);
        s.tunnel_top = 11.0;
        s.tunnel_height = 30.0;
        scroll_segments(&mut s);
        assert_eq!(s.segments[0].top_y, 15.0);
        assert_eq!(s.segments[0].height, 50.0);
        assert_eq!(s.segments[1].top_y, 11.0);
    }

    #[test]
    fn test_coin_spawns_on_cadence() {
        let (mut s, mut rng) = session();
        s.next_item = 32;
        s.distance = 31;
        assert!(!spawn_collectibles(&mut s, &mut rng));
        s.distance = 32;
        assert!(spawn_collectibles(&mut s, &mut rng));
        assert_eq!(s.collectibles.len(), 1);
        assert_eq!(s.this_item, 32);
        let coin = &s.collectibles[0];
        assert_eq!(coin.pos.x, COIN_SPAWN_X);
        assert!(coin.pos.y >= s.tunnel_top && coin.pos.y < s.tunnel_top + s.tunnel_height - 10.0);
    }

    #[test]
    fn test_coin_cap() {
        let (mut s, mut rng) = session();
        for _ in 0..MAX_COLLECTIBLES {
            s.collectibles.push(Collectible::coin(Vec2::new(100.0, 30.0)));
        }
        s.next_item = 64;
        s.distance = 64;
        assert!(!spawn_collectibles(&mut s, &mut rng));
        assert_eq!(s.collectibles.len(), MAX_COLLECTIBLES);
        // Cadence still advances
        assert_eq!(s.this_item, 64);
    }

    #[test]
    fn test_no_coins_after_last_item_distance() {
        let (mut s, mut rng) = session();
        s.this_item = LAST_ITEM_DISTANCE + 1 - 32;
        s.next_item = 32;
        s.distance = LAST_ITEM_DISTANCE + 1;
        assert!(!spawn_collectibles(&mut s, &mut rng));
        assert!(s.collectibles.is_empty());
    }

    #[test]
    fn test_degenerate_gap_skips_spawn() {
        let (mut s, mut rng) = session();
        s.tunnel_height = 10.0;
        s.next_item = 32;
        s.distance = 32;
        assert!(!spawn_collectibles(&mut s, &mut rng));
        assert!(s.collectibles.is_empty());
        assert_eq!(s.this_item, 32);
    }
}
