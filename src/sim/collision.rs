//! Collision detection for the submarine
//!
//! Checks run in a fixed order each Playing tick: screen bounds, then tunnel
//! walls, then coin pickups. The first two end the run; pickups never do.

use super::geom::Rect;
use super::state::{CrashKind, Player, Session, TunnelSegment};
use crate::consts::*;

/// Player left the top or bottom of the screen
pub fn out_of_bounds(player: &Player) -> bool {
    player.pos.y < 0.0 || player.pos.y as i32 + PLAYER_HEIGHT > SCREEN_HEIGHT
}

/// Player hitbox overlaps either wall of any live segment
pub fn hits_wall(hitbox: &Rect, segments: &[TunnelSegment]) -> bool {
    segments
        .iter()
        .any(|seg| hitbox.overlaps(&seg.top_wall()) || hitbox.overlaps(&seg.bottom_wall()))
}

/// Fatal collision check, bounds first
pub fn check_crash(session: &Session) -> Option<CrashKind> {
    if out_of_bounds(&session.player) {
        return Some(CrashKind::Boundary);
    }
    if hits_wall(&session.player.hitbox(), &session.segments) {
        return Some(CrashKind::Wall);
    }
    None
}

/// Remove touched and off-screen collectibles, returning how many were picked up
pub fn collect_pickups(session: &mut Session) -> u32 {
    let hitbox = session.player.hitbox();
    let mut collected = 0;
    session.collectibles.retain(|c| {
        if hitbox.overlaps(&c.hitbox()) {
            collected += 1;
            false
        } else {
            !c.is_off_screen()
        }
    });
    session.score += collected * COIN_SCORE;
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Collectible;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> Session {
        Session::new(&mut Pcg32::seed_from_u64(3))
    }

    #[test]
    fn test_bounds() {
        let mut p = Player::new(Vec2::new(40.0, 0.0));
        assert!(!out_of_bounds(&p));
        p.pos.y = -0.2;
        assert!(out_of_bounds(&p));
        p.pos.y = 76.0;
        assert!(!out_of_bounds(&p));
        p.pos.y = 76.5; // truncated row still fits
        assert!(!out_of_bounds(&p));
        p.pos.y = 77.0;
        assert!(out_of_bounds(&p));
    }

    #[test]
    fn test_wall_hit() {
        let mut s = session();
        s.segments.push(TunnelSegment::new(38.0, 15.0, 50.0));
        s.player.pos.y = 40.0;
        assert_eq!(check_crash(&s), None);

        s.player.pos.y = 12.0; // rows 12..16 overlap the top wall 0..15
        assert_eq!(check_crash(&s), Some(CrashKind::Wall));

        s.player.pos.y = 62.0; // rows 62..66 overlap the bottom wall 65..80
        assert_eq!(check_crash(&s), Some(CrashKind::Wall));
    }

    #[test]
    fn test_bounds_checked_before_walls() {
        let mut s = session();
        s.segments.push(TunnelSegment::new(38.0, 15.0, 50.0));
        s.player.pos.y = -1.0;
        assert_eq!(check_crash(&s), Some(CrashKind::Boundary));
    }

    #[test]
    fn test_segment_out_of_x_range_is_ignored() {
        let mut s = session();
        s.segments.push(TunnelSegment::new(48.0, 30.0, 20.0));
        s.player.pos.y = 10.0;
        assert_eq!(check_crash(&s), None);
    }

    #[test]
    fn test_collect_pickups() {
        let mut s = session();
        s.player.pos = Vec2::new(40.0, 40.0);
        s.collectibles.push(Collectible::coin(Vec2::new(46.0, 38.0))); // touching
        s.collectibles.push(Collectible::coin(Vec2::new(100.0, 38.0))); // far away
        s.collectibles.push(Collectible::coin(Vec2::new(-3.0, 38.0))); // off screen
        let collected = collect_pickups(&mut s);
        assert_eq!(collected, 1);
        assert_eq!(s.score, 5);
        assert_eq!(s.collectibles.len(), 1);
        assert_eq!(s.collectibles[0].pos.x, 100.0);
    }
}
