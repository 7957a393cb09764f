//! Integer axis-aligned rectangles for hit testing
//!
//! Positions in the simulation are real-valued, but every hit test runs on
//! pixel rectangles: coordinates are truncated toward zero before testing, so
//! a submarine at y=9.9 occupies the same rows as one at y=9.0.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Half-open pixel rectangle `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: IVec2::new(x0, y0),
            max: IVec2::new(x1, y1),
        }
    }

    /// Rectangle of the given size anchored at its top-left corner
    pub fn from_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// Rectangle anchored at a real-valued position (truncated)
    pub fn at(pos: Vec2, w: i32, h: i32) -> Self {
        Self::from_size(pos.x as i32, pos.y as i32, w, h)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// A rectangle with no area never overlaps anything
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// True if the two rectangles share at least one pixel
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Half-open point test (used for on-screen buttons and grid cells)
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Closed point test, inclusive of the far edges
    pub fn contains_inclusive(&self, p: IVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::from_size(0, 0, 8, 4);
        assert!(a.overlaps(&Rect::from_size(7, 3, 2, 2)));
        assert!(!a.overlaps(&Rect::from_size(8, 0, 2, 2))); // touching edge only
        assert!(!a.overlaps(&Rect::from_size(0, 4, 8, 4)));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let player = Rect::from_size(0, 0, 8, 4);
        let empty = Rect::new(0, 0, 10, 0);
        assert!(empty.is_empty());
        assert!(!player.overlaps(&empty));
        assert!(!empty.overlaps(&player));
    }

    #[test]
    fn test_at_truncates_toward_zero() {
        let r = Rect::at(Vec2::new(40.9, 9.99), 8, 4);
        assert_eq!(r, Rect::new(40, 9, 48, 13));
        // -0.5 truncates to 0, not -1
        let r = Rect::at(Vec2::new(0.0, -0.5), 8, 4);
        assert_eq!(r.min.y, 0);
    }

    #[test]
    fn test_contains_edges() {
        let r = Rect::from_size(5, 35, 40, 40);
        assert!(r.contains(IVec2::new(5, 35)));
        assert!(!r.contains(IVec2::new(45, 50)));
        assert!(r.contains_inclusive(IVec2::new(45, 75)));
    }
}
