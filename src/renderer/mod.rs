//! Rendering module
//!
//! The game draws through [`RenderTarget`], a handful of immediate-mode
//! primitives the host implements on top of its graphics backend. Scene
//! functions in [`scenes`] translate game state into those calls.

pub mod scenes;
pub mod text;

use glam::IVec2;

use crate::sim::Rect;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Fixed colours used by the scenes
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// SaddleBrown
    pub const WALL: Color = Color::rgb(139, 69, 19);
    /// SteelBlue
    pub const WATER: Color = Color::rgb(70, 130, 180);
    pub const MENU_SELECTOR: Color = Color::rgba(70, 130, 180, 128);
    pub const BUTTON: Color = Color::rgba(100, 100, 100, 128);
    /// Stand-in for a missing submarine sprite
    pub const PLAYER_FALLBACK: Color = Color::rgb(255, 255, 0);
    pub const TABLE_NAME: Color = Color::rgb(0, 0, 128);
    pub const TABLE_SCORE: Color = Color::rgb(128, 0, 0);
    pub const BOX_HIGHLIGHT: Color = Color::rgba(255, 0, 0, 64);
    pub const CELL_HIGHLIGHT: Color = Color::rgba(0, 0, 255, 64);
}

/// Immediate-mode drawing surface supplied by the host
pub trait RenderTarget {
    /// Host image handle, as produced by its resource loader
    type Image;

    /// Clear the whole target
    fn fill(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a whole image with its top-left corner at `pos`
    fn blit(&mut self, image: &Self::Image, pos: IVec2);

    /// Draw the `src` part of `image` at `pos`, multiplied by `tint`
    fn blit_region(&mut self, image: &Self::Image, src: Rect, pos: IVec2, tint: Color);

    /// Set one pixel; out-of-bounds coordinates are ignored
    fn plot(&mut self, pos: IVec2, color: Color);

    /// Size of an image in pixels
    fn image_size(&self, image: &Self::Image) -> IVec2;
}
