//! Hand-drawn bitmap font
//!
//! The font sheet is a single column of 8x8 glyphs. A character's glyph sits
//! at row `code - 4`, wrapping negative rows by 127.

use glam::IVec2;

use super::{Color, RenderTarget};
use crate::resources::{ResourceId, Resources};
use crate::sim::Rect;

pub const GLYPH_SIZE: i32 = 8;
pub const LINE_HEIGHT: i32 = 10;

/// Row of `ch` in the font sheet. The sheet only covers ASCII; anything
/// else is drawn as `?`.
pub fn glyph_index(ch: char) -> i32 {
    let ch = if ch.is_ascii() { ch } else { '?' };
    let idx = ch as i32 - 4;
    if idx < 0 { idx + 127 } else { idx }
}

/// Source rectangle of `ch` in the font sheet
pub fn glyph_rect(ch: char) -> Rect {
    Rect::from_size(0, glyph_index(ch) * GLYPH_SIZE, GLYPH_SIZE, GLYPH_SIZE)
}

/// Draw `text` at `(x, y)`. Lines split on `\n`. Nothing is drawn without the
/// font resource.
pub fn draw_text<R: RenderTarget>(
    target: &mut R,
    resources: &Resources<R::Image>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
) {
    let Some(font) = resources.get(ResourceId::Font) else {
        return;
    };
    for (line_idx, line) in text.split('\n').enumerate() {
        let line_y = y + line_idx as i32 * LINE_HEIGHT;
        for (char_idx, ch) in line.chars().enumerate() {
            let pos = IVec2::new(x + char_idx as i32 * GLYPH_SIZE, line_y);
            target.blit_region(font, glyph_rect(ch), pos, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette;
    use crate::renderer::testing::{DrawCall, RecordingTarget, all_resources};

    #[test]
    fn test_glyph_index() {
        assert_eq!(glyph_index('A'), 61);
        assert_eq!(glyph_index(' '), 28);
        assert_eq!(glyph_index('\u{2}'), 125);
        assert_eq!(glyph_rect('A'), Rect::from_size(0, 488, 8, 8));
    }

    #[test]
    fn test_non_ascii_stays_on_sheet() {
        assert_eq!(glyph_index('ë'), glyph_index('?'));
        assert_eq!(glyph_index('\u{1F600}'), glyph_index('?'));
        assert!(glyph_index('\u{7f}') < 127);
    }

    #[test]
    fn test_layout() {
        let mut target = RecordingTarget::default();
        draw_text(&mut target, &all_resources(), "AB\nC", 5, 5, palette::BLACK);
        let positions: Vec<IVec2> = target
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::BlitRegion(_, _, pos, _) => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(
            positions,
            vec![IVec2::new(5, 5), IVec2::new(13, 5), IVec2::new(5, 15)]
        );
    }

    #[test]
    fn test_missing_font_draws_nothing() {
        let mut target = RecordingTarget::default();
        draw_text(&mut target, &Resources::new(), "hello", 0, 0, palette::BLACK);
        assert!(target.calls.is_empty());
    }
}
