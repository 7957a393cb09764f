//! Per-screen drawing
//!
//! Every scene clears the target first. Missing resources are skipped, except
//! the submarine which falls back to a filled rectangle.

use std::f32::consts::TAU;

use glam::IVec2;

use super::text::{GLYPH_SIZE, draw_text};
use super::{Color, RenderTarget, palette};
use crate::consts::*;
use crate::game::{Game, bomb_button, up_button};
use crate::highscores::HighScoreTable;
use crate::resources::{ResourceId, Resources};
use crate::sim::{Rect, Session};
use crate::ui::name_entry::{self, END_BOX, ERASE_BOX, GRID_ROWS, NameEntry};
use crate::ui::{MenuItem, TitleMenu};

pub const WIN_TEXT: &str = "You Win";

const HELP_TEXT: &str = "Help about the game
Hold [UP] to go up
Release to go down
[Z] Pause the game
[X] Launch the bomb
[ESC] Exit game
Coin Increase score
(:  Have fun!  :)";

const ABOUT_TEXT: &str = "Rush out the Tunnel
For WQX Lava 12K
Version: 1.0
Design : Anson
Program: Jay
Created: 6/15/2005
Welcome to:
www.emsky.net";

/// Angular step between explosion ring dots, in radians
const RING_STEP: f32 = 0.2;

pub fn draw_title<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, menu: &TitleMenu) {
    target.fill(palette::WHITE);
    match res.get(ResourceId::Title) {
        Some(title) => target.blit(title, IVec2::ZERO),
        None => draw_text(target, res, "RUSH OUT\nTHE TUNNEL", 2, 2, palette::BLACK),
    }
    let selector = MenuItem::ALL[menu.choice].rect();
    target.fill_rect(selector, palette::MENU_SELECTOR);
}

pub fn draw_countdown<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, game: &Game) {
    draw_playfield(target, res, game.session());
    draw_hud(target, res, game.session());

    let digit = game.countdown_digit();
    if (1..=3).contains(&digit) {
        let x = (SCREEN_WIDTH - GLYPH_SIZE) / 2;
        let y = (SCREEN_HEIGHT - 2 * GLYPH_SIZE) / 2;
        draw_text(target, res, &digit.to_string(), x, y, palette::WHITE);
    }
}

pub fn draw_playing<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, game: &Game) {
    let session = game.session();
    draw_playfield(target, res, session);
    draw_hud(target, res, session);
    if session.bombing {
        target.fill(palette::WHITE);
    }
}

/// Water, tunnel walls, collectibles and the submarine
fn draw_playfield<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, session: &Session) {
    target.fill(palette::WATER);

    for segment in &session.segments {
        target.fill_rect(segment.top_wall(), palette::WALL);
        target.fill_rect(segment.bottom_wall(), palette::WALL);
    }

    for item in &session.collectibles {
        if let Some(image) = res.get(item.sprite) {
            target.blit(image, item.pos.as_ivec2());
        }
    }

    let player = &session.player;
    match res.get(ResourceId::Submarine) {
        Some(sub) => target.blit(sub, player.pos.as_ivec2()),
        None => target.fill_rect(player.hitbox(), palette::PLAYER_FALLBACK),
    }
}

/// Score, bomb stock and the on-screen buttons
fn draw_hud<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, session: &Session) {
    let score = format!("SCORE: {}", session.score);
    draw_text(target, res, &score, 5, 5, palette::WHITE);

    let bomb = res.get(ResourceId::Bomb);
    if let Some(icon) = bomb {
        for i in 0..session.bombs as i32 {
            let x = SCREEN_WIDTH - 15 - i * (BOMB_ICON_WIDTH + 2);
            target.blit(icon, IVec2::new(x, 5));
        }
    }

    let bomb_rect = bomb_button();
    target.fill_rect(up_button(), palette::BUTTON);
    target.fill_rect(bomb_rect, palette::BUTTON);
    if let Some(icon) = bomb {
        let size = target.image_size(icon);
        let offset = (IVec2::new(bomb_rect.width(), bomb_rect.height()) - size) / 2;
        target.blit(icon, bomb_rect.min + offset);
    }
}

pub fn draw_help<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>) {
    target.fill(palette::WHITE);
    draw_text(target, res, HELP_TEXT, 1, 1, palette::BLACK);
}

pub fn draw_about<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>) {
    target.fill(palette::WHITE);
    draw_text(target, res, ABOUT_TEXT, 1, 1, palette::BLACK);
}

/// Letters of "You Win" revealed after `frame` ticks
pub fn win_letters(frame: u32) -> usize {
    ((frame / WIN_LETTER_TICKS) as usize + 1).min(WIN_TEXT.len())
}

pub fn draw_win<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, frame: u32) {
    target.fill(palette::WHITE);
    let shown = &WIN_TEXT[..win_letters(frame)];
    draw_text(target, res, shown, 50, 40, palette::GREEN);
}

/// Colour of an explosion ring of radius `r`
fn ring_color(r: i32) -> Color {
    Color::rgb(
        (255 - r * 4).clamp(0, 255) as u8,
        (128 + r * 2).clamp(0, 255) as u8,
        0,
    )
}

/// Concentric dotted rings around `center`, growing two pixels per frame
fn draw_explosion<R: RenderTarget>(target: &mut R, center: IVec2, frame: u32) {
    let steps = (TAU / RING_STEP).ceil() as i32;
    let bounds = Rect::from_size(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
    for r in (2..frame as i32 * 2).step_by(4) {
        let color = ring_color(r);
        for step in 0..steps {
            let a = step as f32 * RING_STEP;
            let p = center + IVec2::new((r as f32 * a.cos()) as i32, (r as f32 * a.sin()) as i32);
            if bounds.contains(p) {
                target.plot(p, color);
            }
        }
    }
}

pub fn draw_game_over<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, game: &Game) {
    target.fill(palette::WHITE);
    if !game.explosion_done() {
        let center = game.session().player.pos.as_ivec2() + IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT) / 2;
        draw_explosion(target, center, game.explosion_frame());
        return;
    }
    if let Some(image) = res.get(ResourceId::GameOver) {
        let size = target.image_size(image);
        let pos = (IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) - size) / 2;
        target.blit(image, pos);
    }
}

pub fn draw_name_input<R: RenderTarget>(
    target: &mut R,
    res: &Resources<R::Image>,
    entry: &NameEntry,
) {
    target.fill(palette::WHITE);
    draw_text(target, res, "Your Name", 2, 5, palette::BLACK);

    for row in 0..GRID_ROWS {
        for col in 0..name_entry::row_len(row) {
            let Some(ch) = name_entry::glyph_at(row, col) else {
                continue;
            };
            let cell = name_entry::cell_rect(row, col);
            let label = if ch == ' ' { "Spc".to_string() } else { ch.to_string() };
            draw_text(target, res, &label, cell.min.x, cell.min.y, palette::BLACK);
        }
    }

    let legend = [
        ("Arrow", palette::GRAY),
        ("Select", palette::BLACK),
        ("CR", palette::GRAY),
        ("Input", palette::BLACK),
        ("BS", palette::GRAY),
        ("Erase", palette::BLACK),
        ("Spc", palette::GRAY),
        ("End", palette::BLACK),
    ];
    for (i, (label, color)) in legend.into_iter().enumerate() {
        draw_text(target, res, label, 110, 5 + i as i32 * 9, color);
    }

    if entry.erase_highlight > 0 {
        target.fill_rect(ERASE_BOX, palette::BOX_HIGHLIGHT);
    }
    if entry.end_highlight > 0 {
        target.fill_rect(END_BOX, palette::BOX_HIGHLIGHT);
    }

    // Typed name with an underscore at the insertion point
    let mut shown: String = entry.buffer.chars().take(entry.position).collect();
    shown.push('_');
    shown.extend(entry.buffer.chars().skip(entry.position));
    draw_text(target, res, &shown, 2, 15, palette::BLUE);

    let cell = name_entry::cell_rect(entry.row, entry.col);
    let width = match name_entry::glyph_at(entry.row, entry.col) {
        Some(' ') => 3 * GLYPH_SIZE,
        _ => GLYPH_SIZE,
    };
    target.fill_rect(
        Rect::from_size(cell.min.x, cell.min.y, width, GLYPH_SIZE),
        palette::CELL_HIGHLIGHT,
    );
}

pub fn draw_paused<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>) {
    target.fill(palette::WHITE);
    draw_text(target, res, "Paused", 60, 40, palette::RED);
}

pub fn draw_exit_confirm<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>) {
    target.fill(palette::WHITE);
    draw_text(target, res, "Exit game? Y/N", 40, 40, palette::RED);
}

/// Leaderboard; `highlight` marks the slot just written
pub fn draw_high_scores<R: RenderTarget>(
    target: &mut R,
    res: &Resources<R::Image>,
    table: &HighScoreTable,
    highlight: Option<usize>,
) {
    target.fill(palette::WHITE);
    draw_text(target, res, "TOP 5 SCORES", 30, 10, palette::BLACK);

    for (i, entry) in table.entries().iter().enumerate() {
        let name = if entry.name.is_empty() { "---" } else { &entry.name };
        let (name_color, score_color) = if highlight == Some(i) {
            (palette::RED, palette::RED)
        } else {
            (palette::TABLE_NAME, palette::TABLE_SCORE)
        };
        let y = 20 + 11 * i as i32;
        draw_text(target, res, &format!("{}. {name}", i + 1), 30, y, name_color);
        draw_text(target, res, &entry.score.to_string(), 110, y, score_color);
    }
}

/// Transient message overlay, drawn on top of any scene
pub fn draw_message<R: RenderTarget>(target: &mut R, res: &Resources<R::Image>, text: &str) {
    draw_text(target, res, text, 40, 55, palette::BLACK);
}
