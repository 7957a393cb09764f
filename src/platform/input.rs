//! Unified keyboard, mouse and touch input
//!
//! The host implements [`InputSource`] over its own device polling. The game
//! only asks the questions below; "just pressed" style queries are true for
//! exactly one tick per physical press.

use std::collections::HashSet;

use glam::IVec2;

use crate::sim::Rect;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Backspace,
    /// Launch bomb
    X,
    /// Pause / resume
    Z,
    /// Confirm exit
    Y,
    /// Decline exit
    N,
}

/// Per-tick input queries supplied by the host
pub trait InputSource {
    fn key_just_pressed(&self, key: Key) -> bool;
    fn key_held(&self, key: Key) -> bool;
    /// Current pointer position in screen pixels
    fn pointer_position(&self) -> IVec2;
    /// Primary button went down this tick
    fn pointer_just_clicked(&self) -> bool;
    fn pointer_held(&self) -> bool;
    /// Positions of touches that started this tick
    fn touches_just_started(&self) -> &[IVec2];
    /// Positions of every active touch
    fn touch_positions(&self) -> &[IVec2];
}

/// Every discrete tap this tick: a mouse click and/or new touches
pub fn taps<I: InputSource + ?Sized>(input: &I) -> impl Iterator<Item = IVec2> + '_ {
    input
        .pointer_just_clicked()
        .then(|| input.pointer_position())
        .into_iter()
        .chain(input.touches_just_started().iter().copied())
}

/// "Any key, click or tap" used to leave info screens
pub fn confirm<I: InputSource + ?Sized>(input: &I) -> bool {
    input.key_just_pressed(Key::Enter)
        || input.pointer_just_clicked()
        || !input.touches_just_started().is_empty()
}

/// A tap landed inside `rect` this tick (edge-triggered)
pub fn tapped_in<I: InputSource + ?Sized>(input: &I, rect: &Rect) -> bool {
    taps(input).any(|p| rect.contains(p))
}

/// The pointer or any touch is held inside `rect` (level-triggered)
pub fn held_in<I: InputSource + ?Sized>(input: &I, rect: &Rect) -> bool {
    (input.pointer_held() && rect.contains(input.pointer_position()))
        || input.touch_positions().iter().any(|p| rect.contains(*p))
}

/// Plain snapshot of one tick's input. Hosts fill it from their device state;
/// tests build it directly.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub pressed: HashSet<Key>,
    pub held: HashSet<Key>,
    pub pointer: IVec2,
    pub clicked: bool,
    pub pointer_down: bool,
    pub touches_started: Vec<IVec2>,
    pub touches: Vec<IVec2>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed this tick (and therefore also held)
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.held.insert(key);
        self
    }

    /// Key held down since an earlier tick
    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Mouse click at a point (button also counts as held)
    pub fn click(mut self, x: i32, y: i32) -> Self {
        self.pointer = IVec2::new(x, y);
        self.clicked = true;
        self.pointer_down = true;
        self
    }

    /// Mouse button held at a point
    pub fn pointer_hold(mut self, x: i32, y: i32) -> Self {
        self.pointer = IVec2::new(x, y);
        self.pointer_down = true;
        self
    }

    /// Touch that began this tick
    pub fn tap(mut self, x: i32, y: i32) -> Self {
        let p = IVec2::new(x, y);
        self.touches_started.push(p);
        self.touches.push(p);
        self
    }

    /// Touch held since an earlier tick
    pub fn touch(mut self, x: i32, y: i32) -> Self {
        self.touches.push(IVec2::new(x, y));
        self
    }

    /// Drop the one-shot parts after a tick, keeping held state
    pub fn clear_edges(&mut self) {
        self.pressed.clear();
        self.clicked = false;
        self.touches_started.clear();
    }
}

impl InputSource for InputSnapshot {
    fn key_just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn pointer_position(&self) -> IVec2 {
        self.pointer
    }

    fn pointer_just_clicked(&self) -> bool {
        self.clicked
    }

    fn pointer_held(&self) -> bool {
        self.pointer_down
    }

    fn touches_just_started(&self) -> &[IVec2] {
        &self.touches_started
    }

    fn touch_positions(&self) -> &[IVec2] {
        &self.touches
    }
}
