//! Transient on-screen messages

/// Flavour lines shown every so often during play
pub const TIPS: &[&str] = &[
    "I want a GF!",
    "Be careful~",
    "Take it easy~",
    "A red fish!",
    "henhenhahi!",
    "I like NDS!",
    "Have no money~",
    "A diamond!!!",
    "What's this?",
    "Up!Up!Up!!!",
    "Foolish man!",
    "I'll come back",
    "Don't hit me!",
    "We'll be eat!",
    "Sunshine~~~",
    "lalalalala~~",
    "Elephant~~",
    "You big nose!",
    "A lovely girl~",
    "Clever Anson~",
    "Handsome JAY~",
    "Take my soul~",
    "I love NBA!",
    "A good game~",
    "Good ball!",
    "Lucky!",
    "To rush out!",
    "NC_TOOLS!!",
    "I love 6502~",
];

/// A line of text with a remaining display time in ticks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    text: String,
    remaining: u32,
}

impl Message {
    /// Replace whatever is showing
    pub fn show(&mut self, text: impl Into<String>, ticks: u32) {
        self.text = text.into();
        self.remaining = ticks;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Text to draw this frame, if any
    pub fn visible(&self) -> Option<&str> {
        (self.remaining > 0).then_some(self.text.as_str())
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires() {
        let mut m = Message::default();
        assert_eq!(m.visible(), None);
        m.show("Paused", 2);
        assert_eq!(m.visible(), Some("Paused"));
        m.tick();
        assert_eq!(m.visible(), Some("Paused"));
        m.tick();
        assert_eq!(m.visible(), None);
        m.tick();
        assert_eq!(m.remaining(), 0);
    }
}
