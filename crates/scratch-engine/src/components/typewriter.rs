//! Character-by-character reveal of the card description.
//!
//! Runs once the session enters `Revealed`; advances on `tick(dt)` at a
//! fixed cadence and stops exactly at the final character.

/// Seconds per character.
pub const CHAR_DELAY: f32 = 0.04;

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    text: String,
    /// Characters (not bytes) revealed so far.
    shown: usize,
    total: usize,
    timer: f32,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `text` from the first character. Replaces any
    /// in-flight sequence, so a re-initialized session can never end up
    /// with two overlapping reveals. Empty text completes immediately.
    pub fn start(&mut self, text: &str) {
        self.text = text.to_string();
        self.total = text.chars().count();
        self.shown = 0;
        self.timer = 0.0;
    }

    /// Drop any sequence and show nothing.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Advance the reveal. Returns true on the tick that reveals the final
    /// character; after that, ticking is a no-op.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.shown >= self.total {
            return false;
        }
        self.timer += dt;
        while self.timer >= CHAR_DELAY && self.shown < self.total {
            self.timer -= CHAR_DELAY;
            self.shown += 1;
        }
        self.shown >= self.total
    }

    /// The currently visible prefix, on a character boundary.
    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((i, _)) => &self.text[..i],
            None => &self.text,
        }
    }

    /// Characters revealed so far.
    pub fn typed_len(&self) -> usize {
        self.shown
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_every_character_in_order() {
        let mut tw = Typewriter::new();
        tw.start("hello");

        let mut seen = Vec::new();
        for _ in 0..5 {
            tw.tick(CHAR_DELAY);
            seen.push(tw.visible_text().to_string());
        }
        assert_eq!(seen, ["h", "he", "hel", "hell", "hello"]);
        assert!(tw.is_complete());
    }

    #[test]
    fn stops_exactly_at_the_final_character() {
        let mut tw = Typewriter::new();
        tw.start("ab");
        assert!(!tw.tick(CHAR_DELAY));
        assert!(tw.tick(CHAR_DELAY));
        // No trailing tick, no change past the end.
        assert!(!tw.tick(CHAR_DELAY));
        assert!(!tw.tick(10.0));
        assert_eq!(tw.visible_text(), "ab");
        assert_eq!(tw.typed_len(), 2);
    }

    #[test]
    fn empty_text_completes_with_zero_ticks() {
        let mut tw = Typewriter::new();
        tw.start("");
        assert!(tw.is_complete());
        assert!(!tw.tick(CHAR_DELAY));
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.typed_len(), 0);
    }

    #[test]
    fn large_dt_catches_up_without_skipping() {
        let mut tw = Typewriter::new();
        tw.start("abcdef");
        tw.tick(CHAR_DELAY * 3.0);
        assert_eq!(tw.visible_text(), "abc");
        tw.tick(CHAR_DELAY * 100.0);
        assert_eq!(tw.visible_text(), "abcdef");
    }

    #[test]
    fn multibyte_text_stays_on_char_boundaries() {
        let mut tw = Typewriter::new();
        tw.start("héllo 🎁");
        let total = "héllo 🎁".chars().count();
        for i in 1..=total {
            tw.tick(CHAR_DELAY);
            assert_eq!(tw.typed_len(), i);
            // Slicing must never panic mid-codepoint.
            let _ = tw.visible_text();
        }
        assert_eq!(tw.visible_text(), "héllo 🎁");
    }

    #[test]
    fn restart_cancels_the_previous_sequence() {
        let mut tw = Typewriter::new();
        tw.start("first text");
        tw.tick(CHAR_DELAY * 4.0);
        assert_eq!(tw.visible_text(), "firs");

        tw.start("second");
        assert_eq!(tw.visible_text(), "");
        tw.tick(CHAR_DELAY);
        assert_eq!(tw.visible_text(), "s");
    }

    #[test]
    fn clear_shows_nothing() {
        let mut tw = Typewriter::new();
        tw.start("text");
        tw.tick(CHAR_DELAY * 2.0);
        tw.clear();
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.typed_len(), 0);
    }
}
