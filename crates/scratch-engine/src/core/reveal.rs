//! Reveal state machine for one scratch session.
//!
//! `Hidden -> Revealing -> Revealed`, strictly one-way. Coverage is sampled
//! at gesture-end only; crossing the threshold arms a fixed countdown whose
//! expiry mounts the stat panel (the `Revealed` transition).

/// Coverage (percent of fully-transparent pixels) that triggers the reveal.
/// A fixed design constant, not reconfigurable.
pub const COVERAGE_THRESHOLD: f32 = 55.0;
/// Seconds between entering `Revealing` and entering `Revealed`.
/// Pure UX pacing: lets the flash beat read before the stat overlay mounts.
pub const REVEAL_DELAY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// The foil is intact (or not yet scratched past the threshold).
    #[default]
    Hidden,
    /// Threshold crossed: flash plays, foil fades, countdown running.
    Revealing,
    /// Stat panel mounted, typewriter running or done.
    Revealed,
}

impl RevealPhase {
    /// Stable numeric code for the host bridge.
    pub fn code(self) -> u32 {
        match self {
            RevealPhase::Hidden => 0,
            RevealPhase::Revealing => 1,
            RevealPhase::Revealed => 2,
        }
    }
}

#[derive(Debug, Default)]
pub struct RevealMachine {
    phase: RevealPhase,
    coverage: f32,
    countdown: f32,
    flash: bool,
}

impl RevealMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Most recent gesture-end coverage sample, percent [0, 100].
    pub fn coverage_percent(&self) -> f32 {
        self.coverage
    }

    /// One-shot flash flag, set on entering `Revealing`. Reading consumes it.
    pub fn take_flash(&mut self) -> bool {
        std::mem::take(&mut self.flash)
    }

    /// Record a gesture-end coverage sample. Returns true if this sample
    /// entered `Revealing`. Once past `Hidden`, later samples still update
    /// the reported coverage but can never re-trigger or cancel the reveal.
    pub fn observe_coverage(&mut self, percent: f32) -> bool {
        self.coverage = percent;
        if self.phase == RevealPhase::Hidden && percent > COVERAGE_THRESHOLD {
            self.phase = RevealPhase::Revealing;
            self.countdown = REVEAL_DELAY;
            self.flash = true;
            log::info!("reveal triggered at {:.1}% coverage", percent);
            return true;
        }
        false
    }

    /// Advance the countdown. Returns true exactly once, on the tick that
    /// enters `Revealed`.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.phase != RevealPhase::Revealing {
            return false;
        }
        self.countdown -= dt;
        if self.countdown <= 0.0 {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Back to `Hidden` with zero coverage. Used when the surface is
    /// re-initialized; abandons any pending countdown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_triggers_exactly_once() {
        let mut m = RevealMachine::new();
        assert!(!m.observe_coverage(40.0));
        assert_eq!(m.phase(), RevealPhase::Hidden);

        assert!(m.observe_coverage(60.0));
        assert_eq!(m.phase(), RevealPhase::Revealing);

        // Further samples update coverage but never re-trigger.
        assert!(!m.observe_coverage(80.0));
        assert_eq!(m.coverage_percent(), 80.0);
        assert_eq!(m.phase(), RevealPhase::Revealing);

        m.tick(REVEAL_DELAY);
        assert_eq!(m.phase(), RevealPhase::Revealed);
        assert!(!m.observe_coverage(99.0));
        assert_eq!(m.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn threshold_is_strict() {
        let mut m = RevealMachine::new();
        assert!(!m.observe_coverage(55.0));
        assert_eq!(m.phase(), RevealPhase::Hidden);
        assert!(m.observe_coverage(55.01));
    }

    #[test]
    fn revealed_waits_for_the_full_delay() {
        let mut m = RevealMachine::new();
        m.observe_coverage(70.0);

        assert!(!m.tick(0.5));
        assert_eq!(m.phase(), RevealPhase::Revealing);
        assert!(!m.tick(0.4));
        assert!(m.tick(0.2));
        assert_eq!(m.phase(), RevealPhase::Revealed);

        // Entered exactly once.
        assert!(!m.tick(1.0));
    }

    #[test]
    fn tick_is_a_no_op_while_hidden() {
        let mut m = RevealMachine::new();
        assert!(!m.tick(10.0));
        assert_eq!(m.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn flash_is_one_shot() {
        let mut m = RevealMachine::new();
        assert!(!m.take_flash());
        m.observe_coverage(70.0);
        assert!(m.take_flash());
        assert!(!m.take_flash());
    }

    #[test]
    fn reset_returns_to_hidden() {
        let mut m = RevealMachine::new();
        m.observe_coverage(70.0);
        m.tick(REVEAL_DELAY);
        m.reset();
        assert_eq!(m.phase(), RevealPhase::Hidden);
        assert_eq!(m.coverage_percent(), 0.0);
        // The abandoned countdown must not fire after reset.
        assert!(!m.tick(REVEAL_DELAY));
        assert_eq!(m.phase(), RevealPhase::Hidden);
    }
}
