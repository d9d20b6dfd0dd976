//! Gesture lifecycle for the scratch interaction.
//!
//! One continuous press-move-release (or press-move-leave) interaction.
//! Screen coordinates map to surface-local space by subtracting the
//! surface's bounding-box origin, captured at initialization.

use glam::Vec2;

/// Tracks whether a gesture is in progress and where the surface sits in
/// screen space. Only one gesture can be active at a time.
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: bool,
    origin: Vec2,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen-space position of the surface's top-left corner.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Press-start. The gesture stays active until `end`.
    pub fn begin(&mut self) {
        self.active = true;
    }

    /// Press-release or pointer-leave. Returns true if a gesture was
    /// actually in progress (the caller samples coverage only then).
    pub fn end(&mut self) -> bool {
        std::mem::take(&mut self.active)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Map a screen-space point into surface-local coordinates.
    pub fn to_local(&self, screen: Vec2) -> Vec2 {
        screen - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut g = GestureTracker::new();
        assert!(!g.is_active());
        g.begin();
        assert!(g.is_active());
        assert!(g.end());
        assert!(!g.is_active());
    }

    #[test]
    fn end_without_begin_reports_no_gesture() {
        let mut g = GestureTracker::new();
        assert!(!g.end());
        // A release after a leave already ended the gesture: same answer.
        g.begin();
        assert!(g.end());
        assert!(!g.end());
    }

    #[test]
    fn maps_screen_to_local() {
        let mut g = GestureTracker::new();
        g.set_origin(Vec2::new(10.0, 20.0));
        let local = g.to_local(Vec2::new(110.0, 120.0));
        assert_eq!(local, Vec2::new(100.0, 100.0));
    }
}
