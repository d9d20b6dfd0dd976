//! The interactive scratch session for one focused card.
//!
//! Owns everything with a lifetime tied to the focused view: the erasable
//! surface, the gesture tracker, the reveal state machine and the
//! typewriter. Dropping the session (on defocus) abandons all of it,
//! pending countdowns included — no callback can outlive the state it
//! mutates.
//!
//! Control flow: gesture events mutate the surface; gesture end samples
//! coverage and steps the reveal machine; `tick(dt)` drains the reveal
//! countdown and advances the typewriter.

use glam::Vec2;

use crate::api::types::HostEvent;
use crate::components::card::Card;
use crate::components::typewriter::Typewriter;
use crate::core::reveal::{RevealMachine, RevealPhase};
use crate::core::rng::Rng;
use crate::core::surface::ScratchSurface;
use crate::systems::gesture::GestureTracker;

/// Radius of the erase brush, in surface pixels.
pub const BRUSH_RADIUS: f32 = 35.0;

/// Screen-space geometry of the surface's container at initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: u32,
    pub height: u32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

pub struct ScratchSession {
    card: Card,
    /// None until the container has been measured and `initialize` ran.
    surface: Option<ScratchSurface>,
    gesture: GestureTracker,
    reveal: RevealMachine,
    typewriter: Typewriter,
    rng: Rng,
    /// Per-frame events for the host; cleared by `clear_frame_data`.
    events: Vec<HostEvent>,
}

impl ScratchSession {
    pub fn new(card: Card, seed: u64) -> Self {
        Self {
            card,
            surface: None,
            gesture: GestureTracker::new(),
            reveal: RevealMachine::new(),
            typewriter: Typewriter::new(),
            rng: Rng::new(seed),
            events: Vec::new(),
        }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    /// (Re)build the mask at the container's current size and reset the
    /// reveal state. A zero-area rect means the container is not laid out
    /// yet: silent no-op, the host retries on the next focus entry.
    pub fn initialize(&mut self, rect: SurfaceRect) {
        if rect.width == 0 || rect.height == 0 {
            log::debug!("surface init skipped: container not measured yet");
            return;
        }
        self.surface = Some(ScratchSurface::new(
            rect.width,
            rect.height,
            self.card.overlay,
            &mut self.rng,
        ));
        self.gesture = GestureTracker::new();
        self.gesture.set_origin(Vec2::new(rect.left, rect.top));
        self.reveal.reset();
        self.typewriter.clear();
        log::debug!(
            "surface initialized: {}x{} for card {:?}",
            rect.width,
            rect.height,
            self.card.id
        );
    }

    /// Press-start at a screen-space point. No erasure happens until the
    /// first movement sample.
    pub fn begin_gesture(&mut self, _screen: Vec2) {
        if self.surface.is_none() {
            return;
        }
        self.gesture.begin();
    }

    /// Movement sample. Erases one brush circle at the surface-local
    /// position; ignored while no gesture is active.
    pub fn continue_gesture(&mut self, screen: Vec2) {
        if !self.gesture.is_active() {
            return;
        }
        let local = self.gesture.to_local(screen);
        if let Some(surface) = &mut self.surface {
            surface.erase_circle(local, BRUSH_RADIUS);
        }
    }

    /// Press-release or pointer-leave. Samples coverage over the full
    /// buffer and steps the reveal machine; ignored if no gesture was in
    /// progress.
    pub fn end_gesture(&mut self) {
        if !self.gesture.end() {
            return;
        }
        let coverage = self
            .surface
            .as_ref()
            .map(|s| s.coverage_percent())
            .unwrap_or(0.0);
        if self.reveal.observe_coverage(coverage) {
            self.events
                .push(HostEvent::reveal_started(self.card.id, coverage));
        }
    }

    /// Advance time: the reveal countdown, then the typewriter. The
    /// typewriter starts synchronously inside the Revealed transition, so
    /// its first character can never appear before the stat panel mounts.
    pub fn tick(&mut self, dt: f32) {
        if self.reveal.tick(dt) {
            self.typewriter.start(&self.card.description);
            self.events.push(HostEvent::revealed(self.card.id));
            if self.typewriter.is_complete() {
                // Empty description: done before the first tick.
                self.events.push(HostEvent::typing_finished(self.card.id));
            }
        } else if self.reveal.phase() == RevealPhase::Revealed && self.typewriter.tick(dt) {
            self.events.push(HostEvent::typing_finished(self.card.id));
        }
    }

    /// Clear per-frame transient data. Call once at the top of each frame.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    // -- Observables for the host --

    pub fn phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    pub fn coverage_percent(&self) -> f32 {
        self.reveal.coverage_percent()
    }

    pub fn typed_text(&self) -> &str {
        self.typewriter.visible_text()
    }

    /// One-shot flash flag; consumed on read.
    pub fn take_flash(&mut self) -> bool {
        self.reveal.take_flash()
    }

    pub fn surface(&self) -> Option<&ScratchSurface> {
        self.surface.as_ref()
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }
}
