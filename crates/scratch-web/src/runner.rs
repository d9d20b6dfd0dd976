use glam::Vec2;
use scratch_engine::{
    Card, CardCollection, CardId, InputEvent, InputQueue, RevealPhase, ScratchSession,
    SurfaceRect,
};

/// Seconds between focusing a card and sizing its surface, so the layout
/// can settle before the container is measured.
const FOCUS_SETTLE_DELAY: f32 = 0.05;

/// Owns the gallery state on the Rust side of the bridge: the card
/// collection, the focused card's scratch session (if any), and the input
/// queue JS writes into.
///
/// The JS side exports free functions via `#[wasm_bindgen]` backed by a
/// `thread_local!` runner, and blits the mask buffer through the raw
/// pointer accessors each frame.
pub struct SessionRunner {
    collection: CardCollection,
    session: Option<ScratchSession>,
    input: InputQueue,
    /// Screen-space rect of the focused card's container, updated by the
    /// host whenever layout changes.
    viewport: SurfaceRect,
    /// Countdown to the deferred surface (re)initialization.
    pending_init: Option<f32>,
    seed: u64,
    focus_count: u64,
}

impl SessionRunner {
    pub fn new(seed: u64) -> Self {
        Self {
            collection: CardCollection::with_starter_card(),
            session: None,
            input: InputQueue::new(),
            viewport: SurfaceRect::default(),
            pending_init: None,
            seed,
            focus_count: 0,
        }
    }

    // -- Collection passthrough --

    /// Restore the collection from the host's keyed store payload.
    pub fn load_collection(&mut self, stored: Option<&str>) {
        self.collection = CardCollection::load_or_default(stored);
        log::info!("collection loaded: {} cards", self.collection.len());
    }

    pub fn collection(&self) -> &CardCollection {
        &self.collection
    }

    pub fn collection_json(&self) -> String {
        self.collection.to_json().unwrap_or_else(|err| {
            log::error!("collection serialization failed: {}", err);
            String::new()
        })
    }

    /// Add a card built by the host form. Returns its assigned ID.
    pub fn add_card(&mut self, card: Card) -> CardId {
        let id = self.collection.next_id();
        self.collection.add(Card { id, ..card });
        id
    }

    pub fn remove_card(&mut self, id: CardId) {
        // Deleting the focused card tears its session down with it.
        if self.session.as_ref().map(|s| s.card().id) == Some(id) {
            self.blur();
        }
        self.collection.remove(id);
    }

    // -- Focus flow --

    /// Container geometry for the focused card's surface.
    pub fn set_viewport(&mut self, left: f32, top: f32, width: u32, height: u32) {
        self.viewport = SurfaceRect::new(left, top, width, height);
    }

    /// Focus a card: create its session and arm the deferred surface init.
    /// Returns false if the card does not exist.
    pub fn focus_card(&mut self, id: CardId) -> bool {
        let Some(card) = self.collection.get(id) else {
            return false;
        };
        self.focus_count += 1;
        let seed = self.seed.wrapping_add(self.focus_count);
        self.session = Some(ScratchSession::new(card.clone(), seed));
        self.pending_init = Some(FOCUS_SETTLE_DELAY);
        log::info!("focused card {:?}", id);
        true
    }

    /// Drop the focused session. Its surface, reveal countdown and
    /// typewriter go with it, so nothing stale can fire later.
    pub fn blur(&mut self) {
        self.session = None;
        self.pending_init = None;
        self.input.drain();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: deferred init, input routing, time advancement.
    pub fn tick(&mut self, dt: f32) {
        let Some(session) = &mut self.session else {
            self.input.drain();
            return;
        };
        session.clear_frame_data();

        if let Some(remaining) = self.pending_init {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.pending_init = None;
                session.initialize(self.viewport);
            } else {
                self.pending_init = Some(remaining);
            }
        }

        for event in self.input.drain() {
            match event {
                InputEvent::PointerDown { x, y } => session.begin_gesture(Vec2::new(x, y)),
                InputEvent::PointerMove { x, y } => session.continue_gesture(Vec2::new(x, y)),
                InputEvent::PointerUp { .. } | InputEvent::PointerLeave => session.end_gesture(),
            }
        }

        session.tick(dt);
    }

    // -- Observable state for the JS side --

    pub fn session(&self) -> Option<&ScratchSession> {
        self.session.as_ref()
    }

    pub fn phase_code(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.phase().code())
            .unwrap_or(RevealPhase::Hidden.code())
    }

    pub fn coverage_percent(&self) -> f32 {
        self.session
            .as_ref()
            .map(|s| s.coverage_percent())
            .unwrap_or(0.0)
    }

    pub fn take_flash(&mut self) -> bool {
        self.session
            .as_mut()
            .map(|s| s.take_flash())
            .unwrap_or(false)
    }

    // -- Pointer accessors for flat-buffer reads --

    pub fn mask_ptr(&self) -> *const u8 {
        self.session
            .as_ref()
            .and_then(|s| s.surface())
            .map(|surface| surface.data().as_ptr())
            .unwrap_or(std::ptr::null())
    }

    pub fn mask_len(&self) -> u32 {
        self.session
            .as_ref()
            .and_then(|s| s.surface())
            .map(|surface| surface.data().len() as u32)
            .unwrap_or(0)
    }

    pub fn surface_width(&self) -> u32 {
        self.session
            .as_ref()
            .and_then(|s| s.surface())
            .map(|surface| surface.width())
            .unwrap_or(0)
    }

    pub fn surface_height(&self) -> u32 {
        self.session
            .as_ref()
            .and_then(|s| s.surface())
            .map(|surface| surface.height())
            .unwrap_or(0)
    }

    pub fn typed_text_ptr(&self) -> *const u8 {
        self.session
            .as_ref()
            .map(|s| s.typed_text().as_ptr())
            .unwrap_or(std::ptr::null())
    }

    pub fn typed_text_len(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.typed_text().len() as u32)
            .unwrap_or(0)
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.session
            .as_ref()
            .map(|s| s.events().as_ptr() as *const f32)
            .unwrap_or(std::ptr::null())
    }

    pub fn events_len(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| s.events().len() as u32)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> SessionRunner {
        SessionRunner::new(42)
    }

    fn starter_id(r: &SessionRunner) -> CardId {
        r.collection().list()[0].id
    }

    #[test]
    fn focus_defers_surface_init_until_layout_settles() {
        let mut r = runner();
        let id = starter_id(&r);
        r.set_viewport(0.0, 0.0, 400, 500);
        assert!(r.focus_card(id));

        // Before the settle delay the surface does not exist yet.
        r.tick(0.016);
        assert_eq!(r.surface_width(), 0);

        r.tick(FOCUS_SETTLE_DELAY);
        assert_eq!(r.surface_width(), 400);
        assert_eq!(r.surface_height(), 500);
        assert_eq!(r.mask_len(), 400 * 500 * 4);
    }

    #[test]
    fn unmeasured_viewport_retries_on_refocus() {
        let mut r = runner();
        let id = starter_id(&r);
        assert!(r.focus_card(id));
        r.tick(FOCUS_SETTLE_DELAY);
        // Container was never measured: init was a silent no-op.
        assert_eq!(r.surface_width(), 0);

        r.set_viewport(0.0, 0.0, 300, 400);
        assert!(r.focus_card(id));
        r.tick(FOCUS_SETTLE_DELAY);
        assert_eq!(r.surface_width(), 300);
    }

    #[test]
    fn input_routes_into_the_focused_session() {
        let mut r = runner();
        let id = starter_id(&r);
        r.set_viewport(10.0, 10.0, 400, 500);
        r.focus_card(id);
        r.tick(FOCUS_SETTLE_DELAY);

        r.push_input(InputEvent::PointerDown { x: 200.0, y: 200.0 });
        r.push_input(InputEvent::PointerMove { x: 200.0, y: 200.0 });
        r.push_input(InputEvent::PointerUp { x: 200.0, y: 200.0 });
        r.tick(0.016);

        let surface = r.session().unwrap().surface().unwrap();
        // Screen (200, 200) - viewport origin (10, 10) = local (190, 190).
        assert_eq!(surface.alpha_at(190, 190), 0);
        assert!(r.coverage_percent() > 0.0);
    }

    #[test]
    fn input_without_focus_is_dropped() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        r.tick(0.016);
        assert_eq!(r.phase_code(), 0);
        assert!(r.mask_ptr().is_null());
    }

    #[test]
    fn blur_tears_the_session_down() {
        let mut r = runner();
        let id = starter_id(&r);
        r.set_viewport(0.0, 0.0, 400, 500);
        r.focus_card(id);
        r.tick(FOCUS_SETTLE_DELAY);
        assert!(r.session().is_some());

        r.blur();
        assert!(r.session().is_none());
        assert_eq!(r.mask_len(), 0);
        // Pending timers died with the session.
        r.tick(10.0);
        assert_eq!(r.phase_code(), 0);
    }

    #[test]
    fn deleting_the_focused_card_blurs_first() {
        let mut r = runner();
        let id = starter_id(&r);
        r.set_viewport(0.0, 0.0, 400, 500);
        r.focus_card(id);
        r.remove_card(id);
        assert!(r.session().is_none());
        assert!(r.collection().is_empty());
    }

    #[test]
    fn add_card_assigns_a_fresh_id() {
        let mut r = runner();
        let card = Card::new(CardId(0), "Moonlight Picnic", "data:,");
        let id = r.add_card(card);
        assert_ne!(id, starter_id(&r));
        let added = r.collection().get(id).unwrap();
        assert_eq!(added.title, "Moonlight Picnic");
        // Newest first.
        assert_eq!(r.collection().list()[0].id, id);
    }

    #[test]
    fn collection_json_round_trips_through_the_store() {
        let mut r = runner();
        let json = r.collection_json();
        assert!(!json.is_empty());
        let mut other = runner();
        other.load_collection(Some(&json));
        assert_eq!(other.collection().len(), r.collection().len());
    }
}
