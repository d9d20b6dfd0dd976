//! `#[wasm_bindgen]` surface for the scratch-card gallery.
//!
//! The JS side drives the loop: it forwards pointer events and layout
//! rects in, calls `gallery_tick(dt)` once per animation frame, then reads
//! the observable state back (mask bytes for the canvas blit, reveal
//! phase, coverage, typed text, session events).

pub mod runner;

pub use runner::SessionRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use scratch_engine::{Card, CardId, InputEvent};

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Gallery not initialized. Call gallery_init() first.");
        f(runner)
    })
}

/// Initialize the gallery. `stored` is the payload previously persisted
/// under [`scratch_engine::STORAGE_KEY`], if any.
#[wasm_bindgen]
pub fn gallery_init(stored: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    let mut runner = SessionRunner::new(seed);
    runner.load_collection(stored.as_deref());

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("scratch gallery: initialized");
}

#[wasm_bindgen]
pub fn gallery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input handlers ----

#[wasm_bindgen]
pub fn gallery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn gallery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn gallery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn gallery_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

// ---- Focus flow ----

/// Screen-space rect of the focused card's container (from
/// getBoundingClientRect), updated whenever layout changes.
#[wasm_bindgen]
pub fn gallery_set_viewport(left: f32, top: f32, width: u32, height: u32) {
    with_runner(|r| r.set_viewport(left, top, width, height));
}

#[wasm_bindgen]
pub fn gallery_focus_card(id: u32) -> bool {
    with_runner(|r| r.focus_card(CardId(id)))
}

#[wasm_bindgen]
pub fn gallery_blur() {
    with_runner(|r| r.blur());
}

// ---- Collection passthrough ----

#[wasm_bindgen]
pub fn gallery_collection_json() -> String {
    with_runner(|r| r.collection_json())
}

#[wasm_bindgen]
pub fn gallery_storage_key() -> String {
    scratch_engine::STORAGE_KEY.to_string()
}

/// Add a card from the creation form. Returns the assigned id, or u32::MAX
/// if the payload did not parse.
#[wasm_bindgen]
pub fn gallery_add_card(json: &str) -> u32 {
    match Card::from_json(json) {
        Ok(card) => with_runner(|r| r.add_card(card)).0,
        Err(err) => {
            log::warn!("rejected card payload: {}", err);
            u32::MAX
        }
    }
}

#[wasm_bindgen]
pub fn gallery_remove_card(id: u32) {
    with_runner(|r| r.remove_card(CardId(id)));
}

// ---- Observable state ----

/// 0 = Hidden, 1 = Revealing, 2 = Revealed.
#[wasm_bindgen]
pub fn get_reveal_phase() -> u32 {
    with_runner(|r| r.phase_code())
}

#[wasm_bindgen]
pub fn get_coverage_percent() -> f32 {
    with_runner(|r| r.coverage_percent())
}

/// One-shot flash flag for the reveal beat; consumed on read.
#[wasm_bindgen]
pub fn take_flash() -> bool {
    with_runner(|r| r.take_flash())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_mask_ptr() -> *const u8 {
    with_runner(|r| r.mask_ptr())
}

#[wasm_bindgen]
pub fn get_mask_len() -> u32 {
    with_runner(|r| r.mask_len())
}

#[wasm_bindgen]
pub fn get_surface_width() -> u32 {
    with_runner(|r| r.surface_width())
}

#[wasm_bindgen]
pub fn get_surface_height() -> u32 {
    with_runner(|r| r.surface_height())
}

#[wasm_bindgen]
pub fn get_typed_text_ptr() -> *const u8 {
    with_runner(|r| r.typed_text_ptr())
}

#[wasm_bindgen]
pub fn get_typed_text_len() -> u32 {
    with_runner(|r| r.typed_text_len())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}
