pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod input;
pub mod store;

// Re-export key types at crate root for convenience
pub use api::session::{ScratchSession, SurfaceRect, BRUSH_RADIUS};
pub use api::types::{CardId, HostEvent};
pub use components::card::{Card, OverlayTone, Rarity, StatBlock};
pub use components::typewriter::{Typewriter, CHAR_DELAY};
pub use core::reveal::{RevealMachine, RevealPhase, COVERAGE_THRESHOLD, REVEAL_DELAY};
pub use core::rng::Rng;
pub use core::surface::ScratchSurface;
pub use input::queue::{InputEvent, InputQueue};
pub use store::collection::{CardCollection, STORAGE_KEY};
pub use store::generator::{FallbackMetadata, GeneratedMetadata, MetadataGenerator};
pub use systems::gesture::GestureTracker;
