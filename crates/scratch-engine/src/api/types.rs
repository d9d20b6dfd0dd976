use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Unique identifier for a card in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// A session event communicated from Rust to the host UI.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Pod layout so the JS bridge can read events as a flat f32 buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct HostEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl HostEvent {
    pub const FLOATS: usize = 4;

    /// Threshold crossed: play the flash beat, fade the foil out.
    pub const REVEAL_STARTED: f32 = 1.0;
    /// Stat panel mounted; the typewriter has been started.
    pub const REVEALED: f32 = 2.0;
    /// The description finished typing out.
    pub const TYPING_FINISHED: f32 = 3.0;

    pub fn reveal_started(card: CardId, coverage: f32) -> Self {
        Self {
            kind: Self::REVEAL_STARTED,
            a: card.0 as f32,
            b: coverage,
            c: 0.0,
        }
    }

    pub fn revealed(card: CardId) -> Self {
        Self {
            kind: Self::REVEALED,
            a: card.0 as f32,
            b: 0.0,
            c: 0.0,
        }
    }

    pub fn typing_finished(card: CardId) -> Self {
        Self {
            kind: Self::TYPING_FINISHED,
            a: card.0 as f32,
            b: 0.0,
            c: 0.0,
        }
    }
}
