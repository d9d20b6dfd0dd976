//! Card data model: the content hidden under the foil.
//!
//! Cards are owned by the collection store; the scratch session only ever
//! reads them (description, stats) once a card is focused.

use serde::{Deserialize, Serialize};

use crate::api::types::CardId;

/// Card rarity ladder, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Self::Common,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythical,
    ];
}

/// Base tone of the unscratched foil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayTone {
    /// Classic metallic grey (#b0b0b0).
    #[default]
    Silver,
    /// #d4af37
    Gold,
    /// #ff4d6d
    Rose,
    /// #c9184a
    Heart,
}

impl OverlayTone {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            OverlayTone::Silver => [0xb0, 0xb0, 0xb0],
            OverlayTone::Gold => [0xd4, 0xaf, 0x37],
            OverlayTone::Rose => [0xff, 0x4d, 0x6d],
            OverlayTone::Heart => [0xc9, 0x18, 0x4a],
        }
    }
}

/// Game-like metadata shown on the stat panel. Immutable once attached;
/// filled in manually or by the metadata generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub romance: u32,
    /// Percent, 1-100.
    pub joy: u32,
    pub rarity: Rarity,
    pub catchphrase: String,
}

/// One gift card in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    /// Data URL or remote URL; the host renders it, the engine never loads it.
    pub image_url: String,
    pub description: String,
    /// Milliseconds since epoch, supplied by the host.
    pub created_at: u64,
    #[serde(default)]
    pub overlay: OverlayTone,
    #[serde(default)]
    pub stats: Option<StatBlock>,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
            description: String::new(),
            created_at: 0,
            overlay: OverlayTone::default(),
            stats: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_created_at(mut self, millis: u64) -> Self {
        self.created_at = millis;
        self
    }

    pub fn with_overlay(mut self, tone: OverlayTone) -> Self {
        self.overlay = tone;
        self
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Parse a card from a JSON string (the shape the creation form emits).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
