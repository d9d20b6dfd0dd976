//! Seam for the AI metadata collaborator.
//!
//! The card-creation form asks a generator to turn a title into flavor
//! text and a stat block. The engine never performs the call itself; the
//! real implementation lives host-side and only its result flows into a
//! `Card`. `FallbackMetadata` mirrors the defaults used when the call
//! fails or no generator is wired up.

use crate::components::card::{Rarity, StatBlock};

/// Generated flavor text and stats for one card title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMetadata {
    pub description: String,
    pub stats: StatBlock,
}

pub trait MetadataGenerator {
    fn generate(&mut self, title: &str) -> GeneratedMetadata;
}

/// Canned metadata used when no real generator is available.
#[derive(Debug, Default)]
pub struct FallbackMetadata;

impl MetadataGenerator for FallbackMetadata {
    fn generate(&mut self, _title: &str) -> GeneratedMetadata {
        GeneratedMetadata {
            description: "A special surprise just for you, my love.".into(),
            stats: StatBlock {
                hp: 100,
                romance: 100,
                joy: 100,
                rarity: Rarity::Rare,
                catchphrase: "LOVE IS IN THE AIR!".into(),
            },
        }
    }
}
