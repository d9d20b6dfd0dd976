//! The card collection: list/add/remove plus JSON persistence.
//!
//! The host keeps the serialized collection in a durable keyed store under
//! [`STORAGE_KEY`]; this module only handles the in-memory list and the
//! JSON boundary. The scratch session never touches the store directly.

use serde::{Deserialize, Serialize};

use crate::api::types::CardId;
use crate::components::card::{Card, Rarity, StatBlock};

/// Namespace key for the host's keyed store (browser localStorage).
pub const STORAGE_KEY: &str = "scratch_cards_v1";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
    next_id: u32,
}

impl CardCollection {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            next_id: 1,
        }
    }

    /// A collection seeded with one demo card, shown on first launch.
    pub fn with_starter_card() -> Self {
        let mut collection = Self::new();
        let id = collection.next_id();
        collection.add(
            Card::new(
                id,
                "A Secret Getaway",
                "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=800",
            )
            .with_description("To the mountains we go, where the air is sweet and the love is pure.")
            .with_stats(StatBlock {
                hp: 120,
                romance: 850,
                joy: 95,
                rarity: Rarity::Legendary,
                catchphrase: "THE ADVENTURE AWAKENS!".into(),
            }),
        );
        collection
    }

    /// Allocate the next unique card ID.
    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    /// Insert newest-first, so the gallery shows recent cards up front.
    pub fn add(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Remove a card by ID. Returns the removed card if found.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let idx = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(idx))
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Restore from the host's keyed store. `None` (first launch) or a
    /// corrupt payload both degrade to the starter collection.
    pub fn load_or_default(stored: Option<&str>) -> Self {
        match stored {
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                log::warn!("failed to load stored cards: {}", err);
                Self::with_starter_card()
            }),
            None => Self::with_starter_card(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(collection: &mut CardCollection, title: &str) -> CardId {
        let id = collection.next_id();
        collection.add(Card::new(id, title, "data:,"));
        id
    }

    #[test]
    fn add_inserts_newest_first() {
        let mut c = CardCollection::new();
        card(&mut c, "first");
        card(&mut c, "second");
        assert_eq!(c.list()[0].title, "second");
        assert_eq!(c.list()[1].title, "first");
    }

    #[test]
    fn remove_by_id() {
        let mut c = CardCollection::new();
        let a = card(&mut c, "a");
        let b = card(&mut c, "b");
        assert_eq!(c.remove(a).unwrap().title, "a");
        assert_eq!(c.len(), 1);
        assert!(c.get(b).is_some());
        assert!(c.remove(a).is_none());
    }

    #[test]
    fn ids_are_unique_across_removals() {
        let mut c = CardCollection::new();
        let a = card(&mut c, "a");
        c.remove(a);
        let b = card(&mut c, "b");
        assert_ne!(a, b);
    }

    #[test]
    fn json_round_trip_preserves_ids_and_order() {
        let mut c = CardCollection::new();
        card(&mut c, "a");
        card(&mut c, "b");
        let json = c.to_json().unwrap();

        let mut back = CardCollection::from_json(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.list()[0].title, "b");
        // The id counter survives persistence.
        let next = back.next_id();
        assert_eq!(next, CardId(3));
    }

    #[test]
    fn corrupt_storage_falls_back_to_starter() {
        let c = CardCollection::load_or_default(Some("{not json"));
        assert_eq!(c.len(), 1);
        assert_eq!(c.list()[0].title, "A Secret Getaway");
    }

    #[test]
    fn first_launch_gets_the_starter_card() {
        let c = CardCollection::load_or_default(None);
        assert_eq!(c.len(), 1);
        assert!(c.list()[0].stats.is_some());
    }
}
