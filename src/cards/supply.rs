//! Card supply: produces new cards on demand.
//!
//! A supply owns the id counter. Every call to `next_card` consumes one id,
//! so ids are strictly increasing and never reused within one supply.
//!
//! Two implementations:
//! - [`RandomSupply`]: palette color picked by a seeded [`StackRng`]
//! - [`SequentialSupply`]: fixed color, for deterministic tests
//!
//! ```
//! use swipe_stack::cards::{CardSupply, SequentialSupply};
//! use swipe_stack::core::CardId;
//!
//! let mut supply = SequentialSupply::new(CardId::new(1));
//! assert_eq!(supply.next_card().id(), CardId::new(1));
//! assert_eq!(supply.next_card().id(), CardId::new(2));
//! assert_eq!(supply.peek_next_id(), CardId::new(3));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardColor, CardId, StackRng};

/// Default card palette.
pub const PALETTE: [&str; 6] = [
    "#FF6B6B", "#6BCBFF", "#B6FF6B", "#FFD700", "#FF8C00", "#ADFF2F",
];

/// Source of new cards.
pub trait CardSupply {
    /// Produce the next card. Always succeeds.
    fn next_card(&mut self) -> Card;

    /// The id the next call to `next_card` will assign.
    fn peek_next_id(&self) -> CardId;
}

/// Strictly increasing id allocator shared by the supplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounter {
    next: CardId,
}

impl IdCounter {
    /// Start counting at `first`.
    #[must_use]
    pub const fn starting_at(first: CardId) -> Self {
        Self { next: first }
    }

    /// Allocate an id.
    pub fn allocate(&mut self) -> CardId {
        let id = self.next;
        self.next = id.next();
        id
    }

    #[must_use]
    pub const fn peek(&self) -> CardId {
        self.next
    }
}

fn card_text(id: CardId) -> String {
    format!("Card {}", id.raw())
}

/// Supply that picks a random palette color per card.
#[derive(Clone, Debug)]
pub struct RandomSupply {
    ids: IdCounter,
    rng: StackRng,
    palette: Vec<CardColor>,
}

impl RandomSupply {
    /// Create a supply using the default palette.
    pub fn new(first: CardId, seed: u64) -> Self {
        Self::with_palette(first, seed, PALETTE.iter().map(|&c| CardColor::new(c)).collect())
    }

    /// Create a supply with a custom palette.
    ///
    /// Panics if the palette is empty.
    pub fn with_palette(first: CardId, seed: u64, palette: Vec<CardColor>) -> Self {
        assert!(!palette.is_empty(), "Card palette must not be empty");
        Self {
            ids: IdCounter::starting_at(first),
            rng: StackRng::new(seed),
            palette,
        }
    }

    /// Colors this supply picks from.
    #[must_use]
    pub fn palette(&self) -> &[CardColor] {
        &self.palette
    }
}

impl CardSupply for RandomSupply {
    fn next_card(&mut self) -> Card {
        let id = self.ids.allocate();
        let color = match self.rng.pick_color(&self.palette) {
            Some(color) => color.clone(),
            None => panic!("Card palette must not be empty"),
        };
        Card::new(id, color, card_text(id))
    }

    fn peek_next_id(&self) -> CardId {
        self.ids.peek()
    }
}

/// Deterministic supply: sequential ids, one fixed color.
#[derive(Clone, Debug)]
pub struct SequentialSupply {
    ids: IdCounter,
    color: CardColor,
}

impl SequentialSupply {
    /// Create a supply using the first palette color.
    pub fn new(first: CardId) -> Self {
        Self::with_color(first, CardColor::new(PALETTE[0]))
    }

    pub fn with_color(first: CardId, color: CardColor) -> Self {
        Self {
            ids: IdCounter::starting_at(first),
            color,
        }
    }
}

impl CardSupply for SequentialSupply {
    fn next_card(&mut self) -> Card {
        let id = self.ids.allocate();
        Card::new(id, self.color.clone(), card_text(id))
    }

    fn peek_next_id(&self) -> CardId {
        self.ids.peek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_counter() {
        let mut ids = IdCounter::starting_at(CardId::new(11));
        assert_eq!(ids.allocate(), CardId::new(11));
        assert_eq!(ids.allocate(), CardId::new(12));
        assert_eq!(ids.peek(), CardId::new(13));
    }

    #[test]
    fn test_sequential_supply() {
        let mut supply = SequentialSupply::with_color(CardId::new(5), CardColor::new("#000"));
        let card = supply.next_card();

        assert_eq!(card.id(), CardId::new(5));
        assert_eq!(card.color().as_str(), "#000");
        assert_eq!(card.text(), "Card 5");
        assert_eq!(supply.peek_next_id(), CardId::new(6));
    }

    #[test]
    fn test_random_supply_uses_palette() {
        let mut supply = RandomSupply::new(CardId::new(1), 42);
        for _ in 0..50 {
            let card = supply.next_card();
            assert!(PALETTE.contains(&card.color().as_str()));
        }
        assert_eq!(supply.peek_next_id(), CardId::new(51));
    }

    #[test]
    fn test_random_supply_deterministic() {
        let mut a = RandomSupply::new(CardId::new(1), 99);
        let mut b = RandomSupply::new(CardId::new(1), 99);
        for _ in 0..20 {
            assert_eq!(a.next_card(), b.next_card());
        }
    }

    #[test]
    fn test_random_supply_custom_palette() {
        let mut supply =
            RandomSupply::with_palette(CardId::new(1), 1, vec![CardColor::new("red")]);
        assert_eq!(supply.palette().len(), 1);
        assert_eq!(supply.next_card().color().as_str(), "red");
    }

    #[test]
    fn test_random_supply_card_content() {
        let mut supply = RandomSupply::new(CardId::new(40), 5);
        let colors: Vec<_> = (0..60)
            .map(|_| {
                let card = supply.next_card();
                assert_eq!(card.text(), format!("Card {}", card.id().raw()));
                card.color().clone()
            })
            .collect();

        // Colors vary per card, not per supply
        assert!(colors.iter().any(|c| c != &colors[0]));
    }

    #[test]
    #[should_panic(expected = "palette must not be empty")]
    fn test_empty_palette_panics() {
        RandomSupply::with_palette(CardId::new(1), 1, Vec::new());
    }

    #[test]
    fn test_ids_strictly_increasing() {
        let mut supply = RandomSupply::new(CardId::new(1), 3);
        let ids: Vec<_> = (0..100).map(|_| supply.next_card().id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
