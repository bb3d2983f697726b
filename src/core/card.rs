//! Card identity and content.
//!
//! A `Card` is immutable once created. Identity is the `CardId`; the color
//! and text are decorative payload that the stack never interprets.
//!
//! ```
//! use swipe_stack::core::{Card, CardColor, CardId};
//!
//! let card = Card::new(CardId::new(7), CardColor::new("#FFD700"), "Card 7");
//! assert_eq!(card.id().raw(), 7);
//! assert_eq!(card.text(), "Card 7");
//! ```

use serde::{Deserialize, Serialize};

/// Unique, monotonically assigned card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The ID that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque color token handed to the renderer (e.g. `"#FF6B6B"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardColor(String);

impl CardColor {
    /// Create a color token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card in the stack.
///
/// Fields are private so a card cannot change after the supply creates it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    color: CardColor,
    text: String,
}

impl Card {
    /// Create a new card.
    pub fn new(id: CardId, color: CardColor, text: impl Into<String>) -> Self {
        Self {
            id,
            color,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> &CardColor {
        &self.color
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
