//! Ordered queue of cards awaiting display.
//!
//! Index 0 is the front: the card nearest the user and the only one that
//! can be dragged. Cards enter at the back and leave from the front.
//!
//! The queue enforces no minimum length. Keeping it at least as long as the
//! visible window is the controller's job.
//!
//! ```
//! use swipe_stack::core::{Card, CardColor, CardId};
//! use swipe_stack::queue::CardQueue;
//!
//! let mut queue = CardQueue::new();
//! queue.push_back(Card::new(CardId::new(1), CardColor::new("#fff"), "Card 1"));
//! queue.push_back(Card::new(CardId::new(2), CardColor::new("#fff"), "Card 2"));
//!
//! assert_eq!(queue.front().map(|c| c.id()), Some(CardId::new(1)));
//! assert_eq!(queue.pop_front().id(), CardId::new(1));
//! assert_eq!(queue.len(), 1);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::CardSupply;
use crate::core::{Card, CardId};

/// FIFO queue of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQueue {
    cards: VecDeque<Card>,
}

impl CardQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue holding `count` cards from `supply`.
    pub fn filled_from<S: CardSupply + ?Sized>(supply: &mut S, count: usize) -> Self {
        let mut queue = Self::new();
        queue.top_up(supply, count);
        queue
    }

    /// Number of cards in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The interactive card, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Up to `n` cards from the front, in display order. Does not mutate.
    pub fn prefix(&self, n: usize) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().take(n)
    }

    /// All cards, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// Append a card at the back.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the front card.
    ///
    /// Panics if the queue is empty. An empty queue at this point means the
    /// replenishment step did not run.
    pub fn pop_front(&mut self) -> Card {
        match self.cards.pop_front() {
            Some(card) => card,
            None => panic!("pop_front on empty card queue: replenishment invariant violated"),
        }
    }

    /// Draw from `supply` until the queue holds at least `min_len` cards.
    ///
    /// Returns how many cards were added.
    pub fn top_up<S: CardSupply + ?Sized>(&mut self, supply: &mut S, min_len: usize) -> usize {
        let mut added = 0;
        while self.cards.len() < min_len {
            self.cards.push_back(supply.next_card());
            added += 1;
        }
        added
    }
}
