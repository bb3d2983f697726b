//! Swipe notifications.
//!
//! A commit produces exactly one [`SwipeCommitted`]. It is returned from
//! the drag-end call and delivered to every registered [`SwipeListener`],
//! synchronously, before the exit phase begins.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::gesture::Direction;

/// A card was committed to a swipe direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwipeCommitted {
    pub direction: Direction,
    pub card_id: CardId,
}

/// Receives swipe notifications.
pub trait SwipeListener {
    fn on_swipe_committed(&mut self, event: &SwipeCommitted);
}

impl<F> SwipeListener for F
where
    F: FnMut(&SwipeCommitted),
{
    fn on_swipe_committed(&mut self, event: &SwipeCommitted) {
        self(event)
    }
}

/// Handle for removing a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Listeners, notified in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Box<dyn SwipeListener>)>,
    next_id: u32,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returns its ID.
    pub fn register(&mut self, listener: Box<dyn SwipeListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if the ID was unknown.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener.
    pub fn notify(&mut self, event: &SwipeCommitted) {
        for (_, listener) in &mut self.listeners {
            listener.on_swipe_committed(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
