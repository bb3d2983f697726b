//! Card queue.
//!
//! Display order equals insertion order. The front card is interactive;
//! the rest wait behind it.

pub mod card_queue;

pub use card_queue::CardQueue;
