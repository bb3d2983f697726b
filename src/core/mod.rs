//! Core types: cards, configuration, RNG.
//!
//! Everything the stack machinery builds on. No component in here knows
//! about dragging or swiping.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, CardColor, CardId};
pub use config::{ConfigError, FeedbackConfig, StackConfig, StackLayout};
pub use rng::StackRng;
