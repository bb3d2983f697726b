//! Card creation.
//!
//! The stack never builds cards itself; it asks a [`CardSupply`]. Swapping
//! the supply is how tests get deterministic content.

pub mod supply;

pub use supply::{CardSupply, IdCounter, RandomSupply, SequentialSupply, PALETTE};
