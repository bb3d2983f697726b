//! Gesture handling: drag sessions and swipe classification.
//!
//! ## Key Types
//!
//! - `DragOffset`: displacement from drag start (+y is down)
//! - `Direction`: the four committed swipe directions
//! - `classify`: pure offset-to-direction mapping
//! - `DragSession`: the drag currently in progress
//! - `DragFeedback`: tilt and label for live rendering

pub mod classifier;
pub mod session;

pub use classifier::{classify, classify_angle, Direction, DragOffset};
pub use session::{DragFeedback, DragSession, SwipeLabel};
