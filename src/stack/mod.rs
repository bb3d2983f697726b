//! The swipe stack.
//!
//! - [`SwipeController`]: the Idle / Dragging / Exiting state machine
//! - [`project`]: visible window derived from the queue
//! - [`SwipeListener`]: commit notifications
//! - [`SwipeStats`]: counters for diagnostics
//!
//! ## Example Usage
//!
//! ```
//! use swipe_stack::core::StackConfig;
//! use swipe_stack::gesture::DragOffset;
//! use swipe_stack::stack::{SwipeCommitted, SwipeController, SwipeState};
//!
//! let mut stack = SwipeController::new(StackConfig::default()).unwrap();
//! stack.subscribe(|event: &SwipeCommitted| {
//!     println!("swiped {} {}", event.direction, event.card_id);
//! });
//!
//! stack.drag_start(DragOffset::ZERO);
//! stack.drag_update(DragOffset::new(80.0, 0.0));
//! stack.drag_end(DragOffset::new(-140.0, 10.0));
//! assert_eq!(stack.state(), SwipeState::Exiting);
//!
//! // Renderer reports the exit animation finished
//! stack.exit_complete();
//! assert_eq!(stack.current_window().len(), 3);
//! ```

mod controller;
mod events;
mod stats;
mod window;

pub use controller::{
    ActiveSwipe, DragEndOutcome, DragStartOutcome, IgnoredReason, SettleOutcome,
    SwipeController, SwipeState,
};
pub use events::{ListenerId, ListenerRegistry, SwipeCommitted, SwipeListener};
pub use stats::SwipeStats;
pub use window::{project, SlotStyle, Window, WindowSlot};
