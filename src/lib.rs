//! # swipe-stack
//!
//! A swipeable card stack: a bounded window of overlapping cards where the
//! front card can be dragged and, past a distance threshold, committed to
//! a swipe direction, removed, and replaced from a card supply.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The crate never paints. Renderers report drag
//!    offsets and animation completion, and pull the window to draw.
//!
//! 2. **One Card In Flight**: A committed card stays in an exit phase until
//!    the renderer settles it. No drag can start in the meantime.
//!
//! 3. **Commit Is Immediate**: Queue mutation and notification happen at
//!    drag end. Only the visual exit is deferred.
//!
//! ## Modules
//!
//! - `core`: Cards, ids, configuration, seeded RNG
//! - `cards`: Card supplies
//! - `queue`: The card queue
//! - `gesture`: Drag sessions, feedback and swipe classification
//! - `stack`: Swipe controller, window projection, notifications

pub mod core;
pub mod cards;
pub mod queue;
pub mod gesture;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{
    Card, CardColor, CardId,
    ConfigError, FeedbackConfig, StackConfig, StackLayout,
    StackRng,
};

pub use crate::cards::{CardSupply, RandomSupply, SequentialSupply};

pub use crate::queue::CardQueue;

pub use crate::gesture::{classify, Direction, DragFeedback, DragOffset, DragSession, SwipeLabel};

pub use crate::stack::{
    ActiveSwipe, DragEndOutcome, DragStartOutcome, IgnoredReason, SettleOutcome,
    SwipeCommitted, SwipeController, SwipeListener, SwipeState, SwipeStats,
    Window, WindowSlot, project,
};
