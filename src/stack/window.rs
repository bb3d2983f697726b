//! Visible window projection.
//!
//! The window is the front `visible_count` cards of the queue, each tagged
//! with its depth. Depth 0 is the front card and the only one that may
//! accept a drag; higher depths sit farther back.
//!
//! Projection is a pure function of the queue, so the window is recomputed
//! on demand instead of being cached between events.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, StackLayout};
use crate::queue::CardQueue;

/// Presentation parameters for one depth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotStyle {
    pub x_offset: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl SlotStyle {
    /// Style for a depth. Scale and opacity never drop below zero.
    #[must_use]
    pub fn for_depth(depth: usize, layout: &StackLayout) -> Self {
        let d = depth as f64;
        Self {
            x_offset: d * layout.offset_step,
            scale: (1.0 - d * layout.scale_step).max(0.0),
            opacity: (1.0 - d * layout.opacity_step).max(0.0),
        }
    }
}

/// One card in the visible window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSlot {
    pub card: Card,

    /// Position in the window (0 = front).
    pub depth: usize,

    /// Stacking order; higher paints on top.
    pub z_order: usize,

    /// Whether this slot accepts drag input right now.
    pub interactive: bool,

    pub style: SlotStyle,
}

/// Cards to display, front first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Window {
    slots: SmallVec<[WindowSlot; 4]>,
}

impl Window {
    /// Slots front to back.
    #[must_use]
    pub fn slots(&self) -> &[WindowSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The depth-0 slot.
    #[must_use]
    pub fn front(&self) -> Option<&WindowSlot> {
        self.slots.first()
    }

    /// Slots back to front, the order a painter draws them.
    pub fn paint_order(&self) -> impl Iterator<Item = &WindowSlot> + '_ {
        self.slots.iter().rev()
    }
}

/// Project the visible window from the queue.
///
/// `front_interactive` is false while a swipe is exiting, which keeps the
/// new front card inert until the exit settles.
#[must_use]
pub fn project(
    queue: &CardQueue,
    visible_count: usize,
    layout: &StackLayout,
    front_interactive: bool,
) -> Window {
    let slots = queue
        .prefix(visible_count)
        .enumerate()
        .map(|(depth, card)| WindowSlot {
            card: card.clone(),
            depth,
            z_order: visible_count - depth,
            interactive: depth == 0 && front_interactive,
            style: SlotStyle::for_depth(depth, layout),
        })
        .collect();

    Window { slots }
}
