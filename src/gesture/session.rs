//! Drag sessions and live feedback.
//!
//! A `DragSession` exists only while the front card is held. Updates are
//! for the renderer: they report a tilt and an optional label but never
//! change the stack.

use serde::{Deserialize, Serialize};

use super::classifier::DragOffset;
use crate::core::{CardId, FeedbackConfig};

/// Label shown on the card while it is dragged far enough sideways.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeLabel {
    /// Dragging right.
    Match,
    /// Dragging left.
    Nope,
}

/// What the renderer should show for the current drag position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragFeedback {
    pub offset: DragOffset,
    pub rotation_degrees: f64,
    pub label: Option<SwipeLabel>,
}

impl DragFeedback {
    /// Compute feedback for an offset.
    ///
    /// Rotation maps `dx` linearly from `[-rotation_range, rotation_range]`
    /// onto `[-max_rotation_degrees, max_rotation_degrees]` and clamps.
    #[must_use]
    pub fn for_offset(offset: DragOffset, config: &FeedbackConfig) -> Self {
        let rotation_degrees = if config.rotation_range > 0.0 {
            let t = (offset.dx / config.rotation_range).clamp(-1.0, 1.0);
            t * config.max_rotation_degrees
        } else {
            0.0
        };

        let label = if offset.dx > config.label_threshold {
            Some(SwipeLabel::Match)
        } else if offset.dx < -config.label_threshold {
            Some(SwipeLabel::Nope)
        } else {
            None
        };

        Self {
            offset,
            rotation_degrees,
            label,
        }
    }

    /// Feedback for a card at rest.
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            offset: DragOffset::ZERO,
            rotation_degrees: 0.0,
            label: None,
        }
    }
}

/// An in-progress drag of the front card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    card_id: CardId,
    origin: DragOffset,
    current: DragOffset,
}

impl DragSession {
    /// Start a drag on `card_id` at pointer position `origin`.
    #[must_use]
    pub fn start(card_id: CardId, origin: DragOffset) -> Self {
        Self {
            card_id,
            origin,
            current: DragOffset::ZERO,
        }
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Pointer position at drag start.
    #[must_use]
    pub fn origin(&self) -> DragOffset {
        self.origin
    }

    /// Latest reported offset from the origin.
    #[must_use]
    pub fn current_offset(&self) -> DragOffset {
        self.current
    }

    /// Record a new offset and compute feedback for it.
    pub fn update(&mut self, offset: DragOffset, config: &FeedbackConfig) -> DragFeedback {
        self.current = offset;
        DragFeedback::for_offset(offset, config)
    }

    /// Offset for an absolute pointer position.
    #[must_use]
    pub fn offset_to(&self, position: DragOffset) -> DragOffset {
        position - self.origin
    }
}
