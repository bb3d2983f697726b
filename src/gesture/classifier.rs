//! Drag classification.
//!
//! Maps a final drag offset to a swipe [`Direction`], or `None` when the
//! drag is too short and the card should snap back.
//!
//! ## Algorithm
//!
//! 1. `distance = sqrt(dx² + dy²)`; `distance <= threshold` gives `None`.
//! 2. `angle = atan2(dy, dx)` in degrees. Screen coordinates: +y is down.
//! 3. `45 < angle <= 135` is `Down`, `-135 <= angle < -45` is `Up`,
//!    everything else is horizontal by the sign of `dx`.
//!
//! The exact comparison operators matter: the ±45° and ±135° boundaries
//! resolve to horizontal on one side only.
//!
//! ```
//! use swipe_stack::gesture::{classify, Direction, DragOffset};
//!
//! assert_eq!(classify(DragOffset::new(150.0, 0.0), 100.0), Some(Direction::Right));
//! assert_eq!(classify(DragOffset::new(40.0, 0.0), 100.0), None);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Displacement from drag start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragOffset {
    pub dx: f64,
    pub dy: f64,
}

impl DragOffset {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length.
    #[must_use]
    pub fn distance(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Angle in degrees, in `(-180, 180]` for non-negative-zero inputs.
    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        self.dy.atan2(self.dx).to_degrees()
    }
}

impl std::ops::Sub for DragOffset {
    type Output = DragOffset;

    fn sub(self, rhs: Self) -> Self::Output {
        DragOffset::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

/// Committed swipe direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Resolve an angle sector to a direction. `dx` breaks the horizontal tie.
#[must_use]
pub fn classify_angle(angle_degrees: f64, dx: f64) -> Direction {
    if angle_degrees > 45.0 && angle_degrees <= 135.0 {
        Direction::Down
    } else if angle_degrees >= -135.0 && angle_degrees < -45.0 {
        Direction::Up
    } else if dx < 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Classify a drag. Pure.
#[must_use]
pub fn classify(offset: DragOffset, threshold: f64) -> Option<Direction> {
    // NaN compares as unordered and snaps back
    match offset.distance().partial_cmp(&threshold) {
        Some(Ordering::Greater) => Some(classify_angle(offset.angle_degrees(), offset.dx)),
        _ => None,
    }
}
