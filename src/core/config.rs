//! Stack configuration.
//!
//! Everything here is fixed at construction:
//! - `StackConfig`: window size, swipe threshold, initial fill, id seed
//! - `FeedbackConfig`: live drag feedback (label and rotation)
//! - `StackLayout`: per-depth presentation steps for the visible window
//!
//! `StackConfig::validate` is the only place configuration can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::CardId;

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("visible_count must be at least 1")]
    ZeroVisibleCount,

    #[error("swipe_threshold must be a finite distance greater than 0, got {0}")]
    InvalidThreshold(f64),

    #[error("initial_card_count ({initial}) must be at least visible_count ({visible})")]
    TooFewInitialCards { initial: usize, visible: usize },
}

/// Live drag feedback parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Horizontal offset past which a swipe label is shown.
    pub label_threshold: f64,

    /// Horizontal offset at which rotation reaches its maximum.
    pub rotation_range: f64,

    /// Maximum card tilt in degrees.
    pub max_rotation_degrees: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            label_threshold: 50.0,
            rotation_range: 300.0,
            max_rotation_degrees: 30.0,
        }
    }
}

/// Presentation steps applied per depth in the visible window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackLayout {
    /// Horizontal shift per depth (negative = fan to the left).
    pub offset_step: f64,

    /// Scale reduction per depth.
    pub scale_step: f64,

    /// Opacity reduction per depth.
    pub opacity_step: f64,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            offset_step: -30.0,
            scale_step: 0.05,
            opacity_step: 0.1,
        }
    }
}

/// Complete stack configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Number of cards in the visible window (>= 1).
    pub visible_count: usize,

    /// Minimum drag distance for a commit (> 0).
    pub swipe_threshold: f64,

    /// Cards created at construction (>= visible_count).
    pub initial_card_count: usize,

    /// ID given to the first card.
    pub first_card_id: CardId,

    /// Seed for decorative randomness.
    pub seed: u64,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub layout: StackLayout,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            visible_count: 3,
            swipe_threshold: 100.0,
            initial_card_count: 10,
            first_card_id: CardId::new(1),
            seed: 42,
            feedback: FeedbackConfig::default(),
            layout: StackLayout::default(),
        }
    }
}

impl StackConfig {
    /// Create a config with the given window size and threshold.
    ///
    /// The initial fill defaults to the larger of 10 and `visible_count`.
    pub fn new(visible_count: usize, swipe_threshold: f64) -> Self {
        Self {
            visible_count,
            swipe_threshold,
            initial_card_count: visible_count.max(10),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_cards(mut self, count: usize) -> Self {
        self.initial_card_count = count;
        self
    }

    #[must_use]
    pub fn with_first_card_id(mut self, id: CardId) -> Self {
        self.first_card_id = id;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: FeedbackConfig) -> Self {
        self.feedback = feedback;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: StackLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check the construction constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_count == 0 {
            return Err(ConfigError::ZeroVisibleCount);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.swipe_threshold));
        }
        if self.initial_card_count < self.visible_count {
            return Err(ConfigError::TooFewInitialCards {
                initial: self.initial_card_count,
                visible: self.visible_count,
            });
        }
        Ok(())
    }
}
