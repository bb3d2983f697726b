//! Swipe statistics for diagnostics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::gesture::Direction;

/// Counters collected by a controller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SwipeStats {
    /// Commits per direction.
    pub commits: FxHashMap<Direction, u64>,

    /// Drags that ended below the threshold.
    pub cancels: u64,

    /// Exit phases that completed.
    pub settles: u64,

    /// Events dropped because they arrived in the wrong state.
    pub ignored: u64,
}

impl SwipeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_commit(&mut self, direction: Direction) {
        *self.commits.entry(direction).or_insert(0) += 1;
    }

    /// Commits in one direction.
    #[must_use]
    pub fn commits_for(&self, direction: Direction) -> u64 {
        self.commits.get(&direction).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_commits(&self) -> u64 {
        self.commits.values().sum()
    }

    /// Fraction of finished drags that committed.
    #[must_use]
    pub fn commit_rate(&self) -> f64 {
        let total = self.total_commits() + self.cancels;
        if total == 0 {
            0.0
        } else {
            self.total_commits() as f64 / total as f64
        }
    }
}
