//! Search limits and the cooperative clock engines consult between phases.
//!
//! Cancellation is cooperative: engines check the clock at depth and phase
//! boundaries only, and the caller applies a hard outer timeout around the
//! whole invocation. A recursive search that has started runs to completion;
//! only the next phase is skipped once the budget is gone.

use std::time::{Duration, Instant};

/// Limits for one engine invocation.
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub max_depth: u8,
    /// Soft wall-clock budget (None = unlimited).
    pub budget: Option<Duration>,
}

impl SearchLimits {
    /// Depth-only limits, no clock.
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            budget: None,
        }
    }

    /// Depth cap plus a wall-clock budget.
    pub fn timed(max_depth: u8, budget: Duration) -> Self {
        Self {
            max_depth,
            budget: Some(budget),
        }
    }

    /// Start the clock for this invocation.
    pub fn start(&self) -> SearchClock {
        SearchClock {
            started: Instant::now(),
            budget: self.budget,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Running clock for one invocation. Copy-cheap; checks are just an
/// `Instant` comparison.
#[derive(Clone, Copy, Debug)]
pub struct SearchClock {
    started: Instant,
    budget: Option<Duration>,
}

impl SearchClock {
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn expired(&self) -> bool {
        self.budget.is_some_and(|budget| self.started.elapsed() >= budget)
    }

    /// Time left in the budget (None = unlimited).
    pub fn remaining(&self) -> Option<Duration> {
        self.budget
            .map(|budget| budget.saturating_sub(self.started.elapsed()))
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
