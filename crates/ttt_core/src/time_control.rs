//! Time control and search limits for automated players.
//!
//! The budget is only consulted between complete search iterations. A single
//! depth-limited search always runs to completion once started.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Search limits for one automated turn.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Depth searched unconditionally
    pub min_depth: u8,
    /// Deepest iteration allowed (None = single search at `min_depth`)
    pub max_depth: Option<u8>,
    /// Wall-clock budget for the whole turn
    pub move_time: Duration,
    /// Clock and cooperative stop flag
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits for a single fixed-depth search.
    pub fn depth(depth: u8) -> Self {
        Self::deepening(depth, None, Duration::ZERO)
    }

    /// Create limits that deepen from `min_depth` towards `max_depth` within `move_time`.
    pub fn deepening(min_depth: u8, max_depth: Option<u8>, move_time: Duration) -> Self {
        Self {
            min_depth,
            max_depth,
            move_time,
            time_control: TimeControl::new(move_time),
        }
    }

    /// Check if the host asked the search to stop.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when the turn begins.
    pub fn start(&mut self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Turn clock plus a stop flag the host may raise from another thread.
///
/// Clones share the stop flag, so a host can keep one handle and hand the
/// other to the engine.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Option<Instant>,
    time_limit: Duration,
}

impl TimeControl {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: None,
            time_limit,
        }
    }

    /// Start (or restart) the clock and clear the stop flag.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Ask the search not to begin another iteration.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Elapsed time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|s| s.elapsed()).unwrap_or(Duration::ZERO)
    }

    /// Time left in the budget, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.time_limit.saturating_sub(self.elapsed())
    }

    /// True once the deadline has passed or a stop was requested.
    pub fn is_expired(&self) -> bool {
        self.is_stopped() || self.elapsed() >= self.time_limit
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
