//! Cooperative cancellation for move searches.
//!
//! A search polls [`TimeControl::check_time`] between sibling moves. Nothing is
//! interrupted mid-move, so a search that is never stopped behaves exactly as if
//! no time control existed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Depth and optional time budget for one search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Plies to look ahead.
    pub depth: u32,
    pub time_control: TimeControl,
}

impl SearchLimits {
    pub fn depth(depth: u32) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(None),
        }
    }

    pub fn depth_and_time(depth: u32, move_time: Duration) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(Some(move_time)),
        }
    }
}

/// Shared stop flag plus an optional deadline.
///
/// Clones share the same flag, so one clone can be handed to another thread and
/// used to stop a running search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    /// Start the clock and clear any earlier stop request.
    pub fn start(&self) {
        *self
            .start_time
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Stop if the deadline has passed. Returns true once stopped.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
            && self.started()
        {
            self.stop();
            return true;
        }

        false
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Time since [`TimeControl::start`]; zero before the clock is started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|start| start.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    fn started(&self) -> bool {
        self.start_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
