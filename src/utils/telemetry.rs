// file: src/utils/telemetry.rs
// description: poll loop counters and fetch timing
// reference: tracing-based operational logging

use crate::utils::logging::{format_error, format_success};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::warn;

/// Counters for one run of the poll loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollStats {
    /// Ticks that issued a request.
    pub ticks: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Ticks dropped because the previous request was still outstanding.
    pub skipped: u64,
}

impl PollStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> u64 {
        self.succeeded + self.failed
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.completed();
        if total == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / total as f64) * 100.0
    }

    pub fn format(&self) -> String {
        format!(
            "{} ticks: {} updated, {} failed, {} skipped ({:.1}% success)",
            self.ticks,
            self.succeeded,
            self.failed,
            self.skipped,
            self.success_rate()
        )
    }

    /// End-of-run summary line; unstyled when color is off.
    pub fn summary(&self, color: bool) -> String {
        let line = self.format();
        if !color {
            line
        } else if self.failed > 0 && self.succeeded == 0 {
            format_error(&line)
        } else {
            format_success(&line)
        }
    }
}

/// Measures one status fetch.
pub struct FetchTimer {
    start: Instant,
}

impl FetchTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A fetch that outlives the poll interval causes later ticks to be skipped.
pub fn warn_if_slow(elapsed: Duration, interval: Duration) {
    if elapsed > interval {
        warn!(
            "Slow status fetch: took {}ms (interval: {}ms)",
            elapsed.as_millis(),
            interval.as_millis()
        );
    }
}
