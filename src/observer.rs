//! Progress reporting for batch runs.
//!
//! Purely informational: nothing here influences what the search finds.

use crate::results::InverseMap;
use crate::search::SearchStats;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Receives per-size progress from the batch driver.
pub trait SearchObserver {
    fn size_started(&mut self, _size: usize) {}

    /// One discovered pair, in canonical text form.
    fn inverse_found(&mut self, _size: usize, _key: &str, _value: &str) {}

    fn size_finished(&mut self, _size: usize, _stats: &SearchStats, _elapsed: Duration) {}
}

/// Logs progress with `tracing` and echoes every pair to stdout as
/// `a, b, c -> d, e, f`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleObserver {
    /// Suppress the stdout pair listing
    pub quiet: bool,
}

impl ConsoleObserver {
    pub fn new(quiet: bool) -> Self {
        ConsoleObserver { quiet }
    }
}

impl SearchObserver for ConsoleObserver {
    fn size_started(&mut self, size: usize) {
        info!(size, "searching");
    }

    fn inverse_found(&mut self, _size: usize, key: &str, value: &str) {
        if !self.quiet {
            println!("{key} -> {value}");
        }
    }

    fn size_finished(&mut self, size: usize, stats: &SearchStats, elapsed: Duration) {
        info!(
            size,
            generators = stats.generators,
            candidates = stats.candidates_checked,
            inverses = stats.inverses_found,
            elapsed_ms = elapsed.as_millis() as u64,
            "size complete"
        );
    }
}

/// Discards all progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Feed every pair of a finished map to an observer.
pub(crate) fn report_pairs<V: fmt::Display>(observer: &mut dyn SearchObserver, map: &InverseMap<V>) {
    for (key, value) in map {
        observer.inverse_found(map.size(), &key.to_string(), &value.to_string());
    }
}
