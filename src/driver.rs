//! Batch driver: run the inverse search over a range of matrix sizes.
//!
//! Sizes are processed strictly in order and independently. A sink failure
//! for one size is recorded in the [`BatchReport`] and the run moves on to
//! the next size.

use crate::error::{Error, Result};
use crate::general::find_general_inverses;
use crate::observer::{report_pairs, SearchObserver};
use crate::search::{InverseSearch, SearchStats};
use crate::sink::{JsonFileSink, ResultSink};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// First size of the reference batch.
pub const DEFAULT_START: usize = 4;
/// Exclusive upper bound of the reference batch.
pub const DEFAULT_STOP: usize = 33;

/// Which inverses a batch looks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Inverses that are themselves three-offset circulants
    #[default]
    Weight3,
    /// Full GF(2) inverses, recorded as first-row index sets
    General,
}

/// Configuration for a batch run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// First matrix size (inclusive)
    pub start: usize,
    /// Last matrix size (exclusive)
    pub stop: usize,
    /// Directory receiving `<size>.json` files
    pub output_dir: PathBuf,
    #[serde(default)]
    pub mode: SearchMode,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            output_dir: PathBuf::from("json/out"),
            mode: SearchMode::default(),
        }
    }
}

impl BatchConfig {
    /// Reject empty ranges and size zero.
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 || self.start >= self.stop {
            return Err(Error::InvalidRange {
                start: self.start,
                stop: self.stop,
            });
        }
        Ok(())
    }

    pub fn sizes(&self) -> Range<usize> {
        self.start..self.stop
    }

    /// File sink writing into `output_dir`.
    pub fn sink(&self) -> JsonFileSink {
        JsonFileSink::new(&self.output_dir)
    }
}

/// What happened for one size.
#[derive(Debug)]
pub struct SizeOutcome {
    pub size: usize,
    pub stats: SearchStats,
    /// Sink error, if the results could not be written
    pub error: Option<Error>,
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SizeOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &SizeOutcome> {
        self.outcomes.iter().filter(|o| o.error.is_some())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn total_inverses(&self) -> usize {
        self.outcomes.iter().map(|o| o.stats.inverses_found).sum()
    }
}

/// Search one size and forward the results to the sink and observer.
pub fn process_size(
    size: usize,
    mode: SearchMode,
    sink: &mut dyn ResultSink,
    observer: &mut dyn SearchObserver,
) -> SizeOutcome {
    observer.size_started(size);
    let started = Instant::now();

    let (pairs, stats) = match mode {
        SearchMode::Weight3 => {
            let mut search = InverseSearch::new(size);
            let map = search.run();
            report_pairs(observer, &map);
            (map.to_string_pairs(), search.stats())
        }
        SearchMode::General => {
            let (map, stats) = find_general_inverses(size);
            report_pairs(observer, &map);
            (map.to_string_pairs(), stats)
        }
    };

    let error = sink
        .write_results(size, &pairs)
        .err()
        .map(|source| {
            warn!(size, error = %source, "failed to write results");
            Error::Sink {
                size,
                source: Box::new(source),
            }
        });

    observer.size_finished(size, &stats, started.elapsed());

    SizeOutcome { size, stats, error }
}

/// Process every size of the configured range in order.
///
/// Only an invalid range fails the call itself; per-size sink failures are
/// reported in the returned [`BatchReport`].
pub fn run_batch(
    config: &BatchConfig,
    sink: &mut dyn ResultSink,
    observer: &mut dyn SearchObserver,
) -> Result<BatchReport> {
    config.validate()?;
    let mut report = BatchReport::default();
    for size in config.sizes() {
        report.outcomes.push(process_size(size, config.mode, sink, observer));
    }
    Ok(report)
}
