//! Circulant Inverse - mod-2 inverse search for binary circulant matrices
//!
//! Copyright (c) 2025 Circulant Inverse Contributors
//! Licensed under MIT License
//!
//! For each matrix size N, every triple of distinct offsets `(a, b, c)`
//! generates an N×N binary circulant whose row `i` has ones at columns
//! `i+a`, `i+b` and `i+c` (mod N). The search brute-forces, for each such
//! matrix, another triple whose circulant is its inverse under mod-2
//! arithmetic, and writes the discovered pairs per size.
//!
//! # Quick Start
//!
//! ```
//! use circulant_inverse::{find_all_inverses, is_inverse_pair};
//!
//! let map = find_all_inverses(5);
//! for (generator, inverse) in &map {
//!     assert!(is_inverse_pair(generator, inverse, 5));
//! }
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: dense square matrices and their primitives
//! - [`triple`]: offset triples and their canonical text form
//! - [`combinations`]: deterministic subset enumeration
//! - [`search`]: the inverse search engine
//! - [`general`]: full GF(2) inverses of any weight
//! - [`results`]: ordered per-size result mapping
//! - [`sink`]: JSON and in-memory result sinks
//! - [`observer`]: progress reporting
//! - [`driver`]: batch runs over a size range
//! - [`strassen`]: divide-and-conquer multiplication for cross-checking
//! - [`cli`]: command-line interface

pub mod cli;
pub mod combinations;
pub mod driver;
pub mod error;
pub mod general;
pub mod matrix;
pub mod observer;
pub mod results;
pub mod search;
pub mod sink;
pub mod strassen;
pub mod triple;

// Re-export main types for convenience
pub use combinations::enumerate_triples;
pub use driver::{run_batch, BatchConfig, BatchReport, SearchMode};
pub use error::{Error, Result};
pub use general::{find_general_inverses, general_inverse, Support};
pub use matrix::SquareMatrix;
pub use observer::{ConsoleObserver, NullObserver, SearchObserver};
pub use results::{InverseMap, InversePair};
pub use search::{find_all_inverses, is_inverse_pair, InverseSearch, SearchStats};
pub use sink::{load_results, JsonFileSink, MemorySink, ResultSink, ResultsFile};
pub use strassen::strassen_multiply;
pub use triple::OffsetTriple;
