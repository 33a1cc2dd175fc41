//! Error type shared by the library.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by configuration, parsing and result persistence.
///
/// Matrix arithmetic never returns these: mismatched dimensions and
/// out-of-range offsets are contract violations and panic instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid size range {start}..{stop}")]
    InvalidRange { start: usize, stop: usize },

    #[error("cannot parse offset triple from {0:?}")]
    ParseTriple(String),

    #[error("cannot parse index set from {0:?}")]
    ParseSupport(String),

    #[error("failed to write results for size {size}: {source}")]
    Sink {
        size: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
