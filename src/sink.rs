//! Result sinks: where each size's inverse pairs end up.
//!
//! The on-disk format is one JSON document per matrix size:
//!
//! ```json
//! {
//!   "size": 4,
//!   "results": [
//!     { "key": "0, 1, 2", "value": "0, 2, 3" }
//!   ]
//! }
//! ```
//!
//! `size` is the number of records, not the matrix dimension; the dimension
//! is carried by the file name (`<dimension>.json`).

use crate::error::{Error, Result};
use crate::results::InversePair;
use crate::triple::OffsetTriple;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Consumer of per-size search results.
pub trait ResultSink {
    /// Accept the ordered `(key, value)` pairs found for matrix size `size`.
    ///
    /// Called once per size, also when no pair was found.
    fn write_results(&mut self, size: usize, pairs: &[(String, String)]) -> Result<()>;
}

/// Contents of a results file.
///
/// Weight-3 files load with the default parameters; files holding general
/// inverses load as `ResultsFile<OffsetTriple, Support>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsFile<K = OffsetTriple, V = OffsetTriple> {
    /// Record count
    pub size: usize,
    pub results: Vec<InversePair<K, V>>,
}

impl<'a> ResultsFile<&'a str, &'a str> {
    fn from_pairs(pairs: &'a [(String, String)]) -> Self {
        ResultsFile {
            size: pairs.len(),
            results: pairs
                .iter()
                .map(|(key, value)| InversePair {
                    key: key.as_str(),
                    value: value.as_str(),
                })
                .collect(),
        }
    }
}

/// Writes `<dir>/<size>.json` for every size.
#[derive(Clone, Debug)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        JsonFileSink {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Output path for a matrix size.
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.dir.join(format!("{size}.json"))
    }
}

impl ResultSink for JsonFileSink {
    fn write_results(&mut self, size: usize, pairs: &[(String, String)]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))?;

        let doc = ResultsFile::from_pairs(pairs);

        let path = self.path_for(size);
        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &doc)?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(&path, e))?;

        debug!(path = %path.display(), records = pairs.len(), "results written");
        Ok(())
    }
}

/// Read a weight-3 results file written by [`JsonFileSink`].
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<ResultsFile> {
    load_results_as(path)
}

/// Read a results file whose keys and values parse as `K` and `V`.
pub fn load_results_as<K, V, P>(path: P) -> Result<ResultsFile<K, V>>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let parsed = serde_json::from_reader(BufReader::new(file))?;
    Ok(parsed)
}

/// Keeps every write in memory, in call order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<(usize, Vec<(String, String)>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs recorded for a size, if that size was written.
    pub fn get(&self, size: usize) -> Option<&[(String, String)]> {
        self.writes
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, pairs)| pairs.as_slice())
    }
}

impl ResultSink for MemorySink {
    fn write_results(&mut self, size: usize, pairs: &[(String, String)]) -> Result<()> {
        self.writes.push((size, pairs.to_vec()));
        Ok(())
    }
}
