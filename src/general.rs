//! General mod-2 inverses of three-offset circulants.
//!
//! The weight-3 search in [`crate::search`] only accepts inverses that are
//! themselves generated by a triple. Here every generator's circulant is
//! inverted outright over GF(2) with [`SquareMatrix::inverse_mod2`], and the
//! inverse is recorded by its first-row [`Support`], whatever its weight.
//! The inverse of a circulant is circulant, so the first row determines it.
//!
//! Whenever the weight-3 search records `T -> U`, the support found here for
//! `T` is exactly the offsets of `U`.

use crate::combinations::enumerate_triples;
use crate::error::Error;
use crate::matrix::SquareMatrix;
use crate::results::InverseMap;
use crate::search::SearchStats;
use crate::triple::OffsetTriple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Ascending column indices of the ones in a circulant's first row.
///
/// Text form is `"i, j, ..."`, the same shape as a triple.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Support(Vec<usize>);

impl Support {
    /// Build a support; indices are sorted and deduplicated.
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Support(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of ones per row.
    pub fn weight(&self) -> usize {
        self.0.len()
    }

    /// True when every index is below `size`.
    pub fn fits(&self, size: usize) -> bool {
        self.0.last().map_or(true, |&i| i < size)
    }

    /// The circulant this support generates.
    pub fn circulant(&self, size: usize) -> SquareMatrix {
        SquareMatrix::circulant_from_offsets(&self.0, size)
    }
}

impl From<OffsetTriple> for Support {
    fn from(triple: OffsetTriple) -> Self {
        Support::new(triple.as_array().to_vec())
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for Support {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Support::default());
        }
        s.split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map(Support::new)
            .map_err(|_| Error::ParseSupport(s.to_string()))
    }
}

impl Serialize for Support {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Support {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// First-row support of the GF(2) inverse of `triple`'s circulant, if any.
///
/// # Examples
///
/// ```
/// use circulant_inverse::general::general_inverse;
/// use circulant_inverse::OffsetTriple;
///
/// let support = general_inverse(&OffsetTriple::new(0, 1, 2), 7).unwrap();
/// assert_eq!(support.to_string(), "0, 2, 3, 5, 6");
/// assert!(general_inverse(&OffsetTriple::new(0, 1, 2), 3).is_none());
/// ```
pub fn general_inverse(triple: &OffsetTriple, size: usize) -> Option<Support> {
    SquareMatrix::circulant(triple, size)
        .inverse_mod2()
        .map(|inv| Support::new(inv.row_support(0)))
}

/// Invert every generator of `size` over GF(2).
///
/// Returns the mapping in enumeration order plus counters; each inversion
/// counts as one checked candidate.
pub fn find_general_inverses(size: usize) -> (InverseMap<Support>, SearchStats) {
    assert!(size > 0, "matrix size must be positive");
    let mut map = InverseMap::new(size);
    let mut stats = SearchStats::default();

    for generator in enumerate_triples(size) {
        if generator.is_degenerate() {
            continue;
        }
        stats.generators += 1;
        stats.candidates_checked += 1;
        if let Some(support) = general_inverse(&generator, size) {
            debug!(size, %generator, %support, "general inverse found");
            map.insert(generator, support);
            stats.inverses_found += 1;
        }
    }
    (map, stats)
}
