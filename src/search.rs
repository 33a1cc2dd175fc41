//! Brute-force mod-2 inverse search over three-offset circulants.
//!
//! For a matrix size N every triple from [`enumerate_triples`] is a
//! generator. Its circulant is multiplied against the circulant of every
//! candidate triple (the generator itself included), the product is reduced
//! mod 2 and compared with the identity. The first candidate in enumeration
//! order that matches is recorded; generators without a match are left out.
//!
//! Cost is O(C(N,3)² · N³) in the worst case. Nothing here is pruned.

use crate::combinations::enumerate_triples;
use crate::matrix::SquareMatrix;
use crate::results::InverseMap;
use crate::triple::OffsetTriple;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Counters collected while searching one size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Generator triples examined (degenerate ones excluded)
    pub generators: usize,
    /// Candidate products formed and compared with the identity
    pub candidates_checked: usize,
    /// Generators for which an inverse was found
    pub inverses_found: usize,
}

/// Search state for a single matrix size.
///
/// Holds the enumerated triples and the identity matrix, both shared
/// read-only across every generator.
pub struct InverseSearch {
    size: usize,
    triples: Vec<OffsetTriple>,
    identity: SquareMatrix,
    stats: SearchStats,
}

impl InverseSearch {
    /// Prepare a search for `size`.
    ///
    /// # Panics
    /// Panics when `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "matrix size must be positive");
        InverseSearch {
            size,
            triples: enumerate_triples(size),
            identity: SquareMatrix::identity(size),
            stats: SearchStats::default(),
        }
    }

    /// Prepare a search over an explicit list of triples instead of the
    /// full enumeration. The list serves as both generators and candidates,
    /// in the given order.
    ///
    /// # Panics
    /// Panics when `size` is zero or a triple does not fit `size`.
    pub fn with_triples(size: usize, triples: Vec<OffsetTriple>) -> Self {
        assert!(size > 0, "matrix size must be positive");
        if let Some(t) = triples.iter().find(|t| !t.fits(size)) {
            panic!("triple ({t}) does not fit size {size}");
        }
        InverseSearch {
            size,
            triples,
            identity: SquareMatrix::identity(size),
            stats: SearchStats::default(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Triples in enumeration order.
    pub fn triples(&self) -> &[OffsetTriple] {
        &self.triples
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// First candidate triple whose circulant inverts `generator` mod 2.
    ///
    /// Degenerate candidates are never accepted.
    pub fn find_inverse(&mut self, generator: &OffsetTriple) -> Option<OffsetTriple> {
        let matrix = SquareMatrix::circulant(generator, self.size);
        self.find_inverse_of(&matrix)
    }

    fn find_inverse_of(&mut self, matrix: &SquareMatrix) -> Option<OffsetTriple> {
        for candidate in &self.triples {
            if candidate.is_degenerate() {
                continue;
            }
            self.stats.candidates_checked += 1;
            let proposed = SquareMatrix::circulant(candidate, self.size);
            let product = matrix.multiply(&proposed).reduce_mod(2);
            if product == self.identity {
                return Some(*candidate);
            }
        }
        None
    }

    /// Search every generator and collect the discovered inverses.
    pub fn run(&mut self) -> InverseMap {
        let mut map = InverseMap::new(self.size);
        let generators = self.triples.clone();
        for generator in &generators {
            if generator.is_degenerate() {
                continue;
            }
            self.stats.generators += 1;
            let matrix = SquareMatrix::circulant(generator, self.size);
            if let Some(inverse) = self.find_inverse_of(&matrix) {
                debug!(size = self.size, %generator, %inverse, "inverse found");
                map.insert(*generator, inverse);
                self.stats.inverses_found += 1;
            }
        }
        map
    }
}

/// Run the full search for one size.
///
/// # Examples
///
/// ```
/// use circulant_inverse::{find_all_inverses, OffsetTriple};
///
/// let map = find_all_inverses(4);
/// assert_eq!(map.len(), 4);
/// assert_eq!(
///     map.get(&OffsetTriple::new(0, 1, 2)),
///     Some(&OffsetTriple::new(0, 2, 3))
/// );
/// ```
pub fn find_all_inverses(size: usize) -> InverseMap {
    InverseSearch::new(size).run()
}

/// Check independently that `u` inverts `t` mod 2 at the given size.
pub fn is_inverse_pair(t: &OffsetTriple, u: &OffsetTriple, size: usize) -> bool {
    let product = SquareMatrix::circulant(t, size)
        .multiply(&SquareMatrix::circulant(u, size))
        .reduce_mod(2);
    product == SquareMatrix::identity(size)
}
