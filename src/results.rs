//! Per-size result aggregation.
//!
//! An [`InverseMap`] associates each generator triple with the inverse found
//! for it: another [`OffsetTriple`] for the weight-3 search, or the full
//! first-row [`Support`](crate::general::Support) for the GF(2) solver. Keys
//! stay typed until the sink boundary, where they become canonical strings.

use crate::triple::OffsetTriple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `{key, value}` record, in memory and in result files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InversePair<K = OffsetTriple, V = OffsetTriple> {
    pub key: K,
    pub value: V,
}

/// Ordered mapping generator → inverse for a single matrix size.
///
/// Iteration follows insertion order, which is the discovery order of the
/// search. Each generator appears at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InverseMap<V = OffsetTriple> {
    size: usize,
    pairs: Vec<InversePair<OffsetTriple, V>>,
}

impl<V> InverseMap<V> {
    pub fn new(size: usize) -> Self {
        InverseMap {
            size,
            pairs: Vec::new(),
        }
    }

    /// Matrix size the pairs were found for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Record an inverse for `key`.
    ///
    /// # Panics
    /// Panics if `key` was already recorded; the search visits each
    /// generator once, so a repeat means the caller is broken.
    pub fn insert(&mut self, key: OffsetTriple, value: V) {
        assert!(
            !self.contains_key(&key),
            "generator ({key}) recorded twice for size {}",
            self.size
        );
        self.pairs.push(InversePair { key, value });
    }

    pub fn get(&self, key: &OffsetTriple) -> Option<&V> {
        self.pairs.iter().find(|p| &p.key == key).map(|p| &p.value)
    }

    pub fn contains_key(&self, key: &OffsetTriple) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OffsetTriple, &V)> {
        self.pairs.iter().map(|p| (&p.key, &p.value))
    }
}

impl<V: fmt::Display> InverseMap<V> {
    /// Canonical string pairs, in discovery order, for sinks.
    pub fn to_string_pairs(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|p| (p.key.to_string(), p.value.to_string()))
            .collect()
    }
}

impl<V> Default for InverseMap<V> {
    fn default() -> Self {
        InverseMap::new(0)
    }
}

impl<'a, V> IntoIterator for &'a InverseMap<V> {
    type Item = (&'a OffsetTriple, &'a V);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
