//! Offset triples: the three shifts that define a binary circulant.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Three row offsets, kept in ascending order.
///
/// The canonical text form is `"a, b, c"`, which is also how triples are
/// serialized in result files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OffsetTriple([usize; 3]);

impl OffsetTriple {
    /// Create a triple; the offsets are sorted ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use circulant_inverse::OffsetTriple;
    ///
    /// let t = OffsetTriple::new(7, 4, 23);
    /// assert_eq!(t.offsets(), (4, 7, 23));
    /// assert_eq!(t.to_string(), "4, 7, 23");
    /// ```
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut offsets = [a, b, c];
        offsets.sort_unstable();
        OffsetTriple(offsets)
    }

    #[inline]
    pub fn offsets(&self) -> (usize, usize, usize) {
        (self.0[0], self.0[1], self.0[2])
    }

    #[inline]
    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }

    /// True when every offset is below `size`.
    #[inline]
    pub fn fits(&self, size: usize) -> bool {
        self.0[2] < size
    }

    /// A triple whose three offsets are all equal.
    ///
    /// Only literal equality counts: offsets that coincide modulo the
    /// matrix size are not considered degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.0[0] == self.0[1] && self.0[1] == self.0[2]
    }
}

impl From<[usize; 3]> for OffsetTriple {
    fn from(offsets: [usize; 3]) -> Self {
        OffsetTriple::new(offsets[0], offsets[1], offsets[2])
    }
}

impl fmt::Display for OffsetTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for OffsetTriple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::ParseTriple(s.to_string()));
        }
        let mut offsets = [0usize; 3];
        for (slot, part) in offsets.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| Error::ParseTriple(s.to_string()))?;
        }
        Ok(OffsetTriple::from(offsets))
    }
}

impl Serialize for OffsetTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OffsetTriple {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts() {
        assert_eq!(OffsetTriple::new(31, 15, 28).as_array(), [15, 28, 31]);
    }

    #[test]
    fn test_degenerate_only_when_all_equal() {
        assert!(OffsetTriple::new(3, 3, 3).is_degenerate());
        assert!(!OffsetTriple::new(3, 3, 4).is_degenerate());
        assert!(!OffsetTriple::new(0, 1, 2).is_degenerate());
    }

    #[test]
    fn test_congruent_offsets_not_degenerate() {
        // 1 and 5 coincide mod 4 but the triple is still a distinct candidate.
        let t = OffsetTriple::new(1, 5, 9);
        assert!(!t.is_degenerate());
        assert!(!t.fits(4));
    }

    #[test]
    fn test_parse_canonical_and_loose() {
        let t: OffsetTriple = "4, 7, 23".parse().unwrap();
        assert_eq!(t, OffsetTriple::new(4, 7, 23));
        let loose: OffsetTriple = " 23,4 ,7".parse().unwrap();
        assert_eq!(loose, t);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1, 2".parse::<OffsetTriple>().is_err());
        assert!("1, 2, x".parse::<OffsetTriple>().is_err());
        assert!("1, 2, 3, 4".parse::<OffsetTriple>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let t = OffsetTriple::new(0, 2, 3);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"0, 2, 3\"");
        let back: OffsetTriple = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
