//! Dense square integer matrices and the primitives the inverse search needs.
//!
//! Matrices are stored row-major in a single owned buffer tagged with their
//! dimension. Entries are plain integers: products are NOT reduced, so a
//! product of two binary circulants can hold values above 1 until
//! [`SquareMatrix::reduce_mod`] is applied.
//!
//! The primitives:
//! - [`SquareMatrix::circulant`]: three-offset binary circulant
//! - [`SquareMatrix::identity`]
//! - [`SquareMatrix::multiply`]: schoolbook O(N³) product
//! - [`SquareMatrix::reduce_mod`]: element-wise remainder
//! - equality via `PartialEq`
//!
//! Passing matrices of different sizes to a binary operation is a caller
//! contract violation and panics.

use crate::triple::OffsetTriple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Matrix entry type. Signed so that Strassen's intermediate differences fit.
pub type Entry = i64;

/// Owned N×N integer matrix with row-major storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<Entry>,
}

impl SquareMatrix {
    /// All-zero matrix of the given size.
    ///
    /// # Panics
    /// Panics when `size` is zero.
    pub fn zeros(size: usize) -> Self {
        assert!(size > 0, "matrix size must be positive");
        SquareMatrix {
            size,
            data: vec![0; size * size],
        }
    }

    /// Build a matrix from row-major entries.
    ///
    /// # Panics
    /// Panics when `data.len()` is not `size * size`.
    pub fn from_rows(size: usize, data: Vec<Entry>) -> Self {
        assert!(size > 0, "matrix size must be positive");
        assert_eq!(data.len(), size * size, "row data does not match size {size}");
        SquareMatrix { size, data }
    }

    /// Identity matrix: ones on the diagonal, zeros elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use circulant_inverse::SquareMatrix;
    ///
    /// let id = SquareMatrix::identity(3);
    /// assert_eq!(id.get(1, 1), 1);
    /// assert_eq!(id.get(0, 2), 0);
    /// ```
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.set(i, i, 1);
        }
        m
    }

    /// Binary circulant generated by a triple: row `i` has ones at columns
    /// `(i+a) mod N`, `(i+b) mod N` and `(i+c) mod N`.
    ///
    /// Repeated offsets collapse onto a single one, since entries are
    /// assigned rather than accumulated.
    ///
    /// # Examples
    ///
    /// ```
    /// use circulant_inverse::{OffsetTriple, SquareMatrix};
    ///
    /// let m = SquareMatrix::circulant(&OffsetTriple::new(0, 1, 2), 4);
    /// assert_eq!(m.row(0), &[1, 1, 1, 0]);
    /// assert_eq!(m.row(1), &[0, 1, 1, 1]);
    /// ```
    ///
    /// # Panics
    /// Panics when `size` is zero or an offset is not below `size`.
    pub fn circulant(triple: &OffsetTriple, size: usize) -> Self {
        assert!(triple.fits(size), "triple ({triple}) out of range for size {size}");
        Self::circulant_from_offsets(&triple.as_array(), size)
    }

    /// Binary circulant whose first row has ones at `offsets`; row `i` is
    /// the first row rotated right by `i`.
    ///
    /// # Panics
    /// Panics when `size` is zero or an offset is not below `size`.
    pub fn circulant_from_offsets(offsets: &[usize], size: usize) -> Self {
        let mut m = Self::zeros(size);
        for &offset in offsets {
            assert!(offset < size, "offset {offset} out of range for size {size}");
            for i in 0..size {
                m.set(i, (i + offset) % size, 1);
            }
        }
        m
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Entry {
        self.data[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Entry) {
        self.data[row * self.size + col] = value;
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[Entry] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Entry]> {
        self.data.chunks_exact(self.size)
    }

    /// Number of non-zero entries in each row.
    pub fn ones_per_row(&self) -> Vec<usize> {
        self.rows()
            .map(|r| r.iter().filter(|&&v| v != 0).count())
            .collect()
    }

    /// Schoolbook O(N³) product. Entries are not reduced.
    ///
    /// # Panics
    /// Panics when the operands differ in size.
    pub fn multiply(&self, other: &SquareMatrix) -> SquareMatrix {
        self.assert_same_size(other);
        let n = self.size;
        let mut result = Self::zeros(n);
        for i in 0..n {
            let lhs = self.row(i);
            for (k, &a) in lhs.iter().enumerate() {
                if a == 0 {
                    continue;
                }
                let rhs = other.row(k);
                let out = &mut result.data[i * n..(i + 1) * n];
                for (dst, &b) in out.iter_mut().zip(rhs) {
                    *dst += a * b;
                }
            }
        }
        result
    }

    /// Element-wise `entry mod m` (Euclidean, so the result is in `0..m`).
    ///
    /// # Panics
    /// Panics when `m` is not positive.
    pub fn reduce_mod(&self, m: Entry) -> SquareMatrix {
        assert!(m > 0, "modulus must be positive");
        SquareMatrix {
            size: self.size,
            data: self.data.iter().map(|v| v.rem_euclid(m)).collect(),
        }
    }

    /// Inverse over GF(2) by Gauss-Jordan elimination, or `None` when the
    /// matrix is singular mod 2.
    ///
    /// Entries are read mod 2; the result holds only zeros and ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use circulant_inverse::{OffsetTriple, SquareMatrix};
    ///
    /// let m = SquareMatrix::circulant(&OffsetTriple::new(0, 1, 2), 7);
    /// let inv = m.inverse_mod2().unwrap();
    /// assert_eq!(m.multiply(&inv).reduce_mod(2), SquareMatrix::identity(7));
    /// ```
    pub fn inverse_mod2(&self) -> Option<SquareMatrix> {
        let n = self.size;
        let mut left: Vec<Vec<bool>> = self
            .rows()
            .map(|r| r.iter().map(|v| v.rem_euclid(2) == 1).collect())
            .collect();
        let mut right: Vec<Vec<bool>> = (0..n)
            .map(|i| (0..n).map(|j| i == j).collect())
            .collect();

        for col in 0..n {
            let pivot = (col..n).find(|&r| left[r][col])?;
            left.swap(col, pivot);
            right.swap(col, pivot);

            let pivot_left = left[col].clone();
            let pivot_right = right[col].clone();
            for r in 0..n {
                if r == col || !left[r][col] {
                    continue;
                }
                for (dst, &src) in left[r].iter_mut().zip(&pivot_left) {
                    *dst ^= src;
                }
                for (dst, &src) in right[r].iter_mut().zip(&pivot_right) {
                    *dst ^= src;
                }
            }
        }

        Some(SquareMatrix {
            size: n,
            data: right.into_iter().flatten().map(Entry::from).collect(),
        })
    }

    /// Column indices of the non-zero entries of row `row`.
    pub fn row_support(&self, row: usize) -> Vec<usize> {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(|(j, _)| j)
            .collect()
    }

    /// Element-wise sum.
    pub fn add(&self, other: &SquareMatrix) -> SquareMatrix {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &SquareMatrix) -> SquareMatrix {
        self.zip_with(other, |a, b| a - b)
    }

    /// Split into the four `size/2` quadrants `(top-left, top-right, bottom-left, bottom-right)`.
    ///
    /// # Panics
    /// Panics when the size is odd.
    pub fn quadrants(&self) -> [SquareMatrix; 4] {
        assert!(self.size % 2 == 0, "cannot split odd size {}", self.size);
        let k = self.size / 2;
        let mut out = [
            Self::zeros(k),
            Self::zeros(k),
            Self::zeros(k),
            Self::zeros(k),
        ];
        for i in 0..k {
            for j in 0..k {
                out[0].set(i, j, self.get(i, j));
                out[1].set(i, j, self.get(i, j + k));
                out[2].set(i, j, self.get(i + k, j));
                out[3].set(i, j, self.get(i + k, j + k));
            }
        }
        out
    }

    /// Reassemble a matrix from four equally sized quadrants.
    pub fn from_quadrants(
        c11: &SquareMatrix,
        c12: &SquareMatrix,
        c21: &SquareMatrix,
        c22: &SquareMatrix,
    ) -> SquareMatrix {
        let k = c11.size;
        for q in [c12, c21, c22] {
            c11.assert_same_size(q);
        }
        let mut m = Self::zeros(2 * k);
        for i in 0..k {
            for j in 0..k {
                m.set(i, j, c11.get(i, j));
                m.set(i, j + k, c12.get(i, j));
                m.set(i + k, j, c21.get(i, j));
                m.set(i + k, j + k, c22.get(i, j));
            }
        }
        m
    }

    /// Copy into the top-left corner of a larger zero matrix.
    pub fn padded(&self, size: usize) -> SquareMatrix {
        assert!(size >= self.size, "cannot pad {} down to {}", self.size, size);
        let mut m = Self::zeros(size);
        for i in 0..self.size {
            m.data[i * size..i * size + self.size].copy_from_slice(self.row(i));
        }
        m
    }

    /// Top-left `size`×`size` block.
    pub fn cropped(&self, size: usize) -> SquareMatrix {
        assert!(size <= self.size, "cannot crop {} up to {}", self.size, size);
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.data[i * size..(i + 1) * size].copy_from_slice(&self.row(i)[..size]);
        }
        m
    }

    fn zip_with(&self, other: &SquareMatrix, f: impl Fn(Entry, Entry) -> Entry) -> SquareMatrix {
        self.assert_same_size(other);
        SquareMatrix {
            size: self.size,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    #[inline]
    fn assert_same_size(&self, other: &SquareMatrix) {
        assert_eq!(
            self.size, other.size,
            "matrix size mismatch: {} vs {}",
            self.size, other.size
        );
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for v in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
