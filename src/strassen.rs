//! Strassen divide-and-conquer multiplication.
//!
//! Auxiliary to the inverse search: it is used to cross-check the
//! schoolbook [`SquareMatrix::multiply`], never by the search itself.
//!
//! Each level splits both operands into quadrants and forms seven
//! half-size products instead of eight:
//!
//! ```text
//! P1 = A11 (B12 - B22)        C11 = P5 + P4 + P6 - P2
//! P2 = (A11 + A12) B22        C12 = P1 + P2
//! P3 = (A21 + A22) B11        C21 = P3 + P4
//! P4 = A22 (B21 - B11)        C22 = P5 + P1 - P3 - P7
//! P5 = (A11 + A22)(B11 + B22)
//! P6 = (A12 - A22)(B21 + B22)
//! P7 = (A11 - A21)(B11 + B12)
//! ```
//!
//! Operands whose size is not a power of two are zero-padded up to the next
//! power of two and the product is cropped back.

use crate::matrix::SquareMatrix;

/// Product of two equally sized matrices via Strassen's recursion.
///
/// Agrees entry-for-entry with [`SquareMatrix::multiply`].
///
/// # Examples
///
/// ```
/// use circulant_inverse::{strassen_multiply, OffsetTriple, SquareMatrix};
///
/// let a = SquareMatrix::circulant(&OffsetTriple::new(0, 1, 2), 5);
/// let b = SquareMatrix::circulant(&OffsetTriple::new(1, 2, 4), 5);
/// assert_eq!(strassen_multiply(&a, &b), a.multiply(&b));
/// ```
///
/// # Panics
/// Panics when the operands differ in size.
pub fn strassen_multiply(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    assert_eq!(
        a.size(),
        b.size(),
        "matrix size mismatch: {} vs {}",
        a.size(),
        b.size()
    );
    let n = a.size();
    let padded = n.next_power_of_two();
    if padded == n {
        return recurse(a, b);
    }
    recurse(&a.padded(padded), &b.padded(padded)).cropped(n)
}

fn recurse(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    if a.size() == 1 {
        return SquareMatrix::from_rows(1, vec![a.get(0, 0) * b.get(0, 0)]);
    }

    let [a11, a12, a21, a22] = a.quadrants();
    let [b11, b12, b21, b22] = b.quadrants();

    let p1 = recurse(&a11, &b12.sub(&b22));
    let p2 = recurse(&a11.add(&a12), &b22);
    let p3 = recurse(&a21.add(&a22), &b11);
    let p4 = recurse(&a22, &b21.sub(&b11));
    let p5 = recurse(&a11.add(&a22), &b11.add(&b22));
    let p6 = recurse(&a12.sub(&a22), &b21.add(&b22));
    let p7 = recurse(&a11.sub(&a21), &b11.add(&b12));

    let c11 = p5.add(&p4).add(&p6).sub(&p2);
    let c12 = p1.add(&p2);
    let c21 = p3.add(&p4);
    let c22 = p5.add(&p1).sub(&p3).sub(&p7);

    SquareMatrix::from_quadrants(&c11, &c12, &c21, &c22)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::OffsetTriple;

    #[test]
    fn test_base_case() {
        let a = SquareMatrix::from_rows(1, vec![1]);
        let b = SquareMatrix::from_rows(1, vec![1]);
        assert_eq!(strassen_multiply(&a, &b).get(0, 0), 1);
    }

    #[test]
    fn test_two_by_two() {
        let a = SquareMatrix::from_rows(2, vec![1, 2, 3, 4]);
        let b = SquareMatrix::from_rows(2, vec![5, 6, 7, 8]);
        assert_eq!(
            strassen_multiply(&a, &b),
            SquareMatrix::from_rows(2, vec![19, 22, 43, 50])
        );
    }

    #[test]
    fn test_matches_schoolbook_at_32() {
        let a = SquareMatrix::circulant(&OffsetTriple::new(15, 28, 31), 32);
        let b = SquareMatrix::circulant(&OffsetTriple::new(4, 7, 23), 32);
        let fast = strassen_multiply(&a, &b);
        let slow = a.multiply(&b);
        assert_eq!(fast, slow);
        assert_eq!(&slow.row(0)[..7], &[1, 0, 0, 2, 0, 0, 2]);
    }

    #[test]
    fn test_odd_sizes_are_padded() {
        for n in [3, 5, 6, 7, 12] {
            let a = SquareMatrix::circulant(&OffsetTriple::new(0, 1, 2), n);
            let b = SquareMatrix::identity(n);
            assert_eq!(strassen_multiply(&a, &b), a, "size {n}");
        }
    }
}
