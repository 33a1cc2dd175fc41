//! Combination enumeration.
//!
//! Produces every ascending k-subset of `0..n` in lexicographic order:
//! `(0,1,2), (0,1,3), ..., (0,1,n-1), (0,2,3), ...`. This is the same order
//! as walking a `k`-ones-then-zeros selection mask through successive
//! lexicographically smaller permutations, and it is stable for a given `n`.
//! The order decides which inverse is reported first when several exist.

use crate::triple::OffsetTriple;

/// Number of k-subsets of an n-set.
///
/// # Examples
///
/// ```
/// use circulant_inverse::combinations::binomial;
///
/// assert_eq!(binomial(4, 3), 4);
/// assert_eq!(binomial(32, 3), 4960);
/// assert_eq!(binomial(2, 3), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Exact at every step: the running product of i consecutive integers
    // is divisible by i!.
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

/// All ascending k-subsets of `0..n`, fully materialized, lexicographic order.
///
/// `k == 0` yields a single empty subset; `k > n` yields nothing.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::with_capacity(binomial(n, k));
    if k > n {
        return out;
    }

    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());

        // Rightmost position that can still advance.
        let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            break;
        };
        idx[pos] += 1;
        for i in pos + 1..k {
            idx[i] = idx[i - 1] + 1;
        }
    }
    out
}

/// Every size-3 subset of `0..n` as an [`OffsetTriple`], in enumeration order.
///
/// # Examples
///
/// ```
/// use circulant_inverse::combinations::enumerate_triples;
///
/// let triples = enumerate_triples(4);
/// let text: Vec<String> = triples.iter().map(|t| t.to_string()).collect();
/// assert_eq!(text, ["0, 1, 2", "0, 1, 3", "0, 2, 3", "1, 2, 3"]);
/// ```
pub fn enumerate_triples(n: usize) -> Vec<OffsetTriple> {
    combinations(n, 3)
        .into_iter()
        .map(|c| OffsetTriple::new(c[0], c[1], c[2]))
        .collect()
}
