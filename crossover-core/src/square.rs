//! Latin square construction
//!
//! A Latin square of order k is a k×k table where every row and every
//! column is a permutation of the symbols [0, k). The cyclic construction
//! cell(i, j) = (i + j) mod k guarantees this by construction, so the
//! balance property of the design never depends on a random seed.

use serde::{Deserialize, Serialize};

/// A k×k Latin square over the symbols [0, k).
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatinSquare {
    order: usize,
    rows: Vec<Vec<usize>>,
}

impl LatinSquare {
    /// Build the cyclic Latin square of the given order.
    ///
    /// Row i is the sequence (i, i+1, …, i+k-1) mod k, a permutation of
    /// [0, k) because mod k is bijective on k consecutive integers; columns
    /// are permutations by the symmetric argument. Order 0 yields the empty
    /// square; callers that need a non-degenerate design must reject it.
    pub fn cyclic(order: usize) -> Self {
        let rows = (0..order)
            .map(|i| (0..order).map(|j| (i + j) % order).collect())
            .collect();
        Self { order, rows }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// The r-th row, a permutation of [0, order).
    ///
    /// # Panics
    /// Panics if `r >= order`.
    pub fn row(&self, r: usize) -> &[usize] {
        &self.rows[r]
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Check the Latin property: every row and every column is a
    /// permutation of [0, order). Always true for [`cyclic`](Self::cyclic);
    /// kept as a test oracle.
    pub fn is_valid(&self) -> bool {
        let k = self.order;
        if self.rows.len() != k || self.rows.iter().any(|row| row.len() != k) {
            return false;
        }

        for row in &self.rows {
            let mut seen = vec![false; k];
            for &v in row {
                if v >= k || seen[v] {
                    return false;
                }
                seen[v] = true;
            }
        }

        for c in 0..k {
            let mut seen = vec![false; k];
            for row in &self.rows {
                let v = row[c];
                if v >= k || seen[v] {
                    return false;
                }
                seen[v] = true;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_cells_match_formula() {
        let square = LatinSquare::cyclic(4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(square.row(i)[j], (i + j) % 4);
            }
        }
    }

    #[test]
    fn test_cyclic_squares_are_valid() {
        for k in 1..=8 {
            let square = LatinSquare::cyclic(k);
            assert_eq!(square.order(), k);
            assert!(square.is_valid(), "cyclic square of order {} invalid", k);
        }
    }

    #[test]
    fn test_order_one_is_trivial() {
        let square = LatinSquare::cyclic(1);
        assert_eq!(square.row(0), &[0]);
        assert!(square.is_valid());
    }

    #[test]
    fn test_order_zero_is_empty() {
        let square = LatinSquare::cyclic(0);
        assert_eq!(square.order(), 0);
        assert_eq!(square.rows().count(), 0);
        assert!(square.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_repeated_column_entry() {
        // Rows are permutations but column 0 repeats a symbol
        let broken = LatinSquare {
            order: 2,
            rows: vec![vec![0, 1], vec![0, 1]],
        };
        assert!(!broken.is_valid());
    }
}
