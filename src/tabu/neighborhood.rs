//! Single-bit-flip neighborhood generation.

use crate::knapsack::Solution;

/// Generates the first `count` single-bit-flip neighbors of a packing.
///
/// Neighbor `i` equals `solution` with bit `i` flipped and every other bit
/// unchanged, for `i` in `0..count`, so a neighbor's index in the returned
/// sequence is also the bit position it flips. The full neighborhood of an
/// `n`-item packing is `flip_neighbors(solution, n)`.
///
/// # Panics
///
/// Panics if `count` exceeds the solution length.
pub fn flip_neighbors(solution: &[bool], count: usize) -> Vec<Solution> {
    assert!(
        count <= solution.len(),
        "neighbor count {count} exceeds solution length {}",
        solution.len()
    );
    (0..count)
        .map(|pos| {
            let mut neighbor = solution.to_vec();
            neighbor[pos] = !neighbor[pos];
            neighbor
        })
        .collect()
}

/// Index of the first bit at which two packings differ.
///
/// Returns `None` for identical packings. For a packing and one of its
/// flip neighbors this recovers the flipped bit.
pub fn flipped_bit(a: &[bool], b: &[bool]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}
