//! Admissible-neighbor selection.

use super::neighborhood::flipped_bit;
use super::types::TabuMemory;
use crate::knapsack::Solution;

/// Picks the neighbor the search loop should consider accepting.
///
/// The candidate is the first neighbor attaining the maximum value, so ties
/// break toward the lowest index. With an empty memory the candidate is
/// returned unconditionally. Otherwise the bit flipped to produce the
/// candidate is recovered by comparison against the incumbent, and if it is
/// the forbidden bit the choice is redirected to a fallback: a running best
/// starting at index 0 that scans indices `1..`, skipping the index equal
/// to the forbidden bit and advancing only on strictly greater values.
///
/// The fallback skips by neighbor *index*, not by which bit a neighbor
/// flips. The two coincide because [`flip_neighbors`] makes neighbor `i`
/// flip bit `i`; the scan relies on that ordering and must not be reused
/// with any other neighborhood layout.
///
/// [`flip_neighbors`]: super::flip_neighbors
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn select_neighbor(
    values: &[i64],
    memory: &TabuMemory,
    incumbent: &[bool],
    neighbors: &[Solution],
) -> usize {
    assert!(!values.is_empty(), "selection requires at least one neighbor");

    // first index attaining the maximum value
    let mut pos = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[pos] {
            pos = i;
        }
    }

    let Some(forbidden) = memory.forbidden_bit() else {
        return pos;
    };

    if flipped_bit(incumbent, &neighbors[pos]) == Some(forbidden) {
        let mut fallback = 0;
        for (i, &value) in values.iter().enumerate().skip(1) {
            if i != forbidden && value > values[fallback] {
                fallback = i;
            }
        }
        return fallback;
    }

    pos
}
