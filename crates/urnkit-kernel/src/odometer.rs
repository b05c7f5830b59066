//! The base odometer: length-k tuples over `[0, n)` in lexicographic,
//! rightmost-fastest order.
//!
//! Every urn kind's canonical order is this order restricted to the
//! kind's accepted subset, so stepping and unranking for all four
//! kinds bottom out here.

use crate::error::UrnError;

/// A draw: an ordered tuple of slot indices.
pub type Draw = Vec<u32>;

/// Whether `draw` lies in the base domain: exactly `k` digits, each
/// below `n`.
pub fn in_domain(n: u32, k: u32, draw: &[u32]) -> bool {
    draw.len() == k as usize && draw.iter().all(|&digit| digit < n)
}

/// Odometer increment: find the rightmost digit below `n − 1`,
/// increment it, zero everything to its right.
///
/// Fails with [`UrnError::OverflowAtEnd`] on the maximal tuple (every
/// digit `n − 1`) and on empty draws.
pub fn step_up(n: u32, draw: &mut Draw) -> Result<(), UrnError> {
    for down in (0..draw.len()).rev() {
        if draw[down] < n - 1 {
            draw[down] += 1;
            for digit in &mut draw[down + 1..] {
                *digit = 0;
            }
            return Ok(());
        }
    }
    Err(UrnError::OverflowAtEnd)
}

/// Odometer decrement: find the rightmost nonzero digit, decrement it,
/// set everything to its right to `n − 1`.
///
/// Fails with [`UrnError::UnderflowAtStart`] on the all-zero tuple and
/// on empty draws.
pub fn step_down(n: u32, draw: &mut Draw) -> Result<(), UrnError> {
    if draw.iter().all(|&digit| digit == 0) {
        return Err(UrnError::UnderflowAtStart);
    }
    for down in (0..draw.len()).rev() {
        if draw[down] != 0 {
            draw[down] -= 1;
            return Ok(());
        }
        draw[down] = n - 1;
    }
    unreachable!("a nonzero digit exists");
}

/// Mixed-radix (base-n) decomposition of an ordinal into `k` digits,
/// first tuple position varying slowest. O(k).
pub fn unrank_base(n: u32, k: u32, ordinal: u64) -> Draw {
    let mut draw = vec![0u32; k as usize];
    let mut rest = ordinal;
    for digit in draw.iter_mut().rev() {
        *digit = (rest % n as u64) as u32;
        rest /= n as u64;
    }
    draw
}
