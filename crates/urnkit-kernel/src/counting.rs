//! Exact closed-form cardinalities.
//!
//! These helpers return the mathematical values. The zero-draws
//! convention (a model with `k == 0` reports a count of 0) is applied
//! by [`crate::model::Urn::count`], not here.
//!
//! All arithmetic is exact over `u64`; callers are expected to keep
//! `n^k` within `u64` range.

/// n^k.
pub fn power(n: u32, k: u32) -> u64 {
    (n as u64).pow(k)
}

/// The falling factorial n · (n−1) · … · (n−k+1).
///
/// This is the number of ordered draws without repetition, n!/(n−k)!.
/// Requires `k <= n`; the model validates that before calling.
pub fn falling_factorial(n: u32, k: u32) -> u64 {
    let n = n as u64;
    let k = k as u64;
    (0..k).map(|i| n - i).product()
}

/// The binomial coefficient C(n, k), evaluated multiplicatively.
///
/// Each intermediate product C(n−k+i, i) is itself a binomial
/// coefficient, so every division is exact.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let n = n as u64;
    let k = k as u64;
    let mut result = 1u64;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

/// The multiset coefficient C(n+k−1, k): unordered draws with
/// repetition from n labels.
pub fn multiset(n: u32, k: u32) -> u64 {
    if n == 0 {
        return 0;
    }
    binomial(n + k - 1, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_basics() {
        assert_eq!(power(2, 2), 4);
        assert_eq!(power(3, 3), 27);
        assert_eq!(power(10, 0), 1);
        assert_eq!(power(0, 3), 0);
    }

    #[test]
    fn falling_factorial_basics() {
        assert_eq!(falling_factorial(3, 3), 6);
        assert_eq!(falling_factorial(5, 2), 20);
        assert_eq!(falling_factorial(4, 0), 1);
    }

    #[test]
    fn binomial_basics() {
        assert_eq!(binomial(4, 3), 4);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(3, 0), 1);
        assert_eq!(binomial(2, 3), 0);
        // exact for values where naive factorials would overflow
        assert_eq!(binomial(60, 30), 118_264_581_564_861_424);
    }

    #[test]
    fn multiset_basics() {
        assert_eq!(multiset(3, 2), 6);
        assert_eq!(multiset(2, 3), 4);
        assert_eq!(multiset(0, 2), 0);
    }
}
