//! Binomial coefficient computation
//!
//! Uses the multiplicative formula rather than factorials so that C(n, k)
//! stays accurate for pools of a few hundred numbers without overflowing.

/// Compute the binomial coefficient C(n, k).
///
/// Accumulates `∏ (n-i)/(i+1)` over `min(k, n-k)` iterations in f64 and
/// rounds the result. `k > n` is defined as 0 combinations, not an error.
///
/// Accurate for n up to a few hundred and k up to ~50, which covers every
/// pool size the resource guards admit.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }

    // Symmetry: C(n, k) = C(n, n-k); iterate over the smaller side
    let k = k.min(n - k);

    let mut acc = 1.0_f64;
    for i in 0..k {
        acc = acc * ((n - i) as f64) / ((i + 1) as f64);
    }

    acc.round() as u64
}
