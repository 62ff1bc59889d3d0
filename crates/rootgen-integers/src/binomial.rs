//! Exact binomial coefficients.
//!
//! Bernstein weights are binomial coefficients; they are computed here in
//! arbitrary precision so that no floating point value ever reaches a
//! curve formula.

use num_traits::One;

use crate::integer::Integer;

/// Computes `C(n, k)` exactly.
///
/// Returns zero when `k > n`.
#[must_use]
pub fn binomial(n: u32, k: u32) -> Integer {
    if k > n {
        return Integer::new(0);
    }
    let k = k.min(n - k);
    let mut res = Integer::one();
    for i in 0..k {
        // Each partial product is C(n, i + 1), so the division is exact.
        res = res * Integer::from(n - i) / Integer::from(i + 1);
    }
    res
}
