//! Exact binomial coefficients.
//!
//! Soundness terms divide binomials of the form `C(M, M - tau)` with `M` up to
//! a few hundred. Those exceed `u128` quickly (e.g. `C(504, 48) ~ 2^226`), so we
//! compute over `BigUint` and only convert to `f64` once a ratio is formed.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// `C(n, r)` computed exactly.
///
/// Uses `min(r, n - r)` factors. Returns zero when `r > n`.
pub fn binomial(n: u32, r: u32) -> BigUint {
    if r > n {
        return BigUint::zero();
    }
    let r = r.min(n - r);

    // Multiplying and dividing in lockstep keeps every intermediate an exact
    // binomial: after step i the accumulator equals C(n - r + i, i).
    let mut acc = BigUint::one();
    for i in 1..=r {
        acc *= n - r + i;
        acc /= i;
    }
    acc
}

/// Significant bits kept from each operand before converting to `f64`.
const KEPT_BITS: u64 = 1000;

/// Largest power-of-two step applied at once while rescaling; `2^1000` is a normal `f64`.
const SCALE_STEP: i64 = 1000;

/// `numer / denom` as `f64`, without losing the ratio when either operand
/// overflows `f64` on its own.
///
/// Returns `None` when the quotient itself is not representable (or `denom` is zero).
pub fn ratio_to_f64(numer: &BigUint, denom: &BigUint) -> Option<f64> {
    if denom.is_zero() {
        return None;
    }

    // Each operand is truncated to its own top bits, then the quotient is
    // rescaled by 2^(sn - sd).
    let sn = numer.bits().saturating_sub(KEPT_BITS);
    let sd = denom.bits().saturating_sub(KEPT_BITS);
    let n = (numer >> sn).to_f64()?;
    let d = (denom >> sd).to_f64()?;
    let mut q = n / d;

    // Every step moves in the same direction, so an intermediate overflow
    // means the final value overflows too.
    let mut exp = sn as i64 - sd as i64;
    while exp != 0 && q != 0.0 && q.is_finite() {
        let step = exp.clamp(-SCALE_STEP, SCALE_STEP);
        q *= 2f64.powi(step as i32);
        exp -= step;
    }
    q.is_finite().then_some(q)
}
