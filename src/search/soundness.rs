//! Soundness error of KKW-style cut-and-choose.
//!
//! With `M` preprocessing executions of which `tau` are opened online, an
//! adversary cheating in `M - rho` of them escapes detection with probability
//!
//! ```text
//! C(rho, M - tau) / C(M, M - tau) / n^(rho - M + tau)
//! ```
//!
//! where `n` is the number of simulated parties per execution. The attack
//! parameter `rho` ranges over `[M - tau + 1, M]`; the soundness error of a
//! `(M, tau)` pair is the maximum over that range.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::math::{binomial, ratio_to_f64};

/// Outcome of evaluating one soundness term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probability {
    Finite(f64),
    /// Some step of the term does not fit in an `f64`.
    Unrepresentable,
}

impl Probability {
    /// Unrepresentable terms count as zero when maximizing.
    pub fn value_or_zero(self) -> f64 {
        match self {
            Probability::Finite(p) => p,
            Probability::Unrepresentable => 0.0,
        }
    }
}

/// Cheating probability for a single attack parameter `rho`.
///
/// Callers must keep `tau <= m` and `m - tau < rho <= m`.
pub fn err_sg(m: u32, tau: u32, n: u32, rho: u32) -> Probability {
    let a = binomial(rho, m - tau);
    let b = binomial(m, m - tau);
    // rho - m + tau, ordered so the u32 arithmetic never dips below zero.
    let c = BigUint::from(n).pow(rho + tau - m);

    let Some(d) = ratio_to_f64(&a, &b) else {
        return Probability::Unrepresentable;
    };
    let Some(c) = c.to_f64().filter(|v| v.is_finite()) else {
        return Probability::Unrepresentable;
    };

    let e = d / c;
    if e.is_finite() {
        Probability::Finite(e)
    } else {
        Probability::Unrepresentable
    }
}

/// Attack parameters scanned for a `(m, tau)` pair.
pub fn rho_range(m: u32, tau: u32) -> std::ops::RangeInclusive<u32> {
    (m - tau + 1)..=m
}

/// Worst-case soundness error over every attack parameter.
pub fn err(m: u32, tau: u32, n: u32) -> f64 {
    let mut base = 0.0;
    for rho in rho_range(m, tau) {
        let ret = err_sg(m, tau, n, rho).value_or_zero();
        if ret > base {
            base = ret;
        }
    }
    base
}
