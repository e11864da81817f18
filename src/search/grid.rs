//! Parameter grid generation.
//!
//! The search is a deterministic sweep over `(M, tau)`: M in the outer loop,
//! tau in the inner loop, both half-open stepped ranges.

use crate::domain::{Candidate, SearchConfig};
use crate::error::AppError;

/// All `(M, tau)` pairs of a config, outer loop over M.
pub fn parameter_grid(config: &SearchConfig) -> Result<Vec<Candidate>, AppError> {
    config.validate()?;

    let mut out = Vec::with_capacity(config.m_range.len() * config.tau_range.len());
    for m in config.m_range.iter() {
        for tau in config.tau_range.iter() {
            out.push(Candidate::new(m, tau));
        }
    }
    Ok(out)
}
