//! Parameter search orchestration.
//!
//! Responsibilities:
//!
//! - enumerate `(M, tau)` pairs (`grid`)
//! - compute the worst-case soundness error of each pair (`soundness`)
//! - keep the pairs under the target and pick the best one (`selection`)

pub mod grid;
pub mod selection;
pub mod soundness;

pub use grid::*;
pub use selection::*;
pub use soundness::*;

use tracing::{debug, info};

use crate::domain::{Evaluation, SearchConfig, SearchOutcome};
use crate::error::AppError;

/// Evaluate every pair of the grid and select the best accepted one.
pub fn run_search(config: &SearchConfig) -> Result<SearchOutcome, AppError> {
    let grid = parameter_grid(config)?;

    let mut evaluations = Vec::with_capacity(grid.len());
    let mut candidates = Vec::new();

    for pair in grid {
        let worst_error = err(pair.m, pair.tau, config.parties);
        let accepted = worst_error < config.target;
        debug!(m = pair.m, tau = pair.tau, worst_error, accepted, "evaluated pair");
        if accepted {
            candidates.push(pair);
        }
        evaluations.push(Evaluation {
            candidate: pair,
            worst_error,
            accepted,
        });
    }

    let best = select_best(&candidates);
    info!(
        evaluated = evaluations.len(),
        accepted = candidates.len(),
        best = %best,
        "parameter search finished"
    );

    Ok(SearchOutcome {
        config: config.clone(),
        evaluations,
        candidates,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candidate, SENTINEL, StepRange, target_for_bits};

    #[test]
    fn default_search_picks_144_16() {
        let outcome = run_search(&SearchConfig::default()).unwrap();
        assert_eq!(outcome.evaluations.len(), 336);
        assert!(!outcome.best.is_sentinel());
        assert!(outcome.best.tau < 10000);
        assert_eq!(outcome.best, Candidate::new(144, 16));
    }

    #[test]
    fn every_candidate_is_under_target() {
        let config = SearchConfig::default();
        let outcome = run_search(&config).unwrap();
        assert!(!outcome.candidates.is_empty());
        for c in &outcome.candidates {
            assert!(err(c.m, c.tau, config.parties) < config.target, "{c}");
        }
        let accepted = outcome.evaluations.iter().filter(|e| e.accepted).count();
        assert_eq!(accepted, outcome.candidates.len());
    }

    #[test]
    fn search_is_deterministic() {
        let config = SearchConfig::default();
        assert_eq!(run_search(&config).unwrap(), run_search(&config).unwrap());
    }

    #[test]
    fn unreachable_target_keeps_sentinel() {
        let config = SearchConfig {
            m_range: StepRange::new(64, 72, 8),
            tau_range: StepRange::new(8, 9, 8),
            ..SearchConfig::default()
        };
        let outcome = run_search(&config).unwrap();
        assert_eq!(outcome.evaluations.len(), 1);
        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.best, SENTINEL);
    }

    #[test]
    fn looser_target_lowers_tau() {
        let config = SearchConfig {
            target: target_for_bits(20),
            ..SearchConfig::default()
        };
        let outcome = run_search(&config).unwrap();
        assert_eq!(outcome.best.tau, 8);
    }
}
