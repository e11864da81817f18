//! Best-candidate selection.
//!
//! Repetitions dominate proof size, so the pair with the fewest repetitions
//! wins; among equal tau the smaller party count wins.
//!
//! Each entry applies two updates in order:
//! 1. a strictly smaller tau replaces the current best
//! 2. then, against the possibly replaced best, an equal tau with a strictly
//!    smaller M replaces it
//!
//! After (1) fires, (2) compares the entry with itself and cannot fire, so the
//! scan ends on the lexicographic minimum of `(tau, M)`, keeping the first of
//! any exact duplicates.

use crate::domain::{Candidate, SENTINEL};

/// Scan `candidates` once, starting from [`SENTINEL`].
///
/// Returns the sentinel unchanged when `candidates` is empty.
pub fn select_best(candidates: &[Candidate]) -> Candidate {
    let mut best = SENTINEL;
    for tp in candidates {
        if tp.tau < best.tau {
            best = *tp;
        }
        if tp.m < best.m && tp.tau == best.tau {
            best = *tp;
        }
    }
    best
}
