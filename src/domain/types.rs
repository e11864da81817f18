//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so a search
//! run can be printed, exported to JSON, or compared across runs.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default number of simulated parties per repetition.
pub const DEFAULT_PARTIES: u32 = 16;

/// Default statistical security level in bits (target = `0.5^60`).
pub const DEFAULT_SECURITY_BITS: i32 = 60;

/// A `(M, tau)` parameter pair: party count and repetition count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub m: u32,
    pub tau: u32,
}

impl Candidate {
    pub const fn new(m: u32, tau: u32) -> Self {
        Self { m, tau }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == SENTINEL
    }
}

/// Starting value of the best-result holder; loses to every real candidate.
pub const SENTINEL: Candidate = Candidate::new(10000, 10000);

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.m, self.tau)
    }
}

/// Half-open stepped range `[start, end)`, visiting `start, start+step, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRange {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl StepRange {
    pub const fn new(start: u32, end: u32, step: u32) -> Self {
        Self { start, end, step }
    }

    /// Check the range is non-empty and advances.
    pub fn validate(&self, label: &str) -> Result<(), AppError> {
        if self.step == 0 {
            return Err(AppError::input(format!("{label} step must be > 0.")));
        }
        if self.start >= self.end {
            return Err(AppError::input(format!(
                "Invalid {label} range: start={} end={} (must have start < end).",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn iter(self) -> impl Iterator<Item = u32> {
        let step = self.step.max(1) as usize;
        (self.start..self.end).step_by(step)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest value the range visits.
    pub fn last(&self) -> Option<u32> {
        self.iter().last()
    }
}

/// Inputs of one parameter search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Simulated-party count `n`.
    pub parties: u32,
    /// Acceptance threshold: a pair is kept when its worst-case error is strictly below this.
    pub target: f64,
    pub m_range: StepRange,
    pub tau_range: StepRange,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parties: DEFAULT_PARTIES,
            target: target_for_bits(DEFAULT_SECURITY_BITS),
            m_range: StepRange::new(64, 512, 8),
            tau_range: StepRange::new(8, 50, 8),
        }
    }
}

impl SearchConfig {
    /// Reject configurations whose binomial arguments would be ill-formed.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.parties < 2 {
            return Err(AppError::input(format!(
                "Simulated-party count must be >= 2 (got {}).",
                self.parties
            )));
        }
        if !(self.target.is_finite() && self.target > 0.0) {
            return Err(AppError::input(format!(
                "Target error must be finite and > 0 (got {}).",
                self.target
            )));
        }
        self.m_range.validate("M")?;
        self.tau_range.validate("tau")?;
        if self.m_range.start == 0 || self.tau_range.start == 0 {
            return Err(AppError::input("M and tau ranges must start at >= 1."));
        }

        // Every visited tau must be <= every visited M so that `M - tau` is non-negative.
        let tau_max = self.tau_range.last().unwrap_or(self.tau_range.start);
        if tau_max > self.m_range.start {
            return Err(AppError::input(format!(
                "Largest tau ({tau_max}) exceeds smallest M ({}).",
                self.m_range.start
            )));
        }
        Ok(())
    }
}

/// `0.5^bits`.
pub fn target_for_bits(bits: i32) -> f64 {
    0.5f64.powi(bits)
}

/// Worst-case error of one visited pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate: Candidate,
    pub worst_error: f64,
    pub accepted: bool,
}

/// Everything a search run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub config: SearchConfig,
    pub evaluations: Vec<Evaluation>,
    /// Accepted pairs, in search order.
    pub candidates: Vec<Candidate>,
    pub best: Candidate,
}

/// One row of the benchmark table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRow {
    #[serde(rename = "Circuit Name")]
    pub circuit: String,
    #[serde(rename = "Size (bytes)")]
    pub size_bytes: u64,
    #[serde(rename = "Time (ms)")]
    pub time_ms: f64,
}
