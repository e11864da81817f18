//! Formatted terminal output for search runs and benchmark tables.
//!
//! We keep formatting code in one place so:
//! - the search/parsing code stays clean and testable
//! - output changes are localized

use crate::domain::{BenchRow, Candidate, SearchOutcome};

/// Printed once the grid has been fully evaluated.
pub const FINISH_MESSAGE: &str = "finish computing";

/// The two-line result: progress message, then the selected pair.
pub fn format_result(best: &Candidate) -> String {
    format!("{FINISH_MESSAGE}\n{best}")
}

/// Run settings plus the accepted candidates, best one starred.
pub fn format_candidates(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    let config = &outcome.config;

    out.push_str(&format!(
        "n={} | target=2^{:.1} | M=[{}, {}) step {} | tau=[{}, {}) step {}\n",
        config.parties,
        config.target.log2(),
        config.m_range.start,
        config.m_range.end,
        config.m_range.step,
        config.tau_range.start,
        config.tau_range.end,
        config.tau_range.step,
    ));
    out.push_str(&format!(
        "Evaluated {} pairs, accepted {}\n",
        outcome.evaluations.len(),
        outcome.candidates.len()
    ));

    if outcome.candidates.is_empty() {
        out.push_str("No pair reaches the target.\n");
        return out;
    }

    out.push_str(&format!("{:<2}{:>6} {:>6} {:>14}\n", "", "M", "tau", "log2(err)"));
    out.push_str(&format!("{:<2}{:->6} {:->6} {:->14}\n", "", "", "", ""));
    for eval in outcome.evaluations.iter().filter(|e| e.accepted) {
        let mark = if eval.candidate == outcome.best { "*" } else { "" };
        out.push_str(&format!(
            "{:<2}{:>6} {:>6} {:>14}\n",
            mark,
            eval.candidate.m,
            eval.candidate.tau,
            fmt_log2(eval.worst_error),
        ));
    }
    out
}

/// One-line summary after writing a benchmark CSV.
pub fn format_bench_summary(rows: &[BenchRow], output: &std::path::Path) -> String {
    let total_ms: f64 = rows.iter().map(|r| r.time_ms).sum();
    format!(
        "Wrote {} rows to {} (total {:.2} ms)",
        rows.len(),
        output.display(),
        total_ms
    )
}

fn fmt_log2(p: f64) -> String {
    if p > 0.0 {
        format!("{:.2}", p.log2())
    } else {
        "-inf".to_string()
    }
}
