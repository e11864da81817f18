//! Domain types used throughout the search and the log parser.
//!
//! This module defines:
//!
//! - parameter pairs and the sentinel best-result (`Candidate`, `SENTINEL`)
//! - search inputs and outputs (`SearchConfig`, `StepRange`, `SearchOutcome`)
//! - benchmark table rows (`BenchRow`)

pub mod types;

pub use types::*;
