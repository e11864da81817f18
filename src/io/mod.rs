//! Input/output helpers.
//!
//! - benchmark log parsing (`bench_log`)
//! - benchmark CSV export (`export`)
//! - search outcome JSON read/write (`outcome`)

pub mod bench_log;
pub mod export;
pub mod outcome;

pub use bench_log::*;
pub use export::*;
pub use outcome::*;
