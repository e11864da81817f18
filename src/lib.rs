//! `kkw-params` library crate.
//!
//! The binary (`kkw`) is a thin wrapper around this library so that:
//!
//! - the search and the log parser are testable without spawning processes
//! - the soundness estimator can be reused from other tooling

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod search;
