//! Command-line parsing for the KKW parameter search.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the search/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_PARTIES, DEFAULT_SECURITY_BITS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "kkw", version, about = "KKW soundness parameter search and benchmark log tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search (M, tau) for the fewest repetitions meeting the security target (default).
    Search(SearchArgs),
    /// Turn a benchmark log into a CSV of sizes and timings.
    ParseLog(ParseLogArgs),
    /// Print the candidate table of a previously exported search.
    Show(ShowArgs),
}

/// Search options. Defaults reproduce the standard n=16, 60-bit run.
#[derive(Debug, Args, Clone)]
pub struct SearchArgs {
    /// Simulated-party count n.
    #[arg(short = 'n', long, default_value_t = DEFAULT_PARTIES)]
    pub parties: u32,

    /// Statistical security in bits; the target error is 0.5^bits.
    #[arg(long, default_value_t = DEFAULT_SECURITY_BITS)]
    pub security_bits: i32,

    /// First party count M.
    #[arg(long, default_value_t = 64)]
    pub m_start: u32,

    /// Exclusive upper bound for M.
    #[arg(long, default_value_t = 512)]
    pub m_end: u32,

    #[arg(long, default_value_t = 8)]
    pub m_step: u32,

    /// First repetition count tau.
    #[arg(long, default_value_t = 8)]
    pub tau_start: u32,

    /// Exclusive upper bound for tau.
    #[arg(long, default_value_t = 50)]
    pub tau_end: u32,

    #[arg(long, default_value_t = 8)]
    pub tau_step: u32,

    /// Also print every accepted candidate.
    #[arg(short, long)]
    pub verbose: bool,

    /// Export the full outcome (config, evaluations, candidates, best) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            parties: DEFAULT_PARTIES,
            security_bits: DEFAULT_SECURITY_BITS,
            m_start: 64,
            m_end: 512,
            m_step: 8,
            tau_start: 8,
            tau_end: 50,
            tau_step: 8,
            verbose: false,
            export_json: None,
        }
    }
}

/// Log parsing options.
#[derive(Debug, Args, Clone)]
pub struct ParseLogArgs {
    /// Benchmark log to read.
    #[arg(short, long, default_value = "all_bench.txt")]
    pub input: PathBuf,

    /// CSV file to write.
    #[arg(short, long, default_value = "all_bench.csv")]
    pub output: PathBuf,

    /// Circuit names, one per line, in run order (defaults to the built-in suite).
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,
}

/// Options for printing a saved outcome.
#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Outcome JSON produced by `kkw search --export-json`.
    #[arg(value_name = "JSON")]
    pub outcome: PathBuf,
}
