//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - runs the parameter search or the log parser
//! - prints results and writes optional exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, ParseLogArgs, SearchArgs, ShowArgs};
use crate::domain::{SearchConfig, StepRange, target_for_bits};
use crate::error::AppError;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "kkw_params=warn";

/// Entry point for the `kkw` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Search(args) => handle_search(args),
        Command::ParseLog(args) => handle_parse_log(args),
        Command::Show(args) => handle_show(args),
    }
}

/// Logs go to stderr so stdout carries only results.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_search(args: SearchArgs) -> Result<(), AppError> {
    let config = search_config_from_args(&args);
    let outcome = crate::search::run_search(&config)?;

    println!("{}", crate::report::format_result(&outcome.best));
    if args.verbose {
        println!();
        print!("{}", crate::report::format_candidates(&outcome));
    }

    if let Some(path) = &args.export_json {
        crate::io::outcome::write_outcome_json(path, &outcome)?;
        info!(path = %path.display(), "wrote outcome JSON");
    }
    Ok(())
}

fn handle_parse_log(args: ParseLogArgs) -> Result<(), AppError> {
    let names = match &args.names {
        Some(path) => crate::io::bench_log::read_circuit_names(path)?,
        None => crate::io::bench_log::default_circuit_names(),
    };
    let rows = crate::io::bench_log::load_bench_log(&args.input, &names)?;
    crate::io::export::write_bench_csv(&args.output, &rows)?;

    println!("{}", crate::report::format_bench_summary(&rows, &args.output));
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let outcome = crate::io::outcome::read_outcome_json(&args.outcome)?;
    println!("{}", crate::report::format_result(&outcome.best));
    println!();
    print!("{}", crate::report::format_candidates(&outcome));
    Ok(())
}

pub fn search_config_from_args(args: &SearchArgs) -> SearchConfig {
    SearchConfig {
        parties: args.parties,
        target: target_for_bits(args.security_bits),
        m_range: StepRange::new(args.m_start, args.m_end, args.m_step),
        tau_range: StepRange::new(args.tau_start, args.tau_end, args.tau_step),
    }
}

/// Rewrite argv so `kkw` defaults to `kkw search`.
///
/// Rules:
/// - `kkw`                      -> `kkw search`
/// - `kkw --verbose ...`        -> `kkw search --verbose ...`
/// - `kkw --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("search".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "search".to_string());
    }
    argv
}
