//! Benchmark log parsing.
//!
//! The prover prints, per circuit, a serialized-size line followed by a timing
//! line:
//!
//! ```text
//! The size of the serialized object is 183402 bytes
//! Elapsed: 812.43ms
//! ```
//!
//! Circuits are run in a fixed order, so entries are matched to names by
//! position. Timings are `Duration` debug output and may carry `ns`, `µs`,
//! `ms` or `s`; they are normalized to milliseconds.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::domain::BenchRow;
use crate::error::AppError;

const SIZE_PREFIX: &str = "The size of the serialized object";
const ELAPSED_PREFIX: &str = "Elapsed";

/// Circuit names in the order the benchmark script runs them.
pub const DEFAULT_CIRCUIT_NAMES: [&str; 25] = [
    "amortized_aco_512_12.txt",
    "amortized_aco_128_9.txt",
    "amortized_aco_128_8.txt",
    "amortized_aco_64_8.txt",
    "amortized_aco_64_9.txt",
    "amortized_aco_256_9.txt",
    "amortized_aco_256_10.txt",
    "amortized_aco_512_7.txt",
    "amortized_aco_512_11.txt",
    "amortized_aco_512_9.txt",
    "amortized_aco_128_10.txt",
    "amortized_aco_128_11.txt",
    "amortized_aco_128_12.txt",
    "amortized_aco_256_12.txt",
    "amortized_aco_256_11.txt",
    "amortized_aco_256_8.txt",
    "amortized_aco_64_12.txt",
    "amortized_aco_512_10.txt",
    "amortized_aco_64_11.txt",
    "amortized_aco_128_7.txt",
    "amortized_aco_512_8.txt",
    "amortized_aco_256_7.txt",
    "amortized_aco_64_7.txt",
    "amortized_aco_64_10.txt",
    "amortized_akv.txt",
];

pub fn default_circuit_names() -> Vec<String> {
    DEFAULT_CIRCUIT_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Read circuit names from a file, one per line (blank lines skipped).
pub fn read_circuit_names(path: &Path) -> Result<Vec<String>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read names file '{}': {e}", path.display())))?;
    let names: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(AppError::input(format!("Names file '{}' is empty.", path.display())));
    }
    Ok(names)
}

/// Read and parse a benchmark log file.
pub fn load_bench_log(path: &Path, names: &[String]) -> Result<Vec<BenchRow>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read log '{}': {e}", path.display())))?;
    parse_bench_log(&text, names)
}

/// Parse log text into one row per circuit name.
pub fn parse_bench_log(text: &str, names: &[String]) -> Result<Vec<BenchRow>, AppError> {
    let patterns = LinePatterns::new()?;
    let mut rows = Vec::with_capacity(names.len());
    // Entry whose size has been seen but whose time has not.
    let mut open: Option<(String, u64)> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if line.starts_with(SIZE_PREFIX) {
            if let Some((circuit, _)) = &open {
                return Err(AppError::input(format!(
                    "Line {line_no}: size line before the timing of '{circuit}'."
                )));
            }
            let Some(circuit) = names.get(rows.len()) else {
                return Err(AppError::input(format!(
                    "Line {line_no}: more size lines than circuit names ({}).",
                    names.len()
                )));
            };
            let size = patterns.size_bytes(line, line_no)?;
            open = Some((circuit.clone(), size));
        } else if line.starts_with(ELAPSED_PREFIX) {
            let Some((circuit, size_bytes)) = open.take() else {
                return Err(AppError::input(format!(
                    "Line {line_no}: timing line without a preceding size line."
                )));
            };
            let time_ms = patterns.elapsed_ms(line, line_no)?;
            debug!(circuit = %circuit, size_bytes, time_ms, "parsed benchmark entry");
            rows.push(BenchRow {
                circuit,
                size_bytes,
                time_ms,
            });
        }
    }

    if let Some((circuit, _)) = open {
        return Err(AppError::input(format!("Log ends before the timing of '{circuit}'.")));
    }
    if rows.len() < names.len() {
        return Err(AppError::input(format!(
            "Log has {} complete entries but {} circuit names are expected.",
            rows.len(),
            names.len()
        )));
    }
    Ok(rows)
}

/// Number patterns for size and timing lines.
struct LinePatterns {
    size: Regex,
    elapsed: Regex,
}

impl LinePatterns {
    fn new() -> Result<Self, AppError> {
        let size = Regex::new(r"[0-9]+")
            .map_err(|e| AppError::input(format!("Invalid size pattern: {e}")))?;
        let elapsed = Regex::new(r"([0-9.]+)\s*(ns|µs|us|ms|s)?")
            .map_err(|e| AppError::input(format!("Invalid timing pattern: {e}")))?;
        Ok(Self { size, elapsed })
    }

    /// First integer on the line.
    fn size_bytes(&self, line: &str, line_no: usize) -> Result<u64, AppError> {
        let found = self
            .size
            .find(line)
            .ok_or_else(|| AppError::input(format!("Line {line_no}: no size value in '{line}'.")))?;
        found.as_str().parse().map_err(|_| {
            AppError::input(format!(
                "Line {line_no}: size {} out of range.",
                found.as_str()
            ))
        })
    }

    /// First number on the line, scaled to milliseconds by the unit right after it.
    fn elapsed_ms(&self, line: &str, line_no: usize) -> Result<f64, AppError> {
        let caps = self
            .elapsed
            .captures(line)
            .ok_or_else(|| AppError::input(format!("Line {line_no}: no timing value in '{line}'.")))?;
        let value: f64 = caps[1].parse().map_err(|_| {
            AppError::input(format!("Line {line_no}: invalid timing value '{}'.", &caps[1]))
        })?;
        let scale = match caps.get(2).map(|u| u.as_str()) {
            Some("ns") => 1e-6,
            Some("µs") | Some("us") => 1e-3,
            Some("s") => 1e3,
            _ => 1.0,
        };
        Ok(value * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_interleaved_entries_in_name_order() {
        let log = "\
#gates: 10, #wires: 20
The size of the serialized object is 1200 bytes
Evaluating program in ~zero knowledge~
Elapsed: 812.43ms
write proof to file
The size of the serialized object is 98765 bytes
Elapsed: 1.50s
";
        let rows = parse_bench_log(log, &names(&["a.txt", "b.txt"])).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].circuit, "a.txt");
        assert_eq!(rows[0].size_bytes, 1200);
        assert!((rows[0].time_ms - 812.43).abs() < 1e-9);
        assert_eq!(rows[1].circuit, "b.txt");
        assert_eq!(rows[1].size_bytes, 98765);
        assert!((rows[1].time_ms - 1500.0).abs() < 1e-9);
    }

    fn ms(line: &str) -> f64 {
        LinePatterns::new().unwrap().elapsed_ms(line, 1).unwrap()
    }

    #[test]
    fn converts_sub_millisecond_units() {
        assert!((ms("Elapsed: 250.00µs") - 0.25).abs() < 1e-12);
        assert!((ms("Elapsed: 250.00us") - 0.25).abs() < 1e-12);
        assert!((ms("Elapsed: 500.00ns") - 0.0005).abs() < 1e-12);
        assert!((ms("Elapsed: 1.50s") - 1500.0).abs() < 1e-9);
        assert_eq!(ms("Elapsed 42.5"), 42.5);
    }

    #[test]
    fn leading_dot_timing_keeps_its_fraction() {
        assert_eq!(ms("Elapsed: .5ms"), 0.5);
    }

    #[test]
    fn size_line_without_number_is_an_error() {
        let log = "The size of the serialized object is ? bytes\nElapsed: 1ms\n";
        let err = parse_bench_log(log, &names(&["a"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("no size value"));
    }

    #[test]
    fn timing_line_without_number_is_an_error() {
        let log = "The size of the serialized object is 7 bytes\nElapsed: n/a\n";
        let err = parse_bench_log(log, &names(&["a"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("no timing value"));
    }

    #[test]
    fn oversized_size_is_out_of_range() {
        let log = "The size of the serialized object is 99999999999999999999999 bytes\nElapsed: 1ms\n";
        let err = parse_bench_log(log, &names(&["a"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("out of range"));
    }

    #[test]
    fn timing_without_size_is_an_error() {
        let err = parse_bench_log("Elapsed: 3.00ms\n", &names(&["a.txt"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn two_sizes_in_a_row_is_an_error() {
        let log = "The size of the serialized object is 1 bytes\nThe size of the serialized object is 2 bytes\n";
        assert!(parse_bench_log(log, &names(&["a", "b"])).is_err());
    }

    #[test]
    fn more_entries_than_names_is_an_error() {
        let log = "The size of the serialized object is 1 bytes\nElapsed: 1ms\n\
The size of the serialized object is 2 bytes\nElapsed: 2ms\n";
        let err = parse_bench_log(log, &names(&["a"])).unwrap_err();
        assert!(err.message().contains("more size lines"));
    }

    #[test]
    fn fewer_entries_than_names_is_an_error() {
        let log = "The size of the serialized object is 1 bytes\nElapsed: 1ms\n";
        let err = parse_bench_log(log, &names(&["a", "b"])).unwrap_err();
        assert!(err.message().contains("1 complete entries"));
    }

    #[test]
    fn missing_final_timing_is_an_error() {
        let log = "The size of the serialized object is 1 bytes\n";
        assert!(parse_bench_log(log, &names(&["a"])).is_err());
    }

    #[test]
    fn default_names_cover_the_benchmark_suite() {
        let names = default_circuit_names();
        assert_eq!(names.len(), 25);
        assert_eq!(names[0], "amortized_aco_512_12.txt");
        assert_eq!(names[24], "amortized_akv.txt");
    }

    #[test]
    fn names_file_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "x.txt\n\n  y.txt  \n").unwrap();
        assert_eq!(read_circuit_names(&path).unwrap(), names(&["x.txt", "y.txt"]));
    }
}
