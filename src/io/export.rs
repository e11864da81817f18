//! Export the benchmark table to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::path::Path;

use crate::domain::BenchRow;
use crate::error::AppError;

/// Write benchmark rows with header `Circuit Name,Size (bytes),Time (ms)`.
pub fn write_bench_csv(path: &Path, rows: &[BenchRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::export(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    // Serializing the struct would skip the header when `rows` is empty.
    writer
        .write_record(["Circuit Name", "Size (bytes)", "Time (ms)"])
        .map_err(|e| AppError::export(format!("Failed to write export CSV header: {e}")))?;

    for row in rows {
        writer
            .write_record([row.circuit.clone(), row.size_bytes.to_string(), row.time_ms.to_string()])
            .map_err(|e| AppError::export(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::export(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_bench.csv");
        let rows = vec![
            BenchRow {
                circuit: "amortized_aco_64_8.txt".to_string(),
                size_bytes: 1200,
                time_ms: 812.43,
            },
            BenchRow {
                circuit: "amortized_akv.txt".to_string(),
                size_bytes: 77,
                time_ms: 1500.0,
            },
        ];
        write_bench_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Circuit Name,Size (bytes),Time (ms)");
        assert_eq!(lines[1], "amortized_aco_64_8.txt,1200,812.43");
        assert_eq!(lines[2], "amortized_akv.txt,77,1500");

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let back: Vec<BenchRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(back, rows);
    }

    #[test]
    fn empty_table_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_bench_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "Circuit Name,Size (bytes),Time (ms)");
    }

    #[test]
    fn unwritable_path_uses_export_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_bench_csv(&path, &[]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
