//! Read/write search outcome JSON files.
//!
//! The JSON holds the config, every evaluated pair with its worst-case error,
//! the accepted candidates and the selected pair. The schema is
//! `domain::SearchOutcome`.

use std::fs::File;
use std::path::Path;

use crate::domain::SearchOutcome;
use crate::error::AppError;

/// Write a search outcome as pretty JSON.
pub fn write_outcome_json(path: &Path, outcome: &SearchOutcome) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::export(format!("Failed to create outcome JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, outcome)
        .map_err(|e| AppError::export(format!("Failed to write outcome JSON: {e}")))?;
    Ok(())
}

/// Read a search outcome JSON file.
pub fn read_outcome_json(path: &Path) -> Result<SearchOutcome, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open outcome JSON '{}': {e}", path.display())))?;
    let outcome: SearchOutcome =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid outcome JSON: {e}")))?;
    Ok(outcome)
}
