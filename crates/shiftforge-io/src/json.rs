//! JSON output.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use shiftforge_core::ShiftSolution;

use crate::error::Result;

/// Serializes a solution as pretty-printed JSON.
pub fn to_json_string(solution: &ShiftSolution) -> Result<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}

/// Writes a solution to `path` as pretty-printed JSON.
pub fn write_json(path: &Path, solution: &ShiftSolution) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, solution)?;
    Ok(())
}
