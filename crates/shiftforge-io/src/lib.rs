//! ShiftForge table I/O
//!
//! Reads the four input tables from a directory of CSV files or from a
//! spreadsheet workbook, and writes the schedule, hours and KPI tables as
//! CSV or JSON. Column headers follow the tabular layout:
//!
//! | table | columns |
//! |---|---|
//! | Staff | `StaffID, Name, Age, HourlyWage, WeeklyMinH, WeeklyMaxH` |
//! | Availability | `StaffID, Date, Slot, Availability` |
//! | Demand | `Date, Slot, RequiredCnt` |
//! | Wages | `NormalRate, NightRate, HolidayRate` |

pub mod csv_tables;
pub mod error;
pub mod json;
pub mod table;
pub mod workbook;

use std::path::Path;

pub use csv_tables::{read_dir, write_input_dir, write_outputs};
pub use error::{IoError, Result};
pub use json::{to_json_string, write_json};
pub use workbook::read_workbook;

/// Reads input from a CSV directory or a workbook, chosen by the path.
pub fn read_input(path: impl AsRef<Path>) -> Result<shiftforge_core::ShiftInput> {
    let path = path.as_ref();
    if path.is_dir() {
        return read_dir(path);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if workbook::WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        read_workbook(path)
    } else if !path.exists() {
        Err(IoError::FileNotFound(path.to_path_buf()))
    } else {
        Err(IoError::UnsupportedFormat(ext))
    }
}
