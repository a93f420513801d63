//! Spreadsheet workbooks: one sheet per table.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Days, NaiveDate};
use shiftforge_core::ShiftInput;
use tracing::debug;

use crate::error::{IoError, Result};
use crate::table::{self, RawTable};

/// Extensions [`read_workbook`] accepts.
pub const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Converts an Excel date serial (days since 1899-12-30) to a date.
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.floor() as u64))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(dt) => serial_to_date(dt.as_f64())
            .map(|d| d.to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Reads the `Staff`, `Availability`, `Demand` and `Wages` sheets.
pub fn read_workbook(path: &Path) -> Result<ShiftInput> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.to_path_buf()));
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IoError::Excel(e.to_string()))?;

    let mut read = |name: &str| -> Result<RawTable> {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| IoError::Excel(format!("sheet '{name}': {e}")))?;
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|r| r.iter().map(cell_text).collect())
            .unwrap_or_default();
        let mut table = RawTable::new(name, headers);
        for row in rows {
            table.push_row(row.iter().map(cell_text).collect());
        }
        debug!(event = "sheet_read", sheet = name, rows = table.rows.len());
        Ok(table)
    };

    let staff = read(table::STAFF)?;
    let availability = read(table::AVAILABILITY)?;
    let demand = read(table::DEMAND)?;
    let wages = read(table::WAGES)?;
    table::input_from(&staff, &availability, &demand, &wages)
}
