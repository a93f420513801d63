//! Header-addressed raw tables and their conversion into domain records.
//!
//! CSV files and workbook sheets are both read into a [`RawTable`] of trimmed
//! strings first; the typed conversion below is shared by every source.

use std::str::FromStr;

use chrono::NaiveDate;
use shiftforge_core::{
    AvailabilityRecord, AvailabilityState, DemandRecord, ShiftInput, Slot, StaffMember, WageRates,
};

use crate::error::{IoError, Result};

pub const STAFF: &str = "Staff";
pub const AVAILABILITY: &str = "Availability";
pub const DEMAND: &str = "Demand";
pub const WAGES: &str = "Wages";

pub const STAFF_COLUMNS: [&str; 6] = [
    "StaffID",
    "Name",
    "Age",
    "HourlyWage",
    "WeeklyMinH",
    "WeeklyMaxH",
];
pub const AVAILABILITY_COLUMNS: [&str; 4] = ["StaffID", "Date", "Slot", "Availability"];
pub const DEMAND_COLUMNS: [&str; 3] = ["Date", "Slot", "RequiredCnt"];
pub const WAGES_COLUMNS: [&str; 3] = ["NormalRate", "NightRate", "HolidayRate"];

/// A table of string cells addressed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row unless every cell is blank.
    pub fn push_row(&mut self, row: Vec<String>) {
        if row.iter().any(|cell| !cell.is_empty()) {
            self.rows.push(row);
        }
    }

    fn column(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| IoError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Resolves the positions of `columns`, failing on the first missing one.
    fn columns<const N: usize>(&self, columns: [&str; N]) -> Result<[usize; N]> {
        let mut out = [0; N];
        for (slot, column) in out.iter_mut().zip(columns) {
            *slot = self.column(column)?;
        }
        Ok(out)
    }
}

/// Typed access to the cells of one row, with row-numbered errors.
struct Row<'a> {
    table: &'a RawTable,
    index: usize,
}

impl Row<'_> {
    fn cell(&self, col: usize) -> &str {
        self.table.rows[self.index]
            .get(col)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn invalid(&self, col: usize, message: impl Into<String>) -> IoError {
        IoError::InvalidField {
            table: self.table.name.clone(),
            // 1-based, counting the header row
            row: self.index + 2,
            column: self.table.headers[col].clone(),
            value: self.cell(col).to_string(),
            message: message.into(),
        }
    }

    fn text(&self, col: usize) -> Result<String> {
        let value = self.cell(col);
        if value.is_empty() {
            return Err(self.invalid(col, "empty value"));
        }
        Ok(value.to_string())
    }

    fn parse<T>(&self, col: usize) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.cell(col)
            .parse()
            .map_err(|e: T::Err| self.invalid(col, e.to_string()))
    }

    /// Whole number that may be written as `20` or `20.0`.
    fn whole(&self, col: usize) -> Result<u32> {
        let value: f64 = self.parse(col)?;
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(self.invalid(col, "expected a non-negative whole number"));
        }
        Ok(value as u32)
    }

    fn date(&self, col: usize) -> Result<NaiveDate> {
        parse_date(self.cell(col)).ok_or_else(|| self.invalid(col, "expected YYYY-MM-DD"))
    }
}

/// Parses `YYYY-MM-DD`, ignoring a trailing time part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn rows(table: &RawTable) -> impl Iterator<Item = Row<'_>> {
    (0..table.rows.len()).map(move |index| Row { table, index })
}

pub fn staff_from(table: &RawTable) -> Result<Vec<StaffMember>> {
    let [id, name, age, wage, min, max] = table.columns(STAFF_COLUMNS)?;
    rows(table)
        .map(|row| -> Result<StaffMember> {
            Ok(StaffMember::new(
                row.text(id)?,
                row.cell(name),
                row.whole(age)?,
                row.parse(wage)?,
            )
            .with_weekly_hours(row.whole(min)?, row.whole(max)?))
        })
        .collect()
}

pub fn availability_from(table: &RawTable) -> Result<Vec<AvailabilityRecord>> {
    let [id, date, slot, state] = table.columns(AVAILABILITY_COLUMNS)?;
    rows(table)
        .map(|row| -> Result<AvailabilityRecord> {
            Ok(AvailabilityRecord::new(
                row.text(id)?,
                row.date(date)?,
                row.parse::<Slot>(slot)?,
                row.parse::<AvailabilityState>(state)?,
            ))
        })
        .collect()
}

pub fn demand_from(table: &RawTable) -> Result<Vec<DemandRecord>> {
    let [date, slot, required] = table.columns(DEMAND_COLUMNS)?;
    rows(table)
        .map(|row| -> Result<DemandRecord> {
            Ok(DemandRecord::new(
                row.date(date)?,
                row.parse::<Slot>(slot)?,
                row.whole(required)?,
            ))
        })
        .collect()
}

/// Reads the first row of the wages table; later rows are ignored.
pub fn wages_from(table: &RawTable) -> Result<WageRates> {
    let [normal, night, holiday] = table.columns(WAGES_COLUMNS)?;
    let row = rows(table).next().ok_or_else(|| IoError::InvalidField {
        table: table.name.clone(),
        row: 2,
        column: WAGES_COLUMNS[0].to_string(),
        value: String::new(),
        message: "table has no data row".into(),
    })?;
    let rates = WageRates::new(row.parse(normal)?, row.parse(night)?, row.parse(holiday)?);
    rates.validate()?;
    Ok(rates)
}

/// Assembles a [`ShiftInput`] from the four raw tables.
pub fn input_from(
    staff: &RawTable,
    availability: &RawTable,
    demand: &RawTable,
    wages: &RawTable,
) -> Result<ShiftInput> {
    Ok(ShiftInput::new(
        staff_from(staff)?,
        availability_from(availability)?,
        demand_from(demand)?,
        wages_from(wages)?,
    ))
}
