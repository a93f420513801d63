//! CSV directories: one file per table.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};
use shiftforge_core::{ShiftInput, ShiftSolution};
use tracing::debug;

use crate::error::{IoError, Result};
use crate::table::{self, RawTable};

pub const SCHEDULE_FILE: &str = "Schedule.csv";
pub const HOURS_FILE: &str = "Hours.csv";
pub const KPI_FILE: &str = "KPI.csv";

fn table_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.csv"))
}

/// Reads one CSV file into a [`RawTable`] named `name`.
pub fn read_table(path: &Path, name: &str) -> Result<RawTable> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(File::open(path)?);

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();
    let mut table = RawTable::new(name, headers);
    for record in reader.records() {
        table.push_row(record?.iter().map(|v| v.trim().to_string()).collect());
    }

    debug!(event = "table_read", table = name, rows = table.rows.len(), path = %path.display());
    Ok(table)
}

/// Reads `Staff.csv`, `Availability.csv`, `Demand.csv` and `Wages.csv`.
pub fn read_dir(dir: &Path) -> Result<ShiftInput> {
    let read = |name: &str| read_table(&table_path(dir, name), name);
    table::input_from(
        &read(table::STAFF)?,
        &read(table::AVAILABILITY)?,
        &read(table::DEMAND)?,
        &read(table::WAGES)?,
    )
}

/// Writes the four input tables in the layout [`read_dir`] expects.
pub fn write_input_dir(dir: &Path, input: &ShiftInput) -> Result<()> {
    fs::create_dir_all(dir)?;

    let mut w = Writer::from_path(table_path(dir, table::STAFF))?;
    w.write_record(table::STAFF_COLUMNS)?;
    for m in &input.staff {
        w.write_record([
            m.id.to_string(),
            m.name.clone(),
            m.age.to_string(),
            m.hourly_wage.to_string(),
            m.weekly_min_hours.to_string(),
            m.weekly_max_hours.to_string(),
        ])?;
    }
    w.flush()?;

    let mut w = Writer::from_path(table_path(dir, table::AVAILABILITY))?;
    w.write_record(table::AVAILABILITY_COLUMNS)?;
    for r in &input.availability {
        w.write_record([
            r.staff_id.to_string(),
            r.date.to_string(),
            r.slot.to_string(),
            r.state.to_string(),
        ])?;
    }
    w.flush()?;

    let mut w = Writer::from_path(table_path(dir, table::DEMAND))?;
    w.write_record(table::DEMAND_COLUMNS)?;
    for d in &input.demand {
        w.write_record([d.date.to_string(), d.slot.to_string(), d.required.to_string()])?;
    }
    w.flush()?;

    let mut w = Writer::from_path(table_path(dir, table::WAGES))?;
    w.write_record(table::WAGES_COLUMNS)?;
    w.write_record([
        input.wages.normal_rate.to_string(),
        input.wages.night_rate.to_string(),
        input.wages.holiday_rate.to_string(),
    ])?;
    w.flush()?;

    debug!(event = "input_written", dir = %dir.display(), staff = input.staff.len());
    Ok(())
}

/// Writes `Schedule.csv`, `Hours.csv` and `KPI.csv`.
///
/// Headers are always written; tables of a solve without a solution are
/// header-only.
pub fn write_outputs(dir: &Path, solution: &ShiftSolution) -> Result<()> {
    fs::create_dir_all(dir)?;

    let mut w = Writer::from_path(dir.join(SCHEDULE_FILE))?;
    w.write_record(["StaffID", "Date", "Slot", "Assigned"])?;
    for row in &solution.schedule {
        w.write_record([
            row.staff_id.to_string(),
            row.date.to_string(),
            row.slot.to_string(),
            row.assigned.to_string(),
        ])?;
    }
    w.flush()?;

    let mut w = Writer::from_path(dir.join(HOURS_FILE))?;
    w.write_record(["StaffID", "Hours"])?;
    for row in &solution.hours {
        w.write_record([row.staff_id.to_string(), row.hours.to_string()])?;
    }
    w.flush()?;

    let mut w = Writer::from_path(dir.join(KPI_FILE))?;
    w.write_record([
        "ObjectiveValue",
        "Status",
        "VerifiedOptimal",
        "LaborCost",
        "WishesGranted",
        "HoursDeviation",
    ])?;
    if let Some(kpi) = &solution.kpi {
        w.write_record([
            kpi.objective_value.to_string(),
            kpi.status.to_string(),
            kpi.verified_optimal.to_string(),
            kpi.labor_cost.to_string(),
            kpi.wishes_granted.to_string(),
            kpi.hours_deviation.to_string(),
        ])?;
    }
    w.flush()?;

    debug!(
        event = "outputs_written",
        dir = %dir.display(),
        assignments = solution.schedule.len(),
    );
    Ok(())
}
