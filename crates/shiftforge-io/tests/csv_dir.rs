//! Reading and writing CSV directories and JSON output.

use std::fs;
use std::time::Duration;

use shiftforge_core::{
    AvailabilityState, HoursRow, KpiRow, ScheduleRow, ShiftSolution, Slot, SolveStatus, StaffId,
};
use shiftforge_io::{read_input, write_input_dir, write_json, write_outputs, IoError};
use shiftforge_test::sample::{generate_week, SampleSpec};
use shiftforge_test::scenarios;
use tempfile::TempDir;

#[test]
fn generated_week_reads_back_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = generate_week(&SampleSpec::default().with_staff_count(6));

    write_input_dir(dir.path(), &input).unwrap();
    let read = read_input(dir.path()).unwrap();

    assert_eq!(read, input);
}

#[test]
fn hand_written_tables_are_parsed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Staff.csv"),
        "StaffID,Name,Age,HourlyWage,WeeklyMinH,WeeklyMaxH\nS01,Staff_01,20,1200,4,12\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Availability.csv"),
        "StaffID,Date,Slot,Availability\nS01,2025-05-26,10-14,wish\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Demand.csv"),
        "Date,Slot,RequiredCnt\n2025-05-26,10-14,1\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Wages.csv"),
        "NormalRate,NightRate,HolidayRate\n1.0,1.25,1.35\n",
    )
    .unwrap();

    let input = read_input(dir.path()).unwrap();
    assert_eq!(input.staff[0].weekly_max_hours, 12);
    assert_eq!(input.availability[0].state, AvailabilityState::Wish);
    assert_eq!(input.demand[0].slot, Slot::Morning);
}

#[test]
fn missing_table_file_is_reported() {
    let dir = TempDir::new().unwrap();
    write_input_dir(dir.path(), &scenarios::single_slot(AvailabilityState::Ok)).unwrap();
    fs::remove_file(dir.path().join("Demand.csv")).unwrap();

    let err = read_input(dir.path()).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound(ref p) if p.ends_with("Demand.csv")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "hello").unwrap();

    assert!(matches!(
        read_input(&path),
        Err(IoError::UnsupportedFormat(ref ext)) if ext == "txt"
    ));
}

fn solved() -> ShiftSolution {
    let staff_id = StaffId::new("S01");
    ShiftSolution {
        status: SolveStatus::Optimal,
        schedule: vec![ScheduleRow {
            staff_id: staff_id.clone(),
            date: scenarios::week_start(),
            slot: Slot::Morning,
            assigned: 1,
        }],
        hours: vec![HoursRow { staff_id, hours: 4 }],
        kpi: Some(KpiRow {
            objective_value: 4800.0,
            status: SolveStatus::Optimal,
            verified_optimal: true,
            labor_cost: 4800.0,
            wishes_granted: 0,
            hours_deviation: 0.0,
        }),
        solve_duration: Duration::from_millis(12),
    }
}

#[test]
fn output_tables_are_written() {
    let dir = TempDir::new().unwrap();
    write_outputs(dir.path(), &solved()).unwrap();

    let schedule = fs::read_to_string(dir.path().join("Schedule.csv")).unwrap();
    assert_eq!(
        schedule,
        "StaffID,Date,Slot,Assigned\nS01,2025-05-26,10-14,1\n"
    );
    let hours = fs::read_to_string(dir.path().join("Hours.csv")).unwrap();
    assert_eq!(hours, "StaffID,Hours\nS01,4\n");
    let kpi = fs::read_to_string(dir.path().join("KPI.csv")).unwrap();
    assert!(kpi.starts_with("ObjectiveValue,Status,"));
    assert!(kpi.contains("4800,Optimal,true"));
}

#[test]
fn infeasible_outputs_are_header_only() {
    let dir = TempDir::new().unwrap();
    let solution = ShiftSolution::empty(SolveStatus::Infeasible, Duration::ZERO);
    write_outputs(dir.path(), &solution).unwrap();

    let kpi = fs::read_to_string(dir.path().join("KPI.csv")).unwrap();
    assert_eq!(kpi.lines().count(), 1);
}

#[test]
fn json_output_uses_tabular_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out/result.json");
    write_json(&path, &solved()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["status"], "Optimal");
    assert_eq!(json["schedule"][0]["slot"], "10-14");
    assert_eq!(json["schedule"][0]["date"], "2025-05-26");
    assert_eq!(json["hours"][0]["staff_id"], "S01");
    assert!(json.get("solve_duration").is_none());
}
