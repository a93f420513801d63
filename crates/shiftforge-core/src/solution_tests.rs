//! Tests for solve status and output tables.

use std::time::Duration;

use chrono::NaiveDate;

use crate::{HoursRow, ScheduleRow, ShiftSolution, Slot, SolveStatus, StaffId};

#[test]
fn test_only_optimal_and_not_solved_carry_values() {
    assert!(SolveStatus::Optimal.has_solution());
    assert!(SolveStatus::NotSolved.has_solution());
    assert!(!SolveStatus::Infeasible.has_solution());
    assert!(!SolveStatus::Unbounded.has_solution());
    assert!(!SolveStatus::Undefined.has_solution());
}

#[test]
fn test_status_labels() {
    assert_eq!(SolveStatus::NotSolved.to_string(), "Not Solved");
    assert_eq!(SolveStatus::Optimal.to_string(), "Optimal");
}

#[test]
fn test_empty_solution() {
    let solution = ShiftSolution::empty(SolveStatus::Infeasible, Duration::from_millis(5));
    assert!(solution.schedule.is_empty());
    assert!(solution.hours.is_empty());
    assert!(solution.kpi.is_none());
    assert!(!solution.is_verified_optimal());
    assert_eq!(solution.objective_value(), None);
}

#[test]
fn test_solution_queries() {
    let d = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
    let s1 = StaffId::new("S1");
    let s2 = StaffId::new("S2");
    let mut solution = ShiftSolution::empty(SolveStatus::Optimal, Duration::ZERO);
    solution.schedule = vec![
        ScheduleRow { staff_id: s1.clone(), date: d, slot: Slot::Morning, assigned: 1 },
        ScheduleRow { staff_id: s2.clone(), date: d, slot: Slot::Morning, assigned: 1 },
        ScheduleRow { staff_id: s1.clone(), date: d, slot: Slot::Evening, assigned: 1 },
    ];
    solution.hours = vec![
        HoursRow { staff_id: s1.clone(), hours: 8 },
        HoursRow { staff_id: s2.clone(), hours: 4 },
    ];

    assert!(solution.is_verified_optimal());
    assert_eq!(solution.hours_of(&s1), Some(8));
    assert_eq!(solution.hours_of(&StaffId::new("S9")), None);
    assert_eq!(solution.assigned_count(d, Slot::Morning), 2);
    assert_eq!(solution.assigned_count(d, Slot::Night), 0);
    let s1_slots: Vec<_> = solution.assignments_of(&s1).collect();
    assert_eq!(s1_slots, vec![(d, Slot::Morning), (d, Slot::Evening)]);
}
