//! Tests for the variable and constraint builder.

use super::*;
use chrono::{Days, NaiveDate};
use shiftforge_core::{
    AvailabilityRecord, AvailabilityState, DemandRecord, ShiftInput, Slot, StaffMember,
    SundayHolidays,
};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()
}

fn build(input: &ShiftInput) -> (LinearModel, ModelParameters<'_>, ShiftVariables) {
    let params = ModelParameters::prepare(input, 4, &SundayHolidays).unwrap();
    let mut model = LinearModel::new("test");
    let vars = ShiftVariables::allocate(&mut model, &params);
    add_hard_constraints(&mut model, &params, &vars);
    (model, params, vars)
}

/// Value vector consistent with the given (staff, key) assignments.
fn point(
    model: &LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
    assigned: &[(usize, usize)],
) -> Vec<f64> {
    let mut values = vec![0.0; model.num_variables()];
    for &(s, k) in assigned {
        values[vars.x(s, k).index()] = 1.0;
    }
    let mut total = 0.0;
    for s in 0..vars.staff_count() {
        let count = assigned.iter().filter(|(a, _)| *a == s).count() as f64;
        let hours = count * f64::from(params.slot_hours());
        values[vars.h(s).index()] = hours;
        total += hours;
        for d in 0..params.dates().len() {
            let works = params
                .keys_on_date(d)
                .iter()
                .any(|k| assigned.contains(&(s, *k)));
            values[vars.worked(s, d).index()] = if works { 1.0 } else { 0.0 };
        }
    }
    if let Some(mean_h) = vars.mean_h() {
        let mean = total / vars.staff_count() as f64;
        values[mean_h.index()] = mean;
        for s in 0..vars.staff_count() {
            values[vars.dev(s).index()] = (values[vars.h(s).index()] - mean).abs();
        }
    }
    values
}

fn two_staff_one_day() -> ShiftInput {
    ShiftInput::default()
        .with_staff(StaffMember::new("S1", "Adult", 25, 1200.0).with_weekly_hours(0, 40))
        .with_staff(StaffMember::new("S2", "Minor", 16, 1050.0).with_weekly_hours(0, 40))
        .with_demand(DemandRecord::new(monday(), Slot::Morning, 1))
        .with_demand(DemandRecord::new(monday(), Slot::Night, 1))
        .with_availability(AvailabilityRecord::new("S1", monday(), Slot::Morning, AvailabilityState::Ok))
        .with_availability(AvailabilityRecord::new("S1", monday(), Slot::Night, AvailabilityState::Ok))
        .with_availability(AvailabilityRecord::new("S2", monday(), Slot::Morning, AvailabilityState::Ng))
        .with_availability(AvailabilityRecord::new("S2", monday(), Slot::Night, AvailabilityState::Ok))
}

#[test]
fn test_variable_allocation() {
    let input = two_staff_one_day();
    let (model, _, vars) = build(&input);

    // 4 x, 2 h, 2 dev, 2 worked, 1 mean_h
    assert_eq!(model.num_variables(), 11);
    assert_eq!(model.num_integer_variables(), 8);
    assert_eq!(model.variable(vars.x(0, 0)).name, "x[S1,2025-05-26,10-14]");
    assert_eq!(model.variable(vars.x(1, 1)).name, "x[S2,2025-05-26,22-26]");
    assert_eq!(model.variable(vars.worked(1, 0)).name, "worked[S2,2025-05-26]");
    assert!(vars.mean_h().is_some());
}

#[test]
fn test_ineligible_pairs_are_pinned_to_zero() {
    let input = two_staff_one_day();
    let (model, _, _) = build(&input);

    let names: Vec<&str> = model
        .constraints()
        .iter()
        .filter(|c| c.name.starts_with("eligible"))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["eligible[S2,2025-05-26,10-14]", "eligible[S2,2025-05-26,22-26]"]
    );
}

#[test]
fn test_feasible_assignment_has_no_violation() {
    let input = two_staff_one_day();
    let (model, params, vars) = build(&input);

    let values = point(&model, &params, &vars, &[(0, 0), (0, 1)]);
    assert_eq!(model.first_violation(&values, 1e-6), None);
}

#[test]
fn test_minor_on_night_violates_eligibility() {
    let input = two_staff_one_day();
    let (model, params, vars) = build(&input);

    let values = point(&model, &params, &vars, &[(0, 0), (1, 1)]);
    let violation = model.first_violation(&values, 1e-6).unwrap();
    assert!(violation.starts_with("eligible[S2,2025-05-26,22-26]"));
}

#[test]
fn test_uncovered_demand_is_violation() {
    let input = two_staff_one_day();
    let (model, params, vars) = build(&input);

    let values = point(&model, &params, &vars, &[(0, 0)]);
    let violation = model.first_violation(&values, 1e-6).unwrap();
    assert!(violation.starts_with("demand[2025-05-26,22-26]"));
}

#[test]
fn test_hour_bounds_are_enforced() {
    let input = ShiftInput::default()
        .with_staff(StaffMember::new("S1", "A", 25, 1200.0).with_weekly_hours(8, 12))
        .with_demand(DemandRecord::new(monday(), Slot::Morning, 0))
        .with_availability(AvailabilityRecord::new("S1", monday(), Slot::Morning, AvailabilityState::Ok));
    let (model, params, vars) = build(&input);

    let values = point(&model, &params, &vars, &[(0, 0)]);
    let violation = model.first_violation(&values, 1e-6).unwrap();
    assert!(violation.starts_with("min_hours[S1]"));
}

#[test]
fn test_daily_cap() {
    let mut input = ShiftInput::default()
        .with_staff(StaffMember::new("S1", "A", 25, 1200.0).with_weekly_hours(0, 40));
    for slot in [Slot::Morning, Slot::Afternoon, Slot::Evening] {
        input = input
            .with_demand(DemandRecord::new(monday(), slot, 0))
            .with_availability(AvailabilityRecord::new("S1", monday(), slot, AvailabilityState::Ok));
    }
    let (model, params, vars) = build(&input);

    let two = point(&model, &params, &vars, &[(0, 0), (0, 1)]);
    assert_eq!(model.first_violation(&two, 1e-6), None);

    let three = point(&model, &params, &vars, &[(0, 0), (0, 1), (0, 2)]);
    let violation = model.first_violation(&three, 1e-6).unwrap();
    assert!(violation.starts_with("daily_cap[S1,2025-05-26]"));
}

#[test]
fn test_worked_days_cap() {
    let mut input = ShiftInput::default()
        .with_staff(StaffMember::new("S1", "A", 25, 1200.0).with_weekly_hours(0, 40));
    for i in 0..7 {
        let date = monday() + Days::new(i);
        input = input
            .with_demand(DemandRecord::new(date, Slot::Morning, 0))
            .with_availability(AvailabilityRecord::new("S1", date, Slot::Morning, AvailabilityState::Ok));
    }
    let (model, params, vars) = build(&input);

    let six: Vec<(usize, usize)> = (0..6).map(|k| (0, k)).collect();
    assert_eq!(model.first_violation(&point(&model, &params, &vars, &six), 1e-6), None);

    let seven: Vec<(usize, usize)> = (0..7).map(|k| (0, k)).collect();
    let violation = model
        .first_violation(&point(&model, &params, &vars, &seven), 1e-6)
        .unwrap();
    assert!(violation.starts_with("worked_days[S1]"));
}

#[test]
fn test_worked_must_follow_assignment() {
    let input = two_staff_one_day();
    let (model, params, vars) = build(&input);

    let mut values = point(&model, &params, &vars, &[(0, 0), (0, 1)]);
    values[vars.worked(0, 0).index()] = 0.0;
    let violation = model.first_violation(&values, 1e-6).unwrap();
    assert!(violation.starts_with("worked_link[S1,2025-05-26,10-14]"));
}

#[test]
fn test_deviation_must_cover_distance_from_mean() {
    let input = two_staff_one_day();
    let (model, params, vars) = build(&input);

    let mut values = point(&model, &params, &vars, &[(0, 0), (0, 1)]);
    // h = [8, 0], mean = 4
    assert_eq!(values[vars.dev(0).index()], 4.0);
    values[vars.dev(0).index()] = 3.0;
    let violation = model.first_violation(&values, 1e-6).unwrap();
    assert!(violation.starts_with("dev_above[S1]"));
}

#[test]
fn test_empty_staff_has_no_variables() {
    let input = ShiftInput::default().with_demand(DemandRecord::new(monday(), Slot::Morning, 1));
    let (model, _, vars) = build(&input);

    assert_eq!(model.num_variables(), 0);
    assert!(vars.mean_h().is_none());
    assert!(!model.constraints().iter().any(|c| c.name == "mean_hours"));
    // 0 >= 1
    assert!(model.first_violation(&[], 1e-6).unwrap().starts_with("demand"));
}
