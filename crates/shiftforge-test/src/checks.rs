//! Property checks over a solved schedule.

use std::collections::HashMap;

use chrono::NaiveDate;
use shiftforge_core::{ShiftInput, ShiftSolution, Slot, StaffId};

/// Lists every scheduling rule the solution breaks; empty when all hold.
///
/// Checks demand cover, contract hour bounds, hours matching assignments,
/// the minor night ban, the daily and weekly caps, and that nobody works a
/// slot they marked `NG` or left blank.
pub fn property_violations(
    input: &ShiftInput,
    solution: &ShiftSolution,
    slot_hours: u32,
) -> Vec<String> {
    let mut violations = Vec::new();

    let mut available: HashMap<(&StaffId, NaiveDate, Slot), bool> = HashMap::new();
    for record in &input.availability {
        available.insert(
            (&record.staff_id, record.date, record.slot),
            record.state.is_available(),
        );
    }

    for demand in &input.demand {
        let assigned = solution.assigned_count(demand.date, demand.slot);
        if assigned < demand.required as usize {
            violations.push(format!(
                "{} {}: {assigned} assigned, {} required",
                demand.date, demand.slot, demand.required
            ));
        }
    }

    for member in &input.staff {
        let assignments: Vec<(NaiveDate, Slot)> = solution.assignments_of(&member.id).collect();

        for (date, slot) in &assignments {
            if slot.is_night() && member.is_minor() {
                violations.push(format!("{} is a minor working {date} {slot}", member.id));
            }
            if !available.get(&(&member.id, *date, *slot)).copied().unwrap_or(false) {
                violations.push(format!("{} is not available on {date} {slot}", member.id));
            }
        }

        let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
        for (date, _) in &assignments {
            *per_day.entry(*date).or_default() += 1;
        }
        if let Some((date, count)) = per_day.iter().find(|&(_, &count)| count > 2) {
            violations.push(format!("{} works {count} slots on {date}", member.id));
        }
        if per_day.len() > 6 {
            violations.push(format!("{} works {} days", member.id, per_day.len()));
        }

        match solution.hours_of(&member.id) {
            Some(hours) => {
                let expected = slot_hours * assignments.len() as u32;
                if hours != expected {
                    violations.push(format!(
                        "{} has {hours}h for {} slots",
                        member.id,
                        assignments.len()
                    ));
                }
                if hours < member.weekly_min_hours || hours > member.weekly_max_hours {
                    violations.push(format!(
                        "{} has {hours}h outside {}..={}",
                        member.id, member.weekly_min_hours, member.weekly_max_hours
                    ));
                }
            }
            None => violations.push(format!("{} has no hours row", member.id)),
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios;
    use shiftforge_core::{AvailabilityState, HoursRow, ScheduleRow, SolveStatus};
    use std::time::Duration;

    fn solution(rows: &[(&str, Slot)], hours: &[(&str, u32)]) -> ShiftSolution {
        let mut solution = ShiftSolution::empty(SolveStatus::Optimal, Duration::ZERO);
        for (id, slot) in rows {
            solution.schedule.push(ScheduleRow {
                staff_id: StaffId::new(*id),
                date: scenarios::week_start(),
                slot: *slot,
                assigned: 1,
            });
        }
        for (id, h) in hours {
            solution.hours.push(HoursRow {
                staff_id: StaffId::new(*id),
                hours: *h,
            });
        }
        solution
    }

    #[test]
    fn test_valid_solution_has_no_violations() {
        let input = scenarios::single_slot(AvailabilityState::Ok);
        let solution = solution(&[("S01", Slot::Morning)], &[("S01", 4)]);
        assert!(property_violations(&input, &solution, 4).is_empty());
    }

    #[test]
    fn test_detects_uncovered_demand_and_min_hours() {
        let input = scenarios::single_slot(AvailabilityState::Ok);
        let solution = solution(&[], &[("S01", 0)]);
        let violations = property_violations(&input, &solution, 4);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_detects_unavailable_assignment() {
        let input = scenarios::single_slot(AvailabilityState::Ng);
        let solution = solution(&[("S01", Slot::Morning)], &[("S01", 4)]);
        let violations = property_violations(&input, &solution, 4);
        assert!(violations.iter().any(|v| v.contains("not available")));
    }

    #[test]
    fn test_detects_minor_on_night() {
        let input = scenarios::minor_night_only();
        let solution = solution(&[("S01", Slot::Night)], &[("S01", 4)]);
        let violations = property_violations(&input, &solution, 4);
        assert!(violations.iter().any(|v| v.contains("minor")));
    }
}
