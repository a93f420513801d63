//! Solve status and the three output tables.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::{Slot, StaffId};

/// Terminal status of one solve.
///
/// These are the only statuses a backend may report; anything else is a
/// [`ShiftForgeError::SolverIntegration`](crate::ShiftForgeError::SolverIntegration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// Proven optimal.
    Optimal,
    /// Time budget exhausted with a feasible incumbent.
    NotSolved,
    /// No assignment satisfies every hard constraint.
    Infeasible,
    /// The objective can decrease without bound.
    Unbounded,
    /// The solver stopped without a usable answer.
    Undefined,
}

impl SolveStatus {
    /// Returns true when variable values can be read from the solve.
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::NotSolved)
    }

    pub fn label(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::NotSolved => "Not Solved",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One assigned (staff, date, slot).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRow {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub slot: Slot,
    pub assigned: u8,
}

/// Weekly hours of one staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoursRow {
    pub staff_id: StaffId,
    pub hours: u32,
}

/// Headline numbers of one solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KpiRow {
    /// Objective value as reported by the solved model.
    pub objective_value: f64,
    pub status: SolveStatus,
    /// False when the time budget ran out before optimality was proven.
    pub verified_optimal: bool,
    /// Wage cost of the extracted schedule.
    pub labor_cost: f64,
    /// Number of assignments on slots the staff member marked `Wish`.
    pub wishes_granted: u32,
    /// Sum over staff of |hours - mean hours|.
    pub hours_deviation: f64,
}

/// Everything a caller gets back from one solve.
///
/// For statuses without a solution the schedule and hours tables are empty and
/// there is no KPI row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftSolution {
    pub status: SolveStatus,
    pub schedule: Vec<ScheduleRow>,
    pub hours: Vec<HoursRow>,
    pub kpi: Option<KpiRow>,
    /// Wall-clock time spent in the backend.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub solve_duration: Duration,
}

impl ShiftSolution {
    /// A solution carrying only a status.
    pub fn empty(status: SolveStatus, solve_duration: Duration) -> Self {
        Self {
            status,
            schedule: Vec::new(),
            hours: Vec::new(),
            kpi: None,
            solve_duration,
        }
    }

    /// True only for [`SolveStatus::Optimal`].
    pub fn is_verified_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    pub fn objective_value(&self) -> Option<f64> {
        self.kpi.as_ref().map(|k| k.objective_value)
    }

    /// Hours of one staff member, if the solve produced an hours table.
    pub fn hours_of(&self, staff_id: &StaffId) -> Option<u32> {
        self.hours
            .iter()
            .find(|row| &row.staff_id == staff_id)
            .map(|row| row.hours)
    }

    /// Assigned (date, slot) pairs of one staff member, in schedule order.
    pub fn assignments_of<'a>(
        &'a self,
        staff_id: &'a StaffId,
    ) -> impl Iterator<Item = (NaiveDate, Slot)> + 'a {
        self.schedule
            .iter()
            .filter(move |row| &row.staff_id == staff_id)
            .map(|row| (row.date, row.slot))
    }

    /// Head count assigned to one (date, slot).
    pub fn assigned_count(&self, date: NaiveDate, slot: Slot) -> usize {
        self.schedule
            .iter()
            .filter(|row| row.date == date && row.slot == slot)
            .count()
    }
}
