//! ShiftForge Core - Domain types for weekly shift scheduling
//!
//! This crate provides the data both sides of the solver agree on:
//! - Input records (staff, availability, demand, wage rates)
//! - Holiday calendars
//! - Solve status and the schedule, hours and KPI output tables
//! - The shared error type

pub mod domain;
pub mod error;
pub mod solution;

#[cfg(test)]
mod solution_tests;

pub use domain::{
    AvailabilityRecord, AvailabilityState, DemandRecord, HolidayCalendar, HolidayList, ShiftInput,
    Slot, StaffId, StaffMember, SundayHolidays, WageRates, ADULT_AGE,
};
pub use error::{Result, ShiftForgeError};
pub use solution::{HoursRow, KpiRow, ScheduleRow, ShiftSolution, SolveStatus};
