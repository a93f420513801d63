//! Domain records for weekly shift scheduling.

mod availability;
mod calendar;
mod demand;
mod input;
mod slot;
mod staff;
mod wages;


pub use availability::{AvailabilityRecord, AvailabilityState};
pub use calendar::{HolidayCalendar, HolidayList, SundayHolidays};
pub use demand::DemandRecord;
pub use input::ShiftInput;
pub use slot::Slot;
pub use staff::{StaffId, StaffMember, ADULT_AGE};
pub use wages::WageRates;
