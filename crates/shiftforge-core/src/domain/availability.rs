//! Per-slot staff availability.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::{Slot, StaffId};
use crate::error::ShiftForgeError;

/// What a staff member declared for one (date, slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AvailabilityState {
    /// Can work the slot.
    #[cfg_attr(feature = "serde", serde(rename = "OK"))]
    Ok,
    /// Cannot work the slot.
    #[cfg_attr(feature = "serde", serde(rename = "NG"))]
    Ng,
    /// Can work the slot and would like to.
    Wish,
}

impl AvailabilityState {
    /// True for `OK` and `Wish`.
    pub fn is_available(self) -> bool {
        !matches!(self, AvailabilityState::Ng)
    }

    pub fn is_wish(self) -> bool {
        matches!(self, AvailabilityState::Wish)
    }

    pub fn label(self) -> &'static str {
        match self {
            AvailabilityState::Ok => "OK",
            AvailabilityState::Ng => "NG",
            AvailabilityState::Wish => "Wish",
        }
    }
}

impl fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AvailabilityState {
    type Err = ShiftForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(AvailabilityState::Ok),
            "ng" => Ok(AvailabilityState::Ng),
            "wish" => Ok(AvailabilityState::Wish),
            other => Err(ShiftForgeError::configuration(format!(
                "unknown availability state '{other}'"
            ))),
        }
    }
}

/// Availability of one staff member for one (date, slot).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilityRecord {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub slot: Slot,
    pub state: AvailabilityState,
}

impl AvailabilityRecord {
    pub fn new(staff_id: impl Into<StaffId>, date: NaiveDate, slot: Slot, state: AvailabilityState) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            slot,
            state,
        }
    }
}
