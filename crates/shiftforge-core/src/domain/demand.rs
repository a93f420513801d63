//! Staffing demand per (date, slot).

use chrono::NaiveDate;

use super::Slot;

/// Minimum head count for one (date, slot).
///
/// The set of demand keys is the key domain of the whole model: a slot that
/// has no demand record gets no decision variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandRecord {
    pub date: NaiveDate,
    pub slot: Slot,
    pub required: u32,
}

impl DemandRecord {
    pub fn new(date: NaiveDate, slot: Slot, required: u32) -> Self {
        Self { date, slot, required }
    }
}
