//! Daily shift slots.

use std::fmt;
use std::str::FromStr;

use crate::error::ShiftForgeError;

/// One of the four fixed 4-hour intervals of a working day.
///
/// The ordering of the variants is the ordering of the day, so sorting slots
/// yields `10-14`, `14-18`, `18-22`, `22-26`. The last slot runs past midnight
/// and is the only night slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    #[cfg_attr(feature = "serde", serde(rename = "10-14"))]
    Morning,
    #[cfg_attr(feature = "serde", serde(rename = "14-18"))]
    Afternoon,
    #[cfg_attr(feature = "serde", serde(rename = "18-22"))]
    Evening,
    #[cfg_attr(feature = "serde", serde(rename = "22-26"))]
    Night,
}

impl Slot {
    /// All slots in day order.
    pub const ALL: [Slot; 4] = [Slot::Morning, Slot::Afternoon, Slot::Evening, Slot::Night];

    /// Returns the tabular label, e.g. `"18-22"`.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Morning => "10-14",
            Slot::Afternoon => "14-18",
            Slot::Evening => "18-22",
            Slot::Night => "22-26",
        }
    }

    /// Returns true for the `22-26` slot.
    ///
    /// Night slots earn the night wage rate and are closed to minors.
    pub fn is_night(self) -> bool {
        matches!(self, Slot::Night)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Slot {
    type Err = ShiftForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.label() == trimmed)
            .ok_or_else(|| ShiftForgeError::configuration(format!("unknown slot '{trimmed}'")))
    }
}
