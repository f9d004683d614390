//! Decimal size units for human-readable output.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount};

/// Base of the unit ladder.
pub const UNIT_BASE: f64 = 1000.0;

/// Units of the decimal ladder, smallest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl SizeUnit {
    /// Position on the ladder (0 for bytes, 4 for terabytes).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next larger unit, or `None` at the terabyte ceiling.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Bytes => Some(Self::Kilobytes),
            Self::Kilobytes => Some(Self::Megabytes),
            Self::Megabytes => Some(Self::Gigabytes),
            Self::Gigabytes => Some(Self::Terabytes),
            Self::Terabytes => None,
        }
    }
}

/// A byte count rescaled to a unit and rounded to one decimal place.
///
/// Displays as `<value> <unit>` with no trailing `.0` (`999 bytes`,
/// `1.5 kilobytes`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumanSize {
    pub value: f64,
    pub unit: SizeUnit,
}

impl HumanSize {
    /// Rescale `bytes`.
    ///
    /// The value is divided by 1000 while it is at least 1000, up to the
    /// terabyte ceiling, and only then rounded. A value that rounds up to
    /// 1000.0 stays in the smaller unit.
    pub fn from_bytes(bytes: u64) -> Self {
        let mut value = bytes as f64;
        let mut unit = SizeUnit::Bytes;

        while value >= UNIT_BASE {
            let Some(next) = unit.next() else {
                break;
            };
            value /= UNIT_BASE;
            unit = next;
        }

        Self {
            value: (value * 10.0).round() / 10.0,
            unit,
        }
    }
}

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
