//! `Holiday` — one concrete occurrence of a named holiday.

use crate::date::Date;
use crate::normalize::ToCalendarDate;
use ft_core::HolidayType;

/// A holiday of a given type falling on a given date.
///
/// Plain immutable record; translation lives in the `ft-i18n` registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// Which holiday this is.
    pub kind: HolidayType,
    /// The calendar day it falls on.
    pub date: Date,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(kind: HolidayType, date: Date) -> Self {
        Self { kind, date }
    }

    /// The `YYYY-MM-DD` token of the holiday's date.
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }

    /// The normalized day key of the holiday's date.
    pub fn normalized_day(&self) -> i32 {
        self.date.serial()
    }

    /// Return `true` if `date` denotes the same calendar day.
    ///
    /// Time of day and UTC offset of `date` do not matter; inputs that cannot
    /// be reduced to a supported calendar day never match.
    pub fn matches<D: ToCalendarDate + ?Sized>(&self, date: &D) -> bool {
        date.to_calendar_date()
            .map(|d| d == self.date)
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.date)
    }
}
