//! `Calendar` trait and the per-region holiday calendar.
//!
//! A calendar knows which dates are public holidays; Sundays count as rest
//! days on top of that.

use crate::date::Date;
use crate::holiday::Holiday;
use crate::year::HolidayYear;
use ft_core::Region;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Germany (SN)"`).
    fn name(&self) -> String;

    /// Return `true` if `date` is a public holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a Sunday or a public holiday.
    fn is_sun_or_holiday(&self, date: Date) -> bool {
        date.weekday().is_sunday() || self.is_holiday(date)
    }
}

/// Public holidays of a single German region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalCalendar {
    region: Region,
}

impl RegionalCalendar {
    /// Calendar for `region`.
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    /// The region this calendar covers.
    pub fn region(&self) -> Region {
        self.region
    }

    /// All holidays in the inclusive range `[from, to]`, ascending.
    pub fn holiday_list(&self, from: Date, to: Date) -> Vec<Holiday> {
        if from > to {
            return Vec::new();
        }
        (from.year()..=to.year())
            .filter_map(|y| HolidayYear::build(y, self.region).ok())
            .flat_map(HolidayYear::into_holidays)
            .filter(|h| h.date >= from && h.date <= to)
            .collect()
    }
}

impl Calendar for RegionalCalendar {
    fn name(&self) -> String {
        format!("Germany ({})", self.region)
    }

    fn is_holiday(&self, date: Date) -> bool {
        HolidayYear::build(date.year(), self.region)
            .map(|y| y.contains(&date))
            .unwrap_or(false)
    }
}
