//! Day keys, canonical date tokens, and date-like inputs.
//!
//! Holiday matching compares calendar days, never instants.  Any input that
//! carries a time of day (and possibly a UTC offset) is first reduced to the
//! calendar day it denotes on the caller's wall clock:
//!
//! 1. shift the instant by the local UTC offset, in whole minutes;
//! 2. truncate to a UTC-midnight day boundary;
//! 3. format as `YYYY-MM-DD` (or keep the day serial as the key).
//!
//! Truncating the raw UTC instant instead would move local midnight in any
//! zone east of Greenwich onto the previous day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Offset, TimeZone};

use crate::date::Date;
use ft_core::errors::{Error, Result};

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// A value that denotes a calendar day.
pub trait ToCalendarDate {
    /// Reduce `self` to the calendar day it denotes.
    fn to_calendar_date(&self) -> Result<Date>;
}

impl ToCalendarDate for Date {
    fn to_calendar_date(&self) -> Result<Date> {
        Ok(*self)
    }
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> Result<Date> {
        Date::from_ymd(self.year(), self.month() as u8, self.day() as u8)
    }
}

impl ToCalendarDate for NaiveDateTime {
    /// The time of day is dropped.
    fn to_calendar_date(&self) -> Result<Date> {
        self.date().to_calendar_date()
    }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    /// The local calendar day of the instant, in the offset it carries.
    fn to_calendar_date(&self) -> Result<Date> {
        let offset_minutes = i64::from(self.offset().fix().local_minus_utc() / 60);
        let shifted = self.timestamp_millis() + offset_minutes * MILLIS_PER_MINUTE;
        let serial = i32::try_from(shifted.div_euclid(MILLIS_PER_DAY))
            .map_err(|_| Error::Date(format!("instant {self:?} out of range")))?;
        Date::from_serial(serial)
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn to_calendar_date(&self) -> Result<Date> {
        (**self).to_calendar_date()
    }
}

/// Return the normalized day key of `date`.
///
/// Two inputs denote the same calendar day iff their keys are equal; keys
/// order the same way the days do.
pub fn day_key<D: ToCalendarDate + ?Sized>(date: &D) -> Result<i32> {
    Ok(date.to_calendar_date()?.serial())
}

/// Return the canonical `YYYY-MM-DD` token of `date`.
pub fn canonical_date_token<D: ToCalendarDate + ?Sized>(date: &D) -> Result<String> {
    Ok(date.to_calendar_date()?.to_string())
}
