//! `Date` type.
//!
//! Dates are timezone-naive calendar days in the proleptic Gregorian
//! calendar, stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970 (the Unix epoch day).
//! * Negative serials are days before the epoch.
//! * The valid date range is 0001-01-01 to 9999-12-31.
//!
//! The serial doubles as the normalized day key: two dates denote the same
//! calendar day iff their serials are equal.

use crate::weekday::Weekday;
use ft_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    /// Smallest supported year.
    pub const MIN_YEAR: i32 = 1;

    /// Largest supported year.
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 (1970-01-01) is a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (`n` may be negative).
    ///
    /// Operates on the day count, so month and year boundaries roll over and
    /// no wall-clock effect (such as a DST switch) can shift the result.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))
            .and_then(Date::from_serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

/// Formats as the ISO `YYYY-MM-DD` day token.
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse a `YYYY-MM-DD` token.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let mut parts = s.splitn(3, '-');
        let y = parts.next().and_then(|p| p.parse::<i32>().ok()).ok_or_else(bad)?;
        let m = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(bad)?;
        let d = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(bad)?;
        Date::from_ymd(y, m, d)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Reject years outside the supported range.
pub(crate) fn check_year(year: i32) -> Result<()> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "year {year} out of range [{}, {}]",
            Date::MIN_YEAR,
            Date::MAX_YEAR
        )));
    }
    Ok(())
}

/// Convert (year, month, day) to a serial number.
///
/// Counts in 400-year eras starting on March 1, so the leap day is the last
/// day of each computational year.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let d = day as i32;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Date::from_ymd(1, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(9999, 12, 31).unwrap(), Date::MAX);
        assert!(Date::from_ymd(0, 12, 31).is_err());
        assert!(Date::from_ymd(10_000, 1, 1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1900, 2, 28), // non-leap century
            (2000, 2, 29), // leap
            (2100, 2, 28),
            (2023, 4, 9),
            (2020, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
        assert_eq!(Date::from_ymd(2023, 4, 9).unwrap().serial(), 19_456);
    }

    #[test]
    fn test_invalid_fields() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 1969-12-28 is a Sunday
        let d2 = Date::from_ymd(1969, 12, 28).unwrap();
        assert_eq!(d2.weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_add_days_rolls_over() {
        let d = Date::from_ymd(2023, 12, 30).unwrap();
        assert_eq!(d.add_days(3).unwrap(), Date::from_ymd(2024, 1, 2).unwrap());
        let leap = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(leap.add_days(-1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
        // 2023-03-26 is the European DST switch; calendar arithmetic ignores it.
        let dst = Date::from_ymd(2023, 3, 25).unwrap();
        assert_eq!(dst.add_days(2).unwrap(), Date::from_ymd(2023, 3, 27).unwrap());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d.add_days(31).unwrap();
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
    }

    #[test]
    fn test_display_and_parse() {
        let d = Date::from_ymd(987, 3, 5).unwrap();
        assert_eq!(d.to_string(), "0987-03-05");
        assert_eq!(format!("{d:?}"), "Date(0987-03-05)");
        assert_eq!("2020-12-25".parse::<Date>().unwrap(), Date::from_ymd(2020, 12, 25).unwrap());
        assert!("2020-12".parse::<Date>().is_err());
        assert!("2020-02-30".parse::<Date>().is_err());
    }
}
