//! # ft-time
//!
//! Calendar dates, movable-feast computation, and the holiday engine that
//! assembles a year's German public holidays for a region.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Buß- und Bettag (Day of Prayer and Repentance).
pub mod buss_bettag;

/// Calendar trait and the per-region implementation.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// `Holiday` — one concrete holiday occurrence.
pub mod holiday;

/// Day keys, canonical date tokens, and date-like inputs.
pub mod normalize;

/// `Weekday` — day of the week.
pub mod weekday;

/// `HolidayYear` — the ordered holidays of one year in one region.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use buss_bettag::buss_und_bettag;
pub use calendar::{Calendar, RegionalCalendar};
pub use date::Date;
pub use easter::easter_sunday;
pub use holiday::Holiday;
pub use normalize::{canonical_date_token, day_key, ToCalendarDate};
pub use weekday::Weekday;
pub use year::{is_observed, HolidayYear};
