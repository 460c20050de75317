//! # feiertage
//!
//! German public holidays per federal state.
//!
//! This crate is a **façade** over the workspace crates: it re-exports the
//! engine types and offers the query functions most callers need.
//!
//! ## Quick start
//!
//! ```rust
//! use feiertage::{Date, HolidayType, Region};
//!
//! let christmas = Date::from_ymd(2020, 12, 25).unwrap();
//! assert!(feiertage::is_holiday(christmas, Region::All).unwrap());
//!
//! let holidays = feiertage::get_holidays(2020, "SN").unwrap();
//! assert!(holidays.iter().any(|h| h.kind == HolidayType::PrayerAndRepentance));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, region codes, and error definitions.
pub use ft_core as core;

/// Dates, Easter, and the holiday engine.
pub use ft_time as time;

/// Translation tables and the language registry.
pub use ft_i18n as i18n;

/// Query functions over the engine and the process-wide language registry.
pub mod api;

pub use api::{
    add_translation, get_holiday_by_date, get_holidays, get_language, holiday_name,
    is_holiday, is_specific_holiday, is_sun_or_holiday, set_language,
};
pub use ft_core::{Error, HolidayType, IntoHolidayType, IntoRegion, Region, Result};
pub use ft_i18n::{TranslationRegistry, TranslationTable};
pub use ft_time::{Calendar, Date, Holiday, HolidayYear, RegionalCalendar, ToCalendarDate};
