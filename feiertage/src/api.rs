//! Query functions.
//!
//! Regions and holiday types are validated before any computation, so an
//! unknown code fails with [`InvalidRegion`](ft_core::Error::InvalidRegion)
//! or [`InvalidHolidayType`](ft_core::Error::InvalidHolidayType) regardless
//! of the date.  Date inputs may carry a time of day and UTC offset; only the
//! calendar day they denote on the caller's wall clock is used.

use ft_core::{ensure, HolidayType, IntoHolidayType, IntoRegion, Result};
use ft_i18n::{TranslationRegistry, TranslationTable};
use ft_time::{Calendar, Holiday, HolidayYear, RegionalCalendar, ToCalendarDate};

/// Return `true` if `date` is a public holiday in `region`.
pub fn is_holiday<D: ToCalendarDate, R: IntoRegion>(date: D, region: R) -> Result<bool> {
    let region = region.into_region()?;
    let day = date.to_calendar_date()?;
    Ok(RegionalCalendar::new(region).is_holiday(day))
}

/// Return `true` if `date` is a Sunday or a public holiday in `region`.
pub fn is_sun_or_holiday<D: ToCalendarDate, R: IntoRegion>(date: D, region: R) -> Result<bool> {
    let region = region.into_region()?;
    let day = date.to_calendar_date()?;
    Ok(RegionalCalendar::new(region).is_sun_or_holiday(day))
}

/// Return `true` if `date` is the holiday `kind` and `kind` is observed in
/// `region`.
///
/// Pass [`Region::All`](ft_core::Region::All) to ignore regional rules.
pub fn is_specific_holiday<D, K, R>(date: D, kind: K, region: R) -> Result<bool>
where
    D: ToCalendarDate,
    K: IntoHolidayType,
    R: IntoRegion,
{
    let region = region.into_region()?;
    let kind = kind.into_holiday_type()?;
    let day = date.to_calendar_date()?;
    let year = HolidayYear::build(day.year(), region)?;
    Ok(year.get(kind).is_some_and(|h| h.date == day))
}

/// The holiday falling on `date` in `region`, if any.
///
/// When two holidays share a day the fixed-date one is returned.
pub fn get_holiday_by_date<D: ToCalendarDate, R: IntoRegion>(
    date: D,
    region: R,
) -> Result<Option<Holiday>> {
    let region = region.into_region()?;
    let day = date.to_calendar_date()?;
    Ok(HolidayYear::build(day.year(), region)?.find(&day).copied())
}

/// All holidays of `year` in `region`, ascending by date.
pub fn get_holidays<R: IntoRegion>(year: i32, region: R) -> Result<Vec<Holiday>> {
    let region = region.into_region()?;
    Ok(HolidayYear::build(year, region)?.into_holidays())
}

/// Register (or replace) a language in the process-wide registry.
///
/// Returns the holiday types that were back-filled from German.
pub fn add_translation(iso_code: &str, table: TranslationTable) -> Vec<HolidayType> {
    TranslationRegistry::global()
        .write()
        .expect("translation registry lock poisoned")
        .add_translation(iso_code, table)
}

/// Switch the process-wide language; unknown codes are ignored (and logged).
pub fn set_language(iso_code: &str) -> bool {
    TranslationRegistry::global()
        .write()
        .expect("translation registry lock poisoned")
        .set_language(iso_code)
}

/// The process-wide current language.
pub fn get_language() -> String {
    TranslationRegistry::global()
        .read()
        .expect("translation registry lock poisoned")
        .language()
        .to_string()
}

/// Display name of `holiday` in `lang`, or in the current language.
///
/// # Errors
/// Returns [`Error::Precondition`](ft_core::Error::Precondition) if `lang`
/// is not registered.
pub fn holiday_name(holiday: &Holiday, lang: Option<&str>) -> Result<String> {
    let registry = TranslationRegistry::global()
        .read()
        .expect("translation registry lock poisoned");
    let lang = lang.unwrap_or(registry.language()).to_lowercase();
    ensure!(
        registry.table(&lang).is_some(),
        "no translation registered for language {lang:?}"
    );
    Ok(registry
        .holiday_name(holiday, Some(lang.as_str()))
        .unwrap_or(holiday.kind.key())
        .to_string())
}
