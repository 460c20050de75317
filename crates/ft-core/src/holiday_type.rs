//! `HolidayType` — identifiers for every holiday the engine knows.

use std::str::FromStr;

use crate::errors::{Error, Result};

/// A named German public holiday.
///
/// The upper-case [`key`](HolidayType::key) is the stable identifier shared
/// with translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayType {
    /// New Year's Day (Jan 1).
    #[cfg_attr(feature = "serde", serde(rename = "NEUJAHRSTAG"))]
    NewYear,
    /// Epiphany (Jan 6).
    #[cfg_attr(feature = "serde", serde(rename = "HEILIGEDREIKOENIGE"))]
    Epiphany,
    /// Good Friday (Easter − 2).
    #[cfg_attr(feature = "serde", serde(rename = "KARFREITAG"))]
    GoodFriday,
    /// Easter Sunday.
    #[cfg_attr(feature = "serde", serde(rename = "OSTERSONNTAG"))]
    EasterSunday,
    /// Easter Monday (Easter + 1).
    #[cfg_attr(feature = "serde", serde(rename = "OSTERMONTAG"))]
    EasterMonday,
    /// Labour Day (May 1).
    #[cfg_attr(feature = "serde", serde(rename = "TAG_DER_ARBEIT"))]
    LabourDay,
    /// Ascension Day (Easter + 39).
    #[cfg_attr(feature = "serde", serde(rename = "CHRISTIHIMMELFAHRT"))]
    Ascension,
    /// Whit Sunday (Easter + 49).
    #[cfg_attr(feature = "serde", serde(rename = "PFINGSTSONNTAG"))]
    WhitSunday,
    /// Whit Monday (Easter + 50).
    #[cfg_attr(feature = "serde", serde(rename = "PFINGSTMONTAG"))]
    WhitMonday,
    /// Corpus Christi (Easter + 60).
    #[cfg_attr(feature = "serde", serde(rename = "FRONLEICHNAM"))]
    CorpusChristi,
    /// Assumption Day (Aug 15).
    #[cfg_attr(feature = "serde", serde(rename = "MARIAHIMMELFAHRT"))]
    Assumption,
    /// German Unity Day (Oct 3).
    #[cfg_attr(feature = "serde", serde(rename = "DEUTSCHEEINHEIT"))]
    GermanUnity,
    /// Reformation Day (Oct 31).
    #[cfg_attr(feature = "serde", serde(rename = "REFORMATIONSTAG"))]
    Reformation,
    /// All Saints' Day (Nov 1).
    #[cfg_attr(feature = "serde", serde(rename = "ALLERHEILIGEN"))]
    AllSaints,
    /// Day of Prayer and Repentance (Buß- und Bettag).
    #[cfg_attr(feature = "serde", serde(rename = "BUBETAG"))]
    PrayerAndRepentance,
    /// Christmas Day (Dec 25).
    #[cfg_attr(feature = "serde", serde(rename = "ERSTERWEIHNACHTSFEIERTAG"))]
    ChristmasDay,
    /// Boxing Day (Dec 26).
    #[cfg_attr(feature = "serde", serde(rename = "ZWEITERWEIHNACHTSFEIERTAG"))]
    BoxingDay,
}

const ALL_HOLIDAYS: [HolidayType; 17] = [
    HolidayType::NewYear,
    HolidayType::Epiphany,
    HolidayType::GoodFriday,
    HolidayType::EasterSunday,
    HolidayType::EasterMonday,
    HolidayType::LabourDay,
    HolidayType::Ascension,
    HolidayType::WhitSunday,
    HolidayType::WhitMonday,
    HolidayType::CorpusChristi,
    HolidayType::Assumption,
    HolidayType::GermanUnity,
    HolidayType::Reformation,
    HolidayType::AllSaints,
    HolidayType::PrayerAndRepentance,
    HolidayType::ChristmasDay,
    HolidayType::BoxingDay,
];

impl HolidayType {
    /// Every holiday type.
    pub fn all() -> &'static [HolidayType] {
        &ALL_HOLIDAYS
    }

    /// Return the stable identifier (`"NEUJAHRSTAG"`, `"KARFREITAG"`, …).
    pub fn key(&self) -> &'static str {
        match self {
            HolidayType::NewYear => "NEUJAHRSTAG",
            HolidayType::Epiphany => "HEILIGEDREIKOENIGE",
            HolidayType::GoodFriday => "KARFREITAG",
            HolidayType::EasterSunday => "OSTERSONNTAG",
            HolidayType::EasterMonday => "OSTERMONTAG",
            HolidayType::LabourDay => "TAG_DER_ARBEIT",
            HolidayType::Ascension => "CHRISTIHIMMELFAHRT",
            HolidayType::WhitSunday => "PFINGSTSONNTAG",
            HolidayType::WhitMonday => "PFINGSTMONTAG",
            HolidayType::CorpusChristi => "FRONLEICHNAM",
            HolidayType::Assumption => "MARIAHIMMELFAHRT",
            HolidayType::GermanUnity => "DEUTSCHEEINHEIT",
            HolidayType::Reformation => "REFORMATIONSTAG",
            HolidayType::AllSaints => "ALLERHEILIGEN",
            HolidayType::PrayerAndRepentance => "BUBETAG",
            HolidayType::ChristmasDay => "ERSTERWEIHNACHTSFEIERTAG",
            HolidayType::BoxingDay => "ZWEITERWEIHNACHTSFEIERTAG",
        }
    }

    /// Comma-separated list of every key, as used in error messages.
    pub fn key_list() -> String {
        ALL_HOLIDAYS
            .iter()
            .map(HolidayType::key)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HolidayType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ALL_HOLIDAYS
            .iter()
            .copied()
            .find(|h| h.key() == s)
            .ok_or_else(|| Error::InvalidHolidayType(s.to_string()))
    }
}

/// Anything the public API accepts where a holiday type is expected.
pub trait IntoHolidayType {
    /// Convert into a validated [`HolidayType`].
    fn into_holiday_type(self) -> Result<HolidayType>;
}

impl IntoHolidayType for HolidayType {
    fn into_holiday_type(self) -> Result<HolidayType> {
        Ok(self)
    }
}

impl IntoHolidayType for &str {
    fn into_holiday_type(self) -> Result<HolidayType> {
        self.parse()
    }
}

impl IntoHolidayType for String {
    fn into_holiday_type(self) -> Result<HolidayType> {
        self.parse()
    }
}
