//! `HolidayYear` — the public holidays of one year in one region.
//!
//! Holidays fall into three groups:
//! * fixed-date holidays observed everywhere (New Year, Labour Day, German
//!   Unity Day, both Christmas days);
//! * Easter-relative holidays observed everywhere (Good Friday, Easter
//!   Monday, Ascension, Whit Monday);
//! * holidays gated by region (and, for Reformation Day, by year).
//!
//! `Region::All` is its own branch in every gate and therefore selects every
//! holiday.

use crate::buss_bettag::buss_und_bettag;
use crate::date::Date;
use crate::easter::easter_sunday;
use crate::holiday::Holiday;
use crate::normalize::ToCalendarDate;
use ft_core::errors::Result;
use ft_core::{HolidayType, Region};

/// Order in which rules are applied.  Ties between holidays on the same day
/// keep this order after sorting.
const RULE_ORDER: [HolidayType; 17] = [
    HolidayType::NewYear,
    HolidayType::LabourDay,
    HolidayType::GermanUnity,
    HolidayType::ChristmasDay,
    HolidayType::BoxingDay,
    HolidayType::GoodFriday,
    HolidayType::EasterMonday,
    HolidayType::Ascension,
    HolidayType::WhitMonday,
    HolidayType::Epiphany,
    HolidayType::EasterSunday,
    HolidayType::WhitSunday,
    HolidayType::CorpusChristi,
    HolidayType::Assumption,
    HolidayType::Reformation,
    HolidayType::AllSaints,
    HolidayType::PrayerAndRepentance,
];

/// Reformation Day was a nationwide holiday for its 500th anniversary.
const REFORMATION_JUBILEE: i32 = 2017;

// ── Region gates ──────────────────────────────────────────────────────────────

fn observes_epiphany(region: Region) -> bool {
    region.is_any_of(&[Region::BW, Region::BY, Region::ST])
}

/// Easter Sunday and Whit Sunday share a gate.
fn observes_feast_sundays(region: Region) -> bool {
    region.is_any_of(&[Region::BB])
}

fn observes_corpus_christi(region: Region) -> bool {
    region.is_any_of(&[
        Region::BW,
        Region::BY,
        Region::HE,
        Region::NW,
        Region::RP,
        Region::SL,
    ])
}

fn observes_assumption(region: Region) -> bool {
    region.is_any_of(&[Region::SL])
}

fn observes_reformation(year: i32, region: Region) -> bool {
    year == REFORMATION_JUBILEE
        || region.is_any_of(&[Region::BB, Region::MV, Region::SN, Region::ST, Region::TH])
}

fn observes_all_saints(region: Region) -> bool {
    region.is_any_of(&[Region::BW, Region::BY, Region::NW, Region::RP, Region::SL])
}

fn observes_prayer_and_repentance(region: Region) -> bool {
    region.is_any_of(&[Region::SN])
}

/// Return `true` if `kind` is a public holiday in `region` in `year`.
pub fn is_observed(kind: HolidayType, year: i32, region: Region) -> bool {
    match kind {
        HolidayType::NewYear
        | HolidayType::LabourDay
        | HolidayType::GermanUnity
        | HolidayType::ChristmasDay
        | HolidayType::BoxingDay
        | HolidayType::GoodFriday
        | HolidayType::EasterMonday
        | HolidayType::Ascension
        | HolidayType::WhitMonday => true,
        HolidayType::Epiphany => observes_epiphany(region),
        HolidayType::EasterSunday | HolidayType::WhitSunday => observes_feast_sundays(region),
        HolidayType::CorpusChristi => observes_corpus_christi(region),
        HolidayType::Assumption => observes_assumption(region),
        HolidayType::Reformation => observes_reformation(year, region),
        HolidayType::AllSaints => observes_all_saints(region),
        HolidayType::PrayerAndRepentance => observes_prayer_and_repentance(region),
    }
}

/// Date of `kind` in `year`, given that year's Easter Sunday.
fn date_of(kind: HolidayType, year: i32, easter: Date) -> Result<Date> {
    match kind {
        HolidayType::NewYear => Date::from_ymd(year, 1, 1),
        HolidayType::Epiphany => Date::from_ymd(year, 1, 6),
        HolidayType::GoodFriday => easter.add_days(-2),
        HolidayType::EasterSunday => Ok(easter),
        HolidayType::EasterMonday => easter.add_days(1),
        HolidayType::LabourDay => Date::from_ymd(year, 5, 1),
        HolidayType::Ascension => easter.add_days(39),
        HolidayType::WhitSunday => easter.add_days(49),
        HolidayType::WhitMonday => easter.add_days(50),
        HolidayType::CorpusChristi => easter.add_days(60),
        HolidayType::Assumption => Date::from_ymd(year, 8, 15),
        HolidayType::GermanUnity => Date::from_ymd(year, 10, 3),
        HolidayType::Reformation => Date::from_ymd(year, 10, 31),
        HolidayType::AllSaints => Date::from_ymd(year, 11, 1),
        HolidayType::PrayerAndRepentance => buss_und_bettag(year),
        HolidayType::ChristmasDay => Date::from_ymd(year, 12, 25),
        HolidayType::BoxingDay => Date::from_ymd(year, 12, 26),
    }
}

// ── HolidayYear ───────────────────────────────────────────────────────────────

/// The public holidays of one year in one region, sorted by date.
///
/// Alongside the holidays it keeps the sorted, de-duplicated day keys so
/// membership tests are a binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayYear {
    year: i32,
    region: Region,
    holidays: Vec<Holiday>,
    day_keys: Vec<i32>,
}

impl HolidayYear {
    /// Build the holidays of `year` in `region`.
    ///
    /// Pure: the same arguments always give an equal value.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported date range.
    pub fn build(year: i32, region: Region) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let mut holidays = RULE_ORDER
            .iter()
            .filter(|&&kind| is_observed(kind, year, region))
            .map(|&kind| Ok(Holiday::new(kind, date_of(kind, year, easter)?)))
            .collect::<Result<Vec<_>>>()?;
        // Stable, so same-day holidays keep rule order.
        holidays.sort_by_key(|h| h.date);

        let mut day_keys: Vec<i32> = holidays.iter().map(Holiday::normalized_day).collect();
        day_keys.dedup();

        Ok(Self {
            year,
            region,
            holidays,
            day_keys,
        })
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The region these holidays were selected for.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The holidays, ascending by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// The distinct day keys of the holidays, ascending.
    pub fn day_keys(&self) -> &[i32] {
        &self.day_keys
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if there are no holidays (never the case for a built year).
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over the holidays in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    /// Return `true` if `date` is one of the holidays.
    pub fn contains<D: ToCalendarDate + ?Sized>(&self, date: &D) -> bool {
        date.to_calendar_date()
            .map(|d| self.day_keys.binary_search(&d.serial()).is_ok())
            .unwrap_or(false)
    }

    /// The holiday falling on `date`.
    ///
    /// The list is ordered by date, with same-day holidays in rule order, so
    /// on a shared day the fixed-date holiday is returned.
    pub fn find<D: ToCalendarDate + ?Sized>(&self, date: &D) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.matches(date))
    }

    /// The holiday of the given type, if observed.
    pub fn get(&self, kind: HolidayType) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.kind == kind)
    }

    /// Consume into the holiday list.
    pub fn into_holidays(self) -> Vec<Holiday> {
        self.holidays
    }
}

impl<'a> IntoIterator for &'a HolidayYear {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn all_region_has_every_holiday() {
        let y = HolidayYear::build(2023, Region::All).unwrap();
        assert_eq!(y.len(), 17);
        for &kind in HolidayType::all() {
            assert!(y.get(kind).is_some(), "{kind} missing");
        }
    }

    #[test]
    fn movable_feasts_2023() {
        let y = HolidayYear::build(2023, Region::All).unwrap();
        let on = |kind| y.get(kind).unwrap().date;
        assert_eq!(on(HolidayType::EasterSunday), date(2023, 4, 9));
        assert_eq!(on(HolidayType::GoodFriday), date(2023, 4, 7));
        assert_eq!(on(HolidayType::EasterMonday), date(2023, 4, 10));
        assert_eq!(on(HolidayType::Ascension), date(2023, 5, 18));
        assert_eq!(on(HolidayType::WhitSunday), date(2023, 5, 28));
        assert_eq!(on(HolidayType::WhitMonday), date(2023, 5, 29));
        assert_eq!(on(HolidayType::CorpusChristi), date(2023, 6, 8));
        assert_eq!(on(HolidayType::PrayerAndRepentance), date(2023, 11, 22));
    }

    #[test]
    fn nationwide_only_region() {
        // Berlin observes exactly the nine nationwide holidays.
        let y = HolidayYear::build(2019, Region::BE).unwrap();
        assert_eq!(y.len(), 9);
        assert!(y.get(HolidayType::Reformation).is_none());
    }

    #[test]
    fn reformation_jubilee() {
        let be = HolidayYear::build(2017, Region::BE).unwrap();
        assert_eq!(be.get(HolidayType::Reformation).unwrap().date, date(2017, 10, 31));
        let bw = HolidayYear::build(2016, Region::BW).unwrap();
        assert!(bw.get(HolidayType::Reformation).is_none());
    }

    #[test]
    fn saxony_has_buss_und_bettag() {
        let y = HolidayYear::build(2020, Region::SN).unwrap();
        assert!(y.contains(&date(2020, 11, 18)));
        assert!(!HolidayYear::build(2020, Region::BY).unwrap().contains(&date(2020, 11, 18)));
    }

    #[test]
    fn sorted_by_date() {
        let y = HolidayYear::build(2024, Region::All).unwrap();
        assert!(y.holidays().windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(y.holidays()[0].kind, HolidayType::NewYear);
        assert_eq!(y.holidays()[16].kind, HolidayType::BoxingDay);
        assert_eq!(y.day_keys().len(), 17);
    }

    #[test]
    fn ascension_on_labour_day() {
        // Easter 2008 was March 23, putting Ascension on May 1.
        let y = HolidayYear::build(2008, Region::All).unwrap();
        assert_eq!(y.len(), 17);
        assert_eq!(y.day_keys().len(), 16);
        assert_eq!(y.get(HolidayType::Ascension).unwrap().date, date(2008, 5, 1));
        assert_eq!(y.find(&date(2008, 5, 1)).unwrap().kind, HolidayType::LabourDay);
    }

    #[test]
    fn is_observed_table() {
        use HolidayType as H;
        let cases: &[(H, &[Region])] = &[
            (H::Epiphany, &[Region::BW, Region::BY, Region::ST]),
            (H::EasterSunday, &[Region::BB]),
            (H::WhitSunday, &[Region::BB]),
            (
                H::CorpusChristi,
                &[Region::BW, Region::BY, Region::HE, Region::NW, Region::RP, Region::SL],
            ),
            (H::Assumption, &[Region::SL]),
            (
                H::Reformation,
                &[Region::BB, Region::MV, Region::SN, Region::ST, Region::TH],
            ),
            (
                H::AllSaints,
                &[Region::BW, Region::BY, Region::NW, Region::RP, Region::SL],
            ),
            (H::PrayerAndRepentance, &[Region::SN]),
        ];
        for &(kind, regions) in cases {
            assert!(is_observed(kind, 2019, Region::All));
            for &r in Region::states() {
                assert_eq!(
                    is_observed(kind, 2019, r),
                    regions.contains(&r),
                    "{kind} in {r}"
                );
            }
        }
    }

    #[test]
    fn year_out_of_range() {
        assert!(HolidayYear::build(0, Region::All).is_err());
        assert!(HolidayYear::build(10_000, Region::BW).is_err());
    }
}
