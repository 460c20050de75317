//! Buß- und Bettag (Day of Prayer and Repentance).

use crate::date::Date;
use ft_core::errors::Result;

/// Days from the first Advent-relative anchor back to Buß- und Bettag,
/// before adding Christmas's weekday.
const BASE_OFFSET: i32 = 32;

/// Compute Buß- und Bettag of `year`: the Wednesday eleven days before the
/// first Sunday of Advent.
///
/// With `w` the ISO weekday ordinal of December 25 (Monday = 1 … Sunday = 7),
/// the holiday falls `32 + w` days before Christmas.
pub fn buss_und_bettag(year: i32) -> Result<Date> {
    let christmas = Date::from_ymd(year, 12, 25)?;
    let w = i32::from(christmas.weekday().ordinal());
    christmas.add_days(-(BASE_OFFSET + w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn christmas_on_friday() {
        // Dec 25, 2020 is a Friday: 37 days earlier.
        assert_eq!(buss_und_bettag(2020).unwrap(), date(2020, 11, 18));
    }

    #[test]
    fn christmas_on_sunday() {
        // Dec 25, 2022 is a Sunday, which counts as 7.
        assert_eq!(buss_und_bettag(2022).unwrap(), date(2022, 11, 16));
    }

    #[test]
    fn christmas_on_monday() {
        // Dec 25, 2023 is a Monday.
        assert_eq!(buss_und_bettag(2023).unwrap(), date(2023, 11, 22));
    }

    #[test]
    fn always_wednesday_between_16_and_22_november() {
        for y in 1900..=2100 {
            let d = buss_und_bettag(y).unwrap();
            assert_eq!(d.weekday(), Weekday::Wednesday, "year {y}");
            assert_eq!(d.month(), 11);
            assert!((16..=22).contains(&d.day_of_month()), "{d}");
        }
    }
}
