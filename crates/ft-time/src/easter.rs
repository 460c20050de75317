//! Easter Sunday in the Gregorian calendar.
//!
//! Every movable feast in the holiday engine is an offset from this date.

use crate::date::Date;
use ft_core::errors::Result;

/// Compute Easter Sunday of `year`.
///
/// Uses Gauss's congruence in Lichtenberg's formulation: century number,
/// golden-number position in the 19-year lunar cycle, the solar/lunar
/// century corrections, then the weekday correction.  Results are
/// meaningful from 1583 onwards; earlier years still yield a date but it is
/// not the historical (Julian) Easter.
///
/// # Errors
/// Returns an error only if `year` is outside the supported date range.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Result<Date> {
    crate::date::check_year(year)?;
    // All divisions floor, including for negative intermediate values
    // (K is -1 for centuries before the 1700s).
    let c = year.div_euclid(100);
    let n = year.rem_euclid(19);
    let k = (c - 17).div_euclid(25);
    let mut i = c - c.div_euclid(4) - (c - k).div_euclid(3) + 19 * n + 15;
    i = i.rem_euclid(30);
    let q = i.div_euclid(28);
    i -= q * (1 - q * 29_i32.div_euclid(i + 1) * (21 - n).div_euclid(11));
    let j = (year + year.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    let l = i - j;
    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);
    Date::from_ymd(year, month as u8, day as u8)
}
