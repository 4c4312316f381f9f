//! Lunar new year dates, the boundary of the Chinese zodiac year.
//!
//! Dates are civil dates in China: Beijing local mean time before 1929,
//! UTC+8 afterwards. Each entry is the `(month, day)` the first lunar month
//! of that Gregorian year begins on.

use crate::ZodiacError;
use crate::consts::{FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR};
use crate::date::CalendarDate;

#[rustfmt::skip]
static NEW_YEAR: [(u8, u8); 201] = [
    (1, 31), (2, 19), (2, 8), (1, 29), (2, 16), (2, 4), (1, 25), (2, 13), (2, 2), (1, 22), // 1900
    (2, 10), (1, 30), (2, 18), (2, 6), (1, 26), (2, 14), (2, 3), (1, 23), (2, 11), (2, 1), // 1910
    (2, 20), (2, 8), (1, 28), (2, 16), (2, 5), (1, 24), (2, 13), (2, 2), (1, 23), (2, 10), // 1920
    (1, 30), (2, 17), (2, 6), (1, 26), (2, 14), (2, 4), (1, 24), (2, 11), (1, 31), (2, 19), // 1930
    (2, 8), (1, 27), (2, 15), (2, 5), (1, 25), (2, 13), (2, 2), (1, 22), (2, 10), (1, 29), // 1940
    (2, 17), (2, 6), (1, 27), (2, 14), (2, 3), (1, 24), (2, 12), (1, 31), (2, 18), (2, 8), // 1950
    (1, 28), (2, 15), (2, 5), (1, 25), (2, 13), (2, 2), (1, 21), (2, 9), (1, 30), (2, 17), // 1960
    (2, 6), (1, 27), (2, 15), (2, 3), (1, 23), (2, 11), (1, 31), (2, 18), (2, 7), (1, 28), // 1970
    (2, 16), (2, 5), (1, 25), (2, 13), (2, 2), (2, 20), (2, 9), (1, 29), (2, 17), (2, 6), // 1980
    (1, 27), (2, 15), (2, 4), (1, 23), (2, 10), (1, 31), (2, 19), (2, 7), (1, 28), (2, 16), // 1990
    (2, 5), (1, 24), (2, 12), (2, 1), (1, 22), (2, 9), (1, 29), (2, 18), (2, 7), (1, 26), // 2000
    (2, 14), (2, 3), (1, 23), (2, 10), (1, 31), (2, 19), (2, 8), (1, 28), (2, 16), (2, 5), // 2010
    (1, 25), (2, 12), (2, 1), (1, 22), (2, 10), (1, 29), (2, 17), (2, 6), (1, 26), (2, 13), // 2020
    (2, 3), (1, 23), (2, 11), (1, 31), (2, 19), (2, 8), (1, 28), (2, 15), (2, 4), (1, 24), // 2030
    (2, 12), (2, 1), (1, 22), (2, 10), (1, 30), (2, 17), (2, 6), (1, 26), (2, 14), (2, 2), // 2040
    (1, 23), (2, 11), (2, 1), (2, 19), (2, 8), (1, 28), (2, 15), (2, 4), (1, 24), (2, 12), // 2050
    (2, 2), (1, 21), (2, 9), (1, 29), (2, 17), (2, 5), (1, 26), (2, 14), (2, 3), (1, 23), // 2060
    (2, 11), (1, 31), (2, 19), (2, 7), (1, 27), (2, 15), (2, 5), (1, 24), (2, 12), (2, 2), // 2070
    (1, 22), (2, 9), (1, 29), (2, 17), (2, 6), (1, 26), (2, 14), (2, 3), (1, 24), (2, 10), // 2080
    (1, 30), (2, 18), (2, 7), (1, 27), (2, 15), (2, 5), (1, 25), (2, 12), (2, 1), (1, 21), // 2090
    (2, 9), // 2100
];

/// The day the lunar year that starts in Gregorian `year` begins on.
///
/// `None` outside `FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR`.
pub fn lunar_new_year(year: u16) -> Option<CalendarDate> {
    let offset = year.checked_sub(FIRST_LUNAR_YEAR)?;
    let &(month, day) = NEW_YEAR.get(usize::from(offset))?;
    CalendarDate::new(year, month, day).ok()
}

/// The lunar year `date` falls in, named by the Gregorian year it starts in.
///
/// Dates before the new year of their Gregorian year still belong to the
/// previous lunar year, so 1990-01-20 is in lunar year 1989.
///
/// # Errors
/// Returns `ZodiacError::InvalidData` if no new year date is on record for the
/// date's Gregorian year.
pub fn lunar_year(date: &CalendarDate) -> Result<i32, ZodiacError> {
    let year = date.year();
    let new_year = lunar_new_year(year).ok_or_else(|| {
        ZodiacError::InvalidData(format!(
            "no lunar new year on record for {year} (covered: {FIRST_LUNAR_YEAR}..={LAST_LUNAR_YEAR})"
        ))
    })?;

    let year = i32::from(year);
    Ok(if *date < new_year { year - 1 } else { year })
}
