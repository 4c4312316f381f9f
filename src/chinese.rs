//! Chinese zodiac resolution from the sexagenary year cycle.
//!
//! The zodiac year changes on the lunar new year, looked up in [`crate::lunar`].

use crate::consts::{CHINESE_ZODIAC_CYCLE, SEXAGENARY_CYCLE, SEXAGENARY_EPOCH};
use crate::date::CalendarDate;
use crate::lunar::lunar_year;
use crate::sign::Chinese;
use crate::ZodiacError;

/// Position of `year` in the 60-year cycle, in `1..=60`.
///
/// Year 4 CE opens a cycle, so 1984 and 2044 are both cyclical year 1.
pub fn cyclical_year(year: i32) -> u8 {
    let position = (year - SEXAGENARY_EPOCH).rem_euclid(i32::from(SEXAGENARY_CYCLE));
    // rem_euclid keeps position in 0..60
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let position = position as u8;
    position + 1
}

/// The animal of a cyclical year: `(cyclical_year - 1) mod 12` into the Rat-first cycle.
///
/// # Errors
/// Returns `ZodiacError::InvalidData` if `cyclical` is not in `1..=60`.
pub fn sign_for_cyclical_year(cyclical: u8) -> Result<Chinese, ZodiacError> {
    if cyclical == 0 || cyclical > SEXAGENARY_CYCLE {
        return Err(ZodiacError::InvalidData(format!(
            "cyclical year {cyclical} is outside 1..={SEXAGENARY_CYCLE}"
        )));
    }
    let index = (cyclical - 1) % CHINESE_ZODIAC_CYCLE;
    Ok(Chinese::from_cycle_index(usize::from(index)))
}

/// The animal of a lunar year, named by the Gregorian year it starts in.
pub fn sign_for_year(year: i32) -> Chinese {
    let index = (cyclical_year(year) - 1) % CHINESE_ZODIAC_CYCLE;
    Chinese::from_cycle_index(usize::from(index))
}

/// The animal for the lunar year `date` falls in.
///
/// # Errors
/// Returns `ZodiacError::InvalidData` if the lunar year of `date` is unknown.
pub fn resolve(date: &CalendarDate) -> Result<Chinese, ZodiacError> {
    sign_for_cyclical_year(cyclical_year(lunar_year(date)?))
}
