//! Day-of-year ordinals on the reference leap year.
//!
//! Every `(day, month)` pair is projected onto [`REFERENCE_LEAP_YEAR`] before it
//! gets a number, so February 29 is always day 60 and March 1 is always day 61,
//! whatever year the query date actually falls in.

use std::fmt;
use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

use crate::consts::{LEAP_MONTH_START, MAX_DAY_OF_YEAR, MAX_MONTH, REFERENCE_LEAP_YEAR};
use crate::date::CalendarDate;
use crate::types::days_in_month;
use crate::ZodiacError;

/// Day of the reference leap year, in `1..=366`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Ordinal(NonZeroU16);

impl Ordinal {
    /// January 1
    pub const FIRST: Self = Self(NonZeroU16::MIN);

    /// Creates an ordinal from its number.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidData` if `value` is not in `1..=366`.
    pub fn new(value: u16) -> Result<Self, ZodiacError> {
        NonZeroU16::new(value)
            .filter(|v| v.get() <= MAX_DAY_OF_YEAR)
            .map(Self)
            .ok_or_else(|| ZodiacError::InvalidData(format!("day of year {value} is outside 1..={MAX_DAY_OF_YEAR}")))
    }

    /// Maps a `(month, day)` pair onto the reference leap year.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if the pair is not a real date
    /// in a leap year (e.g. April 31, February 30, month 0).
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, ZodiacError> {
        if month == 0 || month > MAX_MONTH || day == 0 || day > days_in_month(REFERENCE_LEAP_YEAR, month) {
            return Err(ZodiacError::invalid_day_month(day, month));
        }
        let value = LEAP_MONTH_START[month as usize] + u16::from(day) - 1;
        Self::new(value)
    }

    /// Returns the `(month, day)` this ordinal falls on in the reference leap year.
    pub fn month_day(self) -> (u8, u8) {
        let value = self.get();
        let month = LEAP_MONTH_START
            .iter()
            .rposition(|&start| start != 0 && start <= value)
            .unwrap_or(1);
        let day = value - LEAP_MONTH_START[month] + 1;
        // month is in 1..=12 and day in 1..=31 by construction of the table
        #[allow(clippy::cast_possible_truncation)]
        (month as u8, day as u8)
    }

    /// Returns the ordinal as a date in the reference leap year.
    pub fn to_reference_date(self) -> CalendarDate {
        let (month, day) = self.month_day();
        CalendarDate::in_reference_year(day, month).unwrap_or(CalendarDate::REFERENCE_NEW_YEAR)
    }

    /// Returns the ordinal value (1..=366)
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the 0-based index suitable for array indexing (0..=365).
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Iterates over every ordinal of the year, in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_DAY_OF_YEAR).filter_map(|v| NonZeroU16::new(v).map(Self))
    }
}

/// Day-of-year of a `(day, month)` pair on the reference leap year.
///
/// # Errors
/// Returns `ZodiacError::InvalidDateComponents` when the pair is not a real date.
pub fn ordinal_of(day: u8, month: u8) -> Result<Ordinal, ZodiacError> {
    Ordinal::from_month_day(month, day)
}

impl From<CalendarDate> for Ordinal {
    /// Year-independent: only the month and day of `date` are used.
    fn from(date: CalendarDate) -> Self {
        let value = LEAP_MONTH_START[date.month() as usize] + u16::from(date.day()) - 1;
        NonZeroU16::new(value).map_or(Self::FIRST, Self)
    }
}

impl From<&CalendarDate> for Ordinal {
    fn from(date: &CalendarDate) -> Self {
        Self::from(*date)
    }
}

impl TryFrom<u16> for Ordinal {
    type Error = ZodiacError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ordinal> for u16 {
    fn from(ordinal: Ordinal) -> Self {
        ordinal.get()
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ordinal};

    #[test]
    fn test_new_bounds() {
        assert!(Ordinal::new(1).is_ok());
        assert!(Ordinal::new(366).is_ok());
        assert!(matches!(Ordinal::new(0), Err(ZodiacError::InvalidData(_))));
        assert!(matches!(Ordinal::new(367), Err(ZodiacError::InvalidData(_))));
    }

    #[test]
    fn test_known_ordinals() {
        struct TestCase {
            day:      u8,
            month:    u8,
            expected: u16,
        }

        let cases = [
            TestCase {
                day:      1,
                month:    1,
                expected: 1,
            },
            TestCase {
                day:      31,
                month:    1,
                expected: 31,
            },
            TestCase {
                day:      29,
                month:    2,
                expected: 60,
            },
            TestCase {
                day:      1,
                month:    3,
                expected: 61,
            },
            TestCase {
                day:      21,
                month:    3,
                expected: 81,
            },
            TestCase {
                day:      31,
                month:    12,
                expected: 366,
            },
        ];

        for case in &cases {
            assert_eq!(
                ordinal_of(case.day, case.month).unwrap().get(),
                case.expected,
                "ordinal of {}/{}",
                case.month,
                case.day
            );
        }
    }

    #[test]
    fn test_invalid_components() {
        assert_eq!(
            ordinal_of(31, 4),
            Err(ZodiacError::InvalidDateComponents { year: None, month: 4, day: 31 })
        );
        assert!(ordinal_of(30, 2).is_err());
        assert!(ordinal_of(0, 1).is_err());
        assert!(ordinal_of(1, 0).is_err());
        assert!(ordinal_of(1, 13).is_err());
    }

    #[test]
    fn test_month_day_roundtrip_all_366() {
        for o in Ordinal::all() {
            let (month, day) = o.month_day();
            assert_eq!(ordinal_of(day, month).unwrap(), o, "roundtrip failed for {o}");
        }
        assert_eq!(Ordinal::all().count(), 366);
    }

    #[test]
    fn test_full_date_is_year_independent() {
        // 2023 has no Feb 29, but March 1 still lands on the leap-year ordinal
        assert_eq!(Ordinal::from(date(2023, 3, 1)), ordinal(61));
        assert_eq!(Ordinal::from(date(2024, 3, 1)), ordinal(61));
        assert_eq!(Ordinal::from(date(1900, 12, 31)), ordinal(366));
        assert_eq!(Ordinal::from(date(2024, 2, 29)), ordinal(60));
    }

    #[test]
    fn test_to_reference_date() {
        assert_eq!(ordinal(60).to_reference_date(), date(2000, 2, 29));
        assert_eq!(ordinal(366).to_reference_date(), date(2000, 12, 31));
    }

    #[test]
    fn test_index() {
        assert_eq!(ordinal(1).index(), 0);
        assert_eq!(ordinal(366).index(), 365);
    }
}
