use std::num::{NonZeroU8, NonZeroU16};

use serde::{Deserialize, Serialize};

use crate::ZodiacError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, REFERENCE_LEAP_YEAR,
};
use crate::prelude::*;

/// Gregorian year in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// The leap year every `(day, month)` pair is projected onto
    pub const REFERENCE: Self = match NonZeroU16::new(REFERENCE_LEAP_YEAR) {
        Some(year) => Self(year),
        None => Self(NonZeroU16::MIN),
    };

    /// Creates a year, rejecting 0 and anything past `MAX_YEAR`.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` for an out-of-range year.
    pub fn new(value: u16) -> Result<Self, ZodiacError> {
        NonZeroU16::new(value)
            .filter(|year| year.get() <= MAX_YEAR)
            .map(Self)
            .ok_or_else(|| ZodiacError::invalid_date(value, 1_u8, 1_u8))
    }

    /// Returns the year as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ZodiacError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(value: Year) -> Self {
        value.get()
    }
}

/// Month number, January is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// The first month of the year
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a month from its number.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` outside `1..=MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ZodiacError> {
        NonZeroU8::new(value)
            .filter(|month| month.get() <= MAX_MONTH)
            .map(Self)
            .ok_or_else(|| ZodiacError::invalid_day_month(MIN_DAY, value))
    }

    /// Returns the month as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Length of this month in `year`
    pub const fn len_in(self, year: u16) -> u8 {
        days_in_month(year, self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = ZodiacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(value: Month) -> Self {
        value.get()
    }
}

/// Day of month, checked against the month it belongs to.
///
/// Only serializes: a bare day number cannot be validated without its year
/// and month, so [`crate::CalendarDate`] carries the deserializing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[display(fmt = "{_0}")]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a day, checking it exists in `month` of `year`.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if `month` is not a month or
    /// `value` is not one of its days in `year`.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ZodiacError> {
        let month = Month::new(month).map_err(|_| ZodiacError::invalid_date(year, month, value))?;
        NonZeroU8::new(value)
            .filter(|day| day.get() <= month.len_in(year))
            .map(Self)
            .ok_or_else(|| ZodiacError::invalid_date(year, month.get(), value))
    }

    /// Returns the day as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(value: Day) -> Self {
        value.get()
    }
}

/// Gregorian leap rule.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`. `month` must be in `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        _ => DAYS_IN_MONTH[month as usize],
    }
}
