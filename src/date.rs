use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::consts::{DATE_SEPARATOR, MONTH_FIRST_SEPARATOR, REFERENCE_LEAP_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::ZodiacError;

/// A real Gregorian calendar date.
///
/// This is the "absolute date" that zodiac lookups start from. Only its month
/// and day matter for Western resolution. The Chinese cycle needs the whole
/// date, since its year turns on the lunar new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// January 1 of the reference leap year
    pub const REFERENCE_NEW_YEAR: Self = Self {
        year:  Year::REFERENCE,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if the components do not form a
    /// real date (year 0, month 13, April 31, February 29 in a common year, ...).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ZodiacError> {
        let invalid = |_| ZodiacError::invalid_date(year, month, day);
        let year_typed = Year::new(year).map_err(invalid)?;
        let month_typed = Month::new(month).map_err(invalid)?;
        let day_typed = Day::new(day, year, month)?;
        Ok(Self {
            year:  year_typed,
            month: month_typed,
            day:   day_typed,
        })
    }

    /// Projects a `(day, month)` pair onto the reference leap year.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if the pair is not a date in a leap year.
    pub fn in_reference_year(day: u8, month: u8) -> Result<Self, ZodiacError> {
        Self::new(REFERENCE_LEAP_YEAR, month, day).map_err(|_| ZodiacError::invalid_day_month(day, month))
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ZodiacError> {
        s.parse::<u16>()
            .map_err(|_| ZodiacError::InvalidData(format!("not a number: {s:?}")))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ZodiacError> {
        s.parse::<u8>()
            .map_err(|_| ZodiacError::InvalidData(format!("not a number: {s:?}")))
    }

    fn parse_iso(parts: &[&str]) -> Result<Self, ZodiacError> {
        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        Self::new(year, month, day)
    }

    fn parse_month_first(parts: &[&str]) -> Result<Self, ZodiacError> {
        let month = Self::parse_u8(parts[0])?;
        let day = Self::parse_u8(parts[1])?;
        let year = Self::parse_u16(parts[2])?;
        Self::new(year, month, day)
    }
}

impl FromStr for CalendarDate {
    type Err = ZodiacError;

    /// Parses `YYYY-MM-DD` or `MM/DD/YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ZodiacError::InvalidData("empty date string".to_owned()));
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        let (separator, parse): (char, fn(&[&str]) -> Result<Self, ZodiacError>) = match (has_hyphen, has_slash) {
            (true, false) => (DATE_SEPARATOR, Self::parse_iso),
            (false, true) => (MONTH_FIRST_SEPARATOR, Self::parse_month_first),
            (true, true) => {
                return Err(ZodiacError::InvalidData(format!(
                    "mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR}): {trimmed}"
                )));
            },
            (false, false) => {
                return Err(ZodiacError::InvalidData(format!("not a full date: {trimmed}")));
            },
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ZodiacError::InvalidData(format!(
                "expected 3 date components separated by '{separator}', found {}",
                parts.len()
            )));
        }
        parse(&parts)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ZodiacError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let invalid = || ZodiacError::InvalidDateComponents {
            year:  Some(date.year()),
            month: date.month(),
            day:   date.day(),
        };
        let year = u16::try_from(date.year()).map_err(|_| invalid())?;
        let month = u8::try_from(date.month()).map_err(|_| invalid())?;
        let day = u8::try_from(date.day()).map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ZodiacError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
