//! Zodiac date ranges on the cyclic 366-day calendar.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::ordinal::{Ordinal, ordinal_of};
use crate::prelude::*;
use crate::sign::Western;
use crate::ZodiacError;

/// A `(day, month)` pair with no year.
///
/// Construction is unchecked so preset tables can be `const`; the pair is
/// validated whenever it is projected onto an [`Ordinal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{:02}/{:02}", month, day)]
pub struct ZodiacDay {
    day:   u8,
    month: u8,
}

impl ZodiacDay {
    /// Creates a day from its components without validating them.
    pub const fn new(day: u8, month: u8) -> Self {
        Self { day, month }
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day-of-year of this pair on the reference leap year.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if the pair is not a real date.
    pub fn ordinal(&self) -> Result<Ordinal, ZodiacError> {
        ordinal_of(self.day, self.month)
    }

    /// Projects this pair onto a date in the reference leap year.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if the pair is not a real date.
    pub fn to_reference_date(&self) -> Result<CalendarDate, ZodiacError> {
        CalendarDate::in_reference_year(self.day, self.month)
    }
}

impl From<Ordinal> for ZodiacDay {
    fn from(ordinal: Ordinal) -> Self {
        let (month, day) = ordinal.month_day();
        Self::new(day, month)
    }
}

impl From<CalendarDate> for ZodiacDay {
    fn from(date: CalendarDate) -> Self {
        Self::new(date.day(), date.month())
    }
}

impl PartialOrd for ZodiacDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZodiacDay {
    fn cmp(&self, other: &Self) -> Ordering {
        // Month first, then day
        match self.month.cmp(&other.month) {
            Ordering::Equal => self.day.cmp(&other.day),
            ord => ord,
        }
    }
}

/// Expands an inclusive `(start, end)` pair into the ordinals it covers.
///
/// When `end` falls before `start` the range wraps through December 31, and
/// the result runs `start..=366` followed by `1..=end`.
///
/// # Errors
/// Returns `ZodiacError::InvalidDateComponents` if either endpoint is not a real date.
pub fn days_in_range(start: ZodiacDay, end: ZodiacDay) -> Result<Vec<Ordinal>, ZodiacError> {
    let first = start.ordinal()?;
    let last = end.ordinal()?;

    let days = if first <= last {
        Ordinal::all()
            .skip(first.index())
            .take(last.index() - first.index() + 1)
            .collect()
    } else {
        Ordinal::all()
            .skip(first.index())
            .chain(Ordinal::all().take(last.index() + 1))
            .collect()
    };
    Ok(days)
}

/// One sign's closed interval on the cyclic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{sign}: {start}-{end}")]
pub struct ZodiacRange {
    sign:  Western,
    start: ZodiacDay,
    end:   ZodiacDay,
}

impl ZodiacRange {
    /// Creates a range; endpoints are validated on expansion.
    pub const fn new(sign: Western, start: ZodiacDay, end: ZodiacDay) -> Self {
        Self { sign, start, end }
    }

    /// Returns the sign this range belongs to
    pub const fn sign(&self) -> Western {
        self.sign
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> ZodiacDay {
        self.start
    }

    /// Returns the last day of the range (inclusive)
    pub const fn end(&self) -> ZodiacDay {
        self.end
    }

    /// Every ordinal covered by this range, in calendar order from `start`.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if either endpoint is not a real date.
    pub fn days(&self) -> Result<Vec<Ordinal>, ZodiacError> {
        days_in_range(self.start, self.end)
    }

    /// Whether the range crosses from December 31 into January 1.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if either endpoint is not a real date.
    pub fn is_wrapping(&self) -> Result<bool, ZodiacError> {
        Ok(self.end.ordinal()? < self.start.ordinal()?)
    }

    /// Whether `day` falls inside this range.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if either endpoint is not a real date.
    pub fn contains(&self, day: Ordinal) -> Result<bool, ZodiacError> {
        let first = self.start.ordinal()?;
        let last = self.end.ordinal()?;
        Ok(if first <= last {
            first <= day && day <= last
        } else {
            day >= first || day <= last
        })
    }

    /// Number of days covered.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if either endpoint is not a real date.
    pub fn day_count(&self) -> Result<usize, ZodiacError> {
        Ok(self.days()?.len())
    }

    /// Projects both endpoints onto dates in the reference leap year.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if either endpoint is not a real date.
    pub fn reference_dates(&self) -> Result<(CalendarDate, CalendarDate), ZodiacError> {
        Ok((self.start.to_reference_date()?, self.end.to_reference_date()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ordinal, ordinals, range, zday};

    #[test]
    fn test_days_in_range_cases() {
        struct TestCase {
            start:       ZodiacDay,
            end:         ZodiacDay,
            expected:    Vec<Ordinal>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       zday(1, 1),
                end:         zday(3, 1),
                expected:    ordinals(1..=3),
                description: "plain range in January",
            },
            TestCase {
                start:       zday(15, 6),
                end:         zday(15, 6),
                expected:    ordinals([167]),
                description: "single day",
            },
            TestCase {
                start:       zday(28, 2),
                end:         zday(1, 3),
                expected:    ordinals(59..=61),
                description: "spans the leap day",
            },
            TestCase {
                start:       zday(30, 12),
                end:         zday(2, 1),
                expected:    ordinals([365, 366, 1, 2]),
                description: "wraps through new year",
            },
            TestCase {
                start:       zday(31, 12),
                end:         zday(1, 1),
                expected:    ordinals([366, 1]),
                description: "shortest wrap",
            },
        ];

        for case in &cases {
            let days = days_in_range(case.start, case.end).expect("range endpoints should be valid");
            assert_eq!(days, case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_days_in_range_full_year() {
        let days = days_in_range(zday(1, 1), zday(31, 12)).unwrap();
        assert_eq!(days.len(), 366);

        // Starting anywhere and ending the day before covers everything too
        let wrapped = days_in_range(zday(21, 3), zday(20, 3)).unwrap();
        assert_eq!(wrapped.len(), 366);
        assert_eq!(wrapped.first(), Some(&ordinal(81)));
        assert_eq!(wrapped.last(), Some(&ordinal(80)));
    }

    #[test]
    fn test_days_in_range_invalid_endpoint() {
        assert_eq!(
            days_in_range(zday(31, 4), zday(5, 5)),
            Err(ZodiacError::InvalidDateComponents { year: None, month: 4, day: 31 })
        );
        assert!(days_in_range(zday(1, 1), zday(30, 2)).is_err());
    }

    #[test]
    fn test_zodiac_day_ordering() {
        assert!(zday(31, 1) < zday(1, 2));
        assert!(zday(2, 3) > zday(1, 3));
        assert_eq!(zday(5, 5).cmp(&zday(5, 5)), Ordering::Equal);
    }

    #[test]
    fn test_zodiac_day_from_ordinal() {
        assert_eq!(ZodiacDay::from(ordinal(60)), zday(29, 2));
        assert_eq!(ZodiacDay::from(date(1999, 12, 31)), zday(31, 12));
    }

    #[test]
    fn test_wrapping_range() {
        let capricorn = range(Western::Capricorn, (22, 12), (19, 1));
        assert!(capricorn.is_wrapping().unwrap());
        assert!(capricorn.contains(ordinal(366)).unwrap());
        assert!(capricorn.contains(ordinal(1)).unwrap());
        assert!(!capricorn.contains(ordinal(20)).unwrap());
        assert_eq!(capricorn.day_count().unwrap(), 29);

        let aries = range(Western::Aries, (21, 3), (19, 4));
        assert!(!aries.is_wrapping().unwrap());
        assert!(aries.contains(ordinal(81)).unwrap());
        assert!(!aries.contains(ordinal(1)).unwrap());
    }

    #[test]
    fn test_reference_dates() {
        let capricorn = range(Western::Capricorn, (22, 12), (19, 1));
        assert_eq!(
            capricorn.reference_dates().unwrap(),
            (date(2000, 12, 22), date(2000, 1, 19))
        );
    }

    #[test]
    fn test_display() {
        let aries = range(Western::Aries, (21, 3), (19, 4));
        assert_eq!(aries.to_string(), "Aries: 03/21-04/19");
    }

    #[test]
    fn test_serde_shape() {
        let aries = range(Western::Aries, (21, 3), (19, 4));
        let json = serde_json::to_string(&aries).unwrap();
        assert_eq!(
            json,
            r#"{"sign":"aries","start":{"day":21,"month":3},"end":{"day":19,"month":4}}"#
        );
        let parsed: ZodiacRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aries);
    }
}
