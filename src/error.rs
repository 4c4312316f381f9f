//! Error types for the zodiac_calendar crate.

use std::fmt::{self, Display};

use crate::ordinal::Ordinal;
use crate::sign::Western;

/// Error type for every fallible operation in the crate.
///
/// All variants are deterministic: the same input always produces the same
/// error, and none of them is worth retrying. Lists are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZodiacError {
    /// A `(day, month[, year])` triple that does not form a real calendar date.
    #[error("invalid date components: {}", Components::new(.year, .month, .day))]
    InvalidDateComponents {
        /// Year, when the components came from a full date.
        year: Option<i32>,
        /// Month as supplied.
        month: u32,
        /// Day as supplied.
        day: u32,
    },

    /// The same sign was assigned more than one range.
    #[error("duplicate zodiac signs found: {}", join(.0))]
    DuplicateSigns(Vec<Western>),

    /// Signs expected by the system were not assigned any range.
    #[error("missing zodiac signs: {}", join(.0))]
    MissingSigns(Vec<Western>),

    /// Days of the year that no range covers.
    #[error("days not covered by any zodiac sign: {}", join(.0))]
    MissingDays(Vec<Ordinal>),

    /// Days of the year claimed by more than one range.
    #[error("days claimed by more than one zodiac sign: {}", join(.0))]
    OverlappingDays(Vec<Ordinal>),

    /// The expanded ranges do not line up as days 1 through 366.
    #[error("zodiac ranges are not continuous from day 1 through 366")]
    NonContinuousRanges,

    /// No sign is indexed for this day of the year.
    #[error("no zodiac sign found for day number {0}")]
    DayNumberNotFound(u16),

    /// Input that could not be interpreted (unknown names, malformed text, cycle positions).
    #[error("invalid zodiac data: {0}")]
    InvalidData(String),
}

impl ZodiacError {
    pub(crate) fn invalid_day_month(day: impl Into<u32>, month: impl Into<u32>) -> Self {
        Self::InvalidDateComponents {
            year: None,
            month: month.into(),
            day: day.into(),
        }
    }

    pub(crate) fn invalid_date(year: impl Into<i32>, month: impl Into<u32>, day: impl Into<u32>) -> Self {
        Self::InvalidDateComponents {
            year: Some(year.into()),
            month: month.into(),
            day: day.into(),
        }
    }
}

struct Components {
    year: Option<i32>,
    month: u32,
    day: u32,
}

impl Components {
    const fn new(year: &Option<i32>, month: &u32, day: &u32) -> Self {
        Self {
            year: *year,
            month: *month,
            day: *day,
        }
    }
}

impl Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year:04}-{:02}-{:02}", self.month, self.day),
            None => write!(f, "day {} of month {}", self.day, self.month),
        }
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
