//! Direct day-of-year to sign lookup table.

use tracing::debug;

use crate::consts::MAX_DAY_OF_YEAR;
use crate::ordinal::Ordinal;
use crate::range::ZodiacRange;
use crate::sign::Western;
use crate::ZodiacError;

/// One slot per day of the reference leap year.
///
/// Built from ranges that have already passed validation. On an unvalidated
/// list, later ranges overwrite earlier ones on shared days.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayIndex {
    slots: [Option<Western>; MAX_DAY_OF_YEAR as usize],
}

impl DayIndex {
    /// An index with no day assigned.
    pub const fn empty() -> Self {
        Self {
            slots: [None; MAX_DAY_OF_YEAR as usize],
        }
    }

    /// Writes each range's sign into every day it covers, in list order.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if a range endpoint is not a real day.
    pub fn build(ranges: &[ZodiacRange]) -> Result<Self, ZodiacError> {
        let mut index = Self::empty();
        for range in ranges {
            for day in range.days()? {
                index.slots[day.index()] = Some(range.sign());
            }
        }
        debug!(n_ranges = ranges.len(), filled = index.filled(), "day index built");
        Ok(index)
    }

    /// The sign for `day`, if one is assigned.
    pub const fn get(&self, day: Ordinal) -> Option<Western> {
        self.slots[day.index()]
    }

    /// The sign for `day`.
    ///
    /// # Errors
    /// Returns `ZodiacError::DayNumberNotFound` if no sign is assigned to `day`.
    pub fn lookup(&self, day: Ordinal) -> Result<Western, ZodiacError> {
        self.get(day).ok_or(ZodiacError::DayNumberNotFound(day.get()))
    }

    /// Number of days with a sign assigned
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no day has a sign assigned
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Every `(day, sign)` pair, in day order.
    pub fn iter(&self) -> impl Iterator<Item = (Ordinal, Option<Western>)> + '_ {
        Ordinal::all().zip(self.slots.iter().copied())
    }
}

impl Default for DayIndex {
    fn default() -> Self {
        Self::empty()
    }
}
