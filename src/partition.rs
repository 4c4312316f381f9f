//! Validated partitions of the year.

use std::collections::BTreeSet;

use crate::index::DayIndex;
use crate::ordinal::Ordinal;
use crate::range::ZodiacRange;
use crate::sign::Western;
use crate::validate::validate;
use crate::ZodiacError;

/// Ranges that cover every day of the year exactly once, with their compiled index.
///
/// Only obtainable through [`Partition::new`], so every value upholds the
/// one-sign-per-day invariant. It is never mutated; build a new one instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    ranges: Vec<ZodiacRange>,
    index:  DayIndex,
}

impl Partition {
    /// Validates `ranges` against `expected` and compiles the day index.
    ///
    /// # Errors
    /// Returns the first validation failure; see [`validate`].
    pub fn new(ranges: Vec<ZodiacRange>, expected: &BTreeSet<Western>) -> Result<Self, ZodiacError> {
        validate(&ranges, expected)?;
        let index = DayIndex::build(&ranges)?;
        Ok(Self { ranges, index })
    }

    /// The validated ranges, in the order they were given
    pub fn ranges(&self) -> &[ZodiacRange] {
        &self.ranges
    }

    /// The day index compiled from the ranges
    pub const fn index(&self) -> &DayIndex {
        &self.index
    }

    /// Signs of the partition, in range order
    pub fn signs(&self) -> Vec<Western> {
        self.ranges.iter().map(ZodiacRange::sign).collect()
    }

    /// The range owned by `sign`, if the partition contains it.
    pub fn range_for(&self, sign: Western) -> Option<&ZodiacRange> {
        self.ranges.iter().find(|range| range.sign() == sign)
    }

    /// The sign owning `day`.
    ///
    /// # Errors
    /// Returns `ZodiacError::DayNumberNotFound` if the index has no entry for `day`.
    pub fn lookup(&self, day: Ordinal) -> Result<Western, ZodiacError> {
        self.index.lookup(day)
    }
}
