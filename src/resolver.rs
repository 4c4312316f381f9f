//! Date to sign resolution over one validated configuration.

use tracing::{info, warn};

use crate::chinese;
use crate::date::CalendarDate;
use crate::index::DayIndex;
use crate::metadata::MetadataRecord;
use crate::ordinal::{Ordinal, ordinal_of};
use crate::partition::Partition;
use crate::range::ZodiacRange;
use crate::sign::{Chinese, Western, ZodiacSign};
use crate::system::WesternSystem;
use crate::ZodiacError;

static EMPTY_INDEX: DayIndex = DayIndex::empty();

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Ready(Partition),
    Failed(ZodiacError),
}

/// Resolves dates to signs for one Western system.
///
/// The partition is validated and indexed once, at construction. A resolver
/// never changes afterwards: build a new one to switch systems.
///
/// [`ZodiacResolver::try_new`] returns the validation error directly.
/// [`ZodiacResolver::new`] always returns a resolver, which is either ready
/// or failed with the error kept for inspection. A failed resolver has no
/// ranges and an empty index, so every Western lookup on it misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacResolver {
    system: WesternSystem,
    state:  State,
}

impl ZodiacResolver {
    /// Builds a resolver, failing fast on an invalid configuration.
    ///
    /// # Errors
    /// Returns the first validation failure of the system's ranges.
    pub fn try_new(system: WesternSystem) -> Result<Self, ZodiacError> {
        let partition = Self::build(&system)?;
        info!(system = system.name(), n_signs = partition.ranges().len(), "zodiac resolver ready");
        Ok(Self {
            system,
            state: State::Ready(partition),
        })
    }

    /// Builds a resolver, capturing a validation failure instead of returning it.
    pub fn new(system: WesternSystem) -> Self {
        let state = match Self::build(&system) {
            Ok(partition) => {
                info!(system = system.name(), n_signs = partition.ranges().len(), "zodiac resolver ready");
                State::Ready(partition)
            },
            Err(error) => {
                warn!(system = system.name(), %error, "zodiac resolver failed validation");
                State::Failed(error)
            },
        };
        Self { system, state }
    }

    fn build(system: &WesternSystem) -> Result<Partition, ZodiacError> {
        Partition::new(system.ranges().to_vec(), &system.expected_signs())
    }

    /// The system this resolver was built for, whether or not it validated
    pub const fn system(&self) -> &WesternSystem {
        &self.system
    }

    /// Whether the system validated and lookups are available
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// The validation error, when construction failed.
    pub const fn error(&self) -> Option<&ZodiacError> {
        match &self.state {
            State::Ready(_) => None,
            State::Failed(error) => Some(error),
        }
    }

    const fn partition(&self) -> Option<&Partition> {
        match &self.state {
            State::Ready(partition) => Some(partition),
            State::Failed(_) => None,
        }
    }

    /// Active ranges; empty when failed.
    pub fn ranges(&self) -> &[ZodiacRange] {
        self.partition().map(Partition::ranges).unwrap_or_default()
    }

    /// Active signs in range order; empty when failed.
    pub fn signs(&self) -> Vec<Western> {
        self.partition().map(Partition::signs).unwrap_or_default()
    }

    /// The compiled day index; empty when failed.
    pub fn index(&self) -> &DayIndex {
        self.partition().map_or(&EMPTY_INDEX, Partition::index)
    }

    fn lookup(&self, day: Ordinal) -> Result<Western, ZodiacError> {
        self.index().lookup(day)
    }

    /// The Western sign of `date`. Only its month and day are used.
    ///
    /// # Errors
    /// Returns `ZodiacError::DayNumberNotFound` if the day has no sign, which
    /// only happens on a failed resolver.
    pub fn resolve_western(&self, date: &CalendarDate) -> Result<Western, ZodiacError> {
        self.lookup(Ordinal::from(date))
    }

    /// The Western sign of a `(day, month)` pair.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidDateComponents` if the pair is not a real
    /// date in a leap year, or `ZodiacError::DayNumberNotFound` on a failed resolver.
    pub fn resolve_western_day(&self, day: u8, month: u8) -> Result<Western, ZodiacError> {
        self.lookup(ordinal_of(day, month)?)
    }

    /// The Chinese animal for the lunar year of `date`. Independent of the Western system.
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidData` if the date falls outside the lunar new year table.
    pub fn resolve_chinese(&self, date: &CalendarDate) -> Result<Chinese, ZodiacError> {
        chinese::resolve(date)
    }

    /// Catalog entry for any sign.
    pub fn metadata<S: ZodiacSign>(&self, sign: S) -> &'static MetadataRecord<S> {
        sign.metadata()
    }

    /// Catalog entry for the Western sign of `date`.
    ///
    /// # Errors
    /// Same as [`Self::resolve_western`].
    pub fn western_metadata(&self, date: &CalendarDate) -> Result<&'static MetadataRecord<Western>, ZodiacError> {
        Ok(self.resolve_western(date)?.metadata())
    }

    /// Catalog entry for the Chinese animal of `date`.
    ///
    /// # Errors
    /// Same as [`Self::resolve_chinese`].
    pub fn chinese_metadata(&self, date: &CalendarDate) -> Result<&'static MetadataRecord<Chinese>, ZodiacError> {
        Ok(self.resolve_chinese(date)?.metadata())
    }

    /// First and last day of `sign` projected onto the reference leap year.
    ///
    /// `None` if the active partition has no range for `sign`. For a range
    /// that wraps the year, the start date falls after the end date.
    pub fn range_for(&self, sign: Western) -> Option<(CalendarDate, CalendarDate)> {
        self.partition()?.range_for(sign)?.reference_dates().ok()
    }

    /// Whether `date` resolves to `sign` under the active partition.
    pub fn is_in_range(&self, date: &CalendarDate, sign: Western) -> bool {
        self.resolve_western(date).is_ok_and(|resolved| resolved == sign)
    }
}

impl Default for ZodiacResolver {
    fn default() -> Self {
        Self::new(WesternSystem::default())
    }
}
