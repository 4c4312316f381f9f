//! Resolve calendar dates to Western and Chinese zodiac signs.
//!
//! Western signs come from a *partition* of the year: a list of
//! `(sign, start, end)` ranges that must cover every day of a leap year
//! exactly once. Ranges may wrap from December into January. A partition is
//! validated and compiled into a day-of-year table when a
//! [`ZodiacResolver`] is built, and lookups are a single index afterwards.
//!
//! ```
//! use zodiac_calendar::{CalendarDate, Chinese, Western, WesternSystem, ZodiacResolver};
//!
//! let resolver = ZodiacResolver::try_new(WesternSystem::Tropical)?;
//! let date: CalendarDate = "1991-08-15".parse()?;
//!
//! assert_eq!(resolver.resolve_western(&date)?, Western::Leo);
//! assert_eq!(resolver.resolve_chinese(&date)?, Chinese::Goat);
//! # Ok::<(), zodiac_calendar::ZodiacError>(())
//! ```
//!
//! Chinese signs follow the twelve-animal cycle of the lunar year, which
//! starts on the lunar new year, and do not depend on the Western system.

mod chinese;
mod consts;
mod date;
mod error;
mod index;
mod lunar;
mod metadata;
mod ordinal;
mod partition;
mod prelude;
mod range;
mod resolver;
mod service;
mod sign;
mod system;
mod types;
mod validate;

pub mod presets;

#[cfg(test)]
mod test_utils;

pub use chinese::{cyclical_year, sign_for_cyclical_year, sign_for_year};
pub use consts::*;
pub use date::CalendarDate;
pub use error::ZodiacError;
pub use index::DayIndex;
pub use lunar::{lunar_new_year, lunar_year};
pub use metadata::{Compatibility, CompatibilityLevel, MetadataRecord, catalog};
pub use ordinal::{Ordinal, ordinal_of};
pub use partition::Partition;
pub use range::{ZodiacDay, ZodiacRange, days_in_range};
pub use resolver::ZodiacResolver;
pub use service::ZodiacService;
pub use sign::{Chinese, Western, ZodiacSign};
pub use system::WesternSystem;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::validate;
