/// Leap year used as the projection plane for every `(day, month)` pair,
/// so February 29 always has an ordinal.
pub const REFERENCE_LEAP_YEAR: u16 = 2000;

/// Number of days in the reference leap year (and the highest ordinal)
pub const MAX_DAY_OF_YEAR: u16 = 366;

/// Latest year a `CalendarDate` accepts
pub const MAX_YEAR: u16 = 9999;

/// December
pub const MAX_MONTH: u8 = 12;

/// Lowest day of any month
pub const MIN_DAY: u8 = 1;

/// Month number of February
pub const FEBRUARY: u8 = 2;

/// Length of February in a leap year, the only month whose length varies
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths in a common year, indexed by month number (slot 0 is padding)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Ordinal of the first day of each month in the reference leap year
/// (index 0 unused, index 1 = January starts at ordinal 1, ...)
pub(crate) const LEAP_MONTH_START: [u16; 13] =
    [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

/// Number of animals in the Chinese zodiac
pub const CHINESE_ZODIAC_CYCLE: u8 = 12;

/// Length of the sexagenary (stem-branch) year cycle
pub const SEXAGENARY_CYCLE: u8 = 60;

/// First Gregorian year with a lunar new year date on record
pub const FIRST_LUNAR_YEAR: u16 = 1900;

/// Last Gregorian year with a lunar new year date on record
pub const LAST_LUNAR_YEAR: u16 = 2100;

/// Gregorian year that opens a sexagenary cycle (jiazi, a Rat year)
pub(crate) const SEXAGENARY_EPOCH: i32 = 4;

// Gregorian leap rule: every 4th year, except centuries not divisible by 400
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of `YYYY-MM-DD` dates
pub const DATE_SEPARATOR: char = '-';
/// Separator of `MM/DD/YYYY` dates
pub const MONTH_FIRST_SEPARATOR: char = '/';
