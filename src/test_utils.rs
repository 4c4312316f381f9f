//! Shared constructors for unit tests.

use crate::date::CalendarDate;
use crate::ordinal::Ordinal;
use crate::range::{ZodiacDay, ZodiacRange};
use crate::sign::Western;

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn ordinal(value: u16) -> Ordinal {
    Ordinal::new(value).expect("test ordinal should be in 1..=366")
}

pub fn ordinals(values: impl IntoIterator<Item = u16>) -> Vec<Ordinal> {
    values.into_iter().map(ordinal).collect()
}

pub const fn zday(day: u8, month: u8) -> ZodiacDay {
    ZodiacDay::new(day, month)
}

pub const fn range(sign: Western, start: (u8, u8), end: (u8, u8)) -> ZodiacRange {
    ZodiacRange::new(sign, zday(start.0, start.1), zday(end.0, end.1))
}

/// Twelve signs, one per calendar month, January through December.
pub fn month_based_ranges() -> Vec<ZodiacRange> {
    const LAST_DAY: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    const SIGNS: [Western; 12] = [
        Western::Aquarius,
        Western::Pisces,
        Western::Aries,
        Western::Taurus,
        Western::Gemini,
        Western::Cancer,
        Western::Leo,
        Western::Virgo,
        Western::Libra,
        Western::Scorpio,
        Western::Sagittarius,
        Western::Capricorn,
    ];

    SIGNS
        .iter()
        .zip(LAST_DAY)
        .zip(1_u8..)
        .map(|((&sign, last), month)| range(sign, (1, month), (last, month)))
        .collect()
}
