//! Built-in range tables for the named Western systems.

use crate::range::{ZodiacDay, ZodiacRange};
use crate::sign::Western;

const fn span(sign: Western, start: (u8, u8), end: (u8, u8)) -> ZodiacRange {
    ZodiacRange::new(
        sign,
        ZodiacDay::new(start.0, start.1),
        ZodiacDay::new(end.0, end.1),
    )
}

/// Season-based signs anchored to the March equinox.
pub const TROPICAL: [ZodiacRange; 12] = [
    span(Western::Aries, (21, 3), (19, 4)),
    span(Western::Taurus, (20, 4), (20, 5)),
    span(Western::Gemini, (21, 5), (20, 6)),
    span(Western::Cancer, (21, 6), (22, 7)),
    span(Western::Leo, (23, 7), (22, 8)),
    span(Western::Virgo, (23, 8), (22, 9)),
    span(Western::Libra, (23, 9), (22, 10)),
    span(Western::Scorpio, (23, 10), (21, 11)),
    span(Western::Sagittarius, (22, 11), (21, 12)),
    span(Western::Capricorn, (22, 12), (19, 1)),
    span(Western::Aquarius, (20, 1), (18, 2)),
    span(Western::Pisces, (19, 2), (20, 3)),
];

/// Constellation-anchored signs, shifted for precession.
pub const SIDEREAL: [ZodiacRange; 12] = [
    span(Western::Aries, (14, 4), (14, 5)),
    span(Western::Taurus, (15, 5), (15, 6)),
    span(Western::Gemini, (16, 6), (16, 7)),
    span(Western::Cancer, (17, 7), (16, 8)),
    span(Western::Leo, (17, 8), (16, 9)),
    span(Western::Virgo, (17, 9), (16, 10)),
    span(Western::Libra, (17, 10), (15, 11)),
    span(Western::Scorpio, (16, 11), (15, 12)),
    span(Western::Sagittarius, (16, 12), (14, 1)),
    span(Western::Capricorn, (15, 1), (12, 2)),
    span(Western::Aquarius, (13, 2), (14, 3)),
    span(Western::Pisces, (15, 3), (13, 4)),
];

/// Fourteen signs of near-equal length, Cetus and Ophiuchus included.
pub const EQUAL_LENGTH: [ZodiacRange; 14] = [
    span(Western::Aries, (16, 4), (11, 5)),
    span(Western::Cetus, (12, 5), (6, 6)),
    span(Western::Taurus, (7, 6), (2, 7)),
    span(Western::Gemini, (3, 7), (28, 7)),
    span(Western::Cancer, (29, 7), (23, 8)),
    span(Western::Leo, (24, 8), (18, 9)),
    span(Western::Virgo, (19, 9), (14, 10)),
    span(Western::Libra, (15, 10), (9, 11)),
    span(Western::Scorpio, (10, 11), (5, 12)),
    span(Western::Ophiuchus, (6, 12), (31, 12)),
    span(Western::Sagittarius, (1, 1), (26, 1)),
    span(Western::Capricorn, (27, 1), (21, 2)),
    span(Western::Aquarius, (22, 2), (20, 3)),
    span(Western::Pisces, (21, 3), (15, 4)),
];

/// Sun transits through the IAU constellation boundaries.
pub const ASTRONOMICAL_IAU: [ZodiacRange; 13] = [
    span(Western::Aries, (19, 4), (13, 5)),
    span(Western::Taurus, (14, 5), (21, 6)),
    span(Western::Gemini, (22, 6), (20, 7)),
    span(Western::Cancer, (21, 7), (10, 8)),
    span(Western::Leo, (11, 8), (16, 9)),
    span(Western::Virgo, (17, 9), (30, 10)),
    span(Western::Libra, (31, 10), (23, 11)),
    span(Western::Scorpio, (24, 11), (29, 11)),
    span(Western::Ophiuchus, (30, 11), (17, 12)),
    span(Western::Sagittarius, (18, 12), (20, 1)),
    span(Western::Capricorn, (21, 1), (16, 2)),
    span(Western::Aquarius, (17, 2), (11, 3)),
    span(Western::Pisces, (12, 3), (18, 4)),
];
