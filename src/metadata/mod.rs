//! Static descriptive records for every sign.
//!
//! The tables are plain `static` arrays in sign declaration order, one record
//! per variant, so a lookup is an index and can never miss.

pub(crate) mod chinese;
pub(crate) mod western;

use serde::Serialize;

use crate::prelude::*;
use crate::sign::ZodiacSign;

/// How one sign rates another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Best,
    Average,
    Conflicting,
    Harmful,
    /// The pair is not listed in any group
    Unrated,
}

/// The four compatibility groups of a sign.
///
/// Groups are disjoint by data convention; nothing forces them to be symmetric
/// between two signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compatibility<S: 'static> {
    pub best:        &'static [S],
    pub average:     &'static [S],
    pub conflicting: &'static [S],
    pub harmful:     &'static [S],
}

impl<S: PartialEq> Compatibility<S> {
    /// The group `other` falls into, checked from best to harmful.
    pub fn level_of(&self, other: S) -> CompatibilityLevel {
        [
            (self.best, CompatibilityLevel::Best),
            (self.average, CompatibilityLevel::Average),
            (self.conflicting, CompatibilityLevel::Conflicting),
            (self.harmful, CompatibilityLevel::Harmful),
        ]
        .into_iter()
        .find(|(group, _)| group.contains(&other))
        .map_or(CompatibilityLevel::Unrated, |(_, level)| level)
    }
}

/// Descriptive record for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetadataRecord<S: 'static> {
    pub sign:                      S,
    pub emoji:                     &'static str,
    pub element:                   &'static str,
    pub element_emoji:             &'static str,
    pub modality:                  &'static str,
    pub polarity:                  &'static str,
    pub yin_yang:                  &'static str,
    /// Modern ruling planet
    pub ruling_planet:             &'static str,
    /// Only set when it differs from the modern ruler
    pub traditional_ruling_planet: Option<&'static str>,
    pub ruling_planet_symbol:      &'static str,
    pub ruling_house:              &'static str,
    /// `#RRGGBB`
    pub color_hex:                 &'static str,
    pub symbol:                    &'static str,
    pub symbol_emoji:              &'static str,
    /// Chinese signs have no birthstone
    pub birthstone:                Option<&'static str>,
    pub season:                    &'static str,
    pub brightest_star:            &'static str,
    pub characteristics:           &'static [&'static str],
    pub strengths:                 &'static [&'static str],
    pub weaknesses:                &'static [&'static str],
    pub key_traits:                &'static [&'static str],
    pub compatibility:             Compatibility<S>,
}

impl<S: ZodiacSign> MetadataRecord<S> {
    /// Capitalized name of the sign this record describes
    pub fn name(&self) -> &'static str {
        self.sign.name()
    }

    /// The color as an `(r, g, b)` triple, parsed from [`Self::color_hex`].
    pub fn color_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color_hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Every record of a sign family, in declaration order.
pub fn catalog<S: ZodiacSign>() -> impl Iterator<Item = &'static MetadataRecord<S>> {
    S::ALL.iter().map(|sign| sign.metadata())
}
