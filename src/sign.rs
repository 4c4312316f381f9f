//! Western and Chinese sign identifiers.

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::metadata::{CompatibilityLevel, MetadataRecord};
use crate::prelude::*;
use crate::ZodiacError;

/// A closed set of zodiac signs with a static metadata record per sign.
pub trait ZodiacSign: Copy + Eq + Ord + Hash + Display + FromStr<Err = ZodiacError> + 'static {
    /// Every sign of this family, in declaration order.
    const ALL: &'static [Self];

    /// Capitalized English name, e.g. `"Aries"`.
    fn name(self) -> &'static str;

    /// The sign's catalog entry.
    fn metadata(self) -> &'static MetadataRecord<Self>;

    fn best_matches(self) -> &'static [Self] {
        self.metadata().compatibility.best
    }

    fn average_matches(self) -> &'static [Self] {
        self.metadata().compatibility.average
    }

    fn conflicting_matches(self) -> &'static [Self] {
        self.metadata().compatibility.conflicting
    }

    fn harmful_matches(self) -> &'static [Self] {
        self.metadata().compatibility.harmful
    }

    /// How `other` is rated from this sign's point of view.
    ///
    /// Ratings are not required to be symmetric.
    fn compatibility_with(self, other: Self) -> CompatibilityLevel {
        self.metadata().compatibility.level_of(other)
    }
}

fn parse_sign<S: ZodiacSign>(s: &str, family: &str) -> Result<S, ZodiacError> {
    let trimmed = s.trim();
    S::ALL
        .iter()
        .copied()
        .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ZodiacError::InvalidData(format!("unknown {family} sign: {trimmed:?}")))
}

/// Western (sun) signs, including the two extended constellations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Western {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
    /// The serpent bearer, between Scorpio and Sagittarius on the ecliptic
    Ophiuchus,
    /// The sea monster, only used by the equal-length system
    Cetus,
}

impl Western {
    /// The twelve signs of the tropical and sidereal systems.
    pub const TRADITIONAL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// All fourteen signs, as used by the equal-length system.
    pub const ALL: [Self; 14] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
        Self::Ophiuchus,
        Self::Cetus,
    ];

    /// The thirteen constellations the IAU boundaries put on the ecliptic.
    pub const ASTRONOMICAL_IAU: [Self; 13] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
        Self::Ophiuchus,
    ];

    /// Whether the sign is one of the twelve traditional signs
    pub const fn is_traditional(self) -> bool {
        !matches!(self, Self::Ophiuchus | Self::Cetus)
    }
}

impl ZodiacSign for Western {
    const ALL: &'static [Self] = &Self::ALL;

    fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
            Self::Ophiuchus => "Ophiuchus",
            Self::Cetus => "Cetus",
        }
    }

    fn metadata(self) -> &'static MetadataRecord<Self> {
        crate::metadata::western::record(self)
    }
}

impl FromStr for Western {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sign(s, "western")
    }
}

/// Chinese zodiac animals, in cycle order starting from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Chinese {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// Earthly branch names, indexed like [`Chinese::ALL`]
const BRANCHES: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

impl Chinese {
    /// The twelve animals in cycle order.
    pub const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Position of the animal in the twelve-year cycle (Rat = 0)
    pub const fn cycle_index(self) -> usize {
        self as usize
    }

    /// The animal at `index` of the twelve-year cycle, wrapping around.
    pub const fn from_cycle_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Pinyin name of the earthly branch paired with the animal.
    pub const fn branch(self) -> &'static str {
        BRANCHES[self.cycle_index()]
    }

    /// Parses an earthly branch name (`"zi"`, `"chou"`, ...).
    ///
    /// # Errors
    /// Returns `ZodiacError::InvalidData` if `branch` is not one of the twelve branches.
    pub fn from_branch(branch: &str) -> Result<Self, ZodiacError> {
        let trimmed = branch.trim();
        BRANCHES
            .iter()
            .position(|b| b.eq_ignore_ascii_case(trimmed))
            .map(Self::from_cycle_index)
            .ok_or_else(|| ZodiacError::InvalidData(format!("unknown earthly branch: {trimmed:?}")))
    }
}

impl ZodiacSign for Chinese {
    const ALL: &'static [Self] = &Self::ALL;

    fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    fn metadata(self) -> &'static MetadataRecord<Self> {
        crate::metadata::chinese::record(self)
    }
}

impl FromStr for Chinese {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sign(s, "chinese")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_name() {
        for sign in Western::ALL {
            assert_eq!(sign.to_string(), sign.name());
        }
        for sign in Chinese::ALL {
            assert_eq!(sign.to_string(), sign.name());
        }
    }

    #[test]
    fn test_from_str_cases() {
        struct TestCase {
            input:    &'static str,
            expected: Option<Western>,
        }

        let cases = [
            TestCase {
                input:    "aries",
                expected: Some(Western::Aries),
            },
            TestCase {
                input:    "SAGITTARIUS",
                expected: Some(Western::Sagittarius),
            },
            TestCase {
                input:    " Ophiuchus ",
                expected: Some(Western::Ophiuchus),
            },
            TestCase {
                input:    "arachne",
                expected: None,
            },
            TestCase {
                input:    "",
                expected: None,
            },
        ];

        for case in &cases {
            match case.expected {
                Some(sign) => assert_eq!(case.input.parse::<Western>().unwrap(), sign, "{:?}", case.input),
                None => assert!(
                    matches!(case.input.parse::<Western>(), Err(ZodiacError::InvalidData(_))),
                    "expected InvalidData for {:?}",
                    case.input
                ),
            }
        }

        assert_eq!("goat".parse::<Chinese>().unwrap(), Chinese::Goat);
        assert!("sheep".parse::<Chinese>().is_err());
    }

    #[test]
    fn test_sign_sets() {
        assert_eq!(Western::TRADITIONAL.len(), 12);
        assert_eq!(Western::ASTRONOMICAL_IAU.len(), 13);
        assert_eq!(Western::ALL.len(), 14);
        assert!(!Western::ASTRONOMICAL_IAU.contains(&Western::Cetus));
        assert!(Western::TRADITIONAL.iter().all(|s| s.is_traditional()));
        assert!(!Western::Ophiuchus.is_traditional());
    }

    #[test]
    fn test_branches() {
        assert_eq!(Chinese::Rat.branch(), "zi");
        assert_eq!(Chinese::Pig.branch(), "hai");
        assert_eq!(Chinese::from_branch("WEI").unwrap(), Chinese::Goat);
        assert!(Chinese::from_branch("ziwei").is_err());

        for sign in Chinese::ALL {
            assert_eq!(Chinese::from_branch(sign.branch()).unwrap(), sign);
        }
    }

    #[test]
    fn test_from_cycle_index_wraps() {
        assert_eq!(Chinese::from_cycle_index(0), Chinese::Rat);
        assert_eq!(Chinese::from_cycle_index(11), Chinese::Pig);
        assert_eq!(Chinese::from_cycle_index(12), Chinese::Rat);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Western::Capricorn).unwrap(), r#""capricorn""#);
        let parsed: Chinese = serde_json::from_str(r#""rooster""#).unwrap();
        assert_eq!(parsed, Chinese::Rooster);
    }

    #[test]
    fn test_compatibility_helpers() {
        assert!(Western::Aries.best_matches().contains(&Western::Leo));
        assert_eq!(Western::Aries.compatibility_with(Western::Virgo), CompatibilityLevel::Harmful);
        assert_eq!(Chinese::Rat.compatibility_with(Chinese::Horse), CompatibilityLevel::Harmful);
        assert_eq!(Chinese::Rat.compatibility_with(Chinese::Dragon), CompatibilityLevel::Best);
    }
}
