use super::{Compatibility, MetadataRecord};
use crate::sign::Western;

pub(crate) fn record(sign: Western) -> &'static MetadataRecord<Western> {
    &WESTERN[sign as usize]
}

static WESTERN: [MetadataRecord<Western>; 14] = [
    MetadataRecord {
        sign:                      Western::Aries,
        emoji:                     "♈",
        element:                   "Fire",
        element_emoji:             "🔥",
        modality:                  "Cardinal",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Mars",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♂",
        ruling_house:              "1st House",
        color_hex:                 "#FF4136",
        symbol:                    "Ram",
        symbol_emoji:              "🐏",
        birthstone:                Some("Diamond"),
        season:                    "Spring",
        brightest_star:            "Hamal",
        characteristics:           &[
            "Courageous",
            "Energetic",
            "Confident",
            "Enthusiastic",
            "Direct",
            "Leader",
        ],
        strengths:                 &[
            "Brave",
            "Determined",
            "Confident",
            "Enthusiastic",
            "Optimistic",
        ],
        weaknesses:                &[
            "Impatient",
            "Moody",
            "Impulsive",
            "Aggressive",
            "Short-tempered",
        ],
        key_traits:                &[
            "Energetic",
            "Adventurous",
            "Pioneer",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Leo, Western::Sagittarius, Western::Aries, Western::Gemini],
            average:     &[Western::Aquarius, Western::Libra],
            conflicting: &[Western::Cancer, Western::Capricorn],
            harmful:     &[Western::Virgo, Western::Pisces],
        },
    },
    MetadataRecord {
        sign:                      Western::Taurus,
        emoji:                     "♉",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Fixed",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Venus",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♀",
        ruling_house:              "2nd House",
        color_hex:                 "#2ECC40",
        symbol:                    "Bull",
        symbol_emoji:              "🐂",
        birthstone:                Some("Emerald"),
        season:                    "Spring",
        brightest_star:            "Aldebaran",
        characteristics:           &[
            "Reliable",
            "Patient",
            "Practical",
            "Sensual",
            "Stubborn",
            "Devoted",
        ],
        strengths:                 &[
            "Reliable",
            "Patient",
            "Practical",
            "Loyal",
            "Responsible",
        ],
        weaknesses:                &[
            "Stubborn",
            "Possessive",
            "Materialistic",
            "Self-indulgent",
            "Inflexible",
        ],
        key_traits:                &[
            "Patient",
            "Reliable",
            "Sensual",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Virgo, Western::Capricorn, Western::Taurus, Western::Cancer],
            average:     &[Western::Pisces, Western::Scorpio],
            conflicting: &[Western::Leo, Western::Aquarius],
            harmful:     &[Western::Sagittarius, Western::Aries],
        },
    },
    MetadataRecord {
        sign:                      Western::Gemini,
        emoji:                     "♊",
        element:                   "Air",
        element_emoji:             "💨",
        modality:                  "Mutable",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Mercury",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "☿",
        ruling_house:              "3rd House",
        color_hex:                 "#FFDC00",
        symbol:                    "Twins",
        symbol_emoji:              "👯",
        birthstone:                Some("Pearl"),
        season:                    "Spring/Summer Cusp",
        brightest_star:            "Pollux",
        characteristics:           &[
            "Versatile",
            "Curious",
            "Communicative",
            "Witty",
            "Adaptable",
            "Intellectual",
        ],
        strengths:                 &[
            "Adaptable",
            "Outgoing",
            "Intelligent",
            "Eloquent",
            "Curious",
        ],
        weaknesses:                &[
            "Inconsistent",
            "Nervous",
            "Indecisive",
            "Superficial",
            "Restless",
        ],
        key_traits:                &[
            "Communicative",
            "Curious",
            "Versatile",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Libra, Western::Aquarius, Western::Gemini, Western::Aries],
            average:     &[Western::Leo, Western::Sagittarius],
            conflicting: &[Western::Virgo, Western::Pisces],
            harmful:     &[Western::Scorpio, Western::Capricorn],
        },
    },
    MetadataRecord {
        sign:                      Western::Cancer,
        emoji:                     "♋",
        element:                   "Water",
        element_emoji:             "💧",
        modality:                  "Cardinal",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Moon",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "☽",
        ruling_house:              "4th House",
        color_hex:                 "#DDDDDD",
        symbol:                    "Crab",
        symbol_emoji:              "🦀",
        birthstone:                Some("Ruby"),
        season:                    "Summer",
        brightest_star:            "Al Tarf",
        characteristics:           &[
            "Nurturing",
            "Protective",
            "Intuitive",
            "Emotional",
            "Tenacious",
            "Sentimental",
        ],
        strengths:                 &[
            "Loyal",
            "Emotional",
            "Sympathetic",
            "Protective",
            "Intuitive",
        ],
        weaknesses:                &[
            "Moody",
            "Overemotional",
            "Suspicious",
            "Manipulative",
            "Insecure",
        ],
        key_traits:                &[
            "Nurturing",
            "Protective",
            "Intuitive",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Scorpio, Western::Pisces, Western::Cancer, Western::Taurus],
            average:     &[Western::Virgo, Western::Capricorn],
            conflicting: &[Western::Aries, Western::Libra],
            harmful:     &[Western::Aquarius, Western::Leo],
        },
    },
    MetadataRecord {
        sign:                      Western::Leo,
        emoji:                     "♌",
        element:                   "Fire",
        element_emoji:             "🔥",
        modality:                  "Fixed",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Sun",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "☉",
        ruling_house:              "5th House",
        color_hex:                 "#FF851B",
        symbol:                    "Lion",
        symbol_emoji:              "🦁",
        birthstone:                Some("Peridot"),
        season:                    "Summer",
        brightest_star:            "Regulus",
        characteristics:           &[
            "Generous",
            "Warm-hearted",
            "Creative",
            "Enthusiastic",
            "Dignified",
            "Charismatic",
        ],
        strengths:                 &[
            "Confident",
            "Creative",
            "Generous",
            "Loyal",
            "Encouraging",
        ],
        weaknesses:                &[
            "Arrogant",
            "Stubborn",
            "Self-centered",
            "Domineering",
            "Melodramatic",
        ],
        key_traits:                &[
            "Proud",
            "Charismatic",
            "Leader",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Aries, Western::Sagittarius, Western::Leo, Western::Libra],
            average:     &[Western::Gemini, Western::Aquarius],
            conflicting: &[Western::Taurus, Western::Scorpio],
            harmful:     &[Western::Virgo, Western::Capricorn],
        },
    },
    MetadataRecord {
        sign:                      Western::Virgo,
        emoji:                     "♍",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Mutable",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Mercury",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "☿",
        ruling_house:              "6th House",
        color_hex:                 "#B10DC9",
        symbol:                    "Virgin",
        symbol_emoji:              "👩",
        birthstone:                Some("Sapphire"),
        season:                    "Summer/Autumn Cusp",
        brightest_star:            "Spica",
        characteristics:           &[
            "Analytical",
            "Practical",
            "Diligent",
            "Discriminating",
            "Helpful",
            "Modest",
        ],
        strengths:                 &[
            "Analytical",
            "Practical",
            "Diligent",
            "Meticulous",
            "Reliable",
        ],
        weaknesses:                &[
            "Critical",
            "Perfectionist",
            "Overthinking",
            "Worrisome",
            "Fussy",
        ],
        key_traits:                &[
            "Analytical",
            "Precise",
            "Helpful",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Taurus, Western::Capricorn, Western::Virgo, Western::Cancer],
            average:     &[Western::Scorpio, Western::Pisces],
            conflicting: &[Western::Gemini, Western::Sagittarius],
            harmful:     &[Western::Aries, Western::Leo],
        },
    },
    MetadataRecord {
        sign:                      Western::Libra,
        emoji:                     "♎",
        element:                   "Air",
        element_emoji:             "💨",
        modality:                  "Cardinal",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Venus",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♀",
        ruling_house:              "7th House",
        color_hex:                 "#F012BE",
        symbol:                    "Scales",
        symbol_emoji:              "⚖️",
        birthstone:                Some("Opal"),
        season:                    "Autumn",
        brightest_star:            "Zubeneschamali",
        characteristics:           &[
            "Diplomatic",
            "Fair-minded",
            "Social",
            "Cooperative",
            "Gracious",
            "Indecisive",
        ],
        strengths:                 &[
            "Diplomatic",
            "Fair",
            "Cooperative",
            "Social",
            "Gracious",
        ],
        weaknesses:                &[
            "Indecisive",
            "Avoids confrontation",
            "Self-pitying",
            "Superficial",
            "Unreliable",
        ],
        key_traits:                &[
            "Diplomatic",
            "Partnership-oriented",
            "Refined",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Gemini, Western::Aquarius, Western::Libra, Western::Leo],
            average:     &[Western::Aries, Western::Sagittarius],
            conflicting: &[Western::Cancer, Western::Capricorn],
            harmful:     &[Western::Virgo, Western::Pisces],
        },
    },
    MetadataRecord {
        sign:                      Western::Scorpio,
        emoji:                     "♏",
        element:                   "Water",
        element_emoji:             "💧",
        modality:                  "Fixed",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Pluto",
        traditional_ruling_planet: Some("Mars"),
        ruling_planet_symbol:      "♇",
        ruling_house:              "8th House",
        color_hex:                 "#85144B",
        symbol:                    "Scorpion",
        symbol_emoji:              "🦂",
        birthstone:                Some("Topaz"),
        season:                    "Autumn",
        brightest_star:            "Antares",
        characteristics:           &[
            "Passionate",
            "Resourceful",
            "Brave",
            "Intense",
            "Mysterious",
            "Loyal",
        ],
        strengths:                 &[
            "Determined",
            "Brave",
            "Loyal",
            "Resourceful",
            "Passionate",
        ],
        weaknesses:                &[
            "Jealous",
            "Secretive",
            "Resentful",
            "Suspicious",
            "Manipulative",
        ],
        key_traits:                &[
            "Intense",
            "Transformative",
            "Passionate",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Cancer, Western::Pisces, Western::Scorpio, Western::Capricorn],
            average:     &[Western::Virgo, Western::Taurus],
            conflicting: &[Western::Leo, Western::Aquarius],
            harmful:     &[Western::Gemini, Western::Sagittarius],
        },
    },
    MetadataRecord {
        sign:                      Western::Sagittarius,
        emoji:                     "♐",
        element:                   "Fire",
        element_emoji:             "🔥",
        modality:                  "Mutable",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Jupiter",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♃",
        ruling_house:              "9th House",
        color_hex:                 "#0074D9",
        symbol:                    "Archer",
        symbol_emoji:              "🏹",
        birthstone:                Some("Turquoise"),
        season:                    "Autumn/Winter Cusp",
        brightest_star:            "Kaus Australis",
        characteristics:           &[
            "Optimistic",
            "Freedom-loving",
            "Philosophical",
            "Straightforward",
            "Intellectual",
            "Adventurous",
        ],
        strengths:                 &[
            "Optimistic",
            "Freedom-loving",
            "Honest",
            "Intellectual",
            "Enthusiastic",
        ],
        weaknesses:                &[
            "Tactless",
            "Restless",
            "Irresponsible",
            "Superficial",
            "Inconsistent",
        ],
        key_traits:                &[
            "Adventurous",
            "Optimistic",
            "Philosophical",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Aries, Western::Leo, Western::Sagittarius, Western::Aquarius],
            average:     &[Western::Libra, Western::Gemini],
            conflicting: &[Western::Pisces, Western::Virgo],
            harmful:     &[Western::Taurus, Western::Scorpio],
        },
    },
    MetadataRecord {
        sign:                      Western::Capricorn,
        emoji:                     "♑",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Cardinal",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Saturn",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♄",
        ruling_house:              "10th House",
        color_hex:                 "#111111",
        symbol:                    "Sea Goat",
        symbol_emoji:              "🐐",
        birthstone:                Some("Garnet"),
        season:                    "Winter",
        brightest_star:            "Deneb Algedi",
        characteristics:           &[
            "Responsible",
            "Disciplined",
            "Self-controlled",
            "Practical",
            "Cautious",
            "Ambitious",
        ],
        strengths:                 &[
            "Responsible",
            "Disciplined",
            "Self-controlled",
            "Practical",
            "Patient",
        ],
        weaknesses:                &[
            "Pessimistic",
            "Fatalistic",
            "Rigid",
            "Cold",
            "Workaholic",
        ],
        key_traits:                &[
            "Ambitious",
            "Practical",
            "Disciplined",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Taurus, Western::Virgo, Western::Capricorn, Western::Scorpio],
            average:     &[Western::Pisces, Western::Cancer],
            conflicting: &[Western::Aries, Western::Libra],
            harmful:     &[Western::Gemini, Western::Sagittarius],
        },
    },
    MetadataRecord {
        sign:                      Western::Aquarius,
        emoji:                     "♒",
        element:                   "Air",
        element_emoji:             "💨",
        modality:                  "Fixed",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Uranus",
        traditional_ruling_planet: Some("Saturn"),
        ruling_planet_symbol:      "♅",
        ruling_house:              "11th House",
        color_hex:                 "#1CA9C9",
        symbol:                    "Water Bearer",
        symbol_emoji:              "🏺",
        birthstone:                Some("Amethyst"),
        season:                    "Winter",
        brightest_star:            "Sadalsuud",
        characteristics:           &[
            "Independent",
            "Original",
            "Humanitarian",
            "Intellectual",
            "Progressive",
            "Idealistic",
        ],
        strengths:                 &[
            "Visionary",
            "Loyal",
            "Original",
            "Inventive",
            "Altruistic",
        ],
        weaknesses:                &[
            "Detached",
            "Stubborn",
            "Unpredictable",
            "Aloof",
            "Rebellious",
        ],
        key_traits:                &[
            "Innovative",
            "Eccentric",
            "Humanitarian",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Gemini, Western::Libra, Western::Aquarius, Western::Sagittarius],
            average:     &[Western::Aries, Western::Leo],
            conflicting: &[Western::Taurus, Western::Scorpio],
            harmful:     &[Western::Cancer, Western::Capricorn],
        },
    },
    MetadataRecord {
        sign:                      Western::Pisces,
        emoji:                     "♓",
        element:                   "Water",
        element_emoji:             "💧",
        modality:                  "Mutable",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Neptune",
        traditional_ruling_planet: Some("Jupiter"),
        ruling_planet_symbol:      "♆",
        ruling_house:              "12th House",
        color_hex:                 "#7C9ED9",
        symbol:                    "Fish",
        symbol_emoji:              "🐟",
        birthstone:                Some("Aquamarine"),
        season:                    "Winter/Spring Cusp",
        brightest_star:            "Eta Piscium",
        characteristics:           &[
            "Compassionate",
            "Intuitive",
            "Dreamy",
            "Artistic",
            "Gentle",
            "Spiritual",
        ],
        strengths:                 &[
            "Empathetic",
            "Creative",
            "Intuitive",
            "Adaptable",
            "Selfless",
        ],
        weaknesses:                &[
            "Escapist",
            "Idealistic",
            "Oversensitive",
            "Indecisive",
            "Victim mentality",
        ],
        key_traits:                &[
            "Dreamy",
            "Mystical",
            "Empathetic",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Cancer, Western::Scorpio, Western::Pisces, Western::Capricorn],
            average:     &[Western::Taurus, Western::Virgo],
            conflicting: &[Western::Gemini, Western::Sagittarius],
            harmful:     &[Western::Libra, Western::Aquarius],
        },
    },
    MetadataRecord {
        sign:                      Western::Ophiuchus,
        emoji:                     "⛎",
        element:                   "Fire/Water",
        element_emoji:             "🔥💧",
        modality:                  "Transitional",
        polarity:                  "Balanced",
        yin_yang:                  "Balanced",
        ruling_planet:             "Chiron",
        traditional_ruling_planet: Some("Jupiter"),
        ruling_planet_symbol:      "⚕",
        ruling_house:              "Not in traditional system",
        color_hex:                 "#663399",
        symbol:                    "Serpent Bearer",
        symbol_emoji:              "🐍",
        birthstone:                Some("Amethyst/Obsidian"),
        season:                    "Late Autumn",
        brightest_star:            "Rasalhague",
        characteristics:           &[
            "Healer",
            "Seeker",
            "Enlightened",
            "Mystical",
            "Passionate",
            "Balanced",
        ],
        strengths:                 &[
            "Healing",
            "Wisdom",
            "Seeking knowledge",
            "Intuitive",
            "Balanced",
            "Magnetic",
        ],
        weaknesses:                &[
            "Jealous",
            "Secretive",
            "Arrogant",
            "Passionate to a fault",
            "Conflicted",
        ],
        key_traits:                &[
            "Healer",
            "Seeker of wisdom",
            "Mystical",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Pisces, Western::Capricorn, Western::Cancer, Western::Virgo],
            average:     &[Western::Scorpio, Western::Taurus],
            conflicting: &[Western::Leo, Western::Aquarius],
            harmful:     &[Western::Sagittarius, Western::Gemini],
        },
    },
    MetadataRecord {
        sign:                      Western::Cetus,
        emoji:                     "🐋",
        element:                   "Water",
        element_emoji:             "💧",
        modality:                  "Fixed",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Neptune",
        traditional_ruling_planet: Some("Moon"),
        ruling_planet_symbol:      "♆",
        ruling_house:              "Not in traditional system",
        color_hex:                 "#4169E1",
        symbol:                    "Sea Monster/Whale",
        symbol_emoji:              "🐋",
        birthstone:                Some("Aquamarine/Pearl"),
        season:                    "Winter",
        brightest_star:            "Menkar",
        characteristics:           &[
            "Mysterious",
            "Deep",
            "Transformative",
            "Ancient",
            "Profound",
            "Primordial",
        ],
        strengths:                 &[
            "Depth",
            "Understanding",
            "Intuition",
            "Emotional intelligence",
            "Creativity",
            "Transformative",
        ],
        weaknesses:                &[
            "Overwhelming",
            "Moody",
            "Secretive",
            "Withdrawn",
            "Overly complex",
        ],
        key_traits:                &[
            "Mysterious",
            "Deep",
            "Primordial",
        ],
        compatibility:             Compatibility {
            best:        &[Western::Cancer, Western::Scorpio, Western::Pisces, Western::Ophiuchus],
            average:     &[Western::Capricorn, Western::Taurus],
            conflicting: &[Western::Aries, Western::Leo],
            harmful:     &[Western::Gemini, Western::Aquarius],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_declaration_order() {
        for sign in Western::ALL {
            assert_eq!(record(sign).sign, sign);
        }
    }

    #[test]
    fn test_traditional_rulers() {
        assert_eq!(record(Western::Scorpio).ruling_planet, "Pluto");
        assert_eq!(record(Western::Scorpio).traditional_ruling_planet, Some("Mars"));
        assert_eq!(record(Western::Aries).traditional_ruling_planet, None);
    }
}
