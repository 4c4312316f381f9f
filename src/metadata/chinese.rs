use super::{Compatibility, MetadataRecord};
use crate::sign::Chinese;

pub(crate) fn record(sign: Chinese) -> &'static MetadataRecord<Chinese> {
    &CHINESE[sign.cycle_index()]
}

static CHINESE: [MetadataRecord<Chinese>; 12] = [
    MetadataRecord {
        sign:                      Chinese::Rat,
        emoji:                     "🐀",
        element:                   "Water",
        element_emoji:             "💧",
        modality:                  "Yang",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Mercury",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "☿",
        ruling_house:              "North",
        color_hex:                 "#7D9D9C",
        symbol:                    "Rat",
        symbol_emoji:              "🐀",
        birthstone:                None,
        season:                    "Winter",
        brightest_star:            "Sirius",
        characteristics:           &[
            "Quick-witted",
            "Resourceful",
            "Versatile",
            "Kind",
            "Smart",
            "Adaptable",
        ],
        strengths:                 &[
            "Adaptable",
            "Intelligent",
            "Alert",
            "Positive",
            "Flexible",
        ],
        weaknesses:                &[
            "Timid",
            "Stubborn",
            "Picky",
            "Gossipy",
            "Opportunistic",
        ],
        key_traits:                &[
            "Clever",
            "Careful",
            "Diligent",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Dragon, Chinese::Monkey, Chinese::Ox],
            average:     &[Chinese::Tiger, Chinese::Snake, Chinese::Rooster],
            conflicting: &[Chinese::Rabbit, Chinese::Goat],
            harmful:     &[Chinese::Horse],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Ox,
        emoji:                     "🐂",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Yin",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Saturn",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♄",
        ruling_house:              "North-Northeast",
        color_hex:                 "#2B4865",
        symbol:                    "Ox",
        symbol_emoji:              "🐂",
        birthstone:                None,
        season:                    "Winter",
        brightest_star:            "Aldebaran",
        characteristics:           &[
            "Diligent",
            "Dependable",
            "Strong",
            "Determined",
            "Honest",
            "Patient",
        ],
        strengths:                 &[
            "Patient",
            "Hardworking",
            "Trustworthy",
            "Reliable",
            "Methodical",
        ],
        weaknesses:                &[
            "Stubborn",
            "Conventional",
            "Inflexible",
            "Judgmental",
            "Demanding",
        ],
        key_traits:                &[
            "Reliable",
            "Strong",
            "Conservative",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Rat, Chinese::Snake, Chinese::Rooster],
            average:     &[Chinese::Tiger, Chinese::Monkey, Chinese::Pig],
            conflicting: &[Chinese::Dragon, Chinese::Horse],
            harmful:     &[Chinese::Goat],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Tiger,
        emoji:                     "🐅",
        element:                   "Wood",
        element_emoji:             "🌳",
        modality:                  "Yang",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Mars",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♂",
        ruling_house:              "Northeast",
        color_hex:                 "#F29727",
        symbol:                    "Tiger",
        symbol_emoji:              "🐅",
        birthstone:                None,
        season:                    "Winter",
        brightest_star:            "Regulus",
        characteristics:           &[
            "Brave",
            "Confident",
            "Competitive",
            "Unpredictable",
            "Charming",
            "Intense",
        ],
        strengths:                 &[
            "Courageous",
            "Enthusiastic",
            "Confident",
            "Charismatic",
            "Leader",
        ],
        weaknesses:                &[
            "Impulsive",
            "Rebellious",
            "Short-tempered",
            "Overconfident",
            "Suspicious",
        ],
        key_traits:                &[
            "Brave",
            "Confident",
            "Competitive",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Horse, Chinese::Dog, Chinese::Pig],
            average:     &[Chinese::Rat, Chinese::Rabbit, Chinese::Dragon],
            conflicting: &[Chinese::Monkey, Chinese::Snake],
            harmful:     &[Chinese::Ox],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Rabbit,
        emoji:                     "🐇",
        element:                   "Wood",
        element_emoji:             "🌳",
        modality:                  "Yin",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Venus",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♀",
        ruling_house:              "East",
        color_hex:                 "#F2BED1",
        symbol:                    "Rabbit",
        symbol_emoji:              "🐇",
        birthstone:                None,
        season:                    "Spring",
        brightest_star:            "Vega",
        characteristics:           &[
            "Gentle",
            "Quiet",
            "Elegant",
            "Alert",
            "Quick",
            "Skillful",
        ],
        strengths:                 &[
            "Gentle",
            "Compassionate",
            "Elegant",
            "Artistic",
            "Diplomatic",
        ],
        weaknesses:                &[
            "Timid",
            "Superficial",
            "Detached",
            "Self-indulgent",
            "Overly cautious",
        ],
        key_traits:                &[
            "Quiet",
            "Elegant",
            "Kind",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Goat, Chinese::Dog, Chinese::Pig],
            average:     &[Chinese::Tiger, Chinese::Horse, Chinese::Monkey],
            conflicting: &[Chinese::Rat, Chinese::Dragon],
            harmful:     &[Chinese::Rooster],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Dragon,
        emoji:                     "🐉",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Yang",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Jupiter",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♃",
        ruling_house:              "East-Southeast",
        color_hex:                 "#E94560",
        symbol:                    "Dragon",
        symbol_emoji:              "🐉",
        birthstone:                None,
        season:                    "Spring",
        brightest_star:            "Alpha Draconis",
        characteristics:           &[
            "Confident",
            "Intelligent",
            "Enthusiastic",
            "Ambitious",
            "Romantic",
            "Passionate",
        ],
        strengths:                 &[
            "Confident",
            "Ambitious",
            "Intelligent",
            "Energetic",
            "Charismatic",
        ],
        weaknesses:                &[
            "Arrogant",
            "Impulsive",
            "Unrealistic",
            "Domineering",
            "Inflexible",
        ],
        key_traits:                &[
            "Powerful",
            "Ambitious",
            "Lucky",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Rat, Chinese::Monkey, Chinese::Rooster],
            average:     &[Chinese::Tiger, Chinese::Snake, Chinese::Pig],
            conflicting: &[Chinese::Ox, Chinese::Rabbit],
            harmful:     &[Chinese::Dog],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Snake,
        emoji:                     "🐍",
        element:                   "Fire",
        element_emoji:             "🔥",
        modality:                  "Yin",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Pluto",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♇",
        ruling_house:              "Southeast",
        color_hex:                 "#557153",
        symbol:                    "Snake",
        symbol_emoji:              "🐍",
        birthstone:                None,
        season:                    "Spring",
        brightest_star:            "Serpens",
        characteristics:           &[
            "Enigmatic",
            "Intuitive",
            "Wise",
            "Determined",
            "Refined",
            "Analytical",
        ],
        strengths:                 &[
            "Wise",
            "Intuitive",
            "Elegant",
            "Determined",
            "Mysterious",
        ],
        weaknesses:                &[
            "Jealous",
            "Suspicious",
            "Possessive",
            "Manipulative",
            "Materialistic",
        ],
        key_traits:                &[
            "Wise",
            "Mysterious",
            "Charming",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Ox, Chinese::Rooster, Chinese::Monkey],
            average:     &[Chinese::Dragon, Chinese::Goat, Chinese::Dog],
            conflicting: &[Chinese::Tiger, Chinese::Rabbit],
            harmful:     &[Chinese::Pig],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Horse,
        emoji:                     "🐎",
        element:                   "Fire",
        element_emoji:             "🔥",
        modality:                  "Yang",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Mars",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♂",
        ruling_house:              "South",
        color_hex:                 "#C63D2F",
        symbol:                    "Horse",
        symbol_emoji:              "🐎",
        birthstone:                None,
        season:                    "Summer",
        brightest_star:            "Kitalpha",
        characteristics:           &[
            "Energetic",
            "Independent",
            "Warm-hearted",
            "Enthusiastic",
            "Free-spirited",
            "Positive",
        ],
        strengths:                 &[
            "Energetic",
            "Independent",
            "Adventurous",
            "Warm-hearted",
            "Versatile",
        ],
        weaknesses:                &[
            "Impatient",
            "Impulsive",
            "Stubborn",
            "Self-centered",
            "Rebellious",
        ],
        key_traits:                &[
            "Energetic",
            "Independent",
            "Adventurous",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Tiger, Chinese::Goat, Chinese::Dog],
            average:     &[Chinese::Rabbit, Chinese::Monkey, Chinese::Pig],
            conflicting: &[Chinese::Ox, Chinese::Rooster],
            harmful:     &[Chinese::Rat],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Goat,
        emoji:                     "🐐",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Yin",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Neptune",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♆",
        ruling_house:              "Southwest",
        color_hex:                 "#F0E5CF",
        symbol:                    "Goat",
        symbol_emoji:              "🐐",
        birthstone:                None,
        season:                    "Summer",
        brightest_star:            "Capella",
        characteristics:           &[
            "Gentle",
            "Empathetic",
            "Creative",
            "Calm",
            "Artistic",
            "Elegant",
        ],
        strengths:                 &[
            "Gentle",
            "Creative",
            "Compassionate",
            "Artistic",
            "Peaceful",
        ],
        weaknesses:                &[
            "Indecisive",
            "Timid",
            "Pessimistic",
            "Dependent",
            "Worrisome",
        ],
        key_traits:                &[
            "Gentle",
            "Creative",
            "Compassionate",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Rabbit, Chinese::Horse, Chinese::Pig],
            average:     &[Chinese::Snake, Chinese::Monkey, Chinese::Dog],
            conflicting: &[Chinese::Rat, Chinese::Ox],
            harmful:     &[Chinese::Rooster],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Monkey,
        emoji:                     "🐒",
        element:                   "Metal",
        element_emoji:             "🔧",
        modality:                  "Yang",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Mercury",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "☿",
        ruling_house:              "West-Southwest",
        color_hex:                 "#FCAF3C",
        symbol:                    "Monkey",
        symbol_emoji:              "🐒",
        birthstone:                None,
        season:                    "Summer",
        brightest_star:            "Arcturus",
        characteristics:           &[
            "Intelligent",
            "Witty",
            "Flexible",
            "Innovative",
            "Problem solver",
            "Mischievous",
        ],
        strengths:                 &[
            "Intelligent",
            "Creative",
            "Versatile",
            "Witty",
            "Adaptable",
        ],
        weaknesses:                &[
            "Dishonest",
            "Impulsive",
            "Opportunistic",
            "Vain",
            "Manipulative",
        ],
        key_traits:                &[
            "Clever",
            "Versatile",
            "Quick-witted",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Rat, Chinese::Dragon, Chinese::Snake],
            average:     &[Chinese::Ox, Chinese::Rabbit, Chinese::Goat],
            conflicting: &[Chinese::Tiger, Chinese::Pig],
            harmful:     &[Chinese::Horse],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Rooster,
        emoji:                     "🐓",
        element:                   "Metal",
        element_emoji:             "🔧",
        modality:                  "Yin",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Venus",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♀",
        ruling_house:              "West",
        color_hex:                 "#FA7070",
        symbol:                    "Rooster",
        symbol_emoji:              "🐓",
        birthstone:                None,
        season:                    "Autumn",
        brightest_star:            "Spica",
        characteristics:           &[
            "Observant",
            "Hardworking",
            "Courageous",
            "Talented",
            "Confident",
            "Honest",
        ],
        strengths:                 &[
            "Honest",
            "Observant",
            "Practical",
            "Organized",
            "Confident",
        ],
        weaknesses:                &[
            "Critical",
            "Perfectionist",
            "Blunt",
            "Conservative",
            "Arrogant",
        ],
        key_traits:                &[
            "Observant",
            "Hardworking",
            "Courageous",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Ox, Chinese::Dragon, Chinese::Snake],
            average:     &[Chinese::Rat, Chinese::Tiger, Chinese::Dog],
            conflicting: &[Chinese::Horse, Chinese::Rabbit],
            harmful:     &[Chinese::Goat],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Dog,
        emoji:                     "🐕",
        element:                   "Earth",
        element_emoji:             "🌎",
        modality:                  "Yang",
        polarity:                  "Positive",
        yin_yang:                  "Yang",
        ruling_planet:             "Pluto",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♇",
        ruling_house:              "West-Northwest",
        color_hex:                 "#C4DFAA",
        symbol:                    "Dog",
        symbol_emoji:              "🐕",
        birthstone:                None,
        season:                    "Autumn",
        brightest_star:            "Sirius",
        characteristics:           &[
            "Loyal",
            "Honest",
            "Responsible",
            "Courageous",
            "Sincere",
            "Protective",
        ],
        strengths:                 &[
            "Loyal",
            "Honest",
            "Responsible",
            "Brave",
            "Protective",
        ],
        weaknesses:                &[
            "Anxious",
            "Conservative",
            "Stubborn",
            "Critical",
            "Pessimistic",
        ],
        key_traits:                &[
            "Loyal",
            "Honest",
            "Protective",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Tiger, Chinese::Rabbit, Chinese::Horse],
            average:     &[Chinese::Rooster, Chinese::Goat, Chinese::Snake],
            conflicting: &[Chinese::Ox, Chinese::Monkey],
            harmful:     &[Chinese::Dragon],
        },
    },
    MetadataRecord {
        sign:                      Chinese::Pig,
        emoji:                     "🐖",
        element:                   "Water",
        element_emoji:             "💧",
        modality:                  "Yin",
        polarity:                  "Negative",
        yin_yang:                  "Yin",
        ruling_planet:             "Jupiter",
        traditional_ruling_planet: None,
        ruling_planet_symbol:      "♃",
        ruling_house:              "Northwest",
        color_hex:                 "#CB1C8D",
        symbol:                    "Pig",
        symbol_emoji:              "🐖",
        birthstone:                None,
        season:                    "Winter",
        brightest_star:            "Alderamin",
        characteristics:           &[
            "Compassionate",
            "Generous",
            "Diligent",
            "Peace-loving",
            "Honest",
            "Optimistic",
        ],
        strengths:                 &[
            "Kind",
            "Generous",
            "Diligent",
            "Honest",
            "Brave",
        ],
        weaknesses:                &[
            "Naive",
            "Over-reliant",
            "Self-indulgent",
            "Materialistic",
            "Gullible",
        ],
        key_traits:                &[
            "Kind",
            "Wealth-oriented",
            "Honest",
        ],
        compatibility:             Compatibility {
            best:        &[Chinese::Tiger, Chinese::Rabbit, Chinese::Goat],
            average:     &[Chinese::Ox, Chinese::Dragon, Chinese::Horse],
            conflicting: &[Chinese::Monkey, Chinese::Snake],
            harmful:     &[Chinese::Rooster],
        },
    },
];
