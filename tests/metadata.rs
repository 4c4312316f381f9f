use zodiac_calendar::{Chinese, CompatibilityLevel, MetadataRecord, Western, ZodiacSign, catalog};

fn assert_complete<S: ZodiacSign + std::fmt::Debug>(record: &MetadataRecord<S>) {
    let strings = [
        record.emoji,
        record.element,
        record.element_emoji,
        record.modality,
        record.polarity,
        record.yin_yang,
        record.ruling_planet,
        record.ruling_planet_symbol,
        record.ruling_house,
        record.color_hex,
        record.symbol,
        record.symbol_emoji,
        record.season,
        record.brightest_star,
    ];
    for value in strings {
        assert!(!value.is_empty(), "{:?} has an empty field", record.sign);
    }

    for list in [record.characteristics, record.strengths, record.weaknesses, record.key_traits] {
        assert!(!list.is_empty(), "{:?} has an empty trait list", record.sign);
        assert!(list.iter().all(|s| !s.is_empty()), "{:?} has an empty trait", record.sign);
    }

    assert!(record.color_rgb().is_some(), "{:?} color {} is not #RRGGBB", record.sign, record.color_hex);
    assert!(!record.compatibility.best.is_empty(), "{:?} has no best matches", record.sign);
}

#[test]
fn every_western_sign_has_a_complete_record() {
    for sign in Western::ALL {
        let record = sign.metadata();
        assert_eq!(record.sign, sign);
        assert_eq!(record.name(), sign.name());
        assert!(record.birthstone.is_some(), "{sign} has no birthstone");
        assert_complete(record);
    }
    assert_eq!(catalog::<Western>().count(), 14);
}

#[test]
fn every_chinese_sign_has_a_complete_record() {
    for sign in Chinese::ALL {
        let record = sign.metadata();
        assert_eq!(record.sign, sign);
        assert_complete(record);
    }
    assert_eq!(catalog::<Chinese>().count(), 12);
}

#[test]
fn known_records() {
    let aries = Western::Aries.metadata();
    assert_eq!(aries.color_hex, "#FF4136");
    assert_eq!(aries.ruling_planet, "Mars");
    assert_eq!(aries.element, "Fire");

    let rat = Chinese::Rat.metadata();
    assert_eq!(rat.color_hex, "#7D9D9C");
    assert_eq!(rat.birthstone, None);
}

#[test]
fn compatibility_groups_stay_within_their_family() {
    for sign in Chinese::ALL {
        let compat = sign.metadata().compatibility;
        for other in compat.best.iter().chain(compat.harmful) {
            assert_ne!(sign.compatibility_with(*other), CompatibilityLevel::Unrated);
        }
    }
    assert_eq!(Chinese::Ox.compatibility_with(Chinese::Goat), CompatibilityLevel::Harmful);
    assert_eq!(Western::Gemini.harmful_matches(), &[Western::Scorpio, Western::Capricorn]);
}
