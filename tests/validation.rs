use zodiac_calendar::{
    Ordinal, Western, WesternSystem, ZodiacDay, ZodiacError, ZodiacRange, ZodiacResolver,
};

fn range(sign: Western, start: (u8, u8), end: (u8, u8)) -> ZodiacRange {
    ZodiacRange::new(sign, ZodiacDay::new(start.0, start.1), ZodiacDay::new(end.0, end.1))
}

fn halves() -> Vec<ZodiacRange> {
    vec![
        range(Western::Leo, (1, 1), (30, 6)),
        range(Western::Virgo, (1, 7), (31, 12)),
    ]
}

#[test]
fn duplicate_signs_win_over_coverage_gaps() {
    let system = WesternSystem::Custom(vec![
        range(Western::Leo, (1, 1), (10, 1)),
        range(Western::Leo, (1, 3), (10, 3)),
    ]);
    assert_eq!(
        ZodiacResolver::try_new(system),
        Err(ZodiacError::DuplicateSigns(vec![Western::Leo]))
    );
}

#[test]
fn missing_thirty_first_of_january() {
    let system = WesternSystem::Custom(vec![
        range(Western::Aquarius, (1, 1), (30, 1)),
        range(Western::Pisces, (1, 2), (31, 12)),
    ]);
    let err = ZodiacResolver::try_new(system).expect_err("day 31 is uncovered");
    match err {
        ZodiacError::MissingDays(days) => {
            assert_eq!(days, vec![Ordinal::new(31).expect("valid ordinal")]);
        },
        other => panic!("expected MissingDays, got {other:?}"),
    }
}

#[test]
fn traditional_set_missing_ten_signs() {
    // Custom systems expect only the signs they name, so go through Partition
    let ranges = halves();
    let expected = Western::TRADITIONAL.into_iter().collect();
    let err = zodiac_calendar::Partition::new(ranges, &expected).expect_err("ten signs are missing");
    match err {
        ZodiacError::MissingSigns(missing) => {
            assert_eq!(missing.len(), 10);
            assert!(!missing.contains(&Western::Leo));
            assert!(missing.windows(2).all(|w| w[0] < w[1]), "missing signs are sorted");
        },
        other => panic!("expected MissingSigns, got {other:?}"),
    }
}

#[test]
fn overlap_reported_after_coverage() {
    let mut ranges = halves();
    ranges.push(range(Western::Libra, (30, 6), (1, 7)));
    let err = ZodiacResolver::try_new(WesternSystem::Custom(ranges)).expect_err("two days overlap");
    let expected: Vec<Ordinal> = [182, 183]
        .into_iter()
        .map(|d| Ordinal::new(d).expect("valid ordinal"))
        .collect();
    assert_eq!(err, ZodiacError::OverlappingDays(expected));
}

#[test]
fn malformed_endpoint_is_a_date_error() {
    let system = WesternSystem::Custom(vec![range(Western::Leo, (1, 1), (31, 4))]);
    assert_eq!(
        ZodiacResolver::try_new(system),
        Err(ZodiacError::InvalidDateComponents { year: None, month: 4, day: 31 })
    );
}

#[test]
fn observable_failure_state() {
    let system = WesternSystem::Custom(vec![range(Western::Leo, (1, 1), (30, 1))]);
    let resolver = ZodiacResolver::new(system);
    assert!(!resolver.is_ready());
    assert!(matches!(resolver.error(), Some(ZodiacError::MissingDays(_))));
    assert!(resolver.signs().is_empty());
    assert!(matches!(
        resolver.resolve_western_day(15, 1),
        Err(ZodiacError::DayNumberNotFound(15))
    ));
}

#[test]
fn custom_system_without_optional_signs() {
    let resolver = ZodiacResolver::try_new(WesternSystem::Custom(halves())).expect("halves cover the year");
    assert_eq!(resolver.signs(), vec![Western::Leo, Western::Virgo]);
    assert_eq!(resolver.resolve_western_day(29, 2).expect("covered"), Western::Leo);
    assert_eq!(resolver.range_for(Western::Ophiuchus), None);
}

#[test]
fn custom_system_from_json() {
    let json = r#"{"custom": [
        {"sign": "capricorn", "start": {"day": 1, "month": 7}, "end": {"day": 31, "month": 1}},
        {"sign": "cancer", "start": {"day": 1, "month": 2}, "end": {"day": 30, "month": 6}}
    ]}"#;
    let system: WesternSystem = serde_json::from_str(json).expect("valid custom system json");
    let resolver = ZodiacResolver::try_new(system).expect("wrapping halves cover the year");
    assert_eq!(resolver.resolve_western_day(31, 12).expect("covered"), Western::Capricorn);
    assert_eq!(resolver.resolve_western_day(1, 1).expect("covered"), Western::Capricorn);
    assert_eq!(resolver.resolve_western_day(1, 2).expect("covered"), Western::Cancer);
}
