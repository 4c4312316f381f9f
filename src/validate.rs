//! Proof that a list of ranges partitions the year.
//!
//! Checks run in a fixed order and the first failure is returned:
//! duplicate signs, missing signs, uncovered days, overlapping days, and
//! finally continuity of the combined days. The same input therefore always
//! reports the same error.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::consts::MAX_DAY_OF_YEAR;
use crate::ordinal::Ordinal;
use crate::range::ZodiacRange;
use crate::sign::Western;
use crate::ZodiacError;

/// Validates `ranges` against the signs a system expects.
///
/// # Errors
/// - `DuplicateSigns` if a sign owns more than one range
/// - `MissingSigns` if an expected sign owns no range
/// - `InvalidDateComponents` if a range endpoint is not a real day
/// - `MissingDays` if some day is in no range
/// - `OverlappingDays` if some day is in more than one range
/// - `NonContinuousRanges` if the combined days are not exactly `1..=366`
#[tracing::instrument(skip_all, fields(n_ranges = ranges.len(), n_expected = expected.len()))]
pub fn validate(ranges: &[ZodiacRange], expected: &BTreeSet<Western>) -> Result<(), ZodiacError> {
    let duplicates = duplicate_signs(ranges);
    if !duplicates.is_empty() {
        debug!(?duplicates, "rejected: duplicate signs");
        return Err(ZodiacError::DuplicateSigns(duplicates));
    }

    let missing = missing_signs(ranges, expected);
    if !missing.is_empty() {
        debug!(?missing, "rejected: missing signs");
        return Err(ZodiacError::MissingSigns(missing));
    }

    let expanded = ranges
        .iter()
        .map(ZodiacRange::days)
        .collect::<Result<Vec<_>, _>>()?;

    let uncovered = uncovered_days(&expanded);
    if !uncovered.is_empty() {
        debug!(count = uncovered.len(), "rejected: uncovered days");
        return Err(ZodiacError::MissingDays(uncovered));
    }

    let overlapping = overlapping_days(&expanded);
    if !overlapping.is_empty() {
        debug!(count = overlapping.len(), "rejected: overlapping days");
        return Err(ZodiacError::OverlappingDays(overlapping));
    }

    if !is_continuous(&expanded) {
        debug!("rejected: ranges not continuous");
        return Err(ZodiacError::NonContinuousRanges);
    }

    debug!("partition valid");
    Ok(())
}

fn duplicate_signs(ranges: &[ZodiacRange]) -> Vec<Western> {
    let mut counts: BTreeMap<Western, usize> = BTreeMap::new();
    for range in ranges {
        *counts.entry(range.sign()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(sign, _)| sign)
        .collect()
}

fn missing_signs(ranges: &[ZodiacRange], expected: &BTreeSet<Western>) -> Vec<Western> {
    let present: BTreeSet<Western> = ranges.iter().map(ZodiacRange::sign).collect();
    expected.difference(&present).copied().collect()
}

fn uncovered_days(expanded: &[Vec<Ordinal>]) -> Vec<Ordinal> {
    let covered: BTreeSet<Ordinal> = expanded.iter().flatten().copied().collect();
    Ordinal::all().filter(|day| !covered.contains(day)).collect()
}

fn overlapping_days(expanded: &[Vec<Ordinal>]) -> Vec<Ordinal> {
    let mut seen = BTreeSet::new();
    let mut overlapping = BTreeSet::new();
    for &day in expanded.iter().flatten() {
        if !seen.insert(day) {
            overlapping.insert(day);
        }
    }
    overlapping.into_iter().collect()
}

fn is_continuous(expanded: &[Vec<Ordinal>]) -> bool {
    let mut all: Vec<Ordinal> = expanded.iter().flatten().copied().collect();
    all.sort_unstable();
    all.len() == usize::from(MAX_DAY_OF_YEAR) && all.into_iter().eq(Ordinal::all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::test_utils::{month_based_ranges, ordinal, ordinals, range};

    fn signs_of(ranges: &[ZodiacRange]) -> BTreeSet<Western> {
        ranges.iter().map(ZodiacRange::sign).collect()
    }

    #[test]
    fn test_presets_are_valid() {
        let traditional: BTreeSet<_> = Western::TRADITIONAL.into_iter().collect();
        assert_eq!(validate(&presets::TROPICAL, &traditional), Ok(()));
        assert_eq!(validate(&presets::SIDEREAL, &traditional), Ok(()));

        let all: BTreeSet<_> = Western::ALL.into_iter().collect();
        assert_eq!(validate(&presets::EQUAL_LENGTH, &all), Ok(()));

        let iau: BTreeSet<_> = Western::ASTRONOMICAL_IAU.into_iter().collect();
        assert_eq!(validate(&presets::ASTRONOMICAL_IAU, &iau), Ok(()));
    }

    #[test]
    fn test_month_based_ranges_are_valid() {
        let ranges = month_based_ranges();
        assert_eq!(validate(&ranges, &signs_of(&ranges)), Ok(()));
    }

    #[test]
    fn test_duplicates_reported_before_coverage() {
        let ranges = vec![
            range(Western::Aries, (1, 1), (10, 1)),
            range(Western::Aries, (11, 1), (20, 1)),
            range(Western::Leo, (5, 1), (6, 1)),
            range(Western::Leo, (7, 1), (8, 1)),
        ];
        assert_eq!(
            validate(&ranges, &signs_of(&ranges)),
            Err(ZodiacError::DuplicateSigns(vec![Western::Aries, Western::Leo]))
        );
    }

    #[test]
    fn test_missing_signs_sorted() {
        let ranges = vec![range(Western::Aries, (1, 1), (31, 12))];
        let expected: BTreeSet<_> = [Western::Pisces, Western::Aries, Western::Cancer].into_iter().collect();
        assert_eq!(
            validate(&ranges, &expected),
            Err(ZodiacError::MissingSigns(vec![Western::Cancer, Western::Pisces]))
        );
    }

    #[test]
    fn test_single_missing_day() {
        let mut ranges = month_based_ranges();
        ranges[0] = range(Western::Aquarius, (1, 1), (30, 1));
        assert_eq!(
            validate(&ranges, &signs_of(&ranges)),
            Err(ZodiacError::MissingDays(vec![ordinal(31)]))
        );
    }

    #[test]
    fn test_missing_leap_day() {
        let mut ranges = month_based_ranges();
        ranges[1] = range(Western::Pisces, (1, 2), (28, 2));
        assert_eq!(
            validate(&ranges, &signs_of(&ranges)),
            Err(ZodiacError::MissingDays(vec![ordinal(60)]))
        );
    }

    #[test]
    fn test_overlap() {
        let mut ranges = month_based_ranges();
        // January also claims the first two days of February
        ranges[0] = range(Western::Aquarius, (1, 1), (2, 2));
        assert_eq!(
            validate(&ranges, &signs_of(&ranges)),
            Err(ZodiacError::OverlappingDays(ordinals([32, 33])))
        );
    }

    #[test]
    fn test_wrapping_overlap() {
        let ranges = vec![
            range(Western::Capricorn, (20, 12), (10, 1)),
            range(Western::Aquarius, (1, 1), (25, 12)),
        ];
        let mut expected_overlap = ordinals(1..=10);
        expected_overlap.extend(ordinals(355..=360));
        assert_eq!(
            validate(&ranges, &signs_of(&ranges)),
            Err(ZodiacError::OverlappingDays(expected_overlap))
        );
    }

    #[test]
    fn test_invalid_endpoint_surfaces_after_sign_checks() {
        let ranges = vec![range(Western::Aries, (31, 4), (30, 4))];
        assert_eq!(
            validate(&ranges, &signs_of(&ranges)),
            Err(ZodiacError::InvalidDateComponents { year: None, month: 4, day: 31 })
        );

        let with_duplicate = vec![
            range(Western::Aries, (31, 4), (30, 4)),
            range(Western::Aries, (1, 1), (2, 1)),
        ];
        assert!(matches!(
            validate(&with_duplicate, &signs_of(&with_duplicate)),
            Err(ZodiacError::DuplicateSigns(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            validate(&[], &BTreeSet::new()),
            Err(ZodiacError::MissingDays(Ordinal::all().collect()))
        );
    }

    #[test]
    fn test_single_sign_full_year() {
        let ranges = vec![range(Western::Leo, (23, 7), (22, 7))];
        assert_eq!(validate(&ranges, &signs_of(&ranges)), Ok(()));
    }
}
