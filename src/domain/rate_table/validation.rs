//! Range partition validation
//!
//! A category's ranges must cover every non-negative consumption value
//! exactly once: the first range starts at 0, each bounded range is followed
//! by one starting at `end + 1`, and the last range is open-ended.

use rust_decimal::Decimal;

use super::model::{Range, RangeDraft};
use crate::shared::errors::ValidationError;
use crate::shared::money::{to_money, MAX_UNIT_PRICE};

/// Validate a category's ranges and return them sorted by `start`.
///
/// Checks run in a fixed order and the first violation is returned.
pub fn validate_ranges(drafts: &[RangeDraft]) -> Result<Vec<Range>, ValidationError> {
    if drafts.is_empty() {
        return Err(ValidationError::EmptyRanges);
    }

    // Stable sort; a missing start orders first so it is caught below.
    let mut sorted: Vec<&RangeDraft> = drafts.iter().collect();
    sorted.sort_by_key(|r| r.start);

    match sorted[0].start {
        None => return Err(ValidationError::MissingStart),
        Some(start) if start != 0 => return Err(ValidationError::FirstStartNotZero),
        Some(_) => {}
    }

    let mut ranges = Vec::with_capacity(sorted.len());

    for (i, current) in sorted.iter().enumerate() {
        let start = current.start.ok_or(ValidationError::MissingStart)?;
        let unit_price = current.unit_price.ok_or(ValidationError::MissingUnitPrice)?;

        if unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativeUnitPrice);
        }
        let unit_price = to_money(unit_price);
        if unit_price > MAX_UNIT_PRICE {
            return Err(ValidationError::UnitPriceTooLarge);
        }

        if let Some(end) = current.end {
            if end < start {
                return Err(ValidationError::EndBeforeStart);
            }
        }

        if let Some(next) = sorted.get(i + 1) {
            let end = current.end.ok_or(ValidationError::UnboundedBeforeLast)?;
            let next_start = next.start.ok_or(ValidationError::MissingStart)?;

            if end >= next_start {
                return Err(ValidationError::Overlap);
            }
            // end < next_start here, so end + 1 cannot overflow
            if end + 1 != next_start {
                return Err(ValidationError::Gap);
            }
        }

        ranges.push(Range::new(start, current.end, unit_price));
    }

    if ranges.last().is_some_and(|last| last.end.is_some()) {
        return Err(ValidationError::LastRangeBounded);
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(start: u32, end: Option<u32>, price: Decimal) -> RangeDraft {
        RangeDraft::new(start, end, price)
    }

    #[test]
    fn accepts_single_open_range() {
        let ranges = validate_ranges(&[draft(0, None, dec!(5.00))]).unwrap();
        assert_eq!(ranges, vec![Range::new(0, None, dec!(5.00))]);
    }

    #[test]
    fn accepts_contiguous_ranges_in_any_order() {
        let ranges = validate_ranges(&[
            draft(21, None, dec!(9)),
            draft(0, Some(10), dec!(1.5)),
            draft(11, Some(20), dec!(3.25)),
        ])
        .unwrap();

        let starts: Vec<u32> = ranges.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![0, 11, 21]);
        assert_eq!(ranges[0].unit_price.to_string(), "1.50");
        assert_eq!(ranges[2].unit_price.to_string(), "9.00");
    }

    #[test]
    fn accepts_zero_price_and_single_value_range() {
        let ranges = validate_ranges(&[
            draft(0, Some(0), dec!(0)),
            draft(1, None, dec!(2)),
        ])
        .unwrap();
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(validate_ranges(&[]), Err(ValidationError::EmptyRanges));
    }

    #[test]
    fn rejects_missing_start() {
        let drafts = [
            draft(0, Some(10), dec!(1)),
            RangeDraft {
                start: None,
                end: None,
                unit_price: Some(dec!(2)),
            },
        ];
        assert_eq!(validate_ranges(&drafts), Err(ValidationError::MissingStart));
    }

    #[test]
    fn rejects_first_start_not_zero() {
        let drafts = [draft(1, None, dec!(1))];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::FirstStartNotZero)
        );
    }

    #[test]
    fn rejects_missing_unit_price() {
        let drafts = [RangeDraft {
            start: Some(0),
            end: None,
            unit_price: None,
        }];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::MissingUnitPrice)
        );
    }

    #[test]
    fn rejects_negative_unit_price() {
        let drafts = [draft(0, None, dec!(-0.01))];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::NegativeUnitPrice)
        );
    }

    #[test]
    fn rejects_unit_price_above_column_precision() {
        let drafts = [draft(0, None, dec!(100000000.00))];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::UnitPriceTooLarge)
        );

        let drafts = [draft(0, None, Decimal::MAX)];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::UnitPriceTooLarge)
        );

        // Rounds up past the limit.
        let drafts = [draft(0, None, dec!(99999999.995))];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::UnitPriceTooLarge)
        );

        let ranges = validate_ranges(&[draft(0, None, dec!(99999999.99))]).unwrap();
        assert_eq!(ranges[0].unit_price, MAX_UNIT_PRICE);
    }

    #[test]
    fn rejects_end_before_start() {
        let drafts = [
            draft(0, Some(10), dec!(1)),
            draft(11, Some(5), dec!(1)),
            draft(12, None, dec!(1)),
        ];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::EndBeforeStart)
        );
    }

    #[test]
    fn rejects_open_range_before_last() {
        let drafts = [draft(0, None, dec!(1)), draft(11, None, dec!(2))];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::UnboundedBeforeLast)
        );
    }

    #[test]
    fn rejects_overlap() {
        let drafts = [draft(0, Some(10), dec!(1)), draft(8, None, dec!(2))];
        assert_eq!(validate_ranges(&drafts), Err(ValidationError::Overlap));
    }

    #[test]
    fn rejects_duplicate_start_as_overlap() {
        let drafts = [draft(0, Some(5), dec!(1)), draft(0, None, dec!(2))];
        assert_eq!(validate_ranges(&drafts), Err(ValidationError::Overlap));
    }

    #[test]
    fn rejects_gap() {
        let drafts = [draft(0, Some(10), dec!(1)), draft(15, None, dec!(2))];
        assert_eq!(validate_ranges(&drafts), Err(ValidationError::Gap));
    }

    #[test]
    fn rejects_bounded_last_range() {
        let drafts = [draft(0, Some(10), dec!(1)), draft(11, Some(20), dec!(2))];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::LastRangeBounded)
        );
    }

    #[test]
    fn reports_first_violation_in_check_order() {
        // The first range has no price and the second overlaps; the price
        // check for range 0 runs before the pair check.
        let drafts = [
            RangeDraft {
                start: Some(0),
                end: Some(10),
                unit_price: None,
            },
            draft(5, None, dec!(1)),
        ];
        assert_eq!(
            validate_ranges(&drafts),
            Err(ValidationError::MissingUnitPrice)
        );

        // Overlap between 0 and 1 is found before range 1's negative price.
        let drafts = [draft(0, Some(10), dec!(1)), draft(5, None, dec!(-1))];
        assert_eq!(validate_ranges(&drafts), Err(ValidationError::Overlap));
    }

    /// Reference predicate: sorted by start, first starts at 0, each bounded
    /// range is followed by `end + 1`, and only the last is open-ended.
    fn is_partition(drafts: &[(u32, Option<u32>)]) -> bool {
        let mut sorted = drafts.to_vec();
        sorted.sort_by_key(|(start, _)| *start);
        if sorted.is_empty() || sorted[0].0 != 0 {
            return false;
        }
        for pair in sorted.windows(2) {
            match pair[0].1 {
                Some(end) if end + 1 == pair[1].0 => {}
                _ => return false,
            }
        }
        sorted.last().is_some_and(|(_, end)| end.is_none())
    }

    proptest::proptest! {
        #[test]
        fn succeeds_iff_ranges_form_a_partition(
            bounds in proptest::collection::vec((0u32..8, proptest::option::of(0u32..8)), 0..5)
        ) {
            let drafts: Vec<RangeDraft> = bounds
                .iter()
                .map(|(start, end)| draft(*start, *end, dec!(1)))
                .collect();
            // end < start is its own violation; keep the generator inside the
            // partition question.
            proptest::prop_assume!(bounds.iter().all(|(s, e)| e.map_or(true, |e| e >= *s)));

            proptest::prop_assert_eq!(validate_ranges(&drafts).is_ok(), is_partition(&bounds));
        }
    }
}
