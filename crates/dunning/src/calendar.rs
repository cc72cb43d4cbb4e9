//! Business-day calendar arithmetic.
//!
//! A business day is a calendar day that is not Saturday, not Sunday and not a
//! configured holiday. Days are compared by their UTC calendar date, so the
//! time-of-day of an instant never affects membership.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

fn is_business_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Count business days between `from` (exclusive) and `to` (inclusive).
///
/// When `to` is before `from` the walk runs backward and the count of
/// qualifying days in that direction is returned. The result is never signed.
pub fn count_business_days(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    holidays: &[NaiveDate],
) -> u32 {
    let holidays: HashSet<NaiveDate> = holidays.iter().copied().collect();
    let forward = to >= from;
    let step = Duration::days(if forward { 1 } else { -1 });

    let mut current = from;
    let mut count = 0;
    while (forward && current < to) || (!forward && current > to) {
        current += step;
        if is_business_day(current.date_naive(), &holidays) {
            count += 1;
        }
    }
    count
}

/// Walk backward from `from` until `days` business days have been consumed.
///
/// The time-of-day of `from` is preserved; `days == 0` returns `from`.
pub fn subtract_business_days(
    from: DateTime<Utc>,
    days: u32,
    holidays: &[NaiveDate],
) -> DateTime<Utc> {
    let holidays: HashSet<NaiveDate> = holidays.iter().copied().collect();

    let mut result = from;
    let mut remaining = days;
    while remaining > 0 {
        result -= Duration::days(1);
        if is_business_day(result.date_naive(), &holidays) {
            remaining -= 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_exclude_start_and_include_end() {
        // Mon 2025-03-10 -> Fri 2025-03-14
        assert_eq!(count_business_days(day(2025, 3, 10), day(2025, 3, 14), &[]), 4);
        assert_eq!(count_business_days(day(2025, 3, 10), day(2025, 3, 10), &[]), 0);
    }

    #[test]
    fn weekends_are_skipped() {
        // Fri 2025-03-14 -> Mon 2025-03-17
        assert_eq!(count_business_days(day(2025, 3, 14), day(2025, 3, 17), &[]), 1);
        assert_eq!(count_business_days(day(2025, 3, 14), day(2025, 3, 16), &[]), 0);
    }

    #[test]
    fn holidays_are_skipped_regardless_of_time_of_day() {
        let holidays = [date(2025, 3, 12)];
        assert_eq!(
            count_business_days(day(2025, 3, 10), day(2025, 3, 14), &holidays),
            3
        );
        let afternoon = Utc.with_ymd_and_hms(2025, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(
            count_business_days(afternoon, day(2025, 3, 14) + Duration::hours(15), &holidays),
            3
        );
    }

    #[test]
    fn backward_walk_counts_the_same_direction_independent_way() {
        // Walking back from Mon 2025-03-17 to Fri 2025-03-14 visits Sun, Sat, Fri.
        assert_eq!(count_business_days(day(2025, 3, 17), day(2025, 3, 14), &[]), 1);
        assert_eq!(count_business_days(day(2025, 3, 14), day(2025, 3, 10), &[]), 4);
    }

    #[test]
    fn subtract_skips_weekends() {
        assert_eq!(
            subtract_business_days(day(2025, 3, 14), 7, &[]),
            day(2025, 3, 5)
        );
    }

    #[test]
    fn subtract_skips_holidays() {
        assert_eq!(
            subtract_business_days(day(2025, 3, 12), 7, &[date(2025, 3, 3)]),
            day(2025, 2, 28)
        );
    }

    #[test]
    fn subtract_zero_is_identity() {
        let saturday = Utc.with_ymd_and_hms(2025, 3, 15, 9, 45, 0).unwrap();
        assert_eq!(subtract_business_days(saturday, 0, &[]), saturday);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: counting forward from `subtract(d, n)` to a business day `d`
        /// yields exactly `n`.
        #[test]
        fn subtract_then_count_round_trips(
            offset in 0i64..3650,
            hour in 0i64..24,
            n in 0u32..120,
            holiday_offsets in prop::collection::vec(0i64..3650, 0..20),
        ) {
            let epoch = day(2020, 1, 1);
            let d = epoch + Duration::days(offset) + Duration::hours(hour);
            let holidays: Vec<NaiveDate> = holiday_offsets
                .iter()
                .map(|o| (epoch + Duration::days(*o)).date_naive())
                .collect();
            let holiday_set: HashSet<NaiveDate> = holidays.iter().copied().collect();
            prop_assume!(is_business_day(d.date_naive(), &holiday_set));

            let start = subtract_business_days(d, n, &holidays);
            prop_assert!(start <= d);
            prop_assert_eq!(count_business_days(start, d, &holidays), n);
        }
    }
}
