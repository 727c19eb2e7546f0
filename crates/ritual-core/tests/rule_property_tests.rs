use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use ritual_core::rule::RecurrenceRule;

proptest! {
    #[test]
    fn weekdays_rule_matches_exactly_the_listed_days(
        year in 2000i32..2100,
        ordinal in 1u32..=365,
        days in proptest::collection::vec(0u8..7, 0..7),
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let rule = RecurrenceRule::Weekdays { days: days.clone() };
        let weekday = date.weekday().num_days_from_sunday() as u8;

        prop_assert_eq!(rule.matches(date), days.contains(&weekday));
    }

    #[test]
    fn monthly_date_never_matches_a_different_day(
        year in 2000i32..2100,
        month in 1u32..=12,
        day_of_month in 1u32..=28,
        rule_day in 1u8..=31,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day_of_month).unwrap();
        let rule = RecurrenceRule::MonthlyDate { day: rule_day };

        prop_assert_eq!(rule.matches(date), day_of_month == u32::from(rule_day));
    }

    #[test]
    fn nth_weekday_matches_at_most_once_per_month(
        year in 2000i32..2100,
        month in 1u32..=12,
        week in 1u8..=5,
        weekday in 0u8..=6,
    ) {
        let rule = RecurrenceRule::NthWeekday { week, weekday };

        let mut matches = 0;
        let mut date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        while date.month() == month {
            if rule.matches(date) {
                matches += 1;
            }
            date = date.succ_opt().unwrap();
        }

        prop_assert!(matches <= 1);
    }

    #[test]
    fn interval_days_matches_are_n_apart_within_a_year(
        year in 2000i32..2100,
        n in 1u32..60,
    ) {
        let rule = RecurrenceRule::IntervalDays { n };

        let mut previous: Option<u32> = None;
        let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        while date.year() == year {
            if rule.matches(date) {
                if let Some(prev) = previous {
                    prop_assert_eq!(date.ordinal() - prev, n);
                }
                previous = Some(date.ordinal());
            }
            date = date.succ_opt().unwrap();
        }
    }
}
