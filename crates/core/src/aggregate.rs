//! Day-bucketed aggregation feeding the daily-totals chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::Timestamp;

/// Total amount spent on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub total: f64,
}

/// Sum amounts per calendar day.
///
/// Accepts `(date, amount)` pairs in any order and returns one
/// [`DailyTotal`] per day that has at least one record, ascending by day.
/// Days with no records are absent, never zero-filled. Any residual
/// time-of-day on the input dates is ignored; only the calendar-day
/// portion buckets.
///
/// Pure and deterministic: the same input always yields the same output.
pub fn aggregate_by_day<I>(records: I) -> Vec<DailyTotal>
where
    I: IntoIterator<Item = (Timestamp, f64)>,
{
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for (date, amount) in records {
        *totals.entry(date.date_naive()).or_insert(0.0) += amount;
    }

    totals
        .into_iter()
        .map(|(day, total)| DailyTotal { day, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::start_of_day;
    use chrono::{TimeZone, Utc};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(date: &str, amount: f64) -> (Timestamp, f64) {
        (start_of_day(day(date)), amount)
    }

    #[test]
    fn groups_same_day_records() {
        let records = vec![
            record("2024-01-01", 10.0),
            record("2024-01-01", 5.0),
            record("2024-01-02", 7.0),
        ];

        let totals = aggregate_by_day(records);

        assert_eq!(
            totals,
            vec![
                DailyTotal { day: day("2024-01-01"), total: 15.0 },
                DailyTotal { day: day("2024-01-02"), total: 7.0 },
            ]
        );
    }

    #[test]
    fn output_is_ascending_regardless_of_input_order() {
        let records = vec![
            record("2024-03-10", 1.0),
            record("2024-01-05", 2.0),
            record("2024-02-20", 3.0),
        ];

        let totals = aggregate_by_day(records);

        let days: Vec<_> = totals.iter().map(|t| t.day).collect();
        assert_eq!(
            days,
            vec![day("2024-01-05"), day("2024-02-20"), day("2024-03-10")]
        );
    }

    #[test]
    fn idempotent_on_the_same_input() {
        let records = vec![
            record("2024-01-01", 10.0),
            record("2024-01-02", 7.0),
        ];

        let first = aggregate_by_day(records.clone());
        let second = aggregate_by_day(records);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_by_day(std::iter::empty()).is_empty());
    }

    #[test]
    fn gap_days_are_absent_not_zero() {
        let records = vec![
            record("2024-01-01", 1.0),
            record("2024-01-03", 2.0),
        ];

        let totals = aggregate_by_day(records);

        assert_eq!(totals.len(), 2);
        assert!(totals.iter().all(|t| t.day != day("2024-01-02")));
    }

    #[test]
    fn residual_time_of_day_is_ignored() {
        // A record whose date carries 18:45 still lands in its calendar day.
        let late = Utc.with_ymd_and_hms(2024, 1, 1, 18, 45, 11).unwrap();
        let records = vec![(late, 4.0), record("2024-01-01", 6.0)];

        let totals = aggregate_by_day(records);

        assert_eq!(
            totals,
            vec![DailyTotal { day: day("2024-01-01"), total: 10.0 }]
        );
    }
}
