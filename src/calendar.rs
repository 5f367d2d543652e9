// Calendar math shared by pricing, availability and reporting.

use chrono::{Datelike, Duration, NaiveDate};

// Enumerate the nights of a stay: every date from check-in (inclusive) up to
// check-out (exclusive). Inverted or empty ranges are a zero-night stay, not
// an error.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    if check_out <= check_in {
        return Vec::new();
    }
    let mut nights = Vec::with_capacity((check_out - check_in).num_days() as usize);
    let mut cursor = check_in;
    while cursor < check_out {
        nights.push(cursor);
        cursor += Duration::days(1);
    }
    nights
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Day,
    Week,
    Month,
}

// Resolve a reporting period around a pivot date to a half-open window
// [start, end). Weeks start on Monday, months are calendar months.
pub fn period_window(period: ReportPeriod, date: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        ReportPeriod::Day => (date, date + Duration::days(1)),
        ReportPeriod::Week => {
            let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
            (monday, monday + Duration::days(7))
        }
        ReportPeriod::Month => {
            let first = date.with_day(1).unwrap_or(date);
            let next_first = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            }
            .unwrap_or(first);
            (first, next_first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_nights_between_enumerates_each_night() {
        let nights = nights_between(d(2025, 7, 8), d(2025, 7, 12));
        assert_eq!(
            nights,
            vec![d(2025, 7, 8), d(2025, 7, 9), d(2025, 7, 10), d(2025, 7, 11)]
        );
    }

    #[test]
    fn test_nights_between_crosses_month_boundary() {
        let nights = nights_between(d(2025, 1, 30), d(2025, 2, 2));
        assert_eq!(nights, vec![d(2025, 1, 30), d(2025, 1, 31), d(2025, 2, 1)]);
    }

    #[test_case(d(2025, 6, 5), d(2025, 6, 5); "zero length")]
    #[test_case(d(2025, 6, 7), d(2025, 6, 5); "inverted")]
    fn test_nights_between_degenerate_ranges_are_empty(check_in: NaiveDate, check_out: NaiveDate) {
        assert!(nights_between(check_in, check_out).is_empty());
    }

    #[test]
    fn test_period_window_day() {
        let (start, end) = period_window(ReportPeriod::Day, d(2025, 9, 1));
        assert_eq!(start, d(2025, 9, 1));
        assert_eq!(end, d(2025, 9, 2));
    }

    // 2025-09-01 is a Monday.
    #[test_case(d(2025, 9, 1); "pivot on monday")]
    #[test_case(d(2025, 9, 3); "pivot midweek")]
    #[test_case(d(2025, 9, 7); "pivot on sunday")]
    fn test_period_window_week_starts_monday(pivot: NaiveDate) {
        let (start, end) = period_window(ReportPeriod::Week, pivot);
        assert_eq!(start, d(2025, 9, 1));
        assert_eq!(end, d(2025, 9, 8));
    }

    #[test_case(d(2025, 2, 14), d(2025, 2, 1), d(2025, 3, 1); "february")]
    #[test_case(d(2025, 7, 31), d(2025, 7, 1), d(2025, 8, 1); "thirty one days")]
    #[test_case(d(2025, 12, 25), d(2025, 12, 1), d(2026, 1, 1); "december wraps year")]
    fn test_period_window_month(pivot: NaiveDate, expected_start: NaiveDate, expected_end: NaiveDate) {
        let (start, end) = period_window(ReportPeriod::Month, pivot);
        assert_eq!(start, expected_start);
        assert_eq!(end, expected_end);
    }
}
