use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("Start date must be before end date")]
    StartAfterEnd,
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    Malformed(String),
}

/// `[today - 1 month, today]`, the range the filter inputs start with.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    (from, today)
}

/// Parses a filter input; blank means "no bound".
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>, DateRangeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DateRangeError::Malformed(trimmed.to_string()))
}

pub fn validate_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), DateRangeError> {
    match (from, to) {
        (Some(from), Some(to)) if from > to => Err(DateRangeError::StartAfterEnd),
        _ => Ok(()),
    }
}

/// Calendar months between two dates, ignoring the day of month.
pub fn month_diff(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

/// Keeps the leading months of `data` covered by the range.
///
/// Without both bounds the series is returned unchanged.
pub fn filter_by_date_range(data: &[f64], from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<f64> {
    let (Some(from), Some(to)) = (from, to) else {
        return data.to_vec();
    };

    let diff = month_diff(from, to);
    if diff <= 0 {
        return data.iter().take(1).copied().collect();
    }

    let diff = diff as usize;
    if diff >= data.len() {
        return data.to_vec();
    }

    data[..diff + 1].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn year() -> Vec<f64> {
        (1..=12).map(f64::from).collect()
    }

    #[test]
    fn january_to_march_keeps_three_months() {
        let filtered = filter_by_date_range(&year(), date(2024, 1, 10), date(2024, 3, 2));
        assert_eq!(filtered, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn same_day_keeps_first_month() {
        let filtered = filter_by_date_range(&year(), date(2024, 5, 5), date(2024, 5, 5));
        assert_eq!(filtered, vec![1.0]);
    }

    #[test]
    fn long_ranges_keep_everything() {
        let filtered = filter_by_date_range(&year(), date(2023, 1, 1), date(2024, 6, 1));
        assert_eq!(filtered, year());
        let filtered = filter_by_date_range(&year(), date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(filtered.len(), 12);
    }

    #[test]
    fn missing_bound_leaves_series_alone() {
        assert_eq!(filter_by_date_range(&year(), None, date(2024, 3, 1)), year());
        assert!(filter_by_date_range(&[], date(2024, 1, 1), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn month_diff_ignores_day_of_month() {
        assert_eq!(month_diff(date(2024, 1, 31).unwrap(), date(2024, 2, 1).unwrap()), 1);
        assert_eq!(month_diff(date(2023, 11, 1).unwrap(), date(2024, 2, 1).unwrap()), 3);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            validate_range(date(2024, 3, 1), date(2024, 1, 1)),
            Err(DateRangeError::StartAfterEnd)
        );
        assert!(validate_range(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
        assert!(validate_range(None, date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn parses_inputs() {
        assert_eq!(parse_date_input(" 2024-02-29 "), Ok(date(2024, 2, 29)));
        assert_eq!(parse_date_input(""), Ok(None));
        assert!(matches!(
            parse_date_input("2024-02-30"),
            Err(DateRangeError::Malformed(_))
        ));
    }

    #[test]
    fn default_range_is_one_month_back() {
        let (from, to) = default_range(date(2024, 3, 31).unwrap());
        assert_eq!(Some(from), date(2024, 2, 29));
        assert_eq!(Some(to), date(2024, 3, 31));
    }
}
