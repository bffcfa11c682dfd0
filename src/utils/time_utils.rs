use chrono::{Days, Local, Months, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

// Time Helper functions

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Start of a trailing window of `months` ending at `as_of`.
/// Saturates at the earliest representable date.
pub fn lookback_start(as_of: NaiveDate, months: u32) -> NaiveDate {
    as_of
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// The `count` calendar days immediately after `last`, one day apart, weekends included.
/// Returns None only if the range leaves chrono's representable dates.
pub fn following_calendar_days(last: NaiveDate, count: usize) -> Option<Vec<NaiveDate>> {
    (1..=count as u64)
        .map(|offset| last.checked_add_days(Days::new(offset)))
        .collect()
}

/// Parses a leading `YYYY-MM-DD` from a cell, ignoring any time/zone suffix.
pub fn parse_leading_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    let head = trimmed.get(..10)?;
    NaiveDate::parse_from_str(head, TimeUtils::STANDARD_TIME_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn following_days_cross_month_and_weekend() {
        // 2024-02-28 is a Wednesday in a leap year
        let days = following_calendar_days(d(2024, 2, 28), 4).unwrap();
        assert_eq!(
            days,
            vec![d(2024, 2, 29), d(2024, 3, 1), d(2024, 3, 2), d(2024, 3, 3)]
        );
    }

    #[test]
    fn lookback_is_calendar_months() {
        assert_eq!(lookback_start(d(2025, 3, 31), 60), d(2020, 3, 31));
        assert_eq!(lookback_start(d(2024, 2, 29), 12), d(2023, 2, 28));
    }

    #[test]
    fn parses_dates_with_time_suffix() {
        assert_eq!(
            parse_leading_date("2021-06-01 00:00:00+00:00"),
            Some(d(2021, 6, 1))
        );
        assert_eq!(parse_leading_date(" 2021-06-01 "), Some(d(2021, 6, 1)));
        assert_eq!(parse_leading_date("Ticker"), None);
        assert_eq!(parse_leading_date(""), None);
    }
}
