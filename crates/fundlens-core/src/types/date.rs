//! Calendar date type for fund analytics.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date with no time-of-day component.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Observations that
/// arrive as ISO-8601 date-times are keyed by their date component only, so
/// two NAV prints on the same day collapse onto the same `Date`.
///
/// # Example
///
/// ```rust
/// use fundlens_core::types::Date;
///
/// let date = Date::parse("2025-03-31T15:30:00Z").unwrap();
/// let month_ago = date.add_months(-1).unwrap();
/// assert_eq!(month_ago.to_string(), "2025-02-28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO-8601 date or date-time string.
    ///
    /// Accepts `YYYY-MM-DD` as well as date-times such as
    /// `2024-01-05T10:30:00Z` or `2024-01-05 10:30:00`. Everything after the
    /// date component is discarded.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date component is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let date_part = trimmed
            .split(['T', 't', ' '])
            .next()
            .unwrap_or(trimmed);

        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Lower bound used when no cutoff applies (1900-01-01).
    #[must_use]
    pub fn sentinel() -> Self {
        Date(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a (possibly negative) number of days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {days} days")))
    }

    /// Adds a (possibly negative) number of calendar months.
    ///
    /// If the resulting day would be invalid (e.g., Mar 31 - 1 month),
    /// it is clamped to the last valid day of the target month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a (possibly negative) number of calendar years.
    ///
    /// Feb 29 maps to Feb 28 in non-leap target years.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let new_year = self.year() + years;
        let max_day = days_in_month(new_year, self.month());
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, self.month(), new_day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_plain_date() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_parse_discards_time_of_day() {
        let expected = Date::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(Date::parse("2024-01-05T00:00:00").unwrap(), expected);
        assert_eq!(Date::parse("2024-01-05T23:59:59.999Z").unwrap(), expected);
        assert_eq!(Date::parse("2024-01-05T10:30:00+05:30").unwrap(), expected);
        assert_eq!(Date::parse("2024-01-05 10:30:00").unwrap(), expected);
        assert_eq!(Date::parse("  2024-01-05  ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Date::parse("").is_err());
        assert!(Date::parse("05/01/2024").is_err());
        assert!(Date::parse("2024-02-30").is_err());

        let err = Date::parse("not-a-date").unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_subtract_month_clamps_to_month_end() {
        let date = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(
            date.add_months(-1).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );

        let leap = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(
            leap.add_months(-1).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );

        let may = Date::from_ymd(2025, 5, 31).unwrap();
        assert_eq!(
            may.add_months(-1).unwrap(),
            Date::from_ymd(2025, 4, 30).unwrap()
        );
    }

    #[test]
    fn test_subtract_months_across_year_boundary() {
        let date = Date::from_ymd(2025, 2, 15).unwrap();
        assert_eq!(
            date.add_months(-6).unwrap(),
            Date::from_ymd(2024, 8, 15).unwrap()
        );

        let jan = Date::from_ymd(2025, 1, 10).unwrap();
        assert_eq!(
            jan.add_months(-1).unwrap(),
            Date::from_ymd(2024, 12, 10).unwrap()
        );
    }

    #[test]
    fn test_add_months_forward() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result, Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_subtract_year_from_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(
            date.add_years(-1).unwrap(),
            Date::from_ymd(2023, 2, 28).unwrap()
        );
        assert_eq!(
            date.add_years(-4).unwrap(),
            Date::from_ymd(2020, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_add_days() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.add_days(30).unwrap(), d2);
        assert_eq!(d2.add_days(-30).unwrap(), d1);
        assert_eq!(
            Date::from_ymd(2024, 2, 28).unwrap().add_days(1).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_add_days_out_of_range_is_error() {
        let date = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(matches!(
            date.add_days(i64::MAX),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(date.add_days(-1_000_000_000).is_err());
    }

    #[test]
    fn test_sentinel_precedes_real_data() {
        let sentinel = Date::sentinel();
        assert_eq!(sentinel.to_string(), "1900-01-01");
        assert!(sentinel < Date::from_ymd(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_display_and_from_str() {
        let date: Date = "2025-06-15".parse().unwrap();
        assert_eq!(format!("{}", date), "2025-06-15");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
