use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A calendar date in the voting domain.
///
/// Menus are published for a `CalendarDay` and votes are scoped by the day
/// they were cast on. The engine never reads an ambient clock: "today" is
/// always passed in explicitly as a `CalendarDay`, so tests can pin the
/// date deterministically. [`CalendarDay::today_utc`] exists for the edges
/// (HTTP handlers) that have to anchor a request in real time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Create from year/month/day. Fails on out-of-range components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TypeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TypeError::InvalidDay(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// The current day in UTC. Call this at the request boundary only.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// The day a UTC timestamp falls on.
    pub fn of(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp.date_naive())
    }

    /// The underlying date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// The next calendar day.
    pub fn succ(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Parse from `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        s.parse::<NaiveDate>()
            .map(Self)
            .map_err(|_| TypeError::InvalidDay(s.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Debug for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDay({})", self.0)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn from_ymd_valid() {
        let day = CalendarDay::from_ymd(2024, 6, 14).unwrap();
        assert_eq!(day.to_string(), "2024-06-14");
    }

    #[test]
    fn from_ymd_rejects_out_of_range() {
        assert!(CalendarDay::from_ymd(2024, 13, 1).is_err());
        assert!(CalendarDay::from_ymd(2024, 2, 30).is_err());
    }

    #[test]
    fn of_truncates_timestamp_to_day() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 14, 23, 59, 59).unwrap();
        assert_eq!(
            CalendarDay::of(ts),
            CalendarDay::from_ymd(2024, 6, 14).unwrap()
        );
    }

    #[test]
    fn ordering_follows_dates() {
        let earlier = CalendarDay::from_ymd(2024, 6, 14).unwrap();
        let later = CalendarDay::from_ymd(2024, 6, 15).unwrap();
        assert!(earlier < later);
        assert_eq!(earlier.succ(), later);
    }

    #[test]
    fn parse_roundtrip() {
        let day = CalendarDay::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(CalendarDay::parse("2024-01-02").unwrap(), day);
        assert!(CalendarDay::parse("junk").is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let day = CalendarDay::from_ymd(2024, 6, 14).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "\"2024-06-14\"");
        let parsed: CalendarDay = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }
}
