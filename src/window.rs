//! Half-open time windows
//!
//! Every time-scoped computation filters sessions through a `Window` so
//! that "this week", "last 28 days", and "this month" all share one
//! boundary rule: `[start, end)`. A session exactly at a boundary belongs
//! to the later window.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
  /// Inclusive lower bound; `None` means unbounded.
  pub start: Option<DateTime<Utc>>,
  /// Exclusive upper bound; `None` means unbounded.
  pub end: Option<DateTime<Utc>>,
}

impl Window {
  /// All of history.
  pub fn all() -> Self {
    Self { start: None, end: None }
  }

  pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
    Self {
      start: Some(start),
      end: Some(end),
    }
  }

  /// The `days` days ending at `now`: `[now - days, now)`.
  pub fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
    Self {
      start: Some(now - Duration::days(days)),
      end: Some(now),
    }
  }

  /// The calendar month containing `now`, midnight to midnight UTC.
  pub fn calendar_month(now: DateTime<Utc>) -> Self {
    let (year, month) = (now.year(), now.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next_first = if month == 12 {
      NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
      NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    Self {
      start: first.map(midnight_utc),
      end: next_first.map(midnight_utc),
    }
  }

  pub fn contains(&self, t: DateTime<Utc>) -> bool {
    self.start.map_or(true, |s| t >= s) && self.end.map_or(true, |e| t < e)
  }
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
  DateTime::from_naive_utc_and_offset(day.and_time(NaiveTime::MIN), Utc)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid test timestamp")
  }

  #[test]
  fn test_window_is_half_open() {
    let window = Window::between(at("2024-01-01T00:00:00Z"), at("2024-01-08T00:00:00Z"));

    assert!(window.contains(at("2024-01-01T00:00:00Z")), "start is inclusive");
    assert!(window.contains(at("2024-01-07T23:59:59Z")));
    assert!(!window.contains(at("2024-01-08T00:00:00Z")), "end is exclusive");
  }

  #[test]
  fn test_all_contains_everything() {
    assert!(Window::all().contains(at("1970-01-01T00:00:00Z")));
    assert!(Window::all().contains(at("2099-12-31T23:59:59Z")));
  }

  #[test]
  fn test_trailing_days() {
    let now = at("2024-01-10T12:00:00Z");
    let window = Window::trailing_days(now, 7);

    assert!(window.contains(at("2024-01-03T12:00:00Z")), "7 days ago, on the start bound");
    assert!(!window.contains(now), "now itself is excluded");
    assert!(!window.contains(at("2024-01-03T11:59:59Z")));
  }

  #[test]
  fn test_calendar_month_boundaries() {
    let window = Window::calendar_month(at("2024-12-15T10:00:00Z"));

    assert!(window.contains(at("2024-12-01T00:00:00Z")));
    assert!(window.contains(at("2024-12-31T23:59:59Z")));
    assert!(!window.contains(at("2025-01-01T00:00:00Z")), "year rollover");
    assert!(!window.contains(at("2024-11-30T23:59:59Z")));
  }
}
