//! Training-day streaks
//!
//! A streak counts consecutive calendar days with at least one session.
//! The streak is still alive when the latest training day is today or
//! yesterday relative to `now` (train "every 24-48h" without breaking it),
//! but the historical chain itself requires exact one-day adjacency.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::WorkoutSession;

/// Consecutive-training-day streak ending at or adjacent to `now`.
pub fn current_streak(sessions: &[WorkoutSession], now: DateTime<Utc>) -> u32 {
  let days = training_days(sessions);

  let mut recent_first = days.iter().rev();
  let latest = match recent_first.next() {
    Some(d) => *d,
    None => return 0,
  };

  // More than one day since the last session: streak is over.
  if (now.date_naive() - latest).num_days() > 1 {
    return 0;
  }

  let mut streak = 1;
  let mut cursor = latest;
  for day in recent_first {
    if cursor - *day == Duration::days(1) {
      streak += 1;
      cursor = *day;
    } else {
      break;
    }
  }
  streak
}

/// Longest one-day-adjacent run anywhere in history, regardless of `now`.
pub fn best_streak(sessions: &[WorkoutSession]) -> u32 {
  let days = training_days(sessions);

  let mut best = 0;
  let mut run = 0;
  let mut prev: Option<NaiveDate> = None;

  for day in days {
    run = match prev {
      Some(p) if day - p == Duration::days(1) => run + 1,
      _ => 1,
    };
    best = best.max(run);
    prev = Some(day);
  }
  best
}

/// Distinct calendar days with at least one session, ascending. Multiple
/// same-day sessions dedupe to one day.
fn training_days(sessions: &[WorkoutSession]) -> BTreeSet<NaiveDate> {
  sessions.iter().map(|s| s.date.date_naive()).collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
