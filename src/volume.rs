//! Session volume aggregation
//!
//! Volume (weight * reps over completed sets) is the primary training-load
//! unit. Dashboards consume it two ways: weekly totals trust the stored
//! per-session number, while per-exercise and per-muscle breakdowns
//! recompute from set detail. Both modes are explicit here so the two can
//! be cross-checked when they disagree.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::WorkoutSession;
use crate::window::Window;

/// Where a session's total comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeSource {
  /// Recompute from completed sets, falling back to the stored total when
  /// the session carries no exercise detail.
  #[default]
  Sets,
  /// Always trust the stored per-session total.
  Stored,
}

/// Total load of one session under the given source.
pub fn session_volume(session: &WorkoutSession, source: VolumeSource) -> f64 {
  match source {
    VolumeSource::Stored => session.stored_volume(),
    VolumeSource::Sets => {
      if session.exercises.is_empty() {
        session.stored_volume()
      } else {
        session
          .exercises
          .iter()
          .map(|e| e.completed_volume())
          .sum()
      }
    }
  }
}

/// Summed volume of all sessions whose date falls inside `window`.
/// An empty range is zero, never an error.
pub fn total_volume(sessions: &[WorkoutSession], window: Window, source: VolumeSource) -> f64 {
  sessions
    .iter()
    .filter(|s| window.contains(s.date))
    .map(|s| session_volume(s, source))
    .sum()
}

/// Volume bucketed per calendar day, for trend charts. Days without
/// training simply have no entry.
pub fn volume_by_day(
  sessions: &[WorkoutSession],
  window: Window,
  source: VolumeSource,
) -> BTreeMap<NaiveDate, f64> {
  let mut days = BTreeMap::new();
  for session in sessions.iter().filter(|s| window.contains(s.date)) {
    *days.entry(session.date.date_naive()).or_insert(0.0) += session_volume(session, source);
  }
  days
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
