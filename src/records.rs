//! Personal record detection
//!
//! Walks the history in chronological order keeping a per-exercise running
//! maximum of the best completed-set weight, and emits a record each time a
//! session strictly exceeds all prior bests. "Most recent N" and "this
//! month" are views over the one emitted list, never re-detections.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::WorkoutSession;
use crate::window::Window;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
  pub exercise_id: String,
  pub name: String,
  pub weight: f64,
  pub date: DateTime<Utc>,
}

/// All PRs in the history, chronologically ordered by achievement. The
/// input may arrive in any order; it is sorted on a copy, never in place.
pub fn detect_prs(sessions: &[WorkoutSession]) -> Vec<PersonalRecord> {
  let mut ordered: Vec<&WorkoutSession> = sessions.iter().collect();
  ordered.sort_by_key(|s| s.date);

  let mut running_max: HashMap<&str, f64> = HashMap::new();
  let mut records = Vec::new();

  for session in ordered {
    for exercise in &session.exercises {
      let best = exercise.max_completed_weight();
      // A zero best (no completed sets, or all zero-weight) never counts,
      // even against an absent prior maximum.
      if best <= 0.0 {
        continue;
      }
      let prior = running_max
        .get(exercise.exercise_id.as_str())
        .copied()
        .unwrap_or(0.0);
      if best > prior {
        running_max.insert(exercise.exercise_id.as_str(), best);
        records.push(PersonalRecord {
          exercise_id: exercise.exercise_id.clone(),
          name: exercise.name.clone(),
          weight: best,
          date: session.date,
        });
      }
    }
  }

  records
}

/// The `n` most recently achieved PRs, most recent first.
pub fn recent_prs(records: &[PersonalRecord], n: usize) -> Vec<PersonalRecord> {
  records.iter().rev().take(n).cloned().collect()
}

/// How many PRs were achieved inside `window`.
pub fn prs_in_window(records: &[PersonalRecord], window: Window) -> usize {
  records.iter().filter(|r| window.contains(r.date)).count()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
