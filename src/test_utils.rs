//! Fixture builders shared by the module tests
//!
//! History records have a lot of optional fields; these factories keep the
//! arrange blocks focused on what each test actually varies.

use chrono::{DateTime, Utc};

use crate::models::{SessionExercise, SetRecord, WorkoutSession};

/// Parse a fixed test timestamp.
pub fn at(s: &str) -> DateTime<Utc> {
  s.parse().expect("valid test timestamp")
}

/// A completed set.
pub fn set(weight: f64, reps: i64) -> SetRecord {
  SetRecord {
    weight: Some(weight),
    reps: Some(reps as f64),
    completed: true,
  }
}

/// A planned-but-skipped set. Invisible to every computation.
pub fn skipped_set(weight: f64, reps: i64) -> SetRecord {
  SetRecord {
    completed: false,
    ..set(weight, reps)
  }
}

pub fn exercise(
  id: &str,
  name: &str,
  muscle_group: Option<&str>,
  sets: Vec<SetRecord>,
) -> SessionExercise {
  SessionExercise {
    exercise_id: id.to_string(),
    name: name.to_string(),
    muscle_group: muscle_group.map(str::to_string),
    sets,
  }
}

/// A session with full exercise detail and no stored total.
pub fn session_on(date: DateTime<Utc>, exercises: Vec<SessionExercise>) -> WorkoutSession {
  WorkoutSession {
    id: format!("session-{}", date.timestamp_millis()),
    date,
    duration_ms: Some(60 * 60 * 1000),
    exercises,
    volume: None,
    notes: None,
  }
}

/// A session persisted with only a session-level total, no set detail.
pub fn session_with_stored_volume(date: DateTime<Utc>, volume: f64) -> WorkoutSession {
  WorkoutSession {
    volume: Some(volume),
    ..session_on(date, Vec::new())
  }
}
