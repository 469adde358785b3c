//! Workout history records
//!
//! These are read-only inputs: the host app creates and persists sessions,
//! the engine only computes over them. Field names follow the host app's
//! camelCase JSON.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ---------------------------------------------------------------------------
/// Set / Exercise / Session
/// ---------------------------------------------------------------------------

/// One performed set. Sets not marked completed are plans, not performances,
/// and are invisible to every computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
  #[serde(default)]
  pub weight: Option<f64>,

  #[serde(default)]
  pub reps: Option<f64>,

  #[serde(default)]
  pub completed: bool,
}

impl SetRecord {
  /// Load of this set (weight * reps), with missing or non-finite values
  /// coerced to zero. Incomplete sets always load zero.
  pub fn load(&self) -> f64 {
    if !self.completed {
      return 0.0;
    }
    finite_or_zero(self.weight) * finite_or_zero(self.reps)
  }

  /// Weight of this set if it was completed, zero otherwise.
  pub fn completed_weight(&self) -> f64 {
    if self.completed {
      finite_or_zero(self.weight)
    } else {
      0.0
    }
  }
}

/// One exercise performed within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
  pub exercise_id: String,

  #[serde(default)]
  pub name: String,

  /// Aggregation key for the muscle distribution; unlabeled exercises
  /// fall into the "Otros" bucket.
  #[serde(default)]
  pub muscle_group: Option<String>,

  #[serde(default)]
  pub sets: Vec<SetRecord>,
}

impl SessionExercise {
  /// Total load across completed sets.
  pub fn completed_volume(&self) -> f64 {
    self.sets.iter().map(SetRecord::load).sum()
  }

  /// Heaviest completed-set weight, zero when no set was completed.
  pub fn max_completed_weight(&self) -> f64 {
    self
      .sets
      .iter()
      .map(SetRecord::completed_weight)
      .fold(0.0, f64::max)
  }
}

/// An immutable historical workout record. `date` is the sole ordering key
/// for all time-windowed computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
  pub id: String,

  #[serde(
    serialize_with = "serialize_date",
    deserialize_with = "deserialize_date"
  )]
  pub date: DateTime<Utc>,

  #[serde(default)]
  pub duration_ms: Option<i64>,

  /// Empty when the host stored only a session-level total; the volume
  /// aggregator falls back to `volume` in that case.
  #[serde(default)]
  pub exercises: Vec<SessionExercise>,

  /// Precomputed session total from the host app. May legitimately
  /// disagree with a recomputation from sets.
  #[serde(default)]
  pub volume: Option<f64>,

  #[serde(default)]
  pub notes: Option<String>,
}

impl WorkoutSession {
  /// Stored session total, with missing or non-finite values coerced to zero.
  pub fn stored_volume(&self) -> f64 {
    finite_or_zero(self.volume)
  }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
  match v {
    Some(x) if x.is_finite() => x,
    _ => 0.0,
  }
}

/// ---------------------------------------------------------------------------
/// History decoding
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
  #[error("invalid workout history: {0}")]
  Decode(#[from] serde_json::Error),
}

/// Decode a persisted history blob. This is the engine's only fallible
/// boundary; once decoded, every computation is total.
pub fn parse_history(json: &str) -> Result<Vec<WorkoutSession>, HistoryError> {
  Ok(serde_json::from_str(json)?)
}

/// ---------------------------------------------------------------------------
/// Flexible date encoding
/// ---------------------------------------------------------------------------

// The host storage layer wrote session dates as ISO-8601 strings in newer
// versions and epoch milliseconds in older ones; both must decode.
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawDate {
    EpochMs(i64),
    Iso(String),
  }

  match RawDate::deserialize(deserializer)? {
    RawDate::Iso(s) => s
      .parse::<DateTime<Utc>>()
      .map_err(|e| serde::de::Error::custom(format!("invalid session date {:?}: {}", s, e))),
    RawDate::EpochMs(ms) => Utc
      .timestamp_millis_opt(ms)
      .single()
      .ok_or_else(|| serde::de::Error::custom(format!("epoch millis out of range: {}", ms))),
  }
}

fn serialize_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(&date.to_rfc3339())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_load_coerces_missing_values() {
    let set = SetRecord {
      weight: None,
      reps: Some(5.0),
      completed: true,
    };
    assert_eq!(set.load(), 0.0);

    let set = SetRecord {
      weight: Some(f64::NAN),
      reps: Some(5.0),
      completed: true,
    };
    assert_eq!(set.load(), 0.0, "NaN weight must not propagate");
  }

  #[test]
  fn test_incomplete_set_loads_zero() {
    let set = SetRecord {
      weight: Some(100.0),
      reps: Some(5.0),
      completed: false,
    };
    assert_eq!(set.load(), 0.0);
    assert_eq!(set.completed_weight(), 0.0);
  }

  #[test]
  fn test_date_decodes_from_iso_and_epoch_ms() {
    let iso: WorkoutSession =
      serde_json::from_str(r#"{"id":"a","date":"2024-01-10T08:30:00Z"}"#)
        .expect("ISO date should decode");
    let epoch: WorkoutSession =
      serde_json::from_str(r#"{"id":"b","date":1704875400000}"#)
        .expect("epoch millis should decode");

    assert_eq!(iso.date.to_rfc3339(), "2024-01-10T08:30:00+00:00");
    assert_eq!(epoch.date.to_rfc3339(), "2024-01-10T08:30:00+00:00");
  }

  #[test]
  fn test_session_defaults_for_missing_fields() {
    // A session persisted without exercise detail must still decode and
    // contribute nothing beyond its stored total.
    let session: WorkoutSession =
      serde_json::from_str(r#"{"id":"a","date":"2024-01-10T08:30:00Z","volume":1200}"#)
        .expect("sparse session should decode");

    assert!(session.exercises.is_empty());
    assert_eq!(session.stored_volume(), 1200.0);
    assert!(session.notes.is_none());
  }

  #[test]
  fn test_parse_history_rejects_garbage() {
    assert!(parse_history("not json").is_err());
    assert!(parse_history("[]").expect("empty history is valid").is_empty());
  }
}
