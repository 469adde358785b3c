//! Muscle-group volume distribution
//!
//! Maps every completed set in a window to its exercise's muscle group and
//! produces a sorted percentage breakdown. The descending order is a hard
//! contract: dashboard consumers display the top N entries as-is.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::WorkoutSession;
use crate::window::Window;

/// Bucket for exercises without a muscle-group label.
pub const UNLABELED_GROUP: &str = "Otros";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleVolume {
  pub name: String,
  pub value: f64,
  /// Share of the window total, rounded to whole percent.
  pub percent: u32,
}

/// Volume per muscle group over the window, sorted descending by volume
/// (name ascending on ties so output is deterministic).
pub fn muscle_distribution(sessions: &[WorkoutSession], window: Window) -> Vec<MuscleVolume> {
  let mut by_group: HashMap<&str, f64> = HashMap::new();

  for session in sessions.iter().filter(|s| window.contains(s.date)) {
    for exercise in &session.exercises {
      let volume = exercise.completed_volume();
      if volume <= 0.0 {
        continue;
      }
      let group = exercise
        .muscle_group
        .as_deref()
        .filter(|g| !g.trim().is_empty())
        .unwrap_or(UNLABELED_GROUP);
      *by_group.entry(group).or_insert(0.0) += volume;
    }
  }

  let total: f64 = by_group.values().sum();

  let mut entries: Vec<MuscleVolume> = by_group
    .into_iter()
    .map(|(name, value)| MuscleVolume {
      name: name.to_string(),
      value,
      percent: if total > 0.0 {
        (100.0 * value / total).round() as u32
      } else {
        0
      },
    })
    .collect();

  entries.sort_by(|a, b| {
    b.value
      .partial_cmp(&a.value)
      .unwrap_or(std::cmp::Ordering::Equal)
      .then_with(|| a.name.cmp(&b.name))
  });

  entries
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
