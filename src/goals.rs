//! Goal progress projection
//!
//! Three goal types (sessions per month, volume per week, PRs per month)
//! share one normalize-and-clamp projector. The aggregates are computed
//! once through the volume and PR modules and fed through it, so the
//! clamp/percent logic lives in exactly one place.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{GoalSettings, GoalType, WorkoutSession};
use crate::records::{prs_in_window, PersonalRecord};
use crate::volume::{total_volume, VolumeSource};
use crate::window::Window;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
  pub goal: GoalType,
  pub current: f64,
  pub target: f64,
  /// Normalized progress, clamped to 0-100.
  pub progress_pct: u32,
}

/// Normalize `current` against `target`. A non-positive target means "no
/// valid goal" and projects to 0 rather than dividing by zero.
pub fn goal_progress(goal: GoalType, current: f64, target: f64) -> GoalProgress {
  let progress_pct = if target > 0.0 && current > 0.0 {
    (100.0 * current / target).round().min(100.0) as u32
  } else {
    0
  };

  GoalProgress {
    goal,
    current,
    target,
    progress_pct,
  }
}

/// Composite "Meta" percentage: arithmetic mean of the active goals'
/// progress. Inactive goals are excluded from the mean, not counted as 0%.
pub fn overall_progress(progress: &[GoalProgress], settings: &GoalSettings) -> u32 {
  let active: Vec<u32> = progress
    .iter()
    .filter(|p| settings.is_active(p.goal))
    .map(|p| p.progress_pct)
    .collect();

  if active.is_empty() {
    return 0;
  }
  let sum: u32 = active.iter().sum();
  (f64::from(sum) / active.len() as f64).round() as u32
}

/// Sessions whose date falls inside `window`.
pub fn sessions_in_window(sessions: &[WorkoutSession], window: Window) -> usize {
  sessions.iter().filter(|s| window.contains(s.date)).count()
}

/// Progress for all three goal types at `now`: sessions and PRs against the
/// current calendar month, volume against the trailing week. Weekly volume
/// trusts the stored session totals, matching the dashboard's weekly sum.
pub fn goal_report(
  sessions: &[WorkoutSession],
  records: &[PersonalRecord],
  settings: &GoalSettings,
  now: DateTime<Utc>,
) -> Vec<GoalProgress> {
  let month = Window::calendar_month(now);
  let week = Window::trailing_days(now, 7);

  vec![
    goal_progress(
      GoalType::Sessions,
      sessions_in_window(sessions, month) as f64,
      settings.target_sessions_per_month,
    ),
    goal_progress(
      GoalType::Volume,
      total_volume(sessions, week, VolumeSource::Stored),
      settings.target_volume_per_week,
    ),
    goal_progress(
      GoalType::Prs,
      prs_in_window(records, month) as f64,
      settings.target_prs_per_month,
    ),
  ]
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
