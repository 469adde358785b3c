//! One-call dashboard snapshot
//!
//! Every screen-facing metric computed in a single pass over the same
//! inputs, so independent screens can no longer drift apart on defaults.
//! Pure function of its arguments: the caller loads the history and the
//! day's wellness entry, and passes "now" explicitly.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::distribution::{muscle_distribution, MuscleVolume};
use crate::goals::{goal_report, overall_progress, GoalProgress};
use crate::models::{GoalSettings, WellnessEntry, WorkoutSession};
use crate::readiness::{acwr, readiness_score, readiness_status, ReadinessStatus, WorkloadRatio};
use crate::records::{detect_prs, recent_prs, PersonalRecord};
use crate::streak::{best_streak, current_streak};
use crate::volume::{total_volume, VolumeSource};
use crate::window::Window;

/// How many freshly achieved PRs the dashboard lists.
const RECENT_PR_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSnapshot {
  pub score: u32,
  pub status: ReadinessStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
  /// Stored-total volume over the trailing 7 days.
  pub weekly_volume: f64,
  pub muscle_distribution: Vec<MuscleVolume>,
  pub current_streak: u32,
  pub best_streak: u32,
  pub recent_prs: Vec<PersonalRecord>,
  pub workload: WorkloadRatio,
  /// Present only when the wellness entry is dated today; a stale cached
  /// entry is ignored rather than shown as current.
  pub readiness: Option<ReadinessSnapshot>,
  pub goals: Vec<GoalProgress>,
  pub overall_goal_pct: u32,
}

impl DashboardMetrics {
  pub fn compute(
    sessions: &[WorkoutSession],
    wellness: Option<&WellnessEntry>,
    settings: &GoalSettings,
    now: DateTime<Utc>,
  ) -> Self {
    debug!(
      session_count = sessions.len(),
      has_wellness = wellness.is_some(),
      "computing dashboard metrics"
    );

    let week = Window::trailing_days(now, 7);
    let records = detect_prs(sessions);

    let readiness = wellness
      .filter(|w| w.is_for(now.date_naive()))
      .map(|w| {
        let score = readiness_score(w);
        ReadinessSnapshot {
          score,
          status: readiness_status(score),
        }
      });

    let goals = goal_report(sessions, &records, settings, now);
    let overall_goal_pct = overall_progress(&goals, settings);
    let workload = acwr(sessions, now);

    debug!(
      pr_count = records.len(),
      workload_status = ?workload.status,
      overall_goal_pct,
      "dashboard metrics ready"
    );

    Self {
      weekly_volume: total_volume(sessions, week, VolumeSource::Stored),
      muscle_distribution: muscle_distribution(sessions, week),
      current_streak: current_streak(sessions, now),
      best_streak: best_streak(sessions),
      recent_prs: recent_prs(&records, RECENT_PR_COUNT),
      workload,
      readiness,
      goals,
      overall_goal_pct,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  use crate::models::GoalType;
  use crate::readiness::AcwrStatus;
  use crate::test_utils::{at, exercise, session_on, set};

  fn history() -> Vec<WorkoutSession> {
    vec![
      session_on(
        at("2024-01-10T09:00:00Z"),
        vec![exercise("bench", "Bench Press", Some("Pecho"), vec![set(80.0, 5)])],
      ),
      session_on(
        at("2024-01-09T09:00:00Z"),
        vec![exercise("squat", "Squat", Some("Pierna"), vec![set(100.0, 5)])],
      ),
    ]
  }

  #[test]
  fn test_empty_inputs_produce_safe_zeroes() {
    let metrics = DashboardMetrics::compute(
      &[],
      None,
      &GoalSettings::default(),
      at("2024-01-10T12:00:00Z"),
    );

    assert_eq!(metrics.weekly_volume, 0.0);
    assert!(metrics.muscle_distribution.is_empty());
    assert_eq!(metrics.current_streak, 0);
    assert!(metrics.recent_prs.is_empty());
    assert_eq!(metrics.workload.ratio, 1.0);
    assert_eq!(metrics.workload.status, AcwrStatus::InsufficientData);
    assert!(metrics.readiness.is_none());
    assert_eq!(metrics.overall_goal_pct, 0);
  }

  #[test]
  fn test_stale_wellness_entry_is_ignored() {
    let yesterday = WellnessEntry {
      date: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
      sleep: 3,
      energy: 3,
      stress: 1,
      soreness: 1,
    };

    let metrics = DashboardMetrics::compute(
      &history(),
      Some(&yesterday),
      &GoalSettings::default(),
      at("2024-01-10T12:00:00Z"),
    );

    assert!(
      metrics.readiness.is_none(),
      "a cached entry from another day must not read as today's readiness"
    );
  }

  #[test]
  fn test_snapshot_composes_all_signals() {
    let today = WellnessEntry {
      date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
      sleep: 3,
      energy: 3,
      stress: 1,
      soreness: 1,
    };
    let settings = GoalSettings {
      target_sessions_per_month: 10.0,
      target_volume_per_week: 1_000.0,
      target_prs_per_month: 2.0,
      active_goals: vec![GoalType::Sessions, GoalType::Prs],
    };

    let metrics = DashboardMetrics::compute(
      &history(),
      Some(&today),
      &settings,
      at("2024-01-10T12:00:00Z"),
    );

    assert_eq!(metrics.current_streak, 2);
    assert_eq!(metrics.best_streak, 2);
    assert_eq!(metrics.recent_prs.len(), 2);
    assert_eq!(
      metrics.recent_prs[0].exercise_id, "bench",
      "most recent PR first"
    );

    let readiness = metrics.readiness.expect("today's entry should be used");
    assert_eq!(readiness.score, 100);
    assert_eq!(readiness.status, ReadinessStatus::Elite);

    // Sessions: 2/10 = 20%; PRs: 2/2 = 100%; volume goal inactive.
    assert_eq!(metrics.overall_goal_pct, 60);
  }
}
