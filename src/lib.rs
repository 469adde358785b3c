//! Training-load analytics engine
//!
//! Pure computations that turn a raw workout history (timestamped
//! sessions with exercises and sets) plus the day's wellness entry into
//! the derived metrics a fitness dashboard shows: windowed volume,
//! muscle-group distribution, training streaks, personal records, the
//! Acute:Chronic Workload Ratio, a readiness score, and goal progress.
//!
//! The engine holds no state, performs no I/O, and never mutates its
//! inputs. Every time-scoped function takes "now" as an explicit
//! argument; production callers pass the real clock, tests pass fixed
//! instants.

pub mod dashboard;
pub mod distribution;
pub mod goals;
pub mod models;
pub mod readiness;
pub mod records;
pub mod streak;
pub mod volume;
pub mod window;

#[cfg(test)]
pub(crate) mod test_utils;

pub use dashboard::{DashboardMetrics, ReadinessSnapshot};
pub use distribution::{muscle_distribution, MuscleVolume, UNLABELED_GROUP};
pub use goals::{goal_progress, goal_report, overall_progress, sessions_in_window, GoalProgress};
pub use models::{
  parse_history, GoalSettings, GoalType, HistoryError, SessionExercise, SetRecord, WellnessEntry,
  WorkoutSession,
};
pub use readiness::{
  acwr, readiness_score, readiness_status, AcwrStatus, ReadinessStatus, WorkloadRatio,
};
pub use records::{detect_prs, prs_in_window, recent_prs, PersonalRecord};
pub use streak::{best_streak, current_streak};
pub use volume::{session_volume, total_volume, volume_by_day, VolumeSource};
pub use window::Window;
