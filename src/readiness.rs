//! Workload ratio and readiness scoring
//!
//! Two independent signals feed the risk-analysis screen: the
//! Acute:Chronic Workload Ratio (7-day vs 28-day rolling volume, the
//! sports-science injury-risk heuristic) and a 0-100 readiness composite
//! from the day's self-reported wellness entry.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{WellnessEntry, WorkoutSession};
use crate::volume::{total_volume, VolumeSource};
use crate::window::Window;

/// ---------------------------------------------------------------------------
/// Acute:Chronic Workload Ratio
/// ---------------------------------------------------------------------------

pub const ACUTE_WINDOW_DAYS: i64 = 7;
pub const CHRONIC_WINDOW_DAYS: i64 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrStatus {
  /// ratio > 1.5: acute load far above chronic base
  Overload,
  /// 1.3 < ratio <= 1.5
  Overreaching,
  /// 0.8 <= ratio <= 1.3: the sweet spot
  Optimal,
  /// ratio < 0.8
  Undertrained,
  /// No sessions inside the chronic window; not the same as "optimal".
  InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadRatio {
  /// Full-precision ratio, kept unrounded for chained computation.
  pub ratio: f64,
  pub acute_volume: f64,
  pub chronic_volume: f64,
  pub status: AcwrStatus,
}

impl WorkloadRatio {
  /// Ratio rounded to 2 decimal places for display.
  pub fn display_ratio(&self) -> f64 {
    (self.ratio * 100.0).round() / 100.0
  }
}

/// ACWR over the windows `[now-7d, now)` and `[now-28d, now)`. The chronic
/// total is normalized to a weekly average before the ratio is taken. With
/// no chronic load the ratio defaults to a neutral 1.0 so an empty history
/// never signals false risk.
pub fn acwr(sessions: &[WorkoutSession], now: DateTime<Utc>) -> WorkloadRatio {
  let chronic_window = Window::trailing_days(now, CHRONIC_WINDOW_DAYS);
  let acute_volume = total_volume(
    sessions,
    Window::trailing_days(now, ACUTE_WINDOW_DAYS),
    VolumeSource::Sets,
  );
  let chronic_volume = total_volume(sessions, chronic_window, VolumeSource::Sets);

  let ratio = if chronic_volume > 0.0 {
    acute_volume / (chronic_volume / 4.0)
  } else {
    1.0
  };

  let has_history = sessions.iter().any(|s| chronic_window.contains(s.date));
  let status = if !has_history {
    AcwrStatus::InsufficientData
  } else if ratio > 1.5 {
    AcwrStatus::Overload
  } else if ratio > 1.3 {
    AcwrStatus::Overreaching
  } else if ratio >= 0.8 {
    AcwrStatus::Optimal
  } else {
    AcwrStatus::Undertrained
  };

  WorkloadRatio {
    ratio,
    acute_volume,
    chronic_volume,
    status,
  }
}

/// ---------------------------------------------------------------------------
/// Readiness score
/// ---------------------------------------------------------------------------

// The four weights must sum to 100 to keep the composite on a 0-100 scale.
pub const SLEEP_WEIGHT: f64 = 35.0;
pub const ENERGY_WEIGHT: f64 = 35.0;
pub const STRESS_WEIGHT: f64 = 15.0;
pub const SORENESS_WEIGHT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
  /// score > 85
  Elite,
  /// score > 65
  Optimal,
  /// score > 40
  Moderate,
  AtRisk,
}

/// 0-100 composite of the four wellness axes. Sleep and energy scale up;
/// stress and soreness are inverted (higher reported value lowers the
/// score). Out-of-range inputs are clamped to the 1-3 scale.
pub fn readiness_score(entry: &WellnessEntry) -> u32 {
  let positive = |v: u8, weight: f64| (clamp_axis(v) / 3.0) * weight;
  let inverted = |v: u8, weight: f64| ((4.0 - clamp_axis(v)) / 3.0) * weight;

  let score = positive(entry.sleep, SLEEP_WEIGHT)
    + positive(entry.energy, ENERGY_WEIGHT)
    + inverted(entry.stress, STRESS_WEIGHT)
    + inverted(entry.soreness, SORENESS_WEIGHT);

  score.round() as u32
}

pub fn readiness_status(score: u32) -> ReadinessStatus {
  match score {
    s if s > 85 => ReadinessStatus::Elite,
    s if s > 65 => ReadinessStatus::Optimal,
    s if s > 40 => ReadinessStatus::Moderate,
    _ => ReadinessStatus::AtRisk,
  }
}

fn clamp_axis(v: u8) -> f64 {
  f64::from(v.clamp(1, 3))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
