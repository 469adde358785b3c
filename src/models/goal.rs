//! User-configured training goals
//!
//! Targets are external input to the goal projector. `active_goals` only
//! filters which goals surface in composite views; hidden goals still
//! compute.

use serde::{Deserialize, Serialize};

/// Closed set of goal types the projector understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
  Sessions,
  Volume,
  Prs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSettings {
  #[serde(default)]
  pub target_sessions_per_month: f64,

  #[serde(default)]
  pub target_volume_per_week: f64,

  #[serde(default)]
  pub target_prs_per_month: f64,

  #[serde(default)]
  pub active_goals: Vec<GoalType>,
}

impl GoalSettings {
  pub fn is_active(&self, goal: GoalType) -> bool {
    self.active_goals.contains(&goal)
  }
}

impl Default for GoalSettings {
  fn default() -> Self {
    Self {
      target_sessions_per_month: 0.0,
      target_volume_per_week: 0.0,
      target_prs_per_month: 0.0,
      active_goals: Vec::new(),
    }
  }
}
