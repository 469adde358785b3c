//! Daily self-reported wellness snapshot
//!
//! One entry per calendar day, each axis on a 1-3 scale. Sleep and energy
//! read higher-is-better; stress and soreness read higher-is-worse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessEntry {
  /// Calendar day the entry applies to.
  pub date: NaiveDate,
  pub sleep: u8,
  pub energy: u8,
  pub stress: u8,
  pub soreness: u8,
}

impl WellnessEntry {
  /// Whether this entry applies to the given day. A stale cached entry
  /// must never be treated as today's readiness input.
  pub fn is_for(&self, day: NaiveDate) -> bool {
    self.date == day
  }
}
