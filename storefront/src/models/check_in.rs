// storefront/src/models/check_in.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily check-in and reward state of a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInStatus {
  pub member_id: i64,
  pub checked_in_today: bool,
  #[serde(default)]
  pub streak_days: u32,
  #[serde(default)]
  pub reward_points: i64,
  #[serde(default)]
  pub last_check_in: Option<DateTime<Utc>>,
}
