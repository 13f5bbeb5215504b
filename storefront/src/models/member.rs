// storefront/src/models/member.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
  pub id: i64,
  pub username: String,
  pub email: String,
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub is_admin: bool,
  #[serde(default)]
  pub reward_points: i64,
  #[serde(default)]
  pub joined_at: Option<DateTime<Utc>>,
}

/// Partial update (admin only). Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_admin: Option<bool>,
}
