// storefront/src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
  pub id: i64,
  pub book_id: i64,
  pub member_id: i64,
  pub rating: u8,
  #[serde(default)]
  pub comment: Option<String>,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
  pub member_id: i64,
  pub rating: u8,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
}
