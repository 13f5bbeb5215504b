// storefront/src/models/like.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
  pub member_id: i64,
  pub book_id: i64,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}
