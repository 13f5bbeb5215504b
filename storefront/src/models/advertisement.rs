// storefront/src/models/advertisement.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
  pub id: i64,
  pub title: String,
  pub image_url: String,
  #[serde(default)]
  pub link_url: Option<String>,
  pub is_active: bool,
  #[serde(default)]
  pub starts_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub ends_at: Option<DateTime<Utc>>,
}

/// Body for creating or replacing an advertisement (admin only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementInput {
  pub title: String,
  pub image_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link_url: Option<String>,
  pub is_active: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub starts_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ends_at: Option<DateTime<Utc>>,
}
