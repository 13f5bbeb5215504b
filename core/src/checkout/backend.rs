// booknest-core/src/checkout/backend.rs

use crate::checkout::payload::OrderPayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of finalising a buyer-approved payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDetails {
  pub order_id: String,
  pub status: String,
  #[serde(default)]
  pub payer_email: Option<String>,
}

/// The backend's payment order endpoints.
#[async_trait]
pub trait OrderBackend: Send + Sync {
  /// Creates a provider order and returns its id.
  async fn create_order(&self, payload: &OrderPayload) -> anyhow::Result<String>;

  async fn capture_order(&self, order_id: &str) -> anyhow::Result<CaptureDetails>;
}
