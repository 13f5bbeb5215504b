// storefront/src/models/payment.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A past payment as listed in a member's payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
  pub id: i64,
  pub member_id: i64,
  /// The payment provider's order id.
  pub order_id: String,
  pub amount: Decimal,
  pub currency: String,
  pub status: String,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

/// Backend answer to an order creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
  pub id: String,
  #[serde(default)]
  pub status: Option<String>,
}
