// storefront/src/services/payments.rs

//! Order create/capture endpoints of the payment backend, and the
//! `OrderBackend` implementation checkout sessions use.

use crate::api::{path_segment, ApiClient};
use crate::errors::Result as AppResult;
use crate::models::CreatedOrder;
use async_trait::async_trait;
use booknest::checkout::{CaptureDetails, OrderBackend, OrderPayload};
use serde_json::json;
use tracing::{info, instrument};

const ORDERS_PATH: &str = "payments/paypal/orders/";

/// Creates the provider order for `payload` and returns its id.
#[instrument(skip(api, payload), fields(total = %payload.total(), currency = %payload.currency()))]
pub async fn create_paypal_order(api: &ApiClient, payload: &OrderPayload) -> AppResult<String> {
  let created: CreatedOrder = api.post(ORDERS_PATH, payload).await?;
  info!(order_id = %created.id, "Payment order created.");
  Ok(created.id)
}

#[instrument(skip(api))]
pub async fn capture_paypal_order(api: &ApiClient, order_id: &str) -> AppResult<CaptureDetails> {
  let path = format!("{}{}/capture/", ORDERS_PATH, path_segment(order_id)?);
  let details: CaptureDetails = api.post(&path, &json!({})).await?;
  info!(status = %details.status, "Payment order captured.");
  Ok(details)
}

#[derive(Clone)]
pub struct PaymentsBackend {
  api: ApiClient,
}

impl PaymentsBackend {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }
}

#[async_trait]
impl OrderBackend for PaymentsBackend {
  async fn create_order(&self, payload: &OrderPayload) -> anyhow::Result<String> {
    Ok(create_paypal_order(&self.api, payload).await?)
  }

  async fn capture_order(&self, order_id: &str) -> anyhow::Result<CaptureDetails> {
    Ok(capture_paypal_order(&self.api, order_id).await?)
  }
}
