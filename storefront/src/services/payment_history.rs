// storefront/src/services/payment_history.rs
use crate::api::ApiClient;
use crate::errors::Result as AppResult;
use crate::models::Payment;
use tracing::instrument;

#[instrument(skip(api))]
pub async fn list_for_member(api: &ApiClient, member_id: i64) -> AppResult<Vec<Payment>> {
  api.get(&format!("members/{}/payments/", member_id), &[]).await
}

#[instrument(skip(api))]
pub async fn get_payment(api: &ApiClient, payment_id: i64) -> AppResult<Option<Payment>> {
  api.get_optional(&format!("payments/{}/", payment_id), &[]).await
}
