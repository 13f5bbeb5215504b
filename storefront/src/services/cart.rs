// storefront/src/services/cart.rs
use crate::api::ApiClient;
use crate::errors::{AppError, Result as AppResult};
use crate::models::Cart;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCart {
  book_id: i64,
  quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetQuantity {
  quantity: i64,
}

fn require_positive(quantity: i64) -> AppResult<()> {
  if quantity <= 0 {
    return Err(AppError::Validation(format!("quantity must be at least 1, got {}", quantity)));
  }
  Ok(())
}

#[instrument(skip(api))]
pub async fn get_cart(api: &ApiClient, member_id: i64) -> AppResult<Cart> {
  api.get(&format!("members/{}/cart/", member_id), &[]).await
}

/// Adds `quantity` units of a book and returns the updated cart.
#[instrument(skip(api))]
pub async fn add_item(api: &ApiClient, member_id: i64, book_id: i64, quantity: i64) -> AppResult<Cart> {
  require_positive(quantity)?;
  api
    .post(&format!("members/{}/cart/items/", member_id), &AddToCart { book_id, quantity })
    .await
}

#[instrument(skip(api))]
pub async fn update_quantity(api: &ApiClient, member_id: i64, book_id: i64, quantity: i64) -> AppResult<Cart> {
  require_positive(quantity)?;
  api
    .put(
      &format!("members/{}/cart/items/{}/", member_id, book_id),
      &SetQuantity { quantity },
    )
    .await
}

#[instrument(skip(api))]
pub async fn remove_item(api: &ApiClient, member_id: i64, book_id: i64) -> AppResult<()> {
  api.delete(&format!("members/{}/cart/items/{}/", member_id, book_id)).await
}
