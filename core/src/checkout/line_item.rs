// booknest-core/src/checkout/line_item.rs

use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The purchasable product behind a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
  pub id: String,
  pub title: String,
  pub unit_price: Decimal,
  pub currency: String,
}

impl ProductRef {
  pub fn new(id: impl Into<String>, title: impl Into<String>, unit_price: Decimal, currency: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      unit_price,
      currency: currency.into(),
    }
  }
}

/// One product and the quantity being bought.
///
/// Carts are assembled from backend data that may reference deleted books or
/// carry zero quantities, so both are representable here and checked at the
/// checkout boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
  pub product: Option<ProductRef>,
  pub quantity: i64,
}

impl LineItem {
  pub fn new(product: ProductRef, quantity: i64) -> Self {
    Self {
      product: Some(product),
      quantity,
    }
  }

  pub fn item_id(&self) -> &str {
    self.product.as_ref().map_or("<missing product>", |p| p.id.as_str())
  }

  /// Whether the item can be part of an order: it references a product and
  /// asks for at least one unit.
  pub fn is_purchasable(&self) -> bool {
    self.product.is_some() && self.quantity > 0
  }

  /// `None` without a product or when the amount does not fit a `Decimal`.
  pub fn subtotal(&self) -> Option<Decimal> {
    self
      .product
      .as_ref()
      .and_then(|p| p.unit_price.checked_mul(Decimal::from(self.quantity)))
  }
}

/// Gate for entering `loading`: the set must be non-empty and every item must
/// ask for at least one unit.
pub fn validate_for_checkout(items: &[LineItem]) -> Result<(), CheckoutError> {
  if items.is_empty() {
    return Err(CheckoutError::EmptyCart);
  }
  match items.iter().find(|item| item.quantity <= 0) {
    Some(item) => Err(CheckoutError::InvalidQuantity {
      item_id: item.item_id().to_string(),
      quantity: item.quantity,
    }),
    None => Ok(()),
  }
}
