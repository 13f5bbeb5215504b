// storefront/src/models/cart.rs

use super::Book;
use booknest::checkout::LineItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
  pub book_id: i64,
  /// The backend may omit the embedded book (e.g. when it was delisted).
  #[serde(default)]
  pub book: Option<Book>,
  pub quantity: i64,
  #[serde(default)]
  pub added_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  pub member_id: i64,
  #[serde(default)]
  pub items: Vec<CartEntry>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
  /// Converts the cart into checkout line items. Entries without an embedded
  /// book become items without a product; checkout drops them.
  pub fn line_items(&self) -> Vec<LineItem> {
    self
      .items
      .iter()
      .map(|entry| LineItem {
        product: entry.book.as_ref().map(Book::product_ref),
        quantity: entry.quantity,
      })
      .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn total_quantity(&self) -> i64 {
    self.items.iter().map(|entry| entry.quantity.max(0)).sum()
  }
}
