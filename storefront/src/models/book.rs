// storefront/src/models/book.rs

use booknest::checkout::ProductRef;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
  "USD".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
  pub id: i64,
  pub title: String,
  pub author: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: Decimal,
  #[serde(default = "default_currency")]
  pub currency: String,
  #[serde(default)]
  pub cover_image_url: Option<String>,
  #[serde(default)]
  pub stock_quantity: Option<i64>,
  #[serde(default)]
  pub published_on: Option<NaiveDate>,
}

impl Book {
  /// The checkout view of this book.
  pub fn product_ref(&self) -> ProductRef {
    ProductRef::new(self.id.to_string(), self.title.clone(), self.price, self.currency.clone())
  }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  pub count: u64,
  #[serde(default)]
  pub next: Option<String>,
  #[serde(default)]
  pub previous: Option<String>,
  pub results: Vec<T>,
}
