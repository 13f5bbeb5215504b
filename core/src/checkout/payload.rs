// booknest-core/src/checkout/payload.rs

//! Order payload construction for the payment provider.
//!
//! The structs serialise with camelCase keys like every other application
//! model; [`OrderPayload::to_wire`] runs them through the naming bridge, which
//! yields the provider's snake_case order schema (`purchase_units`,
//! `unit_amount`, `currency_code`, ...).

use crate::checkout::line_item::LineItem;
use crate::error::{CheckoutError, CheckoutResult};
use crate::naming;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
  Capture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
  pub currency_code: String,
  pub value: String,
}

impl Money {
  pub fn new(currency_code: &str, amount: Decimal) -> Self {
    Self {
      currency_code: currency_code.to_string(),
      value: format_amount(amount),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountBreakdown {
  pub item_total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitAmount {
  pub currency_code: String,
  pub value: String,
  pub breakdown: AmountBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
  pub name: String,
  pub sku: String,
  /// The provider wants quantities as strings.
  pub quantity: String,
  pub unit_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseUnit {
  pub amount: UnitAmount,
  pub items: Vec<PurchaseItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
  pub intent: OrderIntent,
  pub purchase_units: Vec<PurchaseUnit>,
}

impl OrderPayload {
  fn unit(&self) -> Option<&PurchaseUnit> {
    self.purchase_units.first()
  }

  /// Order total, already formatted with two decimals.
  pub fn total(&self) -> &str {
    self.unit().map_or("0.00", |u| u.amount.value.as_str())
  }

  pub fn currency(&self) -> &str {
    self.unit().map_or("", |u| u.amount.currency_code.as_str())
  }

  pub fn item_count(&self) -> usize {
    self.unit().map_or(0, |u| u.items.len())
  }

  pub fn to_wire(&self) -> CheckoutResult<Value> {
    Ok(naming::to_wire(self)?)
  }
}

/// Rounds half away from zero to two decimals and always prints both.
pub fn format_amount(amount: Decimal) -> String {
  let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
  rounded.rescale(2);
  rounded.to_string()
}

/// Groups `items` into a single purchase unit.
///
/// Items without a product or with a non-positive quantity are dropped
/// silently. The unit currency is `currency_override` when given, otherwise
/// the first kept item's currency; every kept item must be priced in it.
#[instrument(skip(items), fields(num_items = items.len()))]
pub fn build_order_payload(items: &[LineItem], currency_override: Option<&str>) -> CheckoutResult<OrderPayload> {
  let kept: Vec<_> = items
    .iter()
    .filter_map(|item| match &item.product {
      Some(product) if item.quantity > 0 => Some((product, item.quantity)),
      _ => None,
    })
    .collect();

  let Some((first, _)) = kept.first() else {
    return Err(CheckoutError::NoValidItems);
  };
  if kept.len() < items.len() {
    debug!(dropped = items.len() - kept.len(), "Dropped line items that cannot be ordered.");
  }

  let currency = currency_override.unwrap_or(first.currency.as_str()).to_string();
  let mut total = Decimal::ZERO;
  let mut purchase_items = Vec::with_capacity(kept.len());

  for (product, quantity) in kept {
    if product.unit_price < Decimal::ZERO {
      return Err(CheckoutError::NegativePrice {
        item_id: product.id.clone(),
      });
    }
    if !product.currency.eq_ignore_ascii_case(&currency) {
      return Err(CheckoutError::MixedCurrency {
        item_id: product.id.clone(),
        expected: currency,
        found: product.currency.clone(),
      });
    }

    total = product
      .unit_price
      .checked_mul(Decimal::from(quantity))
      .and_then(|line_total| total.checked_add(line_total))
      .ok_or_else(|| CheckoutError::AmountOverflow {
        item_id: product.id.clone(),
      })?;
    purchase_items.push(PurchaseItem {
      name: product.title.clone(),
      sku: product.id.clone(),
      quantity: quantity.to_string(),
      unit_amount: Money::new(&currency, product.unit_price),
    });
  }

  let value = format_amount(total);
  debug!(total = %value, currency = %currency, "Built order payload.");
  Ok(OrderPayload {
    intent: OrderIntent::Capture,
    purchase_units: vec![PurchaseUnit {
      amount: UnitAmount {
        currency_code: currency.clone(),
        value: value.clone(),
        breakdown: AmountBreakdown {
          item_total: Money {
            currency_code: currency,
            value,
          },
        },
      },
      items: purchase_items,
    }],
  })
}
