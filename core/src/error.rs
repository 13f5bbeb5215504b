// booknest-core/src/error.rs
use anyhow::Error as AnyhowError;
use std::fmt;
use thiserror::Error;

/// Framework-level failures of the step pipeline itself (as opposed to
/// failures raised by the handlers it runs).
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },
}

/// Which interaction with the external payment SDK failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkStage {
  Load,
  Render,
  Capture,
  /// An error reported by the widget's own `onError` hook.
  Widget,
}

impl fmt::Display for SdkStage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let stage = match self {
      SdkStage::Load => "script load",
      SdkStage::Render => "button render",
      SdkStage::Capture => "order capture",
      SdkStage::Widget => "widget flow",
    };
    f.write_str(stage)
  }
}

#[derive(Debug, Error)]
pub enum CheckoutError {
  /// Missing or malformed settings. Raised before any network activity.
  #[error("Configuration error: {0}")]
  Configuration(String),

  #[error("Cannot start checkout with an empty cart")]
  EmptyCart,

  #[error("Line item '{item_id}' has non-positive quantity {quantity}")]
  InvalidQuantity { item_id: String, quantity: i64 },

  #[error("No valid line items remain to build an order from")]
  NoValidItems,

  #[error("Line item '{item_id}' has a negative unit price")]
  NegativePrice { item_id: String },

  #[error("Line item '{item_id}' is priced in {found}, but the order currency is {expected}")]
  MixedCurrency {
    item_id: String,
    expected: String,
    found: String,
  },

  #[error("Order amount overflowed at line item '{item_id}'")]
  AmountOverflow { item_id: String },

  /// The render cycle behind a widget callback was superseded or unmounted.
  #[error("Checkout cycle is no longer active")]
  StaleCycle,

  #[error("Payment SDK failed during {stage}. Source: {source}")]
  Sdk {
    stage: SdkStage,
    #[source]
    source: AnyhowError,
  },

  #[error("Order backend request failed. Source: {source}")]
  Backend {
    #[source]
    source: AnyhowError,
  },

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Checkout workflow error: {0}")]
  Workflow(#[from] PipelineError),

  #[error("Error in checkout handler or external operation. Source: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

impl CheckoutError {
  pub fn sdk(stage: SdkStage, source: impl Into<AnyhowError>) -> Self {
    CheckoutError::Sdk {
      stage,
      source: source.into(),
    }
  }

  pub fn backend(source: impl Into<AnyhowError>) -> Self {
    CheckoutError::Backend { source: source.into() }
  }

  /// Short message suitable for showing to the buyer. The full error is
  /// logged separately by the session.
  pub fn user_message(&self) -> String {
    match self {
      CheckoutError::Configuration(_) => "Checkout is not available right now.".to_string(),
      CheckoutError::EmptyCart | CheckoutError::NoValidItems => "Your cart is empty.".to_string(),
      CheckoutError::InvalidQuantity { .. } => "Every item needs a quantity of at least one.".to_string(),
      CheckoutError::NegativePrice { .. } | CheckoutError::MixedCurrency { .. } => {
        "Some items in your cart cannot be purchased together.".to_string()
      }
      CheckoutError::AmountOverflow { .. } => "Your order total is too large to process.".to_string(),
      CheckoutError::StaleCycle => "This checkout is out of date. Please try again.".to_string(),
      CheckoutError::Sdk {
        stage: SdkStage::Capture | SdkStage::Widget,
        ..
      }
      | CheckoutError::Backend { .. } => "We could not complete your payment. Please try again.".to_string(),
      CheckoutError::Sdk { .. } => "The payment service could not be loaded. Please try again later.".to_string(),
      CheckoutError::Serialization(_) | CheckoutError::Workflow(_) | CheckoutError::Handler { .. } => {
        "Something went wrong during checkout.".to_string()
      }
    }
  }
}

// Unwrap a CheckoutError that travelled through anyhow instead of nesting it.
impl From<AnyhowError> for CheckoutError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<CheckoutError>() {
      Ok(checkout_err) => checkout_err,
      Err(other) => CheckoutError::Handler { source: other },
    }
  }
}

pub type CheckoutResult<T, E = CheckoutError> = std::result::Result<T, E>;
