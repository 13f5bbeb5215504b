// booknest-core/src/checkout/status.rs

use serde::Serialize;
use std::fmt;

/// Client-visible checkout status.
///
/// ```text
/// idle -> loading -> ready -> processing -> success | error
/// ```
///
/// `loading` and `error` can be entered from anywhere: a dependency change
/// restarts loading and any failure lands in error. Only `ready` may go to
/// `idle` (the buyer cancelled); disabling checkout resets the session outside
/// of this table. `success` and `error` fall back to `ready` once the buttons
/// are usable again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStatus {
  #[default]
  Idle,
  Loading,
  Ready,
  Processing,
  Success,
  Error,
}

impl CheckoutStatus {
  pub fn can_transition_to(self, next: CheckoutStatus) -> bool {
    use CheckoutStatus::*;
    matches!(
      (self, next),
      (_, Loading)
        | (_, Error)
        | (Ready, Idle)
        | (Loading | Success | Error, Ready)
        | (Ready, Processing)
        | (Processing, Success)
    )
  }

  /// Settled states a buyer may start another attempt from while the buttons
  /// of the current cycle are still rendered.
  pub fn is_resumable(self) -> bool {
    matches!(self, CheckoutStatus::Idle | CheckoutStatus::Success | CheckoutStatus::Error)
  }

  /// Loading or capturing; the buyer should not be able to start another attempt.
  pub fn is_busy(self) -> bool {
    matches!(self, CheckoutStatus::Loading | CheckoutStatus::Processing)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      CheckoutStatus::Idle => "idle",
      CheckoutStatus::Loading => "loading",
      CheckoutStatus::Ready => "ready",
      CheckoutStatus::Processing => "processing",
      CheckoutStatus::Success => "success",
      CheckoutStatus::Error => "error",
    }
  }
}

impl fmt::Display for CheckoutStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
