// booknest-core/src/checkout/sdk.rs

//! The boundary to the hosted payment widget.
//!
//! The widget script is loaded once per application through an [`SdkHandle`]
//! created at start-up and handed to every checkout session that needs it.

use crate::checkout::backend::CaptureDetails;
use crate::checkout::mount::ButtonMount;
use crate::error::{CheckoutError, CheckoutResult, SdkStage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_SDK_SCRIPT_URL: &str = "https://www.paypal.com/sdk/js";

/// Settings the widget script is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkOptions {
  client_id: String,
  currency: String,
  script_base: String,
}

impl SdkOptions {
  /// Fails with `CheckoutError::Configuration` when the client id is missing
  /// or blank. Nothing is loaded at this point.
  pub fn new(client_id: Option<String>, currency: impl Into<String>) -> CheckoutResult<Self> {
    let client_id = client_id
      .map(|id| id.trim().to_string())
      .filter(|id| !id.is_empty())
      .ok_or_else(|| CheckoutError::Configuration("payment client id is not configured".to_string()))?;
    let currency = currency.into().trim().to_ascii_uppercase();
    if currency.is_empty() {
      return Err(CheckoutError::Configuration("checkout currency is empty".to_string()));
    }
    Ok(Self {
      client_id,
      currency,
      script_base: DEFAULT_SDK_SCRIPT_URL.to_string(),
    })
  }

  /// Points the script at another host, e.g. the provider's sandbox.
  pub fn with_script_base(mut self, script_base: impl Into<String>) -> Self {
    self.script_base = script_base.into();
    self
  }

  pub fn client_id(&self) -> &str {
    &self.client_id
  }

  pub fn currency(&self) -> &str {
    &self.currency
  }

  pub fn script_url(&self) -> CheckoutResult<Url> {
    Url::parse_with_params(
      &self.script_base,
      [("client-id", self.client_id.as_str()), ("currency", self.currency.as_str())],
    )
    .map_err(|e| CheckoutError::Configuration(format!("invalid payment script URL '{}': {}", self.script_base, e)))
  }
}

/// Data the widget hands over when the buyer approves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalData {
  pub order_id: String,
  pub payer_id: Option<String>,
}

/// The widget's own order actions, when it exposes them.
#[async_trait]
pub trait OrderActions: Send + Sync {
  async fn capture(&self) -> anyhow::Result<CaptureDetails>;
}

/// Hooks the widget calls back into. Implemented by the checkout session.
#[async_trait]
pub trait ButtonCallbacks: Send + Sync {
  /// `createOrder`: build the payload and create the order, returning its id.
  async fn create_order(&self) -> CheckoutResult<String>;

  /// `onApprove`. `actions` is `None` when the widget cannot capture itself.
  async fn on_approve(&self, data: ApprovalData, actions: Option<Arc<dyn OrderActions>>);

  async fn on_cancel(&self);

  async fn on_error(&self, error: anyhow::Error);
}

/// A loaded widget script.
#[async_trait]
pub trait PaymentSdk: Send + Sync {
  async fn render_buttons(&self, mount: Arc<ButtonMount>, callbacks: Arc<dyn ButtonCallbacks>) -> anyhow::Result<()>;
}

/// Loads the widget script for the given options.
#[async_trait]
pub trait SdkLoader: Send + Sync {
  async fn load(&self, options: &SdkOptions) -> anyhow::Result<Arc<dyn PaymentSdk>>;
}

struct SdkHandleInner {
  options: SdkOptions,
  loader: Arc<dyn SdkLoader>,
  loaded: OnceCell<Arc<dyn PaymentSdk>>,
}

/// Single shared handle to the widget script.
///
/// The first `get()` starts the load; callers arriving while it is in flight
/// wait for the same load, later callers get the cached SDK. A failed load is
/// not cached and the next `get()` tries again.
#[derive(Clone)]
pub struct SdkHandle {
  inner: Arc<SdkHandleInner>,
}

impl SdkHandle {
  pub fn new(options: SdkOptions, loader: Arc<dyn SdkLoader>) -> Self {
    Self {
      inner: Arc::new(SdkHandleInner {
        options,
        loader,
        loaded: OnceCell::new(),
      }),
    }
  }

  pub fn options(&self) -> &SdkOptions {
    &self.inner.options
  }

  pub fn is_loaded(&self) -> bool {
    self.inner.loaded.initialized()
  }

  #[instrument(name = "SdkHandle::get", skip_all, fields(currency = %self.inner.options.currency))]
  pub async fn get(&self) -> CheckoutResult<Arc<dyn PaymentSdk>> {
    let inner = &self.inner;
    let sdk = inner
      .loaded
      .get_or_try_init(|| async {
        info!("Loading payment SDK script.");
        inner
          .loader
          .load(&inner.options)
          .await
          .map_err(|e| CheckoutError::sdk(SdkStage::Load, e))
      })
      .await?;
    Ok(Arc::clone(sdk))
  }
}

impl std::fmt::Debug for SdkHandle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SdkHandle")
      .field("options", &self.inner.options)
      .field("loaded", &self.is_loaded())
      .finish()
  }
}
