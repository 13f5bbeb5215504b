// storefront/src/state.rs
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::services::PaymentsBackend;
use booknest::{CheckoutOptions, CheckoutSession, SdkHandle, SdkLoader};
use std::sync::Arc;

/// Everything a command needs: the loaded configuration and a client for the
/// configured backend.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub api: ApiClient,
}

impl AppState {
  pub fn new(config: Arc<AppConfig>, api: ApiClient) -> Self {
    Self { config, api }
  }

  pub fn from_config(config: AppConfig) -> AppResult<Self> {
    let api = ApiClient::from_config(&config)?;
    Ok(Self::new(Arc::new(config), api))
  }

  pub fn payments(&self) -> PaymentsBackend {
    PaymentsBackend::new(self.api.clone())
  }

  /// The application-wide handle to the payment widget script. Create it once
  /// and share it between sessions. Fails without a configured client id.
  pub fn sdk_handle(&self, loader: Arc<dyn SdkLoader>) -> AppResult<SdkHandle> {
    Ok(SdkHandle::new(self.config.sdk_options()?, loader))
  }

  /// A checkout session whose orders go through this backend, priced in the
  /// configured currency.
  pub fn checkout_session(&self, sdk: SdkHandle) -> CheckoutSession {
    let options = CheckoutOptions {
      currency_override: Some(self.config.currency.clone()),
      ..Default::default()
    };
    CheckoutSession::new(sdk, Arc::new(self.payments()), options)
  }
}
