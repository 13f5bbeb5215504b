// storefront/src/config.rs

use crate::errors::{AppError, Result};
use booknest::SdkOptions;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Backend base URL. Always ends with `/` so relative paths join below it.
  pub api_url: Url,
  pub api_token: Option<String>,

  // Payment widget settings. Only validated when checkout is set up.
  pub paypal_client_id: Option<String>,
  pub currency: String,

  pub http_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    let config = Self::from_lookup(|var_name| env::var(var_name).ok())?;
    tracing::info!(api_url = %config.api_url, currency = %config.currency, "Application configuration loaded.");
    Ok(config)
  }

  /// Builds the configuration from an arbitrary variable source. Blank values
  /// count as unset.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| lookup(var_name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let raw_url = get_env("BOOKNEST_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_url = parse_base_url(&raw_url)?;

    let http_timeout = match get_env("BOOKNEST_HTTP_TIMEOUT_SECS") {
      Some(raw) => {
        let secs = raw
          .parse::<u64>()
          .map_err(|e| AppError::Config(format!("Invalid BOOKNEST_HTTP_TIMEOUT_SECS '{}': {}", raw, e)))?;
        if secs == 0 {
          return Err(AppError::Config("BOOKNEST_HTTP_TIMEOUT_SECS must be positive".to_string()));
        }
        Duration::from_secs(secs)
      }
      None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
    };

    let currency = get_env("BOOKNEST_CURRENCY")
      .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
      .to_ascii_uppercase();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(AppError::Config(format!(
        "BOOKNEST_CURRENCY must be a three-letter code, got '{}'",
        currency
      )));
    }

    Ok(Self {
      api_url,
      api_token: get_env("BOOKNEST_API_TOKEN"),
      paypal_client_id: get_env("PAYPAL_CLIENT_ID"),
      currency,
      http_timeout,
    })
  }

  /// Settings for the payment widget. Fails when no client id is configured.
  pub fn sdk_options(&self) -> Result<SdkOptions> {
    Ok(SdkOptions::new(self.paypal_client_id.clone(), self.currency.as_str())?)
  }
}

fn parse_base_url(raw: &str) -> Result<Url> {
  let with_slash = if raw.ends_with('/') {
    raw.to_string()
  } else {
    format!("{}/", raw)
  };
  let url = Url::parse(&with_slash).map_err(|e| AppError::Config(format!("Invalid BOOKNEST_API_URL '{}': {}", raw, e)))?;
  if url.cannot_be_a_base() {
    return Err(AppError::Config(format!("BOOKNEST_API_URL '{}' cannot be used as a base URL", raw)));
  }
  Ok(url)
}

#[cfg(test)]
mod tests {
  use super::*;
  use booknest::CheckoutError;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
    assert_eq!(config.currency, "USD");
    assert_eq!(config.http_timeout, Duration::from_secs(15));
    assert!(config.api_token.is_none());
    assert!(config.paypal_client_id.is_none());
  }

  #[test]
  fn base_url_gains_a_trailing_slash() {
    let config = config_from(&[("BOOKNEST_API_URL", "https://books.example/api")]).unwrap();
    assert_eq!(config.api_url.as_str(), "https://books.example/api/");
  }

  #[test]
  fn invalid_values_are_config_errors() {
    assert!(matches!(config_from(&[("BOOKNEST_API_URL", "not a url")]), Err(AppError::Config(_))));
    assert!(matches!(
      config_from(&[("BOOKNEST_HTTP_TIMEOUT_SECS", "soon")]),
      Err(AppError::Config(_))
    ));
    assert!(matches!(config_from(&[("BOOKNEST_CURRENCY", "dollars")]), Err(AppError::Config(_))));
  }

  #[test]
  fn missing_client_id_only_fails_when_checkout_is_set_up() {
    let config = config_from(&[("PAYPAL_CLIENT_ID", "   ")]).unwrap();
    assert!(matches!(
      config.sdk_options(),
      Err(AppError::Checkout {
        source: CheckoutError::Configuration(_)
      })
    ));

    let config = config_from(&[("PAYPAL_CLIENT_ID", "abc"), ("BOOKNEST_CURRENCY", "eur")]).unwrap();
    let options = config.sdk_options().unwrap();
    assert_eq!(options.client_id(), "abc");
    assert_eq!(options.currency(), "EUR");
  }
}
