// storefront/src/api/mod.rs

//! REST client for the BookNest backend.
//!
//! Every request body goes through `naming::to_wire` and every response
//! through `naming::from_wire`, so models stay camelCase while the backend
//! speaks snake_case.

pub mod transport;

pub use transport::{ReqwestTransport, Transport, WireRequest, WireResponse};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use booknest::naming;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

#[derive(Clone)]
pub struct ApiClient {
  base_url: Url,
  transport: Arc<dyn Transport>,
}

impl ApiClient {
  pub fn new(base_url: Url, transport: Arc<dyn Transport>) -> Self {
    Self { base_url, transport }
  }

  pub fn from_config(config: &AppConfig) -> Result<Self> {
    let transport = ReqwestTransport::new(config.http_timeout, config.api_token.clone())?;
    Ok(Self::new(config.api_url.clone(), Arc::new(transport)))
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Resolves `path` against the base URL and appends `query`.
  pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let mut url = self.base_url.join(path.trim_start_matches('/'))?;
    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
  }

  pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
    let url = self.endpoint(path, query)?;
    let payload = self.send(Method::GET, url, None).await?;
    Ok(naming::from_wire(payload)?)
  }

  /// Like `get`, but a 404 resolves to `None`.
  pub async fn get_optional<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<Option<T>> {
    match self.get(path, query).await {
      Ok(found) => Ok(Some(found)),
      Err(AppError::NotFound(what)) => {
        debug!(resource = %what, "Resource not found, returning None.");
        Ok(None)
      }
      Err(e) => Err(e),
    }
  }

  pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    self.send_with_body(Method::POST, path, body).await
  }

  pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    self.send_with_body(Method::PUT, path, body).await
  }

  /// Deletes the resource. Any response body is ignored.
  pub async fn delete(&self, path: &str) -> Result<()> {
    let url = self.endpoint(path, &[])?;
    self.send(Method::DELETE, url, None).await?;
    Ok(())
  }

  async fn send_with_body<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = self.endpoint(path, &[])?;
    let wire_body = naming::to_wire(body)?;
    let payload = self.send(method, url, Some(wire_body)).await?;
    Ok(naming::from_wire(payload)?)
  }

  #[instrument(name = "ApiClient::send", skip_all, fields(method = %method, path = %url.path()))]
  async fn send(&self, method: Method, url: Url, body: Option<Value>) -> Result<Value> {
    let request = WireRequest {
      method,
      url: url.clone(),
      body,
    };
    let response = self.transport.execute(request).await.map_err(|e| {
      warn!(error = %e, "Backend request could not be sent.");
      e
    })?;

    if response.status == StatusCode::NOT_FOUND {
      debug!("Backend answered 404.");
      return Err(AppError::NotFound(url.path().to_string()));
    }
    if !response.status.is_success() {
      let err = status_error(response.status, &response.body);
      warn!(status = response.status.as_u16(), error = %err, "Backend request failed.");
      return Err(err);
    }
    decode_body(&response.body)
  }
}

/// Percent-encodes `raw` as a single path segment so caller-supplied ids
/// cannot climb out of the resource they are meant to address.
pub fn path_segment(raw: &str) -> Result<String> {
  if matches!(raw, "" | "." | "..") {
    return Err(AppError::Validation(format!("'{}' is not a valid resource id", raw)));
  }
  let mut url = Url::parse("http://segment.invalid/")?;
  if let Ok(mut segments) = url.path_segments_mut() {
    segments.clear().push(raw);
  }
  Ok(url.path().trim_start_matches('/').to_string())
}

// Empty 2xx bodies (e.g. 204 No Content) decode as JSON null.
fn decode_body(body: &[u8]) -> Result<Value> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(Value::Null);
  }
  Ok(serde_json::from_slice(body)?)
}

fn status_error(status: StatusCode, body: &[u8]) -> AppError {
  let detail = serde_json::from_slice::<Value>(body)
    .ok()
    .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string));
  AppError::Backend {
    status: status.as_u16(),
    message: detail.unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
  }
}
