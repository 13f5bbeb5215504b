// storefront/src/api/transport.rs

//! The HTTP seam. `ApiClient` only ever sees `WireRequest`/`WireResponse`;
//! `ReqwestTransport` owns the transport details (timeout, headers, auth).

use crate::errors::{AppError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// A request with its body already in wire naming.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
  pub method: Method,
  pub url: Url,
  pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct WireResponse {
  pub status: StatusCode,
  pub body: Vec<u8>,
}

impl WireResponse {
  pub fn json(status: StatusCode, body: &Value) -> Self {
    Self {
      status,
      body: body.to_string().into_bytes(),
    }
  }

  pub fn empty(status: StatusCode) -> Self {
    Self { status, body: Vec::new() }
  }
}

#[async_trait]
pub trait Transport: Send + Sync {
  /// Sends the request. Only failures to get any response are errors here;
  /// status handling belongs to the caller.
  async fn execute(&self, request: WireRequest) -> Result<WireResponse>;
}

pub struct ReqwestTransport {
  client: Client,
  bearer_token: Option<String>,
}

impl ReqwestTransport {
  pub fn new(timeout: Duration, bearer_token: Option<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| AppError::Config(format!("Cannot build HTTP client: {}", e)))?;
    Ok(Self { client, bearer_token })
  }
}

#[async_trait]
impl Transport for ReqwestTransport {
  async fn execute(&self, request: WireRequest) -> Result<WireResponse> {
    let mut builder = self
      .client
      .request(request.method, request.url)
      .header(ACCEPT, "application/json");
    if let Some(token) = &self.bearer_token {
      builder = builder.bearer_auth(token);
    }
    if let Some(body) = &request.body {
      builder = builder.json(body);
    }

    let response = builder.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    Ok(WireResponse {
      status,
      body: body.to_vec(),
    })
  }
}

fn map_transport_error(error: reqwest::Error) -> AppError {
  if error.is_timeout() {
    AppError::Transport(format!("request timed out: {}", error))
  } else {
    AppError::Transport(error.to_string())
  }
}
