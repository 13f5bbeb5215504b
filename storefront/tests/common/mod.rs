// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset.

use async_trait::async_trait;
use booknest::checkout::{ButtonCallbacks, ButtonMount};
use booknest::{PaymentSdk, SdkLoader, SdkOptions};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use storefront::api::{ApiClient, Transport, WireRequest, WireResponse};
use storefront::{AppConfig, AppError, AppState};
use tracing::Level;
use url::Url;

pub const BASE_URL: &str = "http://backend.test/api/";

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Canned backend. Routes are keyed by method and path relative to the API
/// base; unknown routes answer 404 like the real backend.
#[derive(Default)]
pub struct FakeTransport {
  routes: Mutex<HashMap<(Method, String), VecDeque<WireResponse>>>,
  requests: Mutex<Vec<WireRequest>>,
  offline: Mutex<bool>,
}

impl FakeTransport {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
    let status = StatusCode::from_u16(status).unwrap();
    self.push(method, path, WireResponse::json(status, &body));
  }

  pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
    let status = StatusCode::from_u16(status).unwrap();
    self.push(
      method,
      path,
      WireResponse {
        status,
        body: body.as_bytes().to_vec(),
      },
    );
  }

  pub fn go_offline(&self) {
    *self.offline.lock() = true;
  }

  fn push(&self, method: Method, path: &str, response: WireResponse) {
    self
      .routes
      .lock()
      .entry((method, format!("/api/{}", path)))
      .or_default()
      .push_back(response);
  }

  pub fn requests(&self) -> Vec<WireRequest> {
    self.requests.lock().clone()
  }

  pub fn requests_to(&self, method: Method, path: &str) -> Vec<WireRequest> {
    let full = format!("/api/{}", path);
    self
      .requests()
      .into_iter()
      .filter(|r| r.method == method && r.url.path() == full)
      .collect()
  }
}

#[async_trait]
impl Transport for FakeTransport {
  async fn execute(&self, request: WireRequest) -> Result<WireResponse, AppError> {
    self.requests.lock().push(request.clone());
    if *self.offline.lock() {
      return Err(AppError::Transport("connection refused".to_string()));
    }
    let key = (request.method.clone(), request.url.path().to_string());
    let canned = self.routes.lock().get_mut(&key).and_then(VecDeque::pop_front);
    Ok(canned.unwrap_or_else(|| WireResponse::json(StatusCode::NOT_FOUND, &json!({ "detail": "Not found." }))))
  }
}

pub fn client() -> (ApiClient, Arc<FakeTransport>) {
  let transport = FakeTransport::new();
  let client = ApiClient::new(Url::parse(BASE_URL).unwrap(), transport.clone());
  (client, transport)
}

pub fn state_with(vars: &[(&str, &str)]) -> (AppState, Arc<FakeTransport>) {
  let mut vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  vars.insert("BOOKNEST_API_URL".to_string(), BASE_URL.to_string());
  let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
  let (api, transport) = client();
  (AppState::new(Arc::new(config), api), transport)
}

// --- Wire fixtures (snake_case, as the backend sends them) ---

pub fn wire_book(id: i64, price: &str) -> Value {
  json!({
    "id": id,
    "title": format!("Book {id}"),
    "author": "A. Writer",
    "price": price,
    "currency": "USD",
    "cover_image_url": format!("https://img.test/{id}.png"),
    "stock_quantity": 4,
    "published_on": "2021-03-04"
  })
}

pub fn wire_cart(member_id: i64) -> Value {
  json!({
    "member_id": member_id,
    "items": [
      { "book_id": 1, "book": wire_book(1, "9.99"), "quantity": 2, "added_at": "2024-05-01T10:00:00Z" },
      { "book_id": 2, "book": wire_book(2, "4.50"), "quantity": 1 },
      { "book_id": 3, "book": null, "quantity": 1 }
    ],
    "updated_at": "2024-05-01T10:05:00Z"
  })
}

// --- Payment widget stand-ins ---

#[derive(Default)]
pub struct InstantSdk {
  callbacks: Mutex<Option<Arc<dyn ButtonCallbacks>>>,
}

impl InstantSdk {
  pub fn callbacks(&self) -> Arc<dyn ButtonCallbacks> {
    self.callbacks.lock().clone().expect("buttons were never rendered")
  }
}

#[async_trait]
impl PaymentSdk for InstantSdk {
  async fn render_buttons(&self, mount: Arc<ButtonMount>, callbacks: Arc<dyn ButtonCallbacks>) -> anyhow::Result<()> {
    mount.attach("<paypal-buttons/>");
    *self.callbacks.lock() = Some(callbacks);
    Ok(())
  }
}

pub struct InstantLoader {
  pub sdk: Arc<InstantSdk>,
  pub loaded_with: Mutex<Vec<SdkOptions>>,
}

impl InstantLoader {
  pub fn new() -> Arc<Self> {
    Arc::new(Self {
      sdk: Arc::new(InstantSdk::default()),
      loaded_with: Mutex::new(Vec::new()),
    })
  }
}

#[async_trait]
impl SdkLoader for InstantLoader {
  async fn load(&self, options: &SdkOptions) -> anyhow::Result<Arc<dyn PaymentSdk>> {
    self.loaded_with.lock().push(options.clone());
    Ok(self.sdk.clone())
  }
}
