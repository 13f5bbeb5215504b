// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset.

use async_trait::async_trait;
use booknest::checkout::payload::OrderPayload;
use booknest::checkout::{ApprovalData, ButtonCallbacks, ButtonMount, CaptureDetails, LineItem, ProductRef};
use booknest::{
  CheckoutListener, CheckoutOptions, CheckoutSession, ContextData, OrderActions, OrderBackend, PaymentSdk,
  PipelineControl, PipelineError, SdkHandle, SdkLoader, SdkOptions,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::Level;

// --- Tracing ---
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

// --- Pipeline test context ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Pipeline framework error: {0}")]
  Pipeline(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<PipelineError> for TestError {
  fn from(err: PipelineError) -> Self {
    TestError::Pipeline(format!("{:?}", err))
  }
}

pub fn create_simple_handler(
  label: &'static str,
  message_to_append: &'static str,
) -> impl Fn(ContextData<TestContext>) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<PipelineControl, TestError>> + Send>>
     + Send
     + Sync
     + 'static {
  move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(message_to_append);
      guard.steps_executed.push(label.to_string());
      if guard.should_stop_at.as_deref() == Some(label) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  }
}

pub fn create_failing_handler(
  label: &'static str,
  error_message: &'static str,
) -> impl Fn(ContextData<TestContext>) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<PipelineControl, TestError>> + Send>>
     + Send
     + Sync
     + 'static {
  move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(label.to_string());
      Err(TestError::Handler(error_message.to_string()))
    })
  }
}

// --- Checkout fixtures ---

pub fn book(id: &str, price: &str, quantity: i64) -> LineItem {
  LineItem::new(
    ProductRef::new(id, format!("Book {id}"), Decimal::from_str(price).unwrap(), "USD"),
    quantity,
  )
}

pub fn sample_cart() -> Vec<LineItem> {
  vec![book("b1", "9.99", 2), book("b2", "4.50", 1)]
}

/// Widget stand-in: renders a placeholder button and keeps the callbacks so
/// tests can play the buyer.
#[derive(Default)]
pub struct FakeSdk {
  renders: AtomicUsize,
  fail_render: AtomicBool,
  callbacks: Mutex<Option<Arc<dyn ButtonCallbacks>>>,
}

impl FakeSdk {
  pub fn renders(&self) -> usize {
    self.renders.load(Ordering::SeqCst)
  }

  pub fn fail_renders(&self) {
    self.fail_render.store(true, Ordering::SeqCst);
  }

  pub fn callbacks(&self) -> Arc<dyn ButtonCallbacks> {
    self.callbacks.lock().clone().expect("buttons were never rendered")
  }
}

#[async_trait]
impl PaymentSdk for FakeSdk {
  async fn render_buttons(&self, mount: Arc<ButtonMount>, callbacks: Arc<dyn ButtonCallbacks>) -> anyhow::Result<()> {
    if self.fail_render.load(Ordering::SeqCst) {
      anyhow::bail!("container {} not found", mount.selector());
    }
    self.renders.fetch_add(1, Ordering::SeqCst);
    mount.attach("<paypal-buttons/>");
    *self.callbacks.lock() = Some(callbacks);
    Ok(())
  }
}

/// Script loader stand-in. Optionally held open until `release()`, and
/// optionally failing the first N loads.
pub struct FakeLoader {
  pub sdk: Arc<FakeSdk>,
  calls: AtomicUsize,
  failures_left: AtomicUsize,
  gated: bool,
  gate: Notify,
}

impl FakeLoader {
  pub fn ready() -> Arc<Self> {
    Arc::new(Self::build(false, 0))
  }

  pub fn gated() -> Arc<Self> {
    Arc::new(Self::build(true, 0))
  }

  pub fn failing(times: usize) -> Arc<Self> {
    Arc::new(Self::build(false, times))
  }

  fn build(gated: bool, failures: usize) -> Self {
    Self {
      sdk: Arc::new(FakeSdk::default()),
      calls: AtomicUsize::new(0),
      failures_left: AtomicUsize::new(failures),
      gated,
      gate: Notify::new(),
    }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn release(&self) {
    self.gate.notify_waiters();
  }

  /// Yields until a load has started.
  pub async fn wait_for_load(&self) {
    while self.calls() == 0 {
      tokio::task::yield_now().await;
    }
  }
}

#[async_trait]
impl SdkLoader for FakeLoader {
  async fn load(&self, options: &SdkOptions) -> anyhow::Result<Arc<dyn PaymentSdk>> {
    let notified = self.gate.notified();
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.gated {
      notified.await;
    }
    let should_fail = self
      .failures_left
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
      .is_ok();
    if should_fail {
      anyhow::bail!("failed to load {}", options.script_url()?);
    }
    Ok(self.sdk.clone())
  }
}

#[derive(Default)]
pub struct FakeBackend {
  pub created: Mutex<Vec<OrderPayload>>,
  pub captured: Mutex<Vec<String>>,
  pub fail_capture: AtomicBool,
}

#[async_trait]
impl OrderBackend for FakeBackend {
  async fn create_order(&self, payload: &OrderPayload) -> anyhow::Result<String> {
    let mut created = self.created.lock();
    created.push(payload.clone());
    Ok(format!("ORDER-{}", created.len()))
  }

  async fn capture_order(&self, order_id: &str) -> anyhow::Result<CaptureDetails> {
    self.captured.lock().push(order_id.to_string());
    if self.fail_capture.load(Ordering::SeqCst) {
      anyhow::bail!("capture rejected with status 422");
    }
    Ok(CaptureDetails {
      order_id: order_id.to_string(),
      status: "COMPLETED".to_string(),
      payer_email: None,
    })
  }
}

#[derive(Default)]
pub struct FakeActions {
  pub captures: AtomicUsize,
}

#[async_trait]
impl OrderActions for FakeActions {
  async fn capture(&self) -> anyhow::Result<CaptureDetails> {
    self.captures.fetch_add(1, Ordering::SeqCst);
    Ok(CaptureDetails {
      order_id: "WIDGET-ORDER".to_string(),
      status: "COMPLETED".to_string(),
      payer_email: Some("buyer@example.com".to_string()),
    })
  }
}

/// Widget capture that stays open until `release()`.
#[derive(Default)]
pub struct GatedActions {
  started: AtomicBool,
  gate: Notify,
}

impl GatedActions {
  pub fn release(&self) {
    self.gate.notify_one();
  }

  pub async fn wait_for_capture(&self) {
    while !self.started.load(Ordering::SeqCst) {
      tokio::task::yield_now().await;
    }
  }
}

#[async_trait]
impl OrderActions for GatedActions {
  async fn capture(&self) -> anyhow::Result<CaptureDetails> {
    self.started.store(true, Ordering::SeqCst);
    self.gate.notified().await;
    Ok(CaptureDetails {
      order_id: "WIDGET-ORDER".to_string(),
      status: "COMPLETED".to_string(),
      payer_email: None,
    })
  }
}

#[derive(Default)]
pub struct RecordingListener {
  pub successes: Mutex<Vec<CaptureDetails>>,
  pub errors: Mutex<Vec<String>>,
}

impl CheckoutListener for RecordingListener {
  fn on_success(&self, details: &CaptureDetails) {
    self.successes.lock().push(details.clone());
  }

  fn on_error(&self, message: &str) {
    self.errors.lock().push(message.to_string());
  }
}

pub struct Harness {
  pub session: Arc<CheckoutSession>,
  pub loader: Arc<FakeLoader>,
  pub backend: Arc<FakeBackend>,
  pub listener: Arc<RecordingListener>,
}

impl Harness {
  pub fn new(loader: Arc<FakeLoader>) -> Self {
    Self::with_options(loader, CheckoutOptions::default())
  }

  pub fn with_options(loader: Arc<FakeLoader>, options: CheckoutOptions) -> Self {
    let sdk_options = SdkOptions::new(Some("test-client".to_string()), "USD").unwrap();
    let handle = SdkHandle::new(sdk_options, loader.clone());
    let backend = Arc::new(FakeBackend::default());
    let listener = Arc::new(RecordingListener::default());
    let session = CheckoutSession::new(handle, backend.clone(), options).with_listener(listener.clone());
    Self {
      session: Arc::new(session),
      loader,
      backend,
      listener,
    }
  }

  pub fn approval(order_id: &str) -> ApprovalData {
    ApprovalData {
      order_id: order_id.to_string(),
      payer_id: Some("PAYER-1".to_string()),
    }
  }
}

pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(6);
