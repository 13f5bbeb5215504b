// booknest-core/src/checkout/session.rs

//! `CheckoutSession`: one checkout button on one page.
//!
//! The session owns the status, the current line items and the mount point.
//! Loading and capturing run as step pipelines (see `checkout::pipelines`);
//! the widget talks back through [`SessionCallbacks`], which is bound to the
//! render cycle that created it.

use crate::checkout::backend::{CaptureDetails, OrderBackend};
use crate::checkout::line_item::LineItem;
use crate::checkout::liveness::{Liveness, LivenessToken};
use crate::checkout::mount::ButtonMount;
use crate::checkout::payload::build_order_payload;
use crate::checkout::pipelines::{capture_pipeline, loading_pipeline, CaptureCtx, LoadCtx};
use crate::checkout::sdk::{ApprovalData, ButtonCallbacks, OrderActions, SdkHandle};
use crate::checkout::status::CheckoutStatus;
use crate::core::ContextData;
use crate::error::{CheckoutError, CheckoutResult, SdkStage};
use crate::pipeline::Pipeline;
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_secs(6);
pub const DEFAULT_MOUNT_SELECTOR: &str = "#paypal-button-container";

#[derive(Debug, Clone)]
pub struct CheckoutOptions {
  /// Forces the order currency instead of taking the first item's.
  pub currency_override: Option<String>,
  /// How long `success` stays visible before the session returns to `ready`.
  pub success_display: Duration,
  pub mount_selector: String,
}

impl Default for CheckoutOptions {
  fn default() -> Self {
    Self {
      currency_override: None,
      success_display: DEFAULT_SUCCESS_DISPLAY,
      mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
    }
  }
}

/// Notified about terminal outcomes of a checkout attempt.
pub trait CheckoutListener: Send + Sync {
  fn on_success(&self, details: &CaptureDetails);

  fn on_error(&self, _message: &str) {}
}

#[derive(Debug, Default)]
pub(crate) struct SessionState {
  pub(crate) status: CheckoutStatus,
  pub(crate) items: Vec<LineItem>,
  pub(crate) disabled: bool,
  pub(crate) last_error: Option<String>,
  pub(crate) last_capture: Option<CaptureDetails>,
  pub(crate) order_id: Option<String>,
  /// Bumped on every capture; the success timer only resets its own one.
  pub(crate) captures: u64,
}

pub(crate) struct SessionShared {
  pub(crate) sdk: SdkHandle,
  pub(crate) backend: Arc<dyn OrderBackend>,
  pub(crate) options: CheckoutOptions,
  pub(crate) mount: Arc<ButtonMount>,
  pub(crate) liveness: Arc<Liveness>,
  pub(crate) state: ContextData<SessionState>,
  pub(crate) listener: Option<Arc<dyn CheckoutListener>>,
  loading: Pipeline<LoadCtx, CheckoutError>,
  capture: Pipeline<CaptureCtx, CheckoutError>,
}

impl SessionShared {
  /// Moves to `next` if `token` is still live and the edge is allowed.
  pub(crate) fn set_status(&self, token: &LivenessToken, next: CheckoutStatus) -> bool {
    if !token.is_live() {
      debug!(next = %next, "Ignoring status change from a stale checkout cycle.");
      return false;
    }
    self.state.update(|state| {
      if state.status == next {
        return true;
      }
      if !state.status.can_transition_to(next) {
        warn!(from = %state.status, to = %next, "Rejected checkout status transition.");
        return false;
      }
      debug!(from = %state.status, to = %next, "Checkout status changed.");
      state.status = next;
      if next != CheckoutStatus::Error {
        state.last_error = None;
      }
      true
    })
  }

  /// `idle` from any status. Only disabling checkout takes this path.
  fn enter_idle(&self, token: &LivenessToken) {
    if !token.is_live() {
      return;
    }
    self.state.update(|state| {
      debug!(from = %state.status, "Checkout disabled.");
      state.status = CheckoutStatus::Idle;
      state.last_error = None;
    });
  }

  /// Brings a settled session back to `ready` when the buyer starts another
  /// attempt on the buttons this cycle rendered.
  pub(crate) fn resume(&self, token: &LivenessToken) {
    if !token.is_live() || self.mount.is_empty() {
      return;
    }
    self.state.update(|state| {
      if !state.disabled && state.status.is_resumable() {
        debug!(from = %state.status, "Buyer retried, checkout is ready again.");
        state.status = CheckoutStatus::Ready;
        state.last_error = None;
      }
    });
  }

  /// Logs `err` and, if the cycle is still live, surfaces it as `error`.
  pub(crate) fn fail(&self, token: &LivenessToken, err: &CheckoutError) {
    if !token.is_live() {
      debug!(error = %err, "Checkout failure from a stale cycle suppressed.");
      return;
    }
    error!(error = %err, "Checkout failed.");
    let message = err.user_message();
    if self.set_status(token, CheckoutStatus::Error) {
      self.state.update(|state| state.last_error = Some(message.clone()));
      if let Some(listener) = &self.listener {
        listener.on_error(&message);
      }
    }
  }

  /// Called once a capture succeeded: shows `success`, notifies the listener
  /// and schedules the fall back to `ready`.
  pub(crate) fn complete(self: &Arc<Self>, token: &LivenessToken, details: CaptureDetails) {
    if !self.set_status(token, CheckoutStatus::Success) {
      return;
    }
    info!(order_id = %details.order_id, status = %details.status, "Payment captured.");
    let capture = self.state.update(|state| {
      state.last_capture = Some(details.clone());
      state.captures += 1;
      state.captures
    });
    if let Some(listener) = &self.listener {
      listener.on_success(&details);
    }

    let shared = Arc::clone(self);
    let token = token.clone();
    let delay = self.options.success_display;
    tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      if shared.state.with(|state| state.status == CheckoutStatus::Success && state.captures == capture) {
        shared.set_status(&token, CheckoutStatus::Ready);
      }
    });
  }
}

/// The widget's view of one render cycle of a session.
///
/// Widgets keep their callbacks for as long as they like, so this only holds
/// a weak reference; a dropped session is freed even while its buttons live on.
pub(crate) struct SessionCallbacks {
  shared: Weak<SessionShared>,
  token: LivenessToken,
}

impl SessionCallbacks {
  pub(crate) fn new(shared: &Arc<SessionShared>, token: LivenessToken) -> Self {
    Self {
      shared: Arc::downgrade(shared),
      token,
    }
  }

  /// The session, while this cycle is still the current one.
  fn live_session(&self) -> Option<Arc<SessionShared>> {
    if !self.token.is_live() {
      debug!(generation = self.token.generation(), "Widget callback from a stale checkout cycle.");
      return None;
    }
    self.shared.upgrade()
  }
}

#[async_trait]
impl ButtonCallbacks for SessionCallbacks {
  #[instrument(name = "checkout::create_order", skip_all, fields(generation = self.token.generation()))]
  async fn create_order(&self) -> CheckoutResult<String> {
    let shared = self.live_session().ok_or(CheckoutError::StaleCycle)?;
    shared.resume(&self.token);
    let items = shared.state.with(|state| state.items.clone());
    let payload = build_order_payload(&items, shared.options.currency_override.as_deref())?;
    let order_id = shared
      .backend
      .create_order(&payload)
      .await
      .map_err(CheckoutError::backend)?;
    info!(order_id = %order_id, total = %payload.total(), currency = %payload.currency(), "Order created.");
    if self.token.is_live() {
      shared.state.update(|state| state.order_id = Some(order_id.clone()));
    }
    Ok(order_id)
  }

  #[instrument(name = "checkout::on_approve", skip_all, fields(order_id = %data.order_id))]
  async fn on_approve(&self, data: ApprovalData, actions: Option<Arc<dyn OrderActions>>) {
    let Some(shared) = self.live_session() else {
      return;
    };
    shared.resume(&self.token);
    if !shared.set_status(&self.token, CheckoutStatus::Processing) {
      return;
    }
    let ctx = ContextData::new(CaptureCtx {
      shared: Arc::clone(&shared),
      token: self.token.clone(),
      order_id: data.order_id,
      actions,
      details: None,
    });
    if let Err(err) = shared.capture.run(ctx).await {
      shared.fail(&self.token, &err);
    }
  }

  async fn on_cancel(&self) {
    let Some(shared) = self.live_session() else {
      return;
    };
    let status = shared.state.with(|state| state.status);
    if status != CheckoutStatus::Ready {
      debug!(status = %status, "Cancel ignored, no attempt is waiting for the buyer.");
      return;
    }
    info!("Buyer cancelled the payment.");
    shared.set_status(&self.token, CheckoutStatus::Idle);
  }

  async fn on_error(&self, error: anyhow::Error) {
    if let Some(shared) = self.live_session() {
      shared.fail(&self.token, &CheckoutError::sdk(SdkStage::Widget, error));
    }
  }
}

pub struct CheckoutSession {
  shared: Arc<SessionShared>,
}

impl CheckoutSession {
  pub fn new(sdk: SdkHandle, backend: Arc<dyn OrderBackend>, options: CheckoutOptions) -> Self {
    let mount = Arc::new(ButtonMount::new(options.mount_selector.clone()));
    Self {
      shared: Arc::new(SessionShared {
        sdk,
        backend,
        options,
        mount,
        liveness: Liveness::new(),
        state: ContextData::new(SessionState::default()),
        listener: None,
        loading: loading_pipeline(),
        capture: capture_pipeline(),
      }),
    }
  }

  /// Attaches a listener. Only possible before the session is shared with
  /// the widget, i.e. before the first `update`.
  pub fn with_listener(mut self, listener: Arc<dyn CheckoutListener>) -> Self {
    match Arc::get_mut(&mut self.shared) {
      Some(shared) => shared.listener = Some(listener),
      None => warn!("Checkout listener ignored: session is already in use."),
    }
    self
  }

  /// Applies a change of line items or of the disabled flag.
  ///
  /// Work still running for the previous set becomes inert. With checkout
  /// enabled this re-enters `loading` and renders fresh buttons; failures end
  /// in `error` and are never returned to the caller.
  #[instrument(name = "CheckoutSession::update", skip_all, fields(num_items = items.len(), disabled = disabled))]
  pub async fn update(&self, items: Vec<LineItem>, disabled: bool) -> CheckoutStatus {
    let token = self.shared.liveness.renew();
    if !token.is_live() {
      debug!("Session is unmounted; update ignored.");
      return self.status();
    }
    self.shared.state.update(|state| {
      state.items = items;
      state.disabled = disabled;
      state.order_id = None;
    });

    if disabled {
      self.shared.mount.clear();
      self.shared.enter_idle(&token);
      return self.status();
    }

    let ctx = ContextData::new(LoadCtx {
      shared: Arc::clone(&self.shared),
      token: token.clone(),
      sdk: None,
    });
    if let Err(err) = self.shared.loading.run(ctx).await {
      self.shared.fail(&token, &err);
    }
    self.status()
  }

  /// Tears the session down. Anything still in flight finishes without
  /// touching state or the mount.
  pub fn unmount(&self) {
    info!("Checkout session unmounted.");
    self.shared.liveness.unmount();
  }

  pub fn is_mounted(&self) -> bool {
    self.shared.liveness.is_mounted()
  }

  pub fn status(&self) -> CheckoutStatus {
    self.shared.state.with(|state| state.status)
  }

  pub fn last_error(&self) -> Option<String> {
    self.shared.state.with(|state| state.last_error.clone())
  }

  pub fn last_capture(&self) -> Option<CaptureDetails> {
    self.shared.state.with(|state| state.last_capture.clone())
  }

  pub fn order_id(&self) -> Option<String> {
    self.shared.state.with(|state| state.order_id.clone())
  }

  pub fn items(&self) -> Vec<LineItem> {
    self.shared.state.with(|state| state.items.clone())
  }

  pub fn mount(&self) -> Arc<ButtonMount> {
    Arc::clone(&self.shared.mount)
  }
}

impl Drop for CheckoutSession {
  fn drop(&mut self) {
    self.shared.liveness.unmount();
  }
}
