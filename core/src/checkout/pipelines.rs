// booknest-core/src/checkout/pipelines.rs

//! The two step pipelines behind a checkout session.
//!
//! Loading: `validate_line_items -> prepare_mount -> load_payment_sdk ->
//! render_payment_buttons -> mark_ready`.
//!
//! Capture: `capture_with_widget -> capture_with_backend -> confirm_capture`,
//! where exactly one of the two capture steps runs.
//!
//! Every step that follows an await checks the cycle's liveness token first
//! and stops the run when the session moved on or was unmounted.

use crate::checkout::backend::CaptureDetails;
use crate::checkout::line_item::validate_for_checkout;
use crate::checkout::liveness::LivenessToken;
use crate::checkout::sdk::{OrderActions, PaymentSdk};
use crate::checkout::session::{SessionCallbacks, SessionShared};
use crate::checkout::status::CheckoutStatus;
use crate::core::{ContextData, PipelineControl, StepDef};
use crate::error::{CheckoutError, SdkStage};
use crate::pipeline::Pipeline;
use std::sync::Arc;
use tracing::debug;

pub(crate) struct LoadCtx {
  pub(crate) shared: Arc<SessionShared>,
  pub(crate) token: LivenessToken,
  pub(crate) sdk: Option<Arc<dyn PaymentSdk>>,
}

pub(crate) struct CaptureCtx {
  pub(crate) shared: Arc<SessionShared>,
  pub(crate) token: LivenessToken,
  pub(crate) order_id: String,
  pub(crate) actions: Option<Arc<dyn OrderActions>>,
  pub(crate) details: Option<CaptureDetails>,
}

fn stop_if_stale(token: &LivenessToken, step: &'static str) -> PipelineControl {
  if token.is_live() {
    PipelineControl::Continue
  } else {
    debug!(step, generation = token.generation(), "Checkout cycle is stale, stopping.");
    PipelineControl::Stop
  }
}

pub(crate) fn loading_pipeline() -> Pipeline<LoadCtx, CheckoutError> {
  let mut p = Pipeline::<LoadCtx, CheckoutError>::new(vec![
    StepDef::new("validate_line_items"),
    StepDef::new("prepare_mount"),
    StepDef::new("load_payment_sdk"),
    StepDef::new("render_payment_buttons"),
    StepDef::new("mark_ready"),
  ]);

  p.before_root("validate_line_items", |ctx: ContextData<LoadCtx>| async move {
    let (shared, token) = ctx.with(|c| (Arc::clone(&c.shared), c.token.clone()));
    shared.set_status(&token, CheckoutStatus::Loading);
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p.on_root("validate_line_items", |ctx: ContextData<LoadCtx>| async move {
    let shared = ctx.with(|c| Arc::clone(&c.shared));
    shared.state.with(|state| validate_for_checkout(&state.items))?;
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p.on_root("prepare_mount", |ctx: ContextData<LoadCtx>| async move {
    let (shared, token) = ctx.with(|c| (Arc::clone(&c.shared), c.token.clone()));
    let control = stop_if_stale(&token, "prepare_mount");
    if control == PipelineControl::Continue {
      shared.mount.clear();
    }
    Ok::<_, CheckoutError>(control)
  });

  p.on_root("load_payment_sdk", |ctx: ContextData<LoadCtx>| async move {
    let shared = ctx.with(|c| Arc::clone(&c.shared));
    let sdk = shared.sdk.get().await?;
    ctx.update(|c| c.sdk = Some(sdk));
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p.after_root("load_payment_sdk", |ctx: ContextData<LoadCtx>| async move {
    Ok::<_, CheckoutError>(ctx.with(|c| stop_if_stale(&c.token, "load_payment_sdk")))
  });

  p.on_root("render_payment_buttons", |ctx: ContextData<LoadCtx>| async move {
    let (shared, token, sdk) = ctx.with(|c| (Arc::clone(&c.shared), c.token.clone(), c.sdk.clone()));
    let sdk = sdk.ok_or_else(|| CheckoutError::sdk(SdkStage::Render, anyhow::anyhow!("payment SDK was not loaded")))?;
    let callbacks = Arc::new(SessionCallbacks::new(&shared, token));
    sdk
      .render_buttons(Arc::clone(&shared.mount), callbacks)
      .await
      .map_err(|e| CheckoutError::sdk(SdkStage::Render, e))?;
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p.after_root("render_payment_buttons", |ctx: ContextData<LoadCtx>| async move {
    Ok::<_, CheckoutError>(ctx.with(|c| stop_if_stale(&c.token, "render_payment_buttons")))
  });

  p.on_root("mark_ready", |ctx: ContextData<LoadCtx>| async move {
    let (shared, token) = ctx.with(|c| (Arc::clone(&c.shared), c.token.clone()));
    shared.set_status(&token, CheckoutStatus::Ready);
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p
}

pub(crate) fn capture_pipeline() -> Pipeline<CaptureCtx, CheckoutError> {
  let mut p = Pipeline::<CaptureCtx, CheckoutError>::new(vec![
    StepDef::new("capture_with_widget").skip_if(|ctx: &ContextData<CaptureCtx>| ctx.with(|c| c.actions.is_none())),
    StepDef::new("capture_with_backend").skip_if(|ctx: &ContextData<CaptureCtx>| ctx.with(|c| c.details.is_some())),
    StepDef::new("confirm_capture"),
  ]);

  p.on_root("capture_with_widget", |ctx: ContextData<CaptureCtx>| async move {
    let actions = ctx.with(|c| c.actions.clone());
    if let Some(actions) = actions {
      let details = actions
        .capture()
        .await
        .map_err(|e| CheckoutError::sdk(SdkStage::Capture, e))?;
      ctx.update(|c| c.details = Some(details));
    }
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p.on_root("capture_with_backend", |ctx: ContextData<CaptureCtx>| async move {
    let (shared, order_id) = ctx.with(|c| (Arc::clone(&c.shared), c.order_id.clone()));
    debug!(order_id = %order_id, "Widget cannot capture, using the backend capture endpoint.");
    let details = shared
      .backend
      .capture_order(&order_id)
      .await
      .map_err(CheckoutError::backend)?;
    ctx.update(|c| c.details = Some(details));
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p.before_root("confirm_capture", |ctx: ContextData<CaptureCtx>| async move {
    Ok::<_, CheckoutError>(ctx.with(|c| stop_if_stale(&c.token, "confirm_capture")))
  });

  p.on_root("confirm_capture", |ctx: ContextData<CaptureCtx>| async move {
    let (shared, token, details) = ctx.with(|c| (Arc::clone(&c.shared), c.token.clone(), c.details.clone()));
    let details = details.ok_or_else(|| CheckoutError::Handler {
      source: anyhow::anyhow!("capture finished without capture details"),
    })?;
    shared.complete(&token, details);
    Ok::<_, CheckoutError>(PipelineControl::Continue)
  });

  p
}
