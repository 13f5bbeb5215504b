// booknest-core/src/lib.rs

//! Reusable pieces of the BookNest storefront.
//!
//!  - `naming`: the camelCase <-> snake_case bridge applied to every backend
//!    request and response.
//!  - `pipeline` / `core`: a small async step engine with before/on/after
//!    hooks, skip conditions and early stopping.
//!  - `checkout`: order payload construction and a session that drives the
//!    hosted payment widget through load, render, approve and capture.

pub mod checkout;
pub mod core;
pub mod error;
pub mod naming;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::{ContextData, Handler, PipelineControl, PipelineResult, StepDef};
pub use crate::pipeline::Pipeline;

pub use crate::checkout::{
  build_order_payload, ApprovalData, ButtonCallbacks, ButtonMount, CaptureDetails, CheckoutListener, CheckoutOptions,
  CheckoutSession, CheckoutStatus, LineItem, OrderActions, OrderBackend, OrderPayload, PaymentSdk, ProductRef,
  SdkHandle, SdkLoader, SdkOptions,
};
pub use crate::error::{CheckoutError, CheckoutResult, PipelineError, SdkStage};
pub use crate::naming::{camel_to_snake, from_wire, snake_to_camel, to_wire};
