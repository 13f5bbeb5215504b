// booknest-core/src/checkout/mod.rs

//! Checkout integration: order payload construction and the session that
//! drives the hosted payment widget against the backend order endpoints.

pub mod backend;
pub mod line_item;
pub mod liveness;
pub mod mount;
pub mod payload;
mod pipelines;
pub mod sdk;
pub mod session;
pub mod status;

pub use backend::{CaptureDetails, OrderBackend};
pub use line_item::{validate_for_checkout, LineItem, ProductRef};
pub use mount::ButtonMount;
pub use payload::{build_order_payload, format_amount, OrderPayload};
pub use sdk::{ApprovalData, ButtonCallbacks, OrderActions, PaymentSdk, SdkHandle, SdkLoader, SdkOptions};
pub use session::{CheckoutListener, CheckoutOptions, CheckoutSession};
pub use status::CheckoutStatus;
