// booknest-core/examples/checkout_session.rs

//! Walks one checkout through a session with an in-memory widget and order
//! backend: render, create the order, approve, capture.

use async_trait::async_trait;
use booknest::checkout::{ApprovalData, ButtonCallbacks, ButtonMount, CaptureDetails, LineItem, OrderPayload, ProductRef};
use booknest::{CheckoutOptions, CheckoutSession, OrderBackend, PaymentSdk, SdkHandle, SdkLoader, SdkOptions};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

#[derive(Default)]
struct ConsoleWidget {
  callbacks: Mutex<Option<Arc<dyn ButtonCallbacks>>>,
}

#[async_trait]
impl PaymentSdk for ConsoleWidget {
  async fn render_buttons(&self, mount: Arc<ButtonMount>, callbacks: Arc<dyn ButtonCallbacks>) -> anyhow::Result<()> {
    info!(selector = mount.selector(), "Rendering payment buttons.");
    mount.attach("[ Pay with PayPal ]");
    *self.callbacks.lock() = Some(callbacks);
    Ok(())
  }
}

struct ConsoleLoader(Arc<ConsoleWidget>);

#[async_trait]
impl SdkLoader for ConsoleLoader {
  async fn load(&self, options: &SdkOptions) -> anyhow::Result<Arc<dyn PaymentSdk>> {
    info!(url = %options.script_url()?, "Loading payment script.");
    Ok(self.0.clone())
  }
}

struct InMemoryOrders;

#[async_trait]
impl OrderBackend for InMemoryOrders {
  async fn create_order(&self, payload: &OrderPayload) -> anyhow::Result<String> {
    info!(wire = %payload.to_wire()?, "Creating order.");
    Ok("DEMO-ORDER-1".to_string())
  }

  async fn capture_order(&self, order_id: &str) -> anyhow::Result<CaptureDetails> {
    Ok(CaptureDetails {
      order_id: order_id.to_string(),
      status: "COMPLETED".to_string(),
      payer_email: None,
    })
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let widget = Arc::new(ConsoleWidget::default());
  let sdk = SdkHandle::new(
    SdkOptions::new(Some("demo-client".to_string()), "USD")?,
    Arc::new(ConsoleLoader(widget.clone())),
  );
  let session = CheckoutSession::new(sdk, Arc::new(InMemoryOrders), CheckoutOptions::default());

  let items = vec![
    LineItem::new(ProductRef::new("b1", "The Rust Book", Decimal::new(999, 2), "USD"), 2),
    LineItem::new(ProductRef::new("b2", "Zero to Production", Decimal::new(450, 2), "USD"), 1),
  ];
  let status = session.update(items, false).await;
  info!(%status, mount = ?session.mount().contents(), "Session updated.");

  let callbacks = widget
    .callbacks
    .lock()
    .clone()
    .ok_or_else(|| anyhow::anyhow!("buttons were not rendered"))?;
  let order_id = callbacks.create_order().await?;
  callbacks
    .on_approve(
      ApprovalData {
        order_id,
        payer_id: Some("DEMO-PAYER".to_string()),
      },
      None,
    )
    .await;

  info!(status = %session.status(), capture = ?session.last_capture(), "Checkout finished.");
  Ok(())
}
