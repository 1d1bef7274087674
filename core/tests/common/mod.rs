// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use canteen_cart::{CartError, CartLine, CartStorage, Cents, OrderDraft, OrderGateway, OrderLine};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tracing::Level;

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init();
}

pub fn line(product_id: i64, name: &str, unit_price: i64, quantity: u32) -> CartLine {
  CartLine {
    product_id,
    name: name.to_string(),
    unit_price: Cents::new(unit_price),
    image_ref: format!("/images/{product_id}.jpg"),
    category: "lunch".to_string(),
    quantity,
  }
}

// --- Failing storage ---

/// Storage whose writes always fail, for exercising persist-failure
/// propagation. Reads behave like an empty store.
pub struct FailingStorage;

impl CartStorage for FailingStorage {
  fn load(&self, _key: &str) -> Result<Option<String>, CartError> {
    Ok(None)
  }

  fn store(&self, key: &str, _value: &str) -> Result<(), CartError> {
    Err(CartError::Storage {
      key: key.to_owned(),
      source: anyhow::anyhow!("simulated storage write failure"),
    })
  }

  fn remove(&self, _key: &str) -> Result<(), CartError> {
    Ok(())
  }
}

// --- Mock order gateway ---

/// Records every call and can be told to fail at each stage.
#[derive(Default)]
pub struct MockGateway {
  pub calls: Mutex<Vec<&'static str>>,
  pub fail_create: AtomicBool,
  pub fail_lines: AtomicBool,
  pub fail_cancel: AtomicBool,
  pub next_order_id: AtomicI64,
  pub seen_draft: Mutex<Option<OrderDraft>>,
  pub seen_lines: Mutex<Vec<OrderLine>>,
  pub cancelled: Mutex<Vec<i64>>,
}

impl MockGateway {
  pub fn new() -> Self {
    let gw = Self::default();
    gw.next_order_id.store(41, Ordering::SeqCst);
    gw
  }

  pub fn call_names(&self) -> Vec<&'static str> {
    self.calls.lock().clone()
  }
}

#[async_trait]
impl OrderGateway for MockGateway {
  async fn create_order(&self, draft: &OrderDraft) -> Result<i64, anyhow::Error> {
    self.calls.lock().push("create_order");
    if self.fail_create.load(Ordering::SeqCst) {
      anyhow::bail!("simulated order-record insert failure");
    }
    *self.seen_draft.lock() = Some(draft.clone());
    Ok(self.next_order_id.fetch_add(1, Ordering::SeqCst) + 1)
  }

  async fn add_order_lines(&self, _order_id: i64, lines: &[OrderLine]) -> Result<(), anyhow::Error> {
    self.calls.lock().push("add_order_lines");
    if self.fail_lines.load(Ordering::SeqCst) {
      anyhow::bail!("simulated order-line insert failure");
    }
    *self.seen_lines.lock() = lines.to_vec();
    Ok(())
  }

  async fn cancel_order(&self, order_id: i64) -> Result<(), anyhow::Error> {
    self.calls.lock().push("cancel_order");
    if self.fail_cancel.load(Ordering::SeqCst) {
      anyhow::bail!("simulated cancellation failure");
    }
    self.cancelled.lock().push(order_id);
    Ok(())
  }
}
