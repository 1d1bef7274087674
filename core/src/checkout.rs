// src/checkout.rs

//! Order placement: hands the cart to the order gateway and clears it only on
//! full success.
//!
//! The gateway exposes the same two writes the hosted backend performs
//! (create the order record, then the order lines), issued strictly in
//! sequence. If the second write fails, a compensating cancellation is issued
//! so that either both the order and its lines exist, or neither does.

use crate::error::CartError;
use crate::money::Cents;
use crate::storage::CartStorage;
use crate::store::CartStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// Only the states this component actually produces: every order is created
// `pending` and moves to `cancelled` when compensation fires. Downstream
// fulfilment owns any further lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Cancelled,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Cancelled => "cancelled",
    }
  }
}

/// The order header submitted before any line is written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
  pub user_id: String,
  pub total_amount: Cents,
  pub status: OrderStatus,
}

/// One `{product_id, quantity, unit_price}` record per cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
  pub product_id: i64,
  pub quantity: u32,
  pub unit_price: Cents,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
  pub order_id: i64,
  pub total: Cents,
}

/// The order-placement collaborator.
///
/// Gateway failures are opaque to the cart; they are wrapped in
/// `CartError::Gateway` with the stage that failed.
#[async_trait]
pub trait OrderGateway: Send + Sync {
  async fn create_order(&self, draft: &OrderDraft) -> Result<i64, anyhow::Error>;
  async fn add_order_lines(&self, order_id: i64, lines: &[OrderLine]) -> Result<(), anyhow::Error>;
  async fn cancel_order(&self, order_id: i64) -> Result<(), anyhow::Error>;
}

/// Places the order for the cart's current contents.
///
/// On success the cart is cleared (and the cleared state persisted) before the
/// receipt is returned. On any failure the cart is left intact so the shopper
/// can retry. The two gateway writes are awaited in sequence, never
/// concurrently; a failure of the first prevents the second from firing.
pub async fn place_order<S, G>(cart: &mut CartStore<S>, gateway: &G, user_id: &str) -> Result<OrderReceipt, CartError>
where
  S: CartStorage,
  G: OrderGateway + ?Sized,
{
  if cart.is_empty() {
    return Err(CartError::EmptyCart);
  }

  let total = cart.total();
  let draft = OrderDraft {
    user_id: user_id.to_owned(),
    total_amount: total,
    status: OrderStatus::Pending,
  };

  let order_id = gateway
    .create_order(&draft)
    .await
    .map_err(|source| CartError::Gateway {
      stage: "create_order",
      source,
    })?;

  let lines: Vec<OrderLine> = cart
    .lines()
    .iter()
    .map(|l| OrderLine {
      product_id: l.product_id,
      quantity: l.quantity,
      unit_price: l.unit_price,
    })
    .collect();

  if let Err(source) = gateway.add_order_lines(order_id, &lines).await {
    warn!(order_id, %source, "Order-line creation failed; cancelling order.");
    return match gateway.cancel_order(order_id).await {
      Ok(()) => Err(CartError::Gateway {
        stage: "add_order_lines",
        source,
      }),
      Err(cancel_source) => Err(CartError::CompensationFailed {
        order_id,
        source: cancel_source,
      }),
    };
  }

  cart.clear()?;
  info!(order_id, total = %total, user_id, "Order placed; cart cleared.");
  Ok(OrderReceipt { order_id, total })
}
