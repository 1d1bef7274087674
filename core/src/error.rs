// src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Negative unit price ({price_cents} cents) for product {product_id}")]
  NegativeUnitPrice { product_id: i64, price_cents: i64 },

  #[error("Cart storage failed for key '{key}'. Source: {source}")]
  Storage {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Failed to serialize cart lines: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("Checkout requires a non-empty cart")]
  EmptyCart,

  #[error("Order gateway failed during '{stage}'. Source: {source}")]
  Gateway {
    stage: &'static str,
    #[source]
    source: AnyhowError,
  },

  // Line-item creation failed and the compensating cancellation failed too,
  // so order `order_id` is left dangling on the gateway side.
  #[error("Order {order_id} could not be cancelled after line-item failure. Source: {source}")]
  CompensationFailed {
    order_id: i64,
    #[source]
    source: AnyhowError,
  },
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
