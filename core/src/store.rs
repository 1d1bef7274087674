// src/store.rs

use crate::error::CartError;
use crate::line::CartLine;
use crate::money::Cents;
use crate::storage::CartStorage;
use tracing::{debug, warn};

/// Upper bound for a line's quantity. Adds and updates clamp into
/// `1..=MAX_LINE_QUANTITY` and merges saturate at it, so a quantity can never
/// wrap past zero and always survives the narrowing to the order-line schema.
pub const MAX_LINE_QUANTITY: u32 = i32::MAX as u32;

/// Pricing knobs for the derived totals.
///
/// Defaults match the storefront: 10% tax, $2.99 delivery on a non-empty cart.
#[derive(Debug, Clone, Copy)]
pub struct Pricing {
  pub tax_basis_points: u32,
  pub delivery_fee: Cents,
}

impl Default for Pricing {
  fn default() -> Self {
    Self {
      tax_basis_points: 1_000,
      delivery_fee: Cents::new(299),
    }
  }
}

/// The cart store: owns the ordered line collection and the derived totals.
///
/// Every mutation synchronously writes the full collection back to storage
/// before returning, so a store hydrated from the same key immediately
/// afterwards observes the new state. Totals are pure derived values,
/// recomputed on every read.
pub struct CartStore<S: CartStorage> {
  key: String,
  lines: Vec<CartLine>,
  storage: S,
  pricing: Pricing,
}

impl<S: CartStorage> CartStore<S> {
  /// Hydrates a store from `storage` under `key` with default pricing.
  pub fn hydrate(storage: S, key: impl Into<String>) -> Self {
    Self::hydrate_with_pricing(storage, key, Pricing::default())
  }

  /// Hydrates a store from `storage` under `key`.
  ///
  /// A missing, unreadable or malformed value is treated as an empty cart;
  /// it is logged but never surfaced as an error.
  pub fn hydrate_with_pricing(storage: S, key: impl Into<String>, pricing: Pricing) -> Self {
    let key = key.into();
    let lines = match storage.load(&key) {
      Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => lines,
        Err(error) => {
          warn!(key = %key, %error, "Malformed persisted cart; starting empty.");
          Vec::new()
        }
      },
      Ok(None) => Vec::new(),
      Err(error) => {
        warn!(key = %key, %error, "Cart storage unreadable; starting empty.");
        Vec::new()
      }
    };

    Self {
      key,
      lines,
      storage,
      pricing,
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  /// Lines in insertion order. The order is preserved for display only.
  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Adds an item: merges into the existing line for the same product id, or
  /// appends a new line. A quantity below 1 is coerced to 1 and one above
  /// `MAX_LINE_QUANTITY` is capped; a negative unit price is rejected (zero
  /// is accepted).
  pub fn add_item(&mut self, item: CartLine) -> Result<(), CartError> {
    if item.unit_price.is_negative() {
      return Err(CartError::NegativeUnitPrice {
        product_id: item.product_id,
        price_cents: item.unit_price.minor_units(),
      });
    }

    let quantity = item.quantity.clamp(1, MAX_LINE_QUANTITY);
    match self.lines.iter().position(|l| l.product_id == item.product_id) {
      Some(idx) => {
        let existing = &mut self.lines[idx];
        existing.quantity = existing.quantity.saturating_add(quantity).min(MAX_LINE_QUANTITY);
        debug!(
          product_id = item.product_id,
          quantity = existing.quantity,
          "Merged item into existing cart line."
        );
      }
      None => {
        debug!(product_id = item.product_id, quantity, "Appended new cart line.");
        self.lines.push(CartLine { quantity, ..item });
      }
    }
    self.persist()
  }

  /// Sets a line's quantity to `max(1, quantity)`, capped at
  /// `MAX_LINE_QUANTITY`. A quantity below 1 never removes the line; removal
  /// is a separate explicit operation. No-op when the product is not in the
  /// cart.
  pub fn update_quantity(&mut self, product_id: i64, quantity: u32) -> Result<(), CartError> {
    match self.lines.iter().position(|l| l.product_id == product_id) {
      Some(idx) => {
        self.lines[idx].quantity = quantity.clamp(1, MAX_LINE_QUANTITY);
        self.persist()
      }
      None => {
        debug!(product_id, "Quantity update for product not in cart; ignoring.");
        Ok(())
      }
    }
  }

  /// Removes a line. No-op when the product is not in the cart.
  pub fn remove_item(&mut self, product_id: i64) -> Result<(), CartError> {
    let before = self.lines.len();
    self.lines.retain(|l| l.product_id != product_id);
    if self.lines.len() == before {
      debug!(product_id, "Removal of product not in cart; ignoring.");
      return Ok(());
    }
    self.persist()
  }

  /// Empties the cart (also called after a successful checkout).
  pub fn clear(&mut self) -> Result<(), CartError> {
    self.lines.clear();
    self.persist()
  }

  pub fn subtotal(&self) -> Cents {
    self.lines.iter().map(CartLine::line_total).sum()
  }

  pub fn tax(&self) -> Cents {
    self.subtotal().percent_bp(self.pricing.tax_basis_points)
  }

  pub fn delivery_fee(&self) -> Cents {
    if self.lines.is_empty() {
      Cents::ZERO
    } else {
      self.pricing.delivery_fee
    }
  }

  pub fn total(&self) -> Cents {
    self.subtotal() + self.tax() + self.delivery_fee()
  }

  fn persist(&self) -> Result<(), CartError> {
    let raw = serde_json::to_string(&self.lines)?;
    self.storage.store(&self.key, &raw)
  }
}
