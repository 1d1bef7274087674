// src/line.rs

use crate::money::Cents;
use serde::{Deserialize, Serialize};

/// One entry per distinct product in the cart.
///
/// `name`, `unit_price`, `image_ref` and `category` are captured at add time
/// and never re-fetched from the catalog on read. The serialized field names
/// match the session-storage payload the frontend writes
/// (`{productId, name, unitPrice, imageRef, category, quantity}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub product_id: i64,
  pub name: String,
  pub unit_price: Cents,
  pub image_ref: String,
  pub category: String,
  pub quantity: u32,
}

impl CartLine {
  pub fn line_total(&self) -> Cents {
    self.unit_price * i64::from(self.quantity)
  }
}
