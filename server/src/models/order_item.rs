// server/src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: i64,
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i32,
  pub price_cents: i64,
  // created_at/updated_at usually not needed for immutable line items
}
