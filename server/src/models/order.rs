// server/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// An order header row. `status` holds the lowercase form of
/// `canteen_cart::OrderStatus` ("pending" or "cancelled").
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub user_id: String,
  pub status: String,
  pub total_amount_cents: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
