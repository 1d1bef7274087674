// server/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A menu item. Prices are minor units; the cart captures them at add time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price_cents: i64,
  pub image_url: Option<String>,
  pub category: String, // e.g. "breakfast", "lunch", "beverages"
  pub is_available: bool,
  pub created_at: DateTime<Utc>,
}
