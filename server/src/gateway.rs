// server/src/gateway.rs

//! Postgres-backed implementation of the cart's order-placement boundary.
//!
//! The gateway mirrors the two writes the hosted backend performs: insert the
//! order header, then the order lines. The line batch goes through one
//! transaction so it is all-or-nothing as a single gateway call; cancellation
//! across the two calls remains the cart's compensating action.

use async_trait::async_trait;
use canteen_cart::{OrderDraft, OrderGateway, OrderLine};
use sqlx::PgPool;
use tracing::info;

pub struct PgOrderGateway {
  pool: PgPool,
}

impl PgOrderGateway {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderGateway for PgOrderGateway {
  async fn create_order(&self, draft: &OrderDraft) -> Result<i64, anyhow::Error> {
    let order_id: i64 = sqlx::query_scalar(
      "INSERT INTO orders (user_id, total_amount_cents, status, created_at, updated_at) \
       VALUES ($1, $2, $3, NOW(), NOW()) RETURNING id",
    )
    .bind(&draft.user_id)
    .bind(draft.total_amount.minor_units())
    .bind(draft.status.as_str())
    .fetch_one(&self.pool)
    .await?;

    info!(order_id, user_id = %draft.user_id, "Order record created.");
    Ok(order_id)
  }

  async fn add_order_lines(&self, order_id: i64, lines: &[OrderLine]) -> Result<(), anyhow::Error> {
    let mut tx = self.pool.begin().await?;
    for line in lines {
      sqlx::query("INSERT INTO order_items (order_id, product_id, quantity, price_cents) VALUES ($1, $2, $3, $4)")
        .bind(order_id)
        .bind(line.product_id)
        // The store caps quantities at MAX_LINE_QUANTITY (i32::MAX), so the
        // narrowing cannot truncate
        .bind(i32::try_from(line.quantity).unwrap_or(i32::MAX))
        .bind(line.unit_price.minor_units())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!(order_id, line_count = lines.len(), "Order lines created.");
    Ok(())
  }

  async fn cancel_order(&self, order_id: i64) -> Result<(), anyhow::Error> {
    sqlx::query("UPDATE orders SET status = 'cancelled', updated_at = NOW() WHERE id = $1")
      .bind(order_id)
      .execute(&self.pool)
      .await?;

    info!(order_id, "Order cancelled after line-item failure.");
    Ok(())
  }
}
