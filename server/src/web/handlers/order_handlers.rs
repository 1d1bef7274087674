// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::{Order, OrderItem};
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;

#[derive(Serialize, Debug)]
pub struct OrderWithItems {
  #[serde(flatten)]
  pub order: Order,
  pub items: Vec<OrderItem>,
}

/// Order history for the caller, newest first, each with its line items.
#[instrument(name = "handler::list_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders: Vec<Order> = sqlx::query_as(
    "SELECT id, user_id, status, total_amount_cents, created_at, updated_at \
     FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
  )
  .bind(&auth_user.user_id)
  .fetch_all(&app_state.db_pool)
  .await?;

  let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
  let items: Vec<OrderItem> = sqlx::query_as(
    "SELECT id, order_id, product_id, quantity, price_cents \
     FROM order_items WHERE order_id = ANY($1) ORDER BY id",
  )
  .bind(&order_ids)
  .fetch_all(&app_state.db_pool)
  .await?;

  let response: Vec<OrderWithItems> = orders
    .into_iter()
    .map(|order| {
      let items = items.iter().filter(|i| i.order_id == order.id).cloned().collect();
      OrderWithItems { order, items }
    })
    .collect();

  Ok(HttpResponse::Ok().json(response))
}
