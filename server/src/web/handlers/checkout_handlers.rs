// server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::gateway::PgOrderGateway;
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;
use canteen_cart::{place_order, CartError};

/// Places an order for the caller's current cart contents.
///
/// On success the cart has already been cleared by the store; on failure the
/// cart is left intact so the shopper can retry from the cart page.
#[instrument(name = "handler::start_checkout", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn start_checkout_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let mut cart = app_state.cart_for(&auth_user.user_id);
  let gateway = PgOrderGateway::new(app_state.db_pool.clone());

  match place_order(&mut cart, &gateway, &auth_user.user_id).await {
    Ok(receipt) => {
      info!(order_id = receipt.order_id, total = %receipt.total, "Checkout completed.");
      Ok(HttpResponse::Ok().json(json!({
          "message": "Order placed successfully.",
          "orderId": receipt.order_id,
          "totalCents": receipt.total.minor_units(),
          "totalDisplay": receipt.total.to_string()
      })))
    }
    Err(CartError::EmptyCart) => Err(AppError::Validation("Your cart is empty.".to_string())),
    Err(err) => {
      warn!(user_id = %auth_user.user_id, error = %err, "Checkout failed; cart preserved for retry.");
      Err(AppError::from(err))
    }
  }
}
