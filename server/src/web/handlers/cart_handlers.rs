// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;
use canteen_cart::{CartLine, CartStorage, CartStore, Cents};

// Ceiling for a single item's price: $1,000,000. Anything above it is a
// malformed or hostile payload, not a menu item.
const MAX_UNIT_PRICE_CENTS: i64 = 100_000_000;

// --- Request DTOs ---

/// The item-listing and item-detail pages send the full product snapshot so
/// the line is captured at add time (name/price/image are not re-fetched).
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequestPayload {
  pub product_id: i64,
  pub name: String,
  pub unit_price_cents: i64,
  pub image_ref: Option<String>,
  pub category: Option<String>,
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityRequestPayload {
  pub quantity: i32,
}

// --- Response DTO ---

/// The cart plus its derived totals, recomputed for every response.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
  pub items: Vec<CartLine>,
  pub subtotal_cents: i64,
  pub tax_cents: i64,
  pub delivery_fee_cents: i64,
  pub total_cents: i64,
  pub total_display: String,
}

impl CartView {
  pub fn from_store<S: CartStorage>(store: &CartStore<S>) -> Self {
    Self {
      items: store.lines().to_vec(),
      subtotal_cents: store.subtotal().minor_units(),
      tax_cents: store.tax().minor_units(),
      delivery_fee_cents: store.delivery_fee().minor_units(),
      total_cents: store.total().minor_units(),
      total_display: store.total().to_string(),
    }
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart_for(&auth_user.user_id);
  Ok(HttpResponse::Ok().json(CartView::from_store(&cart)))
}

#[instrument(
    name = "handler::add_cart_item",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddItemRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  if payload.unit_price_cents > MAX_UNIT_PRICE_CENTS {
    return Err(AppError::Validation(format!(
      "Unit price {} exceeds the supported maximum.",
      payload.unit_price_cents
    )));
  }
  let mut cart = app_state.cart_for(&auth_user.user_id);

  cart.add_item(CartLine {
    product_id: payload.product_id,
    name: payload.name,
    unit_price: Cents::new(payload.unit_price_cents),
    image_ref: payload.image_ref.unwrap_or_else(|| "/placeholder.svg".to_string()),
    category: payload.category.unwrap_or_default(),
    quantity: payload.quantity.max(0) as u32,
  })?;

  info!(user_id = %auth_user.user_id, "Item added to cart.");
  Ok(HttpResponse::Ok().json(CartView::from_store(&cart)))
}

#[instrument(
    name = "handler::update_cart_quantity",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, quantity = %req_payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<UpdateQuantityRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let mut cart = app_state.cart_for(&auth_user.user_id);

  // Below-minimum values are coerced to 1 by the store; a no-op for an
  // unknown product just echoes the unchanged cart.
  cart.update_quantity(product_id, req_payload.quantity.max(0) as u32)?;
  Ok(HttpResponse::Ok().json(CartView::from_store(&cart)))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn remove_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let mut cart = app_state.cart_for(&auth_user.user_id);

  cart.remove_item(product_id)?;
  Ok(HttpResponse::Ok().json(CartView::from_store(&cart)))
}

#[instrument(name = "handler::clear_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let mut cart = app_state.cart_for(&auth_user.user_id);

  cart.clear()?;
  info!(user_id = %auth_user.user_id, "Cart cleared.");
  Ok(HttpResponse::Ok().json(CartView::from_store(&cart)))
}
