// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::Product;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub category: Option<String>,
  pub search: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let mut builder = sqlx::QueryBuilder::new(
    "SELECT id, name, description, price_cents, image_url, category, is_available, created_at \
     FROM products WHERE is_available = TRUE",
  );

  if let Some(category) = &query.category {
    builder.push(" AND category = ");
    builder.push_bind(category);
  }
  if let Some(search) = &query.search {
    let pattern = format!("%{search}%");
    builder.push(" AND (name ILIKE ");
    builder.push_bind(pattern.clone());
    builder.push(" OR description ILIKE ");
    builder.push_bind(pattern);
    builder.push(")");
  }
  builder.push(" ORDER BY id");

  let products: Vec<Product> = builder.build_query_as().fetch_all(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product: Option<Product> = sqlx::query_as(
    "SELECT id, name, description, price_cents, image_url, category, is_available, created_at \
     FROM products WHERE id = $1",
  )
  .bind(product_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  match product {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Err(AppError::NotFound(format!("Product with ID {} not found.", product_id))),
  }
}
