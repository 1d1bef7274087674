// server/src/state.rs
use crate::config::AppConfig;
use canteen_cart::{CartStore, MemoryStorage};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub carts: Arc<MemoryStorage>, // Per-session cart storage, one key per shopper
  pub config: Arc<AppConfig>,    // Share loaded config
}

impl AppState {
  /// Hydrates the caller's cart from session storage. Each request works on a
  /// freshly hydrated store; mutations persist before the response, so the
  /// next request observes them.
  pub fn cart_for(&self, user_id: &str) -> CartStore<Arc<MemoryStorage>> {
    CartStore::hydrate_with_pricing(self.carts.clone(), format!("cart:{user_id}"), self.config.pricing())
  }
}
