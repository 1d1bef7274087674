// server/src/web/routes.rs

use actix_web::web;

// Simple health check handler function. In a real deployment this might also
// check DB connectivity.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Cart Routes
      // User authentication is delegated; the `AuthenticatedUser` extractor
      // reads the identity the auth layer attached to the request.
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
          .route("", web::delete().to(crate::web::handlers::cart_handlers::clear_cart_handler))
          .route(
            "/items",
            web::post().to(crate::web::handlers::cart_handlers::add_item_handler),
          )
          .route(
            "/items/{product_id}",
            web::put().to(crate::web::handlers::cart_handlers::update_quantity_handler),
          )
          .route(
            "/items/{product_id}",
            web::delete().to(crate::web::handlers::cart_handlers::remove_item_handler),
          ),
      )
      // Checkout Routes
      .service(web::scope("/checkout").route(
        "",
        web::post().to(crate::web::handlers::checkout_handlers::start_checkout_handler),
      ))
      // Catalog Routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          ),
      )
      // Order History Routes
      .service(web::scope("/orders").route(
        "",
        web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
      )),
  );
}
