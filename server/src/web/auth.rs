// server/src/web/auth.rs

//! Authentication stays delegated to the upstream identity provider; the
//! backend only needs the already-authenticated shopper's id.

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;

/// Extracts the authenticated shopper from the `X-User-ID` header set by the
/// auth layer in front of this service. No credential logic lives here.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub user_id: String,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError; // Use the app's error type
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(user_id_header) = req.headers().get("X-User-ID") {
      if let Ok(user_id_str) = user_id_header.to_str() {
        let user_id = user_id_str.trim();
        if !user_id.is_empty() {
          return futures_util::future::ready(Ok(AuthenticatedUser {
            user_id: user_id.to_owned(),
          }));
        }
      }
    }

    warn!("AuthenticatedUser extractor: Missing or invalid X-User-ID header.");
    futures_util::future::ready(Err(AppError::Auth(
      "User authentication required. Missing or invalid X-User-ID header.".to_string(),
    )))
  }
}
