// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use canteen_cart::{Cents, Pricing};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Derived-total knobs; defaults match the storefront (10% tax, $2.99 fee)
  pub tax_basis_points: u32,
  pub delivery_fee_cents: i64,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let tax_basis_points = get_env("TAX_BASIS_POINTS")
      .unwrap_or_else(|_| "1000".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid TAX_BASIS_POINTS: {}", e)))?;
    let delivery_fee_cents = get_env("DELIVERY_FEE_CENTS")
      .unwrap_or_else(|_| "299".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid DELIVERY_FEE_CENTS: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      tax_basis_points,
      delivery_fee_cents,
    })
  }

  pub fn pricing(&self) -> Pricing {
    Pricing {
      tax_basis_points: self.tax_basis_points,
      delivery_fee: Cents::new(self.delivery_fee_cents),
    }
  }
}
