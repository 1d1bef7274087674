// server/src/models/mod.rs

//! Contains data structures representing database entities.

// Declare child modules for each model
pub mod order;
pub mod order_item;
pub mod product;

// Re-export the model structs for convenient access
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
