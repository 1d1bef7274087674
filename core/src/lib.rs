// src/lib.rs

//! Canteen Cart: a session-scoped shopping cart store.
//!
//! The crate owns the active shopper's selected items and everything derived
//! from them:
//!  - One `CartLine` per distinct product; adding an existing product merges
//!    into the existing line instead of duplicating it.
//!  - Fixed-point money (`Cents`): all arithmetic is in integer minor units,
//!    rounded half-up exactly once when a percentage is applied.
//!  - Derived totals (subtotal, tax, delivery fee, total), recomputed on read.
//!  - A persistence boundary (`CartStorage`) mirroring session storage: the
//!    full line collection is written back after every mutation, so a reload
//!    reconstructs identical state.
//!  - An order-placement boundary (`OrderGateway`) with compensating
//!    cancellation, so a failed checkout never leaves an orphaned order.

pub mod checkout;
pub mod error;
pub mod line;
pub mod money;
pub mod storage;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::checkout::{place_order, OrderDraft, OrderGateway, OrderLine, OrderReceipt, OrderStatus};
pub use crate::error::{CartError, CartResult};
pub use crate::line::CartLine;
pub use crate::money::Cents;
pub use crate::storage::{CartStorage, MemoryStorage};
pub use crate::store::{CartStore, Pricing, MAX_LINE_QUANTITY};
