// tests/cart_store_tests.rs
mod common; // Reference the common module

use common::*;
use canteen_cart::{CartError, CartStorage, CartStore, Cents, MemoryStorage, Pricing, MAX_LINE_QUANTITY};
use std::sync::Arc;

#[test]
fn test_add_same_product_merges_into_one_line() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(7, "Veg Thali", 599, 1)).unwrap();
  cart.add_item(line(7, "Veg Thali", 599, 2)).unwrap();
  cart.add_item(line(7, "Veg Thali", 599, 1)).unwrap();

  assert_eq!(cart.lines().len(), 1);
  assert_eq!(cart.lines()[0].quantity, 4);
}

#[test]
fn test_quantity_merge_saturates_at_the_cap_instead_of_wrapping() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(7, "Veg Thali", 599, u32::MAX)).unwrap();
  assert_eq!(cart.lines()[0].quantity, MAX_LINE_QUANTITY);

  // A further add must not wrap the quantity past zero.
  cart.add_item(line(7, "Veg Thali", 599, u32::MAX)).unwrap();
  cart.add_item(line(7, "Veg Thali", 599, 1)).unwrap();

  assert_eq!(cart.lines().len(), 1);
  assert_eq!(cart.lines()[0].quantity, MAX_LINE_QUANTITY);
  assert!(cart.lines()[0].quantity >= 1);
  // And the derived totals stay non-negative.
  assert!(!cart.subtotal().is_negative());
  assert!(!cart.total().is_negative());
}

#[test]
fn test_insertion_order_is_preserved() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(3, "Masala Dosa", 450, 1)).unwrap();
  cart.add_item(line(1, "Filter Coffee", 120, 2)).unwrap();
  cart.add_item(line(3, "Masala Dosa", 450, 1)).unwrap(); // merge, not reorder
  cart.add_item(line(9, "Gulab Jamun", 250, 1)).unwrap();

  let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id).collect();
  assert_eq!(ids, vec![3, 1, 9]);
}

#[test]
fn test_add_with_zero_quantity_is_coerced_to_one() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(5, "Lemonade", 150, 0)).unwrap();
  assert_eq!(cart.lines()[0].quantity, 1);
}

#[test]
fn test_add_with_negative_unit_price_is_rejected() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  let err = cart.add_item(line(5, "Bad Entry", -100, 1)).unwrap_err();
  match err {
    CartError::NegativeUnitPrice { product_id, price_cents } => {
      assert_eq!(product_id, 5);
      assert_eq!(price_cents, -100);
    }
    other => panic!("Expected NegativeUnitPrice, got {other:?}"),
  }
  assert!(cart.is_empty());

  // Zero is accepted as-is.
  cart.add_item(line(6, "Free Sample", 0, 1)).unwrap();
  assert_eq!(cart.lines().len(), 1);
}

#[test]
fn test_update_quantity_below_one_is_coerced_to_one() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(2, "Idli", 300, 1)).unwrap();
  cart.update_quantity(2, 0).unwrap();

  assert_eq!(cart.lines()[0].quantity, 1);
  assert_eq!(cart.lines().len(), 1); // never an implicit removal
}

#[test]
fn test_update_and_remove_are_noops_for_unknown_product() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(2, "Idli", 300, 1)).unwrap();
  cart.update_quantity(999, 5).unwrap();
  cart.remove_item(999).unwrap();

  assert_eq!(cart.lines().len(), 1);
  assert_eq!(cart.lines()[0].quantity, 1);
}

#[test]
fn test_subtotal_moves_by_unit_price_times_quantity_delta() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(1, "Coffee", 120, 2)).unwrap();
  cart.add_item(line(2, "Samosa", 180, 1)).unwrap();
  let before = cart.subtotal();

  cart.update_quantity(1, 5).unwrap(); // delta of +3 at 120 each
  assert_eq!(cart.subtotal(), before + Cents::new(3 * 120));
}

#[test]
fn test_totals_follow_the_posted_formula() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  // Scenario from the storefront: 5.99 x 1, then the same product x 2.
  cart.add_item(line(7, "Veg Thali", 599, 1)).unwrap();
  cart.add_item(line(7, "Veg Thali", 599, 2)).unwrap();

  assert_eq!(cart.lines().len(), 1);
  assert_eq!(cart.lines()[0].quantity, 3);
  assert_eq!(cart.subtotal(), Cents::new(1797));
  assert_eq!(cart.tax(), Cents::new(180)); // 179.7 rounds half-up
  assert_eq!(cart.delivery_fee(), Cents::new(299));
  assert_eq!(cart.total(), Cents::new(2276));
  assert_eq!(cart.total().to_string(), "22.76");
}

#[test]
fn test_empty_cart_has_no_delivery_fee_and_zero_total() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let cart = CartStore::hydrate(&storage, "cart:u1");

  assert_eq!(cart.delivery_fee(), Cents::ZERO);
  assert_eq!(cart.total(), Cents::ZERO);
}

#[test]
fn test_clear_empties_cart_and_persisted_state() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let mut cart = CartStore::hydrate(&storage, "cart:u1");

  cart.add_item(line(1, "Coffee", 120, 2)).unwrap();
  cart.clear().unwrap();

  assert_eq!(cart.subtotal(), Cents::ZERO);
  let raw = storage.load("cart:u1").unwrap().expect("cleared cart is still persisted");
  assert_eq!(raw, "[]");
}

#[test]
fn test_round_trip_through_storage_yields_identical_lines() {
  setup_tracing();
  let storage = Arc::new(MemoryStorage::new());
  let mut cart = CartStore::hydrate(storage.clone(), "cart:u1");

  cart.add_item(line(3, "Masala Dosa", 450, 2)).unwrap();
  cart.add_item(line(1, "Filter Coffee", 120, 1)).unwrap();
  let expected = cart.lines().to_vec();

  // A second store hydrated from scratch sees the same ordered collection.
  let rehydrated = CartStore::hydrate(storage, "cart:u1");
  assert_eq!(rehydrated.lines(), expected.as_slice());
}

#[test]
fn test_mutations_are_visible_to_immediately_hydrated_reader() {
  setup_tracing();
  let storage = Arc::new(MemoryStorage::new());
  let mut cart = CartStore::hydrate(storage.clone(), "cart:u1");

  cart.add_item(line(1, "Coffee", 120, 1)).unwrap();
  let reader = CartStore::hydrate(storage.clone(), "cart:u1");
  assert_eq!(reader.lines().len(), 1);

  cart.remove_item(1).unwrap();
  let reader = CartStore::hydrate(storage, "cart:u1");
  assert!(reader.is_empty());
}

#[test]
fn test_malformed_persisted_payload_hydrates_as_empty() {
  setup_tracing();
  let storage = MemoryStorage::new();
  storage.store("cart:u1", "{not json at all").unwrap();

  let cart = CartStore::hydrate(&storage, "cart:u1");
  assert!(cart.is_empty());
  assert_eq!(cart.total(), Cents::ZERO);
}

#[test]
fn test_storage_write_failure_surfaces_as_storage_error() {
  setup_tracing();
  let mut cart = CartStore::hydrate(FailingStorage, "cart:u1");

  let err = cart.add_item(line(1, "Filter Coffee", 120, 1)).unwrap_err();
  match err {
    CartError::Storage { key, .. } => assert_eq!(key, "cart:u1"),
    other => panic!("Expected Storage error, got {other:?}"),
  }

  // The in-memory mutation stands; only the write-through failed, and the
  // line collection is still well-formed.
  assert_eq!(cart.lines().len(), 1);
  assert_eq!(cart.lines()[0].quantity, 1);
  assert_eq!(cart.subtotal(), Cents::new(120));
}

#[test]
fn test_custom_pricing_is_applied() {
  setup_tracing();
  let storage = MemoryStorage::new();
  let pricing = Pricing {
    tax_basis_points: 500, // 5%
    delivery_fee: Cents::new(150),
  };
  let mut cart = CartStore::hydrate_with_pricing(&storage, "cart:u1", pricing);

  cart.add_item(line(1, "Coffee", 1000, 1)).unwrap();
  assert_eq!(cart.tax(), Cents::new(50));
  assert_eq!(cart.total(), Cents::new(1200));
}
