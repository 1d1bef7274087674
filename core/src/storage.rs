// src/storage.rs

//! The persistence boundary: a namespaced string key-value store, shaped like
//! the browser session storage the cart originally lived in.

use crate::error::CartError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Raw key-value storage for the serialized line collection.
///
/// The store writes the whole collection under a single key after every
/// mutation; implementations only move opaque strings. There is no versioning
/// or migration: a missing or unreadable value hydrates as an empty cart.
pub trait CartStorage: Send + Sync {
  fn load(&self, key: &str) -> Result<Option<String>, CartError>;
  fn store(&self, key: &str, value: &str) -> Result<(), CartError>;
  fn remove(&self, key: &str) -> Result<(), CartError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
  fn load(&self, key: &str) -> Result<Option<String>, CartError> {
    (**self).load(key)
  }

  fn store(&self, key: &str, value: &str) -> Result<(), CartError> {
    (**self).store(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), CartError> {
    (**self).remove(key)
  }
}

impl<S: CartStorage + ?Sized> CartStorage for Arc<S> {
  fn load(&self, key: &str) -> Result<Option<String>, CartError> {
    (**self).load(key)
  }

  fn store(&self, key: &str, value: &str) -> Result<(), CartError> {
    (**self).store(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), CartError> {
    (**self).remove(key)
  }
}

/// In-memory storage, one entry per session key.
///
/// Used directly by the server (carts live for the process, like a browser
/// session) and by tests. Writers are serialized by the lock; there is no
/// cross-process coordination, and concurrent writers to the same key are
/// last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl CartStorage for MemoryStorage {
  fn load(&self, key: &str) -> Result<Option<String>, CartError> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn store(&self, key: &str, value: &str) -> Result<(), CartError> {
    self.entries.write().insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), CartError> {
    self.entries.write().remove(key);
    Ok(())
  }
}
