// core/src/store/mod.rs

//! Persistence of the product collection.
//!
//! [`ProductStore`] is the only way controllers reach product data. Every
//! backend honours the same contract:
//!  - `list_all` returns records in stored insertion order; a backend with no
//!    data yet yields an empty list, never an error.
//!  - `create` assigns `max(existing ids, default 0) + 1`.
//!  - `update` replaces every field except the id and reports `None` when the
//!    id is absent, leaving the collection unchanged.
//!  - `delete` reports whether a record was removed.

use crate::error::{StoreError, StoreResult};
use crate::model::{Product, ProductFields, ProductId};
use async_trait::async_trait;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
  async fn list_all(&self) -> StoreResult<Vec<Product>>;

  async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

  async fn create(&self, fields: ProductFields) -> StoreResult<Product>;

  async fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Option<Product>>;

  async fn delete(&self, id: ProductId) -> StoreResult<bool>;
}

/// Next id for a collection: one past the largest id, or 1 when empty.
/// `None` once the largest id is `ProductId::MAX`.
pub fn next_id(products: &[Product]) -> Option<ProductId> {
  products.iter().map(|p| p.id).max().unwrap_or(0).checked_add(1)
}

// Shared in-place mutations for the collection-backed stores.

pub(crate) fn insert(products: &mut Vec<Product>, fields: ProductFields) -> StoreResult<Product> {
  let id = next_id(products).ok_or(StoreError::IdSpaceExhausted { max_id: ProductId::MAX })?;
  let product = fields.into_product(id);
  products.push(product.clone());
  Ok(product)
}

pub(crate) fn replace(products: &mut [Product], id: ProductId, fields: ProductFields) -> Option<Product> {
  let product = products.iter_mut().find(|p| p.id == id)?;
  product.apply(fields);
  Some(product.clone())
}

pub(crate) fn remove(products: &mut Vec<Product>, id: ProductId) -> bool {
  match products.iter().position(|p| p.id == id) {
    Some(index) => {
      products.remove(index);
      true
    }
    None => false,
  }
}
