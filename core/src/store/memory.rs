// core/src/store/memory.rs
use super::{insert, remove, replace, ProductStore};
use crate::error::StoreResult;
use crate::model::{Product, ProductFields, ProductId};
use async_trait::async_trait;
use parking_lot::RwLock;

/// In-process backend. Contents live as long as the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
  products: RwLock<Vec<Product>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds the store with existing records, kept in the given order.
  pub fn with_products(products: Vec<Product>) -> Self {
    Self {
      products: RwLock::new(products),
    }
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  async fn list_all(&self) -> StoreResult<Vec<Product>> {
    Ok(self.products.read().clone())
  }

  async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    Ok(self.products.read().iter().find(|p| p.id == id).cloned())
  }

  async fn create(&self, fields: ProductFields) -> StoreResult<Product> {
    insert(&mut self.products.write(), fields)
  }

  async fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Option<Product>> {
    Ok(replace(&mut self.products.write(), id, fields))
  }

  async fn delete(&self, id: ProductId) -> StoreResult<bool> {
    Ok(remove(&mut self.products.write(), id))
  }
}
