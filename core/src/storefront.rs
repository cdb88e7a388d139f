// core/src/storefront.rs
use crate::error::CatalogResult;
use crate::model::Product;
use crate::store::ProductStore;
use std::sync::Arc;

/// Public listing: every product, unfiltered and unpaginated.
#[derive(Clone)]
pub struct Storefront {
  store: Arc<dyn ProductStore>,
}

impl Storefront {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  pub async fn listing(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.store.list_all().await?)
  }
}
