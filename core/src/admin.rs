// core/src/admin.rs

//! Admin panel operations: list, create, edit and delete products.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Product, ProductId};
use crate::store::ProductStore;
use crate::validate::ProductForm;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orchestrates validation and persistence for the admin panel.
///
/// Each write validates the submission first; a rejected submission never
/// reaches the store.
#[derive(Clone)]
pub struct AdminService {
  store: Arc<dyn ProductStore>,
}

impl AdminService {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  pub async fn list(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.store.list_all().await?)
  }

  #[instrument(name = "admin::create", skip(self, form))]
  pub async fn create(&self, form: &ProductForm) -> CatalogResult<Product> {
    let fields = form.validate().map_err(|errors| {
      warn!(%errors, "Rejected new product submission.");
      CatalogError::Validation(errors)
    })?;
    let product = self.store.create(fields).await?;
    info!(id = product.id, name_en = %product.name_en, "Product created.");
    Ok(product)
  }

  /// Loads a product for the edit form.
  pub async fn load(&self, id: ProductId) -> CatalogResult<Product> {
    self.store.get_by_id(id).await?.ok_or_else(|| {
      warn!(id, "Product requested for edit does not exist.");
      CatalogError::NotFound(id)
    })
  }

  #[instrument(name = "admin::update", skip(self, form))]
  pub async fn update(&self, id: ProductId, form: &ProductForm) -> CatalogResult<Product> {
    let fields = form.validate().map_err(|errors| {
      warn!(%errors, "Rejected product edit submission.");
      CatalogError::Validation(errors)
    })?;
    match self.store.update(id, fields).await? {
      Some(product) => {
        info!("Product updated.");
        Ok(product)
      }
      None => {
        warn!("Product to update does not exist.");
        Err(CatalogError::NotFound(id))
      }
    }
  }

  /// Returns whether a product was removed.
  #[instrument(name = "admin::delete", skip(self))]
  pub async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
    let removed = self.store.delete(id).await?;
    if removed {
      info!("Product deleted.");
    } else {
      warn!("Product to delete does not exist.");
    }
    Ok(removed)
  }
}
