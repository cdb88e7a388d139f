// core/src/error.rs
use crate::model::{ProductField, ProductId};
use crate::validate::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of the backing medium. Never produced for "no data yet".
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("I/O error on product file {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Product file {} is not a valid product array: {source}", .path.display())]
  Corrupt {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Product file {} contains id {id} more than once", .path.display())]
  DuplicateId { path: PathBuf, id: ProductId },

  #[error("Product file {} has record {id} with an empty {field}", .path.display())]
  InvalidRecord {
    path: PathBuf,
    id: ProductId,
    field: ProductField,
  },

  #[error("No product id left after {max_id}")]
  IdSpaceExhausted { max_id: ProductId },

  // Relational backends stringify their driver errors here.
  #[error("Storage backend error: {0}")]
  Backend(String),
}

impl StoreError {
  pub fn backend(err: impl std::fmt::Display) -> Self {
    StoreError::Backend(err.to_string())
  }
}

/// Outcome of an admin or storefront operation that did not succeed.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Validation failed: {0}")]
  Validation(ValidationErrors),

  #[error("Product {0} not found")]
  NotFound(ProductId),

  #[error("Storage unavailable: {0}")]
  StorageUnavailable(#[from] StoreError),
}

impl From<ValidationErrors> for CatalogError {
  fn from(errors: ValidationErrors) -> Self {
    CatalogError::Validation(errors)
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
