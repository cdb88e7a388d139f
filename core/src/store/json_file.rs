// core/src/store/json_file.rs

//! Flat-file backend: the whole collection lives in one JSON array.

use super::{insert, remove, replace, ProductStore};
use crate::error::{StoreError, StoreResult};
use crate::model::{Product, ProductField, ProductFields, ProductId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Product collection persisted as a pretty-printed UTF-8 JSON array.
///
/// Every mutation reads the full file, changes it in memory and writes the
/// full array back. Mutations are serialized through a writer lock, so two
/// concurrent requests can no longer overwrite each other's changes. The
/// array is written to a sibling temporary file and renamed into place, so a
/// concurrent reader sees either the old or the new collection.
///
/// File I/O and the lock wait run on tokio's blocking pool, never on the
/// async worker. The lock only covers writers inside this process.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  file: Arc<ProductFile>,
}

#[derive(Debug)]
struct ProductFile {
  path: PathBuf,
  writer: Mutex<()>,
}

impl JsonFileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      file: Arc::new(ProductFile {
        path: path.into(),
        writer: Mutex::new(()),
      }),
    }
  }

  pub fn path(&self) -> &Path {
    &self.file.path
  }

  /// Reads the collection. A missing or blank file is an empty collection.
  ///
  /// Blocking; async callers go through [`ProductStore`].
  pub fn load(&self) -> StoreResult<Vec<Product>> {
    self.file.load()
  }

  /// Replaces the whole file with `products`. Blocking.
  pub fn save(&self, products: &[Product]) -> StoreResult<()> {
    let _guard = self.file.writer.lock();
    self.file.write_all(products)
  }

  async fn blocking<R, F>(&self, f: F) -> StoreResult<R>
  where
    R: Send + 'static,
    F: FnOnce(&ProductFile) -> StoreResult<R> + Send + 'static,
  {
    let file = Arc::clone(&self.file);
    tokio::task::spawn_blocking(move || f(&file))
      .await
      .map_err(StoreError::backend)?
  }
}

impl ProductFile {
  fn load(&self) -> StoreResult<Vec<Product>> {
    let content = match fs::read_to_string(&self.path) {
      Ok(content) => content,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "Product file absent, treating as empty.");
        return Ok(Vec::new());
      }
      Err(source) => {
        return Err(StoreError::Io {
          path: self.path.clone(),
          source,
        })
      }
    };
    if content.trim().is_empty() {
      return Ok(Vec::new());
    }

    let products: Vec<Product> = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
      path: self.path.clone(),
      source,
    })?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
      if !seen.insert(product.id) {
        return Err(StoreError::DuplicateId {
          path: self.path.clone(),
          id: product.id,
        });
      }
      let blank_name = [
        (ProductField::NameKh, &product.name_kh),
        (ProductField::NameEn, &product.name_en),
      ]
      .into_iter()
      .find(|(_, name)| name.trim().is_empty());
      if let Some((field, _)) = blank_name {
        return Err(StoreError::InvalidRecord {
          path: self.path.clone(),
          id: product.id,
          field,
        });
      }
    }
    Ok(products)
  }

  fn write_all(&self, products: &[Product]) -> StoreResult<()> {
    let io_err = |source| StoreError::Io {
      path: self.path.clone(),
      source,
    };

    if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
      fs::create_dir_all(dir).map_err(io_err)?;
    }

    let content = serde_json::to_string_pretty(products).map_err(|source| StoreError::Corrupt {
      path: self.path.clone(),
      source,
    })?;

    let file_name = self
      .path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| "products.json".to_string());
    let tmp_path = self
      .path
      .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    fs::write(&tmp_path, content).map_err(io_err)?;
    fs::rename(&tmp_path, &self.path).map_err(io_err)?;
    Ok(())
  }

  /// Read-modify-write under the writer lock. `f` returns its result and
  /// whether the collection changed; unchanged collections are not rewritten,
  /// and nothing is written when `f` fails.
  fn mutate<R>(&self, f: impl FnOnce(&mut Vec<Product>) -> StoreResult<(R, bool)>) -> StoreResult<R> {
    let _guard = self.writer.lock();
    let mut products = self.load()?;
    let (result, changed) = f(&mut products)?;
    if changed {
      self.write_all(&products)?;
    }
    Ok(result)
  }
}

#[async_trait]
impl ProductStore for JsonFileStore {
  async fn list_all(&self) -> StoreResult<Vec<Product>> {
    self.blocking(ProductFile::load).await
  }

  async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    self
      .blocking(move |file| Ok(file.load()?.into_iter().find(|p| p.id == id)))
      .await
  }

  #[instrument(name = "json_store::create", skip(self, fields))]
  async fn create(&self, fields: ProductFields) -> StoreResult<Product> {
    let product = self
      .blocking(move |file| file.mutate(|products| Ok((insert(products, fields)?, true))))
      .await?;
    info!(id = product.id, path = %self.path().display(), "Product written to file.");
    Ok(product)
  }

  #[instrument(name = "json_store::update", skip(self, fields))]
  async fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Option<Product>> {
    self
      .blocking(move |file| {
        file.mutate(|products| {
          let updated = replace(products, id, fields);
          let changed = updated.is_some();
          Ok((updated, changed))
        })
      })
      .await
  }

  #[instrument(name = "json_store::delete", skip(self))]
  async fn delete(&self, id: ProductId) -> StoreResult<bool> {
    self
      .blocking(move |file| {
        file.mutate(|products| {
          let removed = remove(products, id);
          Ok((removed, removed))
        })
      })
      .await
  }
}
