// app/src/db/mod.rs

//! Opens the product store selected by configuration.

pub mod sqlite_store;

pub use sqlite_store::SqliteProductStore;

use crate::config::StorageConfig;
use crate::errors::Result;
use panha_core::{JsonFileStore, MemoryStore, ProductStore};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn open_store(storage: &StorageConfig) -> Result<Arc<dyn ProductStore>> {
  let store: Arc<dyn ProductStore> = match storage {
    StorageConfig::JsonFile { path } => {
      let store = JsonFileStore::new(path);
      // Surface a corrupt file at startup rather than on the first request.
      let count = store.list_all().await?.len();
      info!(path = %path.display(), products = count, "Using JSON file product store.");
      Arc::new(store)
    }
    StorageConfig::Sqlite { database_url } => {
      let store = SqliteProductStore::connect(database_url).await?;
      info!("Using SQLite product store.");
      Arc::new(store)
    }
    StorageConfig::Memory => {
      warn!("Using in-memory product store; products are lost on restart.");
      Arc::new(MemoryStore::new())
    }
  };
  Ok(store)
}
