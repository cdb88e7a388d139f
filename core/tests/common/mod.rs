// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use panha_core::{JsonFileStore, MemoryStore, ProductFields, ProductForm, ProductStore};
use std::sync::Arc;
use tempfile::TempDir;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Sample submissions ---
pub fn form(name_kh: &str, name_en: &str, price: &str) -> ProductForm {
  ProductForm {
    name_kh: Some(name_kh.to_string()),
    name_en: Some(name_en.to_string()),
    price: Some(price.to_string()),
    ..Default::default()
  }
}

pub fn t_shirt_form() -> ProductForm {
  form("អាវយឺត", "T-Shirt", "15.5")
}

pub fn fields(name_kh: &str, name_en: &str, price: f64) -> ProductFields {
  ProductFields {
    name_kh: name_kh.to_string(),
    name_en: name_en.to_string(),
    price,
    description_kh: None,
    store: None,
    image_url: None,
  }
}

pub fn full_fields() -> ProductFields {
  ProductFields {
    name_kh: "កាបូបស្បែក".to_string(),
    name_en: "Leather Bag".to_string(),
    price: 42.0,
    description_kh: Some("កាបូបធ្វើពីស្បែកពិត".to_string()),
    store: Some("ហាងសុខា".to_string()),
    image_url: Some("https://img.example.com/bag.jpg".to_string()),
  }
}

// --- Stores ---

/// A JSON store in a fresh temp dir. Keep the `TempDir` alive for the test.
pub fn temp_json_store() -> (TempDir, JsonFileStore) {
  let dir = TempDir::new().unwrap();
  let store = JsonFileStore::new(dir.path().join("products.json"));
  (dir, store)
}

/// Every core backend, each freshly emptied.
pub fn all_backends() -> Vec<(&'static str, Arc<dyn ProductStore>, Option<TempDir>)> {
  let (dir, json) = temp_json_store();
  let memory: Arc<dyn ProductStore> = Arc::new(MemoryStore::new());
  let json: Arc<dyn ProductStore> = Arc::new(json);
  vec![("memory", memory, None), ("json_file", json, Some(dir))]
}
