// app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Which [`ProductStore`](panha_core::ProductStore) backend to open at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
  JsonFile { path: PathBuf },
  Sqlite { database_url: String },
  Memory,
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage: StorageConfig,
  /// Emit JSON log lines instead of the human-readable format.
  pub log_json: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage = match get_or("STORAGE_BACKEND", "json").to_ascii_lowercase().as_str() {
      "json" => StorageConfig::JsonFile {
        path: PathBuf::from(get_or("PRODUCTS_FILE", "products.json")),
      },
      "sqlite" => StorageConfig::Sqlite {
        database_url: get_or("DATABASE_URL", "sqlite:/tmp/panhamall.db"),
      },
      "memory" => StorageConfig::Memory,
      other => {
        return Err(AppError::Config(format!(
          "Invalid STORAGE_BACKEND '{}': expected json, sqlite or memory",
          other
        )))
      }
    };

    let log_json = match get_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "json" => true,
      "pretty" | "text" => false,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      storage,
      log_json,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
