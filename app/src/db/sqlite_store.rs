// app/src/db/sqlite_store.rs

use async_trait::async_trait;
use panha_core::{Product, ProductFields, ProductId, ProductStore, StoreError, StoreResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;
use tracing::{error, info, instrument};

const CREATE_PRODUCTS_TABLE: &str = "
  CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    name_kh TEXT NOT NULL,
    name_en TEXT NOT NULL,
    price REAL NOT NULL,
    description_kh TEXT,
    store TEXT,
    image_url TEXT
  )";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name_kh: String,
  name_en: String,
  price: f64,
  description_kh: Option<String>,
  store: Option<String>,
  image_url: Option<String>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name_kh: row.name_kh,
      name_en: row.name_en,
      price: row.price,
      description_kh: row.description_kh,
      store: row.store,
      image_url: row.image_url,
    }
  }
}

/// Relational backend: one `products` table.
///
/// `id` is an `INTEGER PRIMARY KEY` without `AUTOINCREMENT`, so SQLite hands
/// out `max(id) + 1` (or 1 on an empty table), the same rule as the file store.
#[derive(Debug, Clone)]
pub struct SqliteProductStore {
  pool: SqlitePool,
}

impl SqliteProductStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Connects, creating the database file if needed, and ensures the schema.
  pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let store = Self::new(pool);
    store.ensure_schema().await?;
    Ok(store)
  }

  pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
    info!("Products table ready.");
    Ok(())
  }
}

fn backend_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
  move |e| {
    error!("Database error during {}: {}", operation, e);
    StoreError::backend(e)
  }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
  async fn list_all(&self) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(
      "SELECT id, name_kh, name_en, price, description_kh, store, image_url FROM products ORDER BY id",
    )
    .fetch_all(&self.pool)
    .await
    .map_err(backend_error("list"))?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(
      "SELECT id, name_kh, name_en, price, description_kh, store, image_url FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(backend_error("get"))?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "sqlite_store::create", skip(self, fields))]
  async fn create(&self, fields: ProductFields) -> StoreResult<Product> {
    let result = sqlx::query(
      "INSERT INTO products (name_kh, name_en, price, description_kh, store, image_url) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&fields.name_kh)
    .bind(&fields.name_en)
    .bind(fields.price)
    .bind(&fields.description_kh)
    .bind(&fields.store)
    .bind(&fields.image_url)
    .execute(&self.pool)
    .await
    .map_err(backend_error("create"))?;

    Ok(fields.into_product(result.last_insert_rowid()))
  }

  #[instrument(name = "sqlite_store::update", skip(self, fields))]
  async fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Option<Product>> {
    let result = sqlx::query(
      "UPDATE products SET name_kh = ?, name_en = ?, price = ?, description_kh = ?, store = ?, image_url = ? WHERE id = ?",
    )
    .bind(&fields.name_kh)
    .bind(&fields.name_en)
    .bind(fields.price)
    .bind(&fields.description_kh)
    .bind(&fields.store)
    .bind(&fields.image_url)
    .bind(id)
    .execute(&self.pool)
    .await
    .map_err(backend_error("update"))?;

    if result.rows_affected() == 0 {
      return Ok(None);
    }
    Ok(Some(fields.into_product(id)))
  }

  #[instrument(name = "sqlite_store::delete", skip(self))]
  async fn delete(&self, id: ProductId) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(backend_error("delete"))?;
    Ok(result.rows_affected() > 0)
  }
}
