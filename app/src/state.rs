// app/src/state.rs
use crate::errors::Result;
use crate::web::render::Templates;
use panha_core::{AdminService, ProductStore, Storefront};
use std::sync::Arc;

/// Everything handlers need, built once in `main` and shared via `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub admin: AdminService,
  pub storefront: Storefront,
  pub templates: Arc<Templates>,
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>) -> Result<Self> {
    Ok(Self {
      admin: AdminService::new(store.clone()),
      storefront: Storefront::new(store),
      templates: Arc::new(Templates::new()?),
    })
  }
}
