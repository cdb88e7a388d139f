// core/src/lib.rs

//! Panha Mall catalog domain.
//!
//! A bilingual (Khmer/English) product catalog with:
//!  - A concrete [`Product`] record and bilingual field labels.
//!  - Explicit validation of admin form submissions ([`ProductForm`]).
//!  - A swappable persistence contract ([`ProductStore`]) with a flat JSON
//!    file backend and an in-memory backend.
//!  - Admin ([`AdminService`]) and public ([`Storefront`]) operations built on
//!    top of any store.
//!
//! The HTTP layer, the relational backend and template rendering live in the
//! `panha_mall` application crate.

pub mod admin;
pub mod error;
pub mod model;
pub mod store;
pub mod storefront;
pub mod validate;

// --- Re-exports for the Public API ---

pub use crate::admin::AdminService;
pub use crate::error::{CatalogError, CatalogResult, StoreError, StoreResult};
pub use crate::model::{Product, ProductField, ProductFields, ProductId};
pub use crate::store::{next_id, JsonFileStore, MemoryStore, ProductStore};
pub use crate::storefront::Storefront;
pub use crate::validate::{FieldError, FieldErrorKind, ProductForm, ValidationErrors};
