// app/src/errors.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use panha_core::{CatalogError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Catalog Error: {0}")]
  Catalog(#[from] CatalogError),

  #[error("Template Error: {0}")]
  Template(#[from] minijinja::Error),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    AppError::Catalog(CatalogError::StorageUnavailable(err))
  }
}

const NOT_FOUND_PAGE: &str = "<!doctype html><html lang=\"km\"><head><meta charset=\"utf-8\"><title>404</title></head>\
<body><h1>រកមិនឃើញ (Not Found)</h1><p><a href=\"/\">ត្រឡប់ទៅទំព័រដើម (Back to the shop)</a></p></body></html>";

const ERROR_PAGE: &str = "<!doctype html><html lang=\"km\"><head><meta charset=\"utf-8\"><title>500</title></head>\
<body><h1>មានបញ្ហាបច្ចេកទេស (Something went wrong)</h1><p>Please try again later.</p></body></html>";

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Invalid submissions never get here: handlers re-render the form.
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let mut response = HttpResponse::build(self.status_code());
    match self {
      AppError::Catalog(CatalogError::NotFound(_)) => response.content_type(ContentType::html()).body(NOT_FOUND_PAGE),
      _ => response.content_type(ContentType::html()).body(ERROR_PAGE),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
