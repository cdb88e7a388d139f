// app/src/web/handlers/public_handlers.rs

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use minijinja::context;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::storefront", skip(app_state))]
pub async fn index_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.storefront.listing().await?;
  info!("Rendering storefront with {} products.", products.len());

  let html = app_state.templates.render("index.html", context! { products => products })?;
  Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}
