// app/src/web/handlers/admin_handlers.rs

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use minijinja::context;
use panha_core::{CatalogError, ProductForm, ProductId, ValidationErrors};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::notice::Notice;
use crate::web::render::{form_fields, list_columns};

pub const ADMIN_PRODUCT_LIST_PATH: &str = "/admin/product/";

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub notice: Option<String>,
}

fn redirect_to_list(notice: Option<Notice>) -> HttpResponse {
  let location = match notice {
    Some(notice) => format!("{}?notice={}", ADMIN_PRODUCT_LIST_PATH, notice.code()),
    None => ADMIN_PRODUCT_LIST_PATH.to_string(),
  };
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, location))
    .finish()
}

fn render_form(
  app_state: &AppState,
  heading: &str,
  action: &str,
  form: &ProductForm,
  errors: Option<&ValidationErrors>,
) -> Result<HttpResponse, AppError> {
  let html = app_state.templates.render(
    "admin_form.html",
    context! {
      heading => heading,
      action => action,
      fields => form_fields(form, errors),
    },
  )?;
  Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

fn new_form_action() -> String {
  format!("{}new", ADMIN_PRODUCT_LIST_PATH)
}

fn edit_form_action(id: ProductId) -> String {
  format!("{}edit/{}", ADMIN_PRODUCT_LIST_PATH, id)
}

pub async fn admin_index_handler() -> HttpResponse {
  redirect_to_list(None)
}

#[instrument(name = "handler::admin_list_products", skip(app_state, query))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.admin.list().await?;
  let notice = query.notice.as_deref().and_then(Notice::from_code).map(Notice::view);
  info!("Listing {} products for admin.", products.len());

  let html = app_state.templates.render(
    "admin_list.html",
    context! {
      products => products,
      columns => list_columns(),
      notice => notice,
    },
  )?;
  Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

pub async fn new_product_form_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  render_form(
    &app_state,
    "បង្កើតទំនិញថ្មី (Create Product)",
    &new_form_action(),
    &ProductForm::default(),
    None,
  )
}

#[instrument(name = "handler::admin_create_product", skip(app_state, form))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  form: web::Form<ProductForm>,
) -> Result<HttpResponse, AppError> {
  match app_state.admin.create(&form).await {
    Ok(product) => {
      info!(id = product.id, "Product created from admin form.");
      Ok(redirect_to_list(Some(Notice::Created)))
    }
    Err(CatalogError::Validation(errors)) => render_form(
      &app_state,
      "បង្កើតទំនិញថ្មី (Create Product)",
      &new_form_action(),
      &form,
      Some(&errors),
    ),
    Err(e) => Err(e.into()),
  }
}

#[instrument(name = "handler::admin_edit_form", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn edit_product_form_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  match app_state.admin.load(id).await {
    Ok(product) => render_form(
      &app_state,
      "កែប្រែទំនិញ (Edit Product)",
      &edit_form_action(id),
      &ProductForm::from_product(&product),
      None,
    ),
    Err(CatalogError::NotFound(_)) => {
      warn!("Edit requested for missing product {}.", id);
      Ok(redirect_to_list(Some(Notice::NotFound)))
    }
    Err(e) => Err(e.into()),
  }
}

#[instrument(name = "handler::admin_update_product", skip(app_state, path, form), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  form: web::Form<ProductForm>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  match app_state.admin.update(id, &form).await {
    Ok(_) => Ok(redirect_to_list(Some(Notice::Updated))),
    Err(CatalogError::Validation(errors)) => render_form(
      &app_state,
      "កែប្រែទំនិញ (Edit Product)",
      &edit_form_action(id),
      &form,
      Some(&errors),
    ),
    Err(CatalogError::NotFound(_)) => Ok(redirect_to_list(Some(Notice::NotFound))),
    Err(e) => Err(e.into()),
  }
}

#[instrument(name = "handler::admin_delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let removed = app_state.admin.delete(path.into_inner()).await?;
  let notice = if removed { Notice::Deleted } else { Notice::NotFound };
  Ok(redirect_to_list(Some(notice)))
}
