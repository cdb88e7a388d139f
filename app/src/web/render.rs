// app/src/web/render.rs

//! Template rendering.
//!
//! Templates are standalone HTML files under `app/templates/`, compiled into
//! the binary with `include_str!` and registered once at startup. Auto-escaping
//! is on for every `.html` template.

use crate::errors::Result;
use minijinja::Environment;
use panha_core::{ProductField, ProductForm, ValidationErrors};
use serde::Serialize;

pub const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
pub const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
pub const ADMIN_LIST_TEMPLATE: &str = include_str!("../../templates/admin_list.html");
pub const ADMIN_FORM_TEMPLATE: &str = include_str!("../../templates/admin_form.html");

pub const SITE_NAME: &str = "ផ្សារទំនើបបញ្ញា";
pub const ADMIN_NAME: &str = "ផ្សារទំនើបបញ្ញា (Admin)";
pub const PRODUCT_VIEW_NAME: &str = "ទំនិញ (Products)";

pub struct Templates {
  env: Environment<'static>,
}

impl Templates {
  pub fn new() -> std::result::Result<Self, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", BASE_TEMPLATE)?;
    env.add_template("index.html", INDEX_TEMPLATE)?;
    env.add_template("admin_list.html", ADMIN_LIST_TEMPLATE)?;
    env.add_template("admin_form.html", ADMIN_FORM_TEMPLATE)?;
    env.add_filter("price", format_price);
    env.add_test("web_url", is_web_url);
    env.add_global("site_name", SITE_NAME);
    env.add_global("admin_name", ADMIN_NAME);
    env.add_global("view_name", PRODUCT_VIEW_NAME);
    Ok(Self { env })
  }

  pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
    let template = self.env.get_template(name)?;
    Ok(template.render(ctx)?)
  }
}

fn format_price(value: f64) -> String {
  format!("{:.2}", value)
}

// Only http(s) links become href/src; anything else is shown as text.
fn is_web_url(value: &str) -> bool {
  let value = value.trim_start().to_ascii_lowercase();
  value.starts_with("http://") || value.starts_with("https://")
}

/// One admin table header.
#[derive(Debug, Serialize)]
pub struct ColumnView {
  pub key: &'static str,
  pub label: &'static str,
}

pub fn list_columns() -> Vec<ColumnView> {
  ProductField::LIST_COLUMNS
    .iter()
    .map(|field| ColumnView {
      key: field.key(),
      label: field.label(),
    })
    .collect()
}

/// One input of the create/edit form, with its echoed value and inline error.
#[derive(Debug, Serialize)]
pub struct FormFieldView {
  pub key: &'static str,
  pub label: &'static str,
  pub value: String,
  pub error: Option<String>,
  pub required: bool,
  pub multiline: bool,
}

pub fn form_fields(form: &ProductForm, errors: Option<&ValidationErrors>) -> Vec<FormFieldView> {
  ProductField::FORM_ORDER
    .iter()
    .map(|&field| FormFieldView {
      key: field.key(),
      label: field.label(),
      value: form.value(field).unwrap_or_default().to_string(),
      error: errors.and_then(|e| e.for_field(field)).map(ToString::to_string),
      required: field.is_required(),
      multiline: field == ProductField::DescriptionKh,
    })
    .collect()
}
