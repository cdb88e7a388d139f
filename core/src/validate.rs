// core/src/validate.rs

//! Turns a raw admin form submission into [`ProductFields`].
//!
//! Validation never touches a store; callers run it before any mutation so a
//! rejected submission leaves persisted state untouched.

use crate::model::{Product, ProductField, ProductFields};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw form submission. Every input is optional text, exactly as posted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
  #[serde(default)]
  pub name_kh: Option<String>,
  #[serde(default)]
  pub name_en: Option<String>,
  #[serde(default)]
  pub price: Option<String>,
  #[serde(default)]
  pub store: Option<String>,
  #[serde(default)]
  pub description_kh: Option<String>,
  #[serde(default)]
  pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
  Missing,
  NotANumber,
  TooLong { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: ProductField,
  pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      FieldErrorKind::Missing => write!(f, "{} is required", self.field.label()),
      FieldErrorKind::NotANumber => write!(f, "{} must be a number", self.field.label()),
      FieldErrorKind::TooLong { max } => {
        write!(f, "{} must be at most {} characters", self.field.label(), max)
      }
    }
  }
}

/// Non-empty set of field errors, in form field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn errors(&self) -> &[FieldError] {
    &self.0
  }

  pub fn for_field(&self, field: ProductField) -> Option<&FieldError> {
    self.0.iter().find(|e| e.field == field)
  }

  pub fn contains(&self, field: ProductField, kind: FieldErrorKind) -> bool {
    self.0.iter().any(|e| e.field == field && e.kind == kind)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
    f.write_str(&messages.join("; "))
  }
}

impl std::error::Error for ValidationErrors {}

impl ProductForm {
  /// Pre-fills a form from a stored record, for the edit page.
  pub fn from_product(product: &Product) -> Self {
    Self {
      name_kh: Some(product.name_kh.clone()),
      name_en: Some(product.name_en.clone()),
      price: Some(product.price.to_string()),
      store: product.store.clone(),
      description_kh: product.description_kh.clone(),
      image_url: product.image_url.clone(),
    }
  }

  pub fn value(&self, field: ProductField) -> Option<&str> {
    let value = match field {
      ProductField::NameKh => &self.name_kh,
      ProductField::NameEn => &self.name_en,
      ProductField::Price => &self.price,
      ProductField::Store => &self.store,
      ProductField::DescriptionKh => &self.description_kh,
      ProductField::ImageUrl => &self.image_url,
    };
    value.as_deref()
  }

  /// Checks presence and type of the required fields and length limits.
  ///
  /// Names are trimmed. Blank optional inputs become `None`.
  pub fn validate(&self) -> Result<ProductFields, ValidationErrors> {
    let mut errors = Vec::new();

    let name_kh = required_text(self.value(ProductField::NameKh), ProductField::NameKh, &mut errors);
    let name_en = required_text(self.value(ProductField::NameEn), ProductField::NameEn, &mut errors);

    let price = match non_blank(self.value(ProductField::Price)) {
      None => {
        errors.push(FieldError { field: ProductField::Price, kind: FieldErrorKind::Missing });
        None
      }
      Some(raw) => match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
          errors.push(FieldError { field: ProductField::Price, kind: FieldErrorKind::NotANumber });
          None
        }
      },
    };

    let store = optional_text(self.value(ProductField::Store), ProductField::Store, &mut errors);
    let description_kh = optional_text(
      self.value(ProductField::DescriptionKh),
      ProductField::DescriptionKh,
      &mut errors,
    );
    let image_url = optional_text(self.value(ProductField::ImageUrl), ProductField::ImageUrl, &mut errors);

    match (name_kh, name_en, price) {
      (Some(name_kh), Some(name_en), Some(price)) if errors.is_empty() => Ok(ProductFields {
        name_kh,
        name_en,
        price,
        description_kh,
        store,
        image_url,
      }),
      _ => Err(ValidationErrors(errors)),
    }
  }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_length(value: &str, field: ProductField, errors: &mut Vec<FieldError>) -> bool {
  match field.max_chars() {
    Some(max) if value.chars().count() > max => {
      errors.push(FieldError { field, kind: FieldErrorKind::TooLong { max } });
      false
    }
    _ => true,
  }
}

fn required_text(value: Option<&str>, field: ProductField, errors: &mut Vec<FieldError>) -> Option<String> {
  match non_blank(value) {
    None => {
      errors.push(FieldError { field, kind: FieldErrorKind::Missing });
      None
    }
    Some(text) => check_length(text, field, errors).then(|| text.to_string()),
  }
}

fn optional_text(value: Option<&str>, field: ProductField, errors: &mut Vec<FieldError>) -> Option<String> {
  let raw = value?;
  if raw.trim().is_empty() {
    return None;
  }
  check_length(raw, field, errors);
  Some(raw.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(name_kh: &str, name_en: &str, price: &str) -> ProductForm {
    ProductForm {
      name_kh: Some(name_kh.to_string()),
      name_en: Some(name_en.to_string()),
      price: Some(price.to_string()),
      ..Default::default()
    }
  }

  #[test]
  fn accepts_minimal_submission() {
    let fields = form("អាវយឺត", "T-Shirt", "15.5").validate().unwrap();
    assert_eq!(fields.name_kh, "អាវយឺត");
    assert_eq!(fields.name_en, "T-Shirt");
    assert_eq!(fields.price, 15.5);
    assert_eq!(fields.store, None);
    assert_eq!(fields.description_kh, None);
    assert_eq!(fields.image_url, None);
  }

  #[test]
  fn reports_every_missing_required_field() {
    let errors = ProductForm::default().validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(ProductField::NameKh, FieldErrorKind::Missing));
    assert!(errors.contains(ProductField::NameEn, FieldErrorKind::Missing));
    assert!(errors.contains(ProductField::Price, FieldErrorKind::Missing));
  }

  #[test]
  fn whitespace_name_counts_as_missing() {
    let errors = form("   ", "T-Shirt", "1").validate().unwrap_err();
    assert_eq!(errors.errors(), &[FieldError { field: ProductField::NameKh, kind: FieldErrorKind::Missing }]);
  }

  #[test]
  fn rejects_non_numeric_and_non_finite_prices() {
    for bad in ["abc", "1,5", "NaN", "inf"] {
      let errors = form("ក", "A", bad).validate().unwrap_err();
      assert!(errors.contains(ProductField::Price, FieldErrorKind::NotANumber), "price {bad:?}");
    }
  }

  #[test]
  fn trims_names_and_price() {
    let fields = form("  ក  ", " A ", " 2 ").validate().unwrap();
    assert_eq!(fields.name_kh, "ក");
    assert_eq!(fields.name_en, "A");
    assert_eq!(fields.price, 2.0);
  }

  #[test]
  fn blank_optionals_become_none() {
    let mut submission = form("ក", "A", "1");
    submission.store = Some("".to_string());
    submission.description_kh = Some("  ".to_string());
    submission.image_url = Some("http://img.example/a.png".to_string());
    let fields = submission.validate().unwrap();
    assert_eq!(fields.store, None);
    assert_eq!(fields.description_kh, None);
    assert_eq!(fields.image_url.as_deref(), Some("http://img.example/a.png"));
  }

  #[test]
  fn length_limits_count_characters() {
    // 100 Khmer characters is well over 100 bytes but still allowed.
    let at_limit = "ក".repeat(100);
    assert!(form(&at_limit, "A", "1").validate().is_ok());

    let errors = form(&"ក".repeat(101), "A", "1").validate().unwrap_err();
    assert!(errors.contains(ProductField::NameKh, FieldErrorKind::TooLong { max: 100 }));

    let mut submission = form("ក", "A", "1");
    submission.image_url = Some("x".repeat(256));
    let errors = submission.validate().unwrap_err();
    assert!(errors.contains(ProductField::ImageUrl, FieldErrorKind::TooLong { max: 255 }));
  }

  #[test]
  fn edit_form_round_trips_through_validation() {
    let product = Product {
      id: 3,
      name_kh: "កាបូប".to_string(),
      name_en: "Bag".to_string(),
      price: 12.25,
      description_kh: Some("ស្បែក".to_string()),
      store: Some("Psar Thmei".to_string()),
      image_url: None,
    };
    let fields = ProductForm::from_product(&product).validate().unwrap();
    assert_eq!(fields.into_product(3), product);
  }
}
