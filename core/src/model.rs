// core/src/model.rs

//! The product record and the metadata of its editable fields.

use serde::{Deserialize, Serialize};

/// Identifier assigned by a [`ProductStore`](crate::store::ProductStore).
pub type ProductId = i64;

/// A catalog entry as persisted by every store backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name_kh: String,
  pub name_en: String,
  pub price: f64,
  #[serde(default)]
  pub description_kh: Option<String>,
  #[serde(default)]
  pub store: Option<String>,
  #[serde(default)]
  pub image_url: Option<String>,
}

/// Everything a product carries except its id. Only produced by validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFields {
  pub name_kh: String,
  pub name_en: String,
  pub price: f64,
  pub description_kh: Option<String>,
  pub store: Option<String>,
  pub image_url: Option<String>,
}

impl ProductFields {
  pub fn into_product(self, id: ProductId) -> Product {
    Product {
      id,
      name_kh: self.name_kh,
      name_en: self.name_en,
      price: self.price,
      description_kh: self.description_kh,
      store: self.store,
      image_url: self.image_url,
    }
  }
}

impl Product {
  /// Overwrites every field except `id`.
  pub fn apply(&mut self, fields: ProductFields) {
    let id = self.id;
    *self = fields.into_product(id);
  }
}

/// Editable product fields, in admin form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
  NameKh,
  NameEn,
  Price,
  Store,
  DescriptionKh,
  ImageUrl,
}

impl ProductField {
  /// Field order of the admin create/edit form.
  pub const FORM_ORDER: [ProductField; 6] = [
    ProductField::NameKh,
    ProductField::NameEn,
    ProductField::Price,
    ProductField::Store,
    ProductField::DescriptionKh,
    ProductField::ImageUrl,
  ];

  /// Columns shown in the admin product table.
  pub const LIST_COLUMNS: [ProductField; 4] = [
    ProductField::NameKh,
    ProductField::Price,
    ProductField::Store,
    ProductField::ImageUrl,
  ];

  /// Stable key, used for form inputs and the JSON file layout.
  pub fn key(self) -> &'static str {
    match self {
      ProductField::NameKh => "name_kh",
      ProductField::NameEn => "name_en",
      ProductField::Price => "price",
      ProductField::Store => "store",
      ProductField::DescriptionKh => "description_kh",
      ProductField::ImageUrl => "image_url",
    }
  }

  /// Bilingual label shown next to inputs and on table headers.
  pub fn label(self) -> &'static str {
    match self {
      ProductField::NameKh => "ឈ្មោះ (ខ្មែរ)",
      ProductField::NameEn => "Name (English)",
      ProductField::Price => "តម្លៃ (Price)",
      ProductField::Store => "ហាង (Store)",
      ProductField::DescriptionKh => "ការពិពណ៌នា (Khmer)",
      ProductField::ImageUrl => "Image URL",
    }
  }

  /// Maximum length in characters, `None` for unbounded text.
  pub fn max_chars(self) -> Option<usize> {
    match self {
      ProductField::NameKh | ProductField::NameEn | ProductField::Store => Some(100),
      ProductField::ImageUrl => Some(255),
      ProductField::Price | ProductField::DescriptionKh => None,
    }
  }

  pub fn is_required(self) -> bool {
    matches!(self, ProductField::NameKh | ProductField::NameEn | ProductField::Price)
  }
}

impl std::fmt::Display for ProductField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.key())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn apply_keeps_id() {
    let mut product = Product {
      id: 7,
      name_kh: "អាវ".to_string(),
      name_en: "Shirt".to_string(),
      price: 3.0,
      description_kh: None,
      store: Some("Central".to_string()),
      image_url: None,
    };
    product.apply(ProductFields {
      name_kh: "ខោ".to_string(),
      name_en: "Trousers".to_string(),
      price: 9.5,
      description_kh: Some("ល្អ".to_string()),
      store: None,
      image_url: None,
    });
    assert_eq!(product.id, 7);
    assert_eq!(product.name_en, "Trousers");
    assert_eq!(product.store, None);
    assert_eq!(product.description_kh.as_deref(), Some("ល្អ"));
  }

  #[test]
  fn list_columns_are_form_fields() {
    for column in ProductField::LIST_COLUMNS {
      assert!(ProductField::FORM_ORDER.contains(&column));
    }
  }
}
