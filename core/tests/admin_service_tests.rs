// tests/admin_service_tests.rs
mod common;
use common::*;
use panha_core::{
  AdminService, CatalogError, FieldErrorKind, MemoryStore, ProductField, ProductForm, ProductStore, Storefront,
};
use std::sync::Arc;

fn service() -> (Arc<MemoryStore>, AdminService) {
  let store = Arc::new(MemoryStore::new());
  let admin = AdminService::new(store.clone());
  (store, admin)
}

#[tokio::test]
async fn test_create_t_shirt_into_empty_store() {
  setup_tracing();
  let (_store, admin) = service();

  let created = admin.create(&t_shirt_form()).await.unwrap();
  assert_eq!(created.id, 1);

  let all = admin.list().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, 1);
  assert_eq!(all[0].name_kh, "អាវយឺត");
  assert_eq!(all[0].name_en, "T-Shirt");
  assert_eq!(all[0].price, 15.5);
}

#[tokio::test]
async fn test_create_after_gap_gets_max_plus_one() {
  setup_tracing();
  let (_store, admin) = service();
  for n in ["a", "b", "c"] {
    admin.create(&form("ក", n, "1")).await.unwrap();
  }
  assert!(admin.delete(2).await.unwrap());

  let created = admin.create(&form("ក", "d", "1")).await.unwrap();
  assert_eq!(created.id, 4);
}

#[tokio::test]
async fn test_create_missing_name_kh_is_rejected_without_mutation() {
  setup_tracing();
  let (store, admin) = service();
  admin.create(&t_shirt_form()).await.unwrap();
  let before = store.list_all().await.unwrap();

  let submission = ProductForm {
    name_en: Some("X".to_string()),
    ..Default::default()
  };
  match admin.create(&submission).await {
    Err(CatalogError::Validation(errors)) => {
      assert!(errors.contains(ProductField::NameKh, FieldErrorKind::Missing));
      assert!(errors.contains(ProductField::Price, FieldErrorKind::Missing));
      assert!(errors.for_field(ProductField::NameEn).is_none());
    }
    other => panic!("Expected CatalogError::Validation, got {:?}", other),
  }
  assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found_without_mutation() {
  setup_tracing();
  let (store, admin) = service();
  admin.create(&t_shirt_form()).await.unwrap();
  let before = store.list_all().await.unwrap();

  match admin.update(99, &form("ក", "Y", "2")).await {
    Err(CatalogError::NotFound(id)) => assert_eq!(id, 99),
    other => panic!("Expected CatalogError::NotFound, got {:?}", other),
  }
  assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_invalid_update_is_rejected_before_lookup() {
  setup_tracing();
  let (store, admin) = service();
  admin.create(&t_shirt_form()).await.unwrap();
  let before = store.list_all().await.unwrap();

  let bad_price = form("ក", "Y", "cheap");
  assert!(matches!(admin.update(1, &bad_price).await, Err(CatalogError::Validation(_))));
  // Validation wins even when the id does not exist.
  assert!(matches!(admin.update(99, &bad_price).await, Err(CatalogError::Validation(_))));
  assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_update_changes_submitted_fields_only_on_target() {
  setup_tracing();
  let (_store, admin) = service();
  admin.create(&form("ក", "first", "1")).await.unwrap();
  admin.create(&t_shirt_form()).await.unwrap();

  let mut edit = ProductForm::from_product(&admin.load(2).await.unwrap());
  edit.price = Some("18".to_string());
  edit.store = Some("ផ្សារធំថ្មី".to_string());
  let updated = admin.update(2, &edit).await.unwrap();

  assert_eq!(updated.id, 2);
  assert_eq!(updated.name_kh, "អាវយឺត");
  assert_eq!(updated.price, 18.0);
  assert_eq!(updated.store.as_deref(), Some("ផ្សារធំថ្មី"));
  assert_eq!(admin.load(1).await.unwrap().name_en, "first");
}

#[tokio::test]
async fn test_load_and_delete_report_missing_records() {
  setup_tracing();
  let (_store, admin) = service();
  assert!(matches!(admin.load(1).await, Err(CatalogError::NotFound(1))));
  assert!(!admin.delete(1).await.unwrap());
}

#[tokio::test]
async fn test_storefront_lists_everything_in_order() {
  setup_tracing();
  let (store, admin) = service();
  let storefront = Storefront::new(store.clone());
  assert!(storefront.listing().await.unwrap().is_empty());

  for n in ["a", "b", "c"] {
    admin.create(&form("ក", n, "1")).await.unwrap();
  }
  let names: Vec<_> = storefront.listing().await.unwrap().into_iter().map(|p| p.name_en).collect();
  assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_storage_failure_surfaces_as_unavailable() {
  setup_tracing();
  let (_dir, json) = temp_json_store();
  std::fs::write(json.path(), "not json").unwrap();
  let admin = AdminService::new(Arc::new(json));

  assert!(matches!(admin.list().await, Err(CatalogError::StorageUnavailable(_))));
  // Validation still runs first, so a bad form never reaches the broken file.
  assert!(matches!(
    admin.create(&ProductForm::default()).await,
    Err(CatalogError::Validation(_))
  ));
  assert!(matches!(admin.create(&t_shirt_form()).await, Err(CatalogError::StorageUnavailable(_))));
}
