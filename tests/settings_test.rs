//! Tests for the settings store

use tempfile::NamedTempFile;

use maktab::database::{init_db, Storage};
use maktab::model::{SettingsPatch, SiteSettings};
use maktab::store::settings::SLOT_SETTINGS;
use maktab::Bookstore;

fn setup_store() -> (Bookstore, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_db.path().to_str().unwrap();
    let db = init_db(db_path).expect("Failed to initialize test database");
    (Bookstore::new(Storage::new(db)), temp_db)
}

#[test]
fn test_first_read_persists_defaults() {
    let (store, _temp_db) = setup_store();

    let settings = store.settings().get();
    assert_eq!(settings, SiteSettings::default());
    assert_eq!(settings.site_name, "مکتب شریف");
    assert_eq!(settings.free_shipping_threshold, 500_000);
    assert!(store.storage().get_item(SLOT_SETTINGS).unwrap().is_some());
}

#[test]
fn test_partial_document_merged_with_defaults() {
    let (store, _temp_db) = setup_store();
    store
        .storage()
        .set_item(SLOT_SETTINGS, r#"{"siteName":"کتاب‌سرا","itemsPerPage":24}"#)
        .unwrap();

    let settings = store.settings().get();
    assert_eq!(settings.site_name, "کتاب‌سرا");
    assert_eq!(settings.items_per_page, 24);
    assert_eq!(settings.currency, "تومان");
    assert!(settings.enable_wishlist);
}

#[test]
fn test_save_merges_patch() {
    let (store, _temp_db) = setup_store();
    let settings = store.settings();

    let updated = settings.save(&SettingsPatch {
        contact_phone: Some("021-87654321".to_string()),
        enable_reviews: Some(false),
        ..SettingsPatch::default()
    });

    assert_eq!(updated.contact_phone, "021-87654321");
    assert!(!updated.enable_reviews);
    assert_eq!(updated.site_name, "مکتب شریف");
    assert_eq!(settings.get(), updated);
}

#[test]
fn test_reset_restores_defaults() {
    let (store, _temp_db) = setup_store();
    let settings = store.settings();

    settings.save(&SettingsPatch {
        free_shipping_threshold: Some(1_000_000),
        ..SettingsPatch::default()
    });
    assert_eq!(settings.get().free_shipping_threshold, 1_000_000);

    assert_eq!(settings.reset(), SiteSettings::default());
    assert_eq!(settings.get(), SiteSettings::default());
}

#[test]
fn test_unreadable_document_yields_defaults() {
    let (store, _temp_db) = setup_store();
    store.storage().set_item(SLOT_SETTINGS, "{broken").unwrap();

    assert_eq!(store.settings().get(), SiteSettings::default());
}
