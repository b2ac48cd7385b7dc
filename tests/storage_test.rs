//! Tests for the slot storage shim and the generic collection fallbacks

use tempfile::NamedTempFile;

use maktab::database::{init_db, init_in_memory, Storage};
use maktab::model::Book;
use maktab::seed;
use maktab::store::books::SLOT_BOOKS;
use maktab::{Bookstore, StoreError};

/// Helper function to create a storage handle over a temporary database
fn setup_storage() -> (Storage, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_db.path().to_str().unwrap();
    let db = init_db(db_path).expect("Failed to initialize test database");
    (Storage::new(db), temp_db)
}

#[test]
fn test_set_get_remove_item() {
    let (storage, _temp_db) = setup_storage();

    assert_eq!(storage.get_item("greeting").unwrap(), None);

    storage.set_item("greeting", "salam").unwrap();
    assert_eq!(storage.get_item("greeting").unwrap().as_deref(), Some("salam"));

    storage.set_item("greeting", "dorood").unwrap();
    assert_eq!(storage.get_item("greeting").unwrap().as_deref(), Some("dorood"));

    assert!(storage.remove_item("greeting").unwrap());
    assert!(!storage.remove_item("greeting").unwrap());
    assert_eq!(storage.get_item("greeting").unwrap(), None);
}

#[test]
fn test_load_json_rejects_malformed_document() {
    let (storage, _temp_db) = setup_storage();
    storage.set_item("numbers", "[1, 2,").unwrap();

    let result = storage.load_json::<Vec<u32>>("numbers");
    assert!(matches!(result, Err(StoreError::Serde(_))));
}

#[test]
fn test_json_round_trip_through_slot() {
    let (storage, _temp_db) = setup_storage();
    storage.save_json("numbers", &vec![3u32, 1, 4]).unwrap();

    let loaded: Option<Vec<u32>> = storage.load_json("numbers").unwrap();
    assert_eq!(loaded, Some(vec![3, 1, 4]));
}

#[test]
fn test_in_memory_database() {
    let storage = Storage::new(init_in_memory().expect("Failed to create in-memory database"));
    let store = Bookstore::new(storage);

    assert_eq!(store.books().all().len(), 8);
    assert!(store.storage().get_item(SLOT_BOOKS).unwrap().is_some());
}

#[test]
fn test_data_survives_reopen() {
    let temp_db = NamedTempFile::new().unwrap();
    let db_path = temp_db.path().to_str().unwrap().to_string();

    {
        let store = Bookstore::new(Storage::new(init_db(&db_path).unwrap()));
        assert!(store.books().delete("8"));
    }

    let store = Bookstore::new(Storage::new(init_db(&db_path).unwrap()));
    let books = store.books().all();
    assert_eq!(books.len(), 7);
    assert!(books.iter().all(|b| b.id != "8"));
}

#[test]
fn test_corrupt_slot_falls_back_to_seed_without_overwriting() {
    let (storage, _temp_db) = setup_storage();
    storage.set_item(SLOT_BOOKS, "not json").unwrap();

    let store = Bookstore::new(storage.clone());
    let books: Vec<Book> = store.books().all();

    assert_eq!(books, seed::books());
    assert_eq!(storage.get_item(SLOT_BOOKS).unwrap().as_deref(), Some("not json"));
}

#[test]
fn test_stored_json_uses_camel_case_keys() {
    let (storage, _temp_db) = setup_storage();
    let store = Bookstore::new(storage.clone());
    store.books().all();

    let raw = storage.get_item(SLOT_BOOKS).unwrap().unwrap();
    assert!(raw.contains("\"discountedPrice\":71200"));
    assert!(raw.contains("\"stockCount\":15"));
    assert!(!raw.contains("discounted_price"));
}
