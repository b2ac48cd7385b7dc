//! Database initialization and the local storage slot table
//!
//! The storefront keeps each entity collection under one named key, the way a
//! browser keeps values in `localStorage`. This module backs those keys with
//! an embedded redb database and exposes a small get/set/remove API over them.

use redb::backends::InMemoryBackend;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::StoreResult;

/// Table holding every storage slot
///
/// Key: Slot name (e.g. "admin-books")
/// Value: JSON document stored under that slot
///
/// Example:
/// - Key: "admin-orders"
/// - Value: '[{"id":"1001","customerName":"...","items":[...],...}]'
pub const TABLE_SLOTS: TableDefinition<&str, &str> = TableDefinition::new("slots_v1");

/// Handle to the slot table shared by all entity stores
///
/// Cloning is cheap; every clone points at the same database.
#[derive(Clone)]
pub struct Storage {
    /// Thread-safe reference to the embedded database
    pub db: Arc<Database>,
}

impl Storage {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Returns the raw value stored under `key`, if any
    pub fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_raw(key)?)
    }

    /// Overwrites the value stored under `key`
    pub fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(self.write_raw(key, value)?)
    }

    /// Removes `key`, returning whether it was present
    pub fn remove_item(&self, key: &str) -> StoreResult<bool> {
        Ok(self.remove_raw(key)?)
    }

    /// Reads and deserializes the JSON document stored under `key`
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - Nothing has been stored under the key yet
    /// * `Ok(Some(value))` - The decoded document
    /// * `Err(_)` - Database failure or a document that does not parse as `T`
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.read_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` to JSON and stores it under `key`
    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLE_SLOTS)?;
        let value = table.get(key)?.map(|guard| guard.value().to_string());
        Ok(value)
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(TABLE_SLOTS)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<bool, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(TABLE_SLOTS)?;
            let removed = table.remove(key)?.is_some();
            removed
        };
        write_txn.commit()?;
        Ok(existed)
    }
}

/// Initializes the embedded database and creates the slot table
///
/// This function:
/// 1. Creates or opens the database file at the specified path
/// 2. Opens the slot table so that later read transactions find it
/// 3. Commits the transaction to ensure the table is persisted
///
/// # Arguments
///
/// * `db_path` - File path where the database should be stored (e.g., "maktab.db")
///
/// # Example
///
/// ```no_run
/// # use maktab::database::{init_db, Storage};
/// let db = init_db("maktab.db").expect("Failed to initialize database");
/// let storage = Storage::new(db);
/// ```
pub fn init_db(db_path: &str) -> Result<Database, redb::Error> {
    let db = Database::create(db_path)?;
    create_tables(&db)?;
    Ok(db)
}

/// Creates a volatile database that lives only as long as the handle
pub fn init_in_memory() -> Result<Database, redb::Error> {
    let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
    create_tables(&db)?;
    Ok(db)
}

fn create_tables(db: &Database) -> Result<(), redb::Error> {
    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(TABLE_SLOTS)?;
    }
    write_txn.commit()?;
    Ok(())
}
