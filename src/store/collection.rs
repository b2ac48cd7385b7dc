//! Generic slot-backed collection
//!
//! Every entity store keeps its records as one JSON array under one slot and
//! follows the same read/seed/overwrite cycle. Storage failures never reach
//! the caller: reads fall back to seed data and writes become no-ops, with a
//! warning in the log.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, warn};

use crate::database::Storage;

/// A record type persisted as a JSON array under a fixed slot
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage slot holding the collection
    const SLOT: &'static str;

    fn id(&self) -> &str;

    /// Collection written to the slot on first access
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

pub struct Collection<R> {
    storage: Storage,
    _record: PhantomData<R>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            _record: PhantomData,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Reads the whole collection
    ///
    /// An empty slot is filled with [`Record::seed`] and the seed returned.
    /// An empty seed is never written, so the slot stays missing until the
    /// first real save. A slot that cannot be read or parsed yields the seed
    /// without touching the stored value.
    pub fn all(&self) -> Vec<R> {
        match self.storage.load_json::<Vec<R>>(R::SLOT) {
            Ok(Some(records)) => records,
            Ok(None) => {
                let seed = R::seed();
                if !seed.is_empty() {
                    debug!(slot = R::SLOT, count = seed.len(), "seeding empty slot");
                    self.save(&seed);
                }
                seed
            }
            Err(e) => {
                warn!(slot = R::SLOT, error = %e, "unreadable slot, using seed data");
                R::seed()
            }
        }
    }

    /// Overwrites the slot with `records`
    pub fn save(&self, records: &[R]) {
        match self.storage.save_json(R::SLOT, records) {
            Ok(()) => debug!(slot = R::SLOT, count = records.len(), "slot saved"),
            Err(e) => warn!(slot = R::SLOT, error = %e, "failed to save slot"),
        }
    }

    pub fn get(&self, id: &str) -> Option<R> {
        self.all().into_iter().find(|r| r.id() == id)
    }

    /// Appends `record` and persists the collection
    pub fn insert(&self, record: R) -> R {
        let mut records = self.all();
        records.push(record.clone());
        self.save(&records);
        record
    }

    /// Shallow-merges `patch` into the record with the given id
    ///
    /// Every field the patch serializes replaces the stored field; everything
    /// else is kept. Returns `None` when no record has the id.
    pub fn update<P: Serialize>(&self, id: &str, patch: &P) -> Option<R> {
        let mut records = self.all();
        let record = records.iter_mut().find(|r| r.id() == id)?;

        let merged = match merge(&*record, patch) {
            Ok(merged) => merged,
            Err(e) => {
                warn!(slot = R::SLOT, id, error = %e, "patch does not fit record");
                return None;
            }
        };
        *record = merged.clone();
        self.save(&records);
        Some(merged)
    }

    /// Applies `change` to the record with the given id and persists it
    pub fn modify(&self, id: &str, change: impl FnOnce(&mut R)) -> Option<R> {
        let mut records = self.all();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        change(record);
        let updated = record.clone();
        self.save(&records);
        Some(updated)
    }

    /// Removes the record with the given id
    ///
    /// Returns `false` without writing when nothing matched.
    pub fn delete(&self, id: &str) -> bool {
        let records = self.all();
        let before = records.len();
        let kept: Vec<R> = records.into_iter().filter(|r| r.id() != id).collect();
        if kept.len() == before {
            return false;
        }
        self.save(&kept);
        true
    }

    /// Timestamp-derived id (epoch milliseconds) not yet used in the collection
    pub fn next_id(&self) -> String {
        let records = self.all();
        let mut candidate = Utc::now().timestamp_millis();
        while records.iter().any(|r| r.id() == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

/// Overlays the fields serialized by `patch` onto `base`
pub fn merge<R, P>(base: &R, patch: &P) -> Result<R, serde_json::Error>
where
    R: Serialize + DeserializeOwned,
    P: Serialize,
{
    let mut value = serde_json::to_value(base)?;
    if let (Value::Object(target), Value::Object(fields)) = (&mut value, serde_json::to_value(patch)?) {
        target.extend(fields);
    }
    serde_json::from_value(value)
}

/// Id of the form `{prefix}{millis}_{9 random lowercase alphanumerics}`
pub fn random_id(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{}{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}
