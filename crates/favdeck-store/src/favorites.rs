//! Favorites persisted as one JSON blob in a key-value layer.
//!
//! Every mutation reads the whole collection, edits it and writes it back.
//! There is no locking: two writers interleaving on the same layer lose the
//! earlier write. A mutation whose read fails writes nothing. The `try_*`
//! methods report failures; `add`, `remove`, `list` and `contains` log them
//! and carry on.

use crate::error::{Result, StoreError};
use crate::export;
use crate::kv::KeyValueStore;
use favdeck_core::domain::{Contact, ContactId, ContactSnapshot, FavoriteRecord};
use favdeck_core::time::now_millis;
use std::path::Path;
use tracing::warn;

pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore<K> {
    kv: K,
}

impl<K: KeyValueStore> FavoritesStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn try_list(&self) -> Result<Vec<FavoriteRecord>> {
        match self.kv.get(FAVORITES_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(|source| StoreError::Corrupt {
                key: FAVORITES_KEY.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub fn list(&self) -> Vec<FavoriteRecord> {
        match self.try_list() {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "error loading favorites");
                Vec::new()
            }
        }
    }

    pub fn get(&self, user_id: &ContactId) -> Option<FavoriteRecord> {
        self.list()
            .into_iter()
            .find(|record| &record.user_id == user_id)
    }

    pub fn contains(&self, user_id: &ContactId) -> bool {
        self.list().iter().any(|record| &record.user_id == user_id)
    }

    pub fn try_add_at(
        &self,
        user_id: ContactId,
        contact: ContactSnapshot,
        now_ms: i64,
    ) -> Result<FavoriteRecord> {
        let mut records = self.load_for_write()?;
        records.retain(|record| record.user_id != user_id);
        let record = FavoriteRecord::new(user_id, contact, now_ms);
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    pub fn add_at(&self, user_id: ContactId, contact: ContactSnapshot, now_ms: i64) {
        let id = user_id.clone();
        if let Err(err) = self.try_add_at(user_id, contact, now_ms) {
            warn!(user_id = %id, error = %err, "error saving favorite");
        }
    }

    pub fn add(&self, user_id: ContactId, contact: ContactSnapshot) {
        self.add_at(user_id, contact, now_millis());
    }

    pub fn try_remove(&self, user_id: &ContactId) -> Result<()> {
        let mut records = self.load_for_write()?;
        records.retain(|record| &record.user_id != user_id);
        self.save(&records)
    }

    pub fn remove(&self, user_id: &ContactId) {
        if let Err(err) = self.try_remove(user_id) {
            warn!(user_id = %user_id, error = %err, "error removing favorite");
        }
    }

    /// Flips the favorite state of `contact` and returns the state the caller
    /// asked for. Persistence failures are logged, not reported.
    pub fn toggle_at(&self, contact: &Contact, now_ms: i64) -> bool {
        if self.contains(&contact.id) {
            self.remove(&contact.id);
            false
        } else {
            self.add_at(contact.id.clone(), ContactSnapshot::from(contact), now_ms);
            true
        }
    }

    pub fn toggle(&self, contact: &Contact) -> bool {
        self.toggle_at(contact, now_millis())
    }

    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.list()).map_err(StoreError::Serialize)
    }

    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let records = self.list();
        let data = serde_json::to_string_pretty(&records).map_err(StoreError::Serialize)?;
        export::write_export(path, &data)?;
        Ok(records.len())
    }

    /// Current collection as the base of a mutation. A corrupt blob counts as
    /// empty and gets overwritten; a failed read aborts before anything is
    /// written.
    fn load_for_write(&self) -> Result<Vec<FavoriteRecord>> {
        match self.try_list() {
            Err(StoreError::Corrupt { .. }) => Ok(Vec::new()),
            other => other,
        }
    }

    fn save(&self, records: &[FavoriteRecord]) -> Result<()> {
        let blob = serde_json::to_string(records).map_err(StoreError::Serialize)?;
        self.kv.set(FAVORITES_KEY, &blob)
    }
}
