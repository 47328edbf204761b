use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use favdeck_core::domain::{Contact, ContactId};
use tracing::warn;

pub const CONTACTS_KEY: &str = "contacts";

// Last fetched batch, replaced wholesale on every fetch.
pub struct ContactCache<K> {
    kv: K,
}

impl<K: KeyValueStore> ContactCache<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn save_batch(&self, contacts: &[Contact]) -> Result<()> {
        let blob = serde_json::to_string(contacts).map_err(StoreError::Serialize)?;
        self.kv.set(CONTACTS_KEY, &blob)
    }

    pub fn try_load_batch(&self) -> Result<Vec<Contact>> {
        match self.kv.get(CONTACTS_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(|source| StoreError::Corrupt {
                key: CONTACTS_KEY.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub fn load_batch(&self) -> Vec<Contact> {
        match self.try_load_batch() {
            Ok(contacts) => contacts,
            Err(err) => {
                warn!(error = %err, "error loading cached contacts");
                Vec::new()
            }
        }
    }

    pub fn find(&self, id: &ContactId) -> Option<Contact> {
        self.load_batch()
            .into_iter()
            .find(|contact| &contact.id == id)
    }
}
