pub mod contact_cache;
pub mod db;
pub mod error;
pub mod export;
pub mod favorites;
pub mod kv;
pub mod migrate;
pub mod paths;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub use contact_cache::ContactCache;
pub use favorites::FavoritesStore;
pub use kv::{KeyValueStore, MemoryKv};

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn kv(&self) -> kv::KvRepo<'_> {
        kv::KvRepo::new(&self.conn)
    }

    pub fn favorites(&self) -> FavoritesStore<&Self> {
        FavoritesStore::new(self)
    }

    pub fn contact_cache(&self) -> ContactCache<&Self> {
        ContactCache::new(self)
    }
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.kv().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.kv().set(key, value)
    }
}
