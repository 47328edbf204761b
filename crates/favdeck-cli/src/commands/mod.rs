use anyhow::Result;
use favdeck_config::AppConfig;
use favdeck_core::domain::{Contact, ContactId};
use favdeck_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod export;
pub mod favorites;
pub mod stats;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    // Cached batch first, then the snapshot kept with an existing favorite.
    pub fn resolve_contact(&self, id: &ContactId) -> Option<Contact> {
        if let Some(contact) = self.store.contact_cache().find(id) {
            return Some(contact);
        }
        self.store
            .favorites()
            .get(id)
            .map(|record| Contact {
                id: record.contact.id,
                name: record.contact.name,
                email: record.contact.email,
                phone: record.contact.phone,
                picture: record.contact.picture,
                dob: None,
                location: None,
            })
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
