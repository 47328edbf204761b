use crate::domain::contact::{Contact, ContactName, Picture};
use crate::domain::ids::ContactId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    pub id: ContactId,
    pub name: ContactName,
    pub email: String,
    pub phone: String,
    pub picture: Picture,
}

impl ContactSnapshot {
    pub fn display_name(&self) -> String {
        self.name.full()
    }
}

impl From<&Contact> for ContactSnapshot {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            picture: contact.picture.clone(),
        }
    }
}

/// A favorited contact as persisted. `timestamp` is milliseconds since the
/// epoch and is set when the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub user_id: ContactId,
    pub timestamp: i64,
    pub contact: ContactSnapshot,
}

impl FavoriteRecord {
    pub fn new(user_id: ContactId, contact: ContactSnapshot, timestamp: i64) -> Self {
        Self {
            user_id,
            timestamp,
            contact,
        }
    }
}
