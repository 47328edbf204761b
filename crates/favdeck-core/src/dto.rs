use crate::domain::{Contact, ContactId, FavoriteRecord};
use crate::rules::{ActivitySummary, HourBucket};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListItemDto {
    pub id: ContactId,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub favorite: bool,
}

impl ContactListItemDto {
    pub fn from_contact(contact: &Contact, favorite: bool) -> Self {
        Self {
            id: contact.id.clone(),
            display_name: contact.display_name(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailDto {
    #[serde(flatten)]
    pub contact: Contact,
    pub display_name: String,
    pub favorite: bool,
    pub favorited_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteListItemDto {
    pub user_id: ContactId,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub favorited_at: i64,
}

impl From<&FavoriteRecord> for FavoriteListItemDto {
    fn from(record: &FavoriteRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            display_name: record.contact.display_name(),
            email: record.contact.email.clone(),
            phone: record.contact.phone.clone(),
            favorited_at: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDto {
    pub buckets: Vec<HourBucket>,
    pub summary: ActivitySummary,
}
