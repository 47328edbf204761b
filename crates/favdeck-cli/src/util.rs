use crate::error::invalid_input;
use anyhow::Result;
use favdeck_core::domain::ContactId;

pub use favdeck_core::time::{format_timestamp_datetime, now_millis};

pub fn parse_contact_id(raw: &str) -> Result<ContactId> {
    ContactId::new(raw).map_err(|_| invalid_input("contact id cannot be empty"))
}

pub fn favorite_marker(favorite: bool) -> &'static str {
    if favorite {
        "*"
    } else {
        " "
    }
}
