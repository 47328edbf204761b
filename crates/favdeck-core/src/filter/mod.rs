mod search;

pub use search::{filter_contacts, ContactSearch};
