pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{filter_contacts, ContactSearch};
pub use rules::*;
