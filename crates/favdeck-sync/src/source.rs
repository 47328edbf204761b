use crate::Result;
use favdeck_core::domain::Contact;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    pub contacts: Vec<Contact>,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

pub trait ContactSource {
    fn source_name(&self) -> &'static str;
    fn fetch_contacts(&self) -> Result<FetchReport>;
}
