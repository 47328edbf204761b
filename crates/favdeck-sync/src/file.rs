use crate::randomuser::parse_random_user_response;
use crate::source::{ContactSource, FetchReport};
use crate::Result;
use std::fs;
use std::path::PathBuf;

// Reads a saved API response from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ContactSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_contacts(&self) -> Result<FetchReport> {
        let body = fs::read_to_string(&self.path)?;
        parse_random_user_response(&body)
    }
}
