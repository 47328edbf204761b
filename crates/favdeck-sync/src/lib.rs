pub mod error;
pub mod file;
pub mod randomuser;
pub mod source;

pub use error::{Result, SyncError};
pub use file::FileSource;
pub use randomuser::{parse_random_user_response, RandomUserSource};
pub use source::{ContactSource, FetchReport};
