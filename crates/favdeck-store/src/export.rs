use crate::error::{Result, StoreError};
use crate::paths;
use std::fs;
use std::path::Path;

pub fn write_export(path: &Path, data: &str) -> Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Err(StoreError::InvalidExportPath(path.to_path_buf()));
    }
    paths::ensure_parent_dir(path)?;
    fs::write(path, data)?;
    paths::restrict_file_permissions(path)?;
    Ok(())
}
