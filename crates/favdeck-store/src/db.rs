use crate::error::Result;
use crate::paths;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

// Each CLI invocation is one short-lived writer; WAL keeps a concurrent reader
// from blocking it.
const FILE_PRAGMAS: &[(&str, &str)] = &[("journal_mode", "WAL"), ("synchronous", "NORMAL")];
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

pub fn open(path: &Path) -> Result<Connection> {
    paths::ensure_parent_dir(path)?;
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)?;
    paths::restrict_file_permissions(path)?;
    for (name, value) in FILE_PRAGMAS {
        conn.pragma_update(None, name, value)?;
    }
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    Ok(Connection::open_in_memory()?)
}

#[cfg(test)]
mod tests {
    use super::open;
    use tempfile::TempDir;

    #[test]
    fn open_creates_parent_dirs_and_uses_wal() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("favdeck.sqlite3");
        let conn = open(&path).expect("open");
        assert!(path.exists());

        let mode: String = conn
            .pragma_query_value(None, "journal_mode", |row| row.get(0))
            .expect("journal mode");
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[cfg(unix)]
    #[test]
    fn open_restricts_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("favdeck.sqlite3");
        open(&path).expect("open");
        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
