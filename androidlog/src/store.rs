//! Best-effort SQLite mirror of logged lines.
//!
//! Each application keeps its mirror at
//! `<data root>/<package>/databases/log.db`, the conventional location of an
//! app's private databases. The database and its table are owned by the
//! application:
//!
//! ```sql
//! CREATE TABLE log (tag TEXT, level INTEGER, msg TEXT);
//! ```
//!
//! This module only ever inserts into it. A connection is opened for one
//! record and closed again right after; there is no pooling and no schema
//! management.

use crate::error::StoreError;
use crate::priority::Priority;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory holding each installed application's private data.
pub const DEFAULT_DATA_ROOT: &str = "/data/data";

const INSERT_RECORD: &str = "INSERT INTO log (tag, level, msg) VALUES (?1, ?2, ?3)";

/// How long an insert waits on a database locked by another writer.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// One mirrored log line, as stored in the `log` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub tag: String,
    pub level: i32,
    pub msg: String,
}

impl LogRecord {
    pub fn new(tag: &str, priority: Priority, msg: &str) -> Self {
        Self {
            tag: tag.to_string(),
            level: priority.as_i32(),
            msg: msg.to_string(),
        }
    }
}

/// Location of the log database for `package` below `data_root`.
///
/// Leading slashes are dropped from `package` so the result always stays
/// under `data_root`.
pub fn store_path(data_root: &Path, package: &str) -> PathBuf {
    data_root
        .join(package.trim_start_matches('/'))
        .join("databases")
        .join("log.db")
}

/// Somewhere log records can be persisted.
///
/// The logger calls [`persist`](RecordStore::persist) once per line when a
/// package name is configured and reports, but otherwise ignores, any error.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Store `record` in the database belonging to `package`.
    fn persist(&self, package: &str, record: &LogRecord) -> Result<(), StoreError>;
}

/// [`RecordStore`] backed by the per-application SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    data_root: PathBuf,
}

impl Default for SqliteRecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_ROOT)
    }
}

impl SqliteRecordStore {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Open the log database of `package`.
    ///
    /// An empty package name means persistence is off and yields `Ok(None)`.
    pub fn open(&self, package: &str) -> Result<Option<Connection>, StoreError> {
        if package.is_empty() {
            return Ok(None);
        }

        let path = store_path(&self.data_root, package);
        let conn = Connection::open(&path).map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|source| StoreError::Open { path, source })?;

        Ok(Some(conn))
    }

    /// Insert a single record into the `log` table.
    pub fn insert(conn: &Connection, record: &LogRecord) -> Result<(), StoreError> {
        let mut stmt = conn.prepare(INSERT_RECORD).map_err(StoreError::Prepare)?;
        stmt.execute(params![record.tag, record.level, record.msg])
            .map_err(StoreError::Insert)?;
        Ok(())
    }
}

impl RecordStore for SqliteRecordStore {
    fn persist(&self, package: &str, record: &LogRecord) -> Result<(), StoreError> {
        let Some(conn) = self.open(package)? else {
            return Ok(());
        };

        let inserted = Self::insert(&conn, record);
        let closed = conn.close().map_err(|(_, e)| StoreError::Close(e));
        settle(inserted, closed)
    }
}

/// Outcome of one persist call. An insert failure outranks a close failure;
/// a close failure after a good insert is still surfaced.
fn settle(
    inserted: Result<(), StoreError>,
    closed: Result<(), StoreError>,
) -> Result<(), StoreError> {
    inserted.and(closed)
}
