//! The [`RecordStore`] trait and its SQLite implementation.

use std::time::Duration;

use ds_core::{Dimensions, Error, Result};
use rusqlite::Connection;

use crate::models::ImageRecord;
use crate::{connection, queries, schema};

/// Storage for image records keyed by filename.
///
/// Each operation is a single statement with no retries; failures are
/// returned to the caller unchanged.
pub trait RecordStore {
    /// Create the image table if it is absent.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert one record. Fails with [`Error::Constraint`] if the filename
    /// is already registered.
    fn insert(&self, filename: &str, dimensions: Dimensions) -> Result<ImageRecord>;

    /// Look up a record by exact filename. Fails with [`Error::NotFound`]
    /// if there is none.
    fn fetch(&self, filename: &str) -> Result<ImageRecord>;
}

/// A [`RecordStore`] owning a single SQLite connection.
///
/// The connection is closed when the store is dropped; call
/// [`SqliteStore::close`] to observe close errors.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database named by `url`.
    pub fn open(url: &str, busy_timeout: Duration) -> Result<Self> {
        let conn = connection::open(url, busy_timeout)?;
        Ok(Self { conn })
    }

    /// Open a private in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = connection::open_memory()?;
        Ok(Self { conn })
    }

    /// Close the connection, reporting any failure.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::connection(e))
    }
}

impl RecordStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.conn)
    }

    fn insert(&self, filename: &str, dimensions: Dimensions) -> Result<ImageRecord> {
        queries::images::insert_image(&self.conn, filename, dimensions)
    }

    fn fetch(&self, filename: &str) -> Result<ImageRecord> {
        queries::images::get_image(&self.conn, filename)?
            .ok_or_else(|| Error::not_found("image", filename))
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("path", &self.conn.path())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn ensure_schema_twice() {
        let store = SqliteStore::open_memory().unwrap();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
    }

    #[test]
    fn round_trip() {
        let store = SqliteStore::open_memory().unwrap();
        store.ensure_schema().unwrap();

        store.insert("photo.png", dims(100, 200)).unwrap();
        let record = store.fetch("photo.png").unwrap();
        assert_eq!(record.dimensions, dims(100, 200));
    }

    #[test]
    fn fetch_missing_is_not_found() {
        let store = SqliteStore::open_memory().unwrap();
        store.ensure_schema().unwrap();

        let err = store.fetch("missing.png").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "image not found: missing.png");
    }

    #[test]
    fn duplicate_keeps_original() {
        let store = SqliteStore::open_memory().unwrap();
        store.ensure_schema().unwrap();

        store.insert("cat.jpg", dims(640, 480)).unwrap();
        let err = store.insert("cat.jpg", dims(10, 10)).unwrap_err();
        assert!(matches!(err, Error::Constraint { .. }));
        assert_eq!(store.fetch("cat.jpg").unwrap().dimensions, dims(640, 480));
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.db");
        let url = path.to_str().unwrap();

        let store = SqliteStore::open(url, Duration::from_secs(1)).unwrap();
        store.ensure_schema().unwrap();
        store.insert("cat.jpg", dims(640, 480)).unwrap();
        store.close().unwrap();

        let store = SqliteStore::open(url, Duration::from_secs(1)).unwrap();
        assert_eq!(store.fetch("cat.jpg").unwrap().dimensions, dims(640, 480));
    }

    #[test]
    fn close_memory_store() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.close().is_ok());
    }
}
