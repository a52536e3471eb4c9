// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database connection management.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{CANDYDROP_SCHEMA_SQL, LOOKUP_SCHEMA_SQL};

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-only access to an existing database
    ReadOnly,
    /// Read-write access to an existing database
    ReadWrite,
    /// Create new database if it doesn't exist, including the schema
    Create,
}

/// SQLite connection to the candy-drop catalog.
///
/// A `CatalogDb` wraps one connection and is meant to live for one request.
/// Readers on separate connections do not block each other (WAL mode);
/// writers are serialized by SQLite.
pub struct CatalogDb {
    pub(crate) conn: Connection,
}

impl CatalogDb {
    /// Open or create a database at a custom path.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let flags = match mode {
            OpenMode::ReadOnly => {
                if !path.exists() {
                    return Err(Error::DatabaseNotFound(path.to_owned()));
                }
                OpenFlags::SQLITE_OPEN_READ_ONLY
            }
            OpenMode::ReadWrite => {
                if !path.exists() {
                    return Err(Error::DatabaseNotFound(path.to_owned()));
                }
                OpenFlags::SQLITE_OPEN_READ_WRITE
            }
            OpenMode::Create => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        };

        let conn = Connection::open_with_flags(path, flags).map_err(|e| Error::DatabaseOpen {
            path: path.to_owned(),
            source: e,
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let db = Self { conn };

        match mode {
            OpenMode::Create => {
                db.configure_pragmas()?;
                db.create_schema()?;
            }
            OpenMode::ReadWrite => db.enforce_foreign_keys()?,
            OpenMode::ReadOnly => {}
        }

        debug!("Opened database at {} ({:?})", path.display(), mode);
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    ///
    /// The database is initialized with the full schema.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.configure_pragmas()?;
        db.create_schema()?;
        debug!("Created in-memory database");
        Ok(db)
    }

    /// Configure SQLite pragmas for optimal performance.
    fn configure_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
            "#,
        )?;
        Ok(())
    }

    // foreign_keys is per-connection, so every writer has to turn it on.
    fn enforce_foreign_keys(&self) -> Result<()> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    /// Create the database schema (lookup + candy-drop tables).
    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(LOOKUP_SCHEMA_SQL)?;
        self.conn.execute_batch(CANDYDROP_SCHEMA_SQL)?;
        debug!("Created database schema");
        Ok(())
    }

    /// Run `f` inside one read transaction so every query sees the same
    /// snapshot, even while other connections commit.
    pub fn snapshot<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }

    /// Get raw connection (for advanced usage).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Check if the database has the catalog tables.
    pub fn has_schema(&self) -> Result<bool> {
        let count: i32 = self.conn.query_row(
            r#"
            SELECT COUNT(*) FROM sqlite_master
            WHERE type='table'
              AND name IN ('colors', 'sournesses', 'strengths', 'types', 'candydrops')
            "#,
            [],
            |row| row.get(0),
        )?;
        Ok(count == 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");

        let err = CatalogDb::open(&path, OpenMode::ReadOnly).err().unwrap();
        assert!(matches!(err, Error::DatabaseNotFound(p) if p == path));
        assert!(!path.exists());
    }

    #[test]
    fn test_create_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candydrop.db");

        let db = CatalogDb::open(&path, OpenMode::Create).unwrap();
        assert!(db.has_schema().unwrap());
        drop(db);

        let db = CatalogDb::open(&path, OpenMode::ReadWrite).unwrap();
        assert!(db.has_schema().unwrap());
        let fk: i32 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
        let timeout: i64 = db
            .connection()
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000);
    }
}
