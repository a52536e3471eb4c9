use std::path::{Path, PathBuf};

use actix_web::web;
use candydrop_store_db::{CatalogDb, LookupSeed, OpenMode};
use tracing::info;

use crate::error::Result;

/// Handle to the catalog database shared by all workers.
///
/// Holds only the path; every request opens its own connection on the
/// blocking pool, so SQLite decides who waits for whom.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the database and schema if needed, then seed lookup labels.
    pub fn initialize(&self, seed: &LookupSeed) -> Result<()> {
        let mut db = CatalogDb::open(&self.path, OpenMode::Create)?;
        if !seed.is_empty() {
            let inserted = db.seed_lookups(seed)?;
            info!("Seeded {inserted} new lookup labels");
        }
        Ok(())
    }

    /// Run a query on a fresh connection.
    pub async fn read<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogDb) -> candydrop_store_db::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        // Read-write so that a WAL database without a -shm file still opens;
        // the queries themselves never write.
        let path = self.path.clone();
        let result = web::block(move || {
            let db = CatalogDb::open(&path, OpenMode::ReadWrite)?;
            f(&db)
        })
        .await?;
        Ok(result?)
    }

    /// Run a write on a fresh connection.
    pub async fn write<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut CatalogDb) -> candydrop_store_db::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        let result = web::block(move || {
            let mut db = CatalogDb::open(&path, OpenMode::ReadWrite)?;
            f(&mut db)
        })
        .await?;
        Ok(result?)
    }
}
