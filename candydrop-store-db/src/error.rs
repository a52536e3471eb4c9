// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Error types for catalog database operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::LookupKind;

/// Result type for catalog database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during catalog database operations.
///
/// [`Error::Validation`] is the caller's fault and will not succeed on retry;
/// every other variant comes from the storage layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before or during a write
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Database file not found
    #[error("Database not found at: {0}")]
    DatabaseNotFound(PathBuf),
}

impl Error {
    /// Whether this error was caused by the input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Reasons a candy drop cannot be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' is not an integer: '{value}'")]
    Malformed { field: &'static str, value: String },

    #[error("field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("{kind} with id {id} does not exist")]
    UnresolvedReference { kind: LookupKind, id: i64 },
}
