// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! SQLite catalog store for candy drops.
//!
//! This crate owns the persisted catalog: four lookup tables (colors,
//! sournesses, strengths, types) and the `candydrops` fact table that
//! references one row of each. On top of it sit the named read queries
//! used by the home page and the single validated insert used by the
//! add form.
//!
//! # Key Features
//!
//! - Named queries with typed parameters (filter by color, name, weight)
//! - Atomic, validated creation of candy drops
//! - Idempotent seeding of lookup reference data
//! - In-memory database for testing
//!
//! # Example
//!
//! ```ignore
//! use candydrop_store_db::{CatalogDb, OpenMode};
//!
//! let db = CatalogDb::open("candydrop.db", OpenMode::ReadWrite)?;
//! for drop in db.candy_drops_lighter_than(10)? {
//!     println!("{} ({} g, {})", drop.name, drop.weight, drop.color.label);
//! }
//! ```

mod connection;
mod error;
mod form;
mod query;
mod schema;
mod seed;
mod types;
mod write;

pub use connection::{CatalogDb, OpenMode};
pub use error::{Error, Result, ValidationError};
pub use form::CandyDropForm;
pub use seed::LookupSeed;
pub use types::*;
pub use write::NewCandyDrop;
