// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Write operations for the catalog database.
//!
//! Candy drops are only ever created; there is no update or delete.

use rusqlite::{TransactionBehavior, params};
use tracing::debug;

use crate::connection::CatalogDb;
use crate::error::{Result, ValidationError};
use crate::schema::CANDYDROP_SELECT;
use crate::types::{CandyDrop, LookupKind};

/// Parameters for creating a new candy drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandyDrop {
    pub name: String,
    /// Weight in grams, must be positive
    pub weight: i64,
    /// Material cost in the smallest currency unit, must not be negative
    pub material_cost: i64,
    pub color_id: i64,
    pub sourness_id: i64,
    pub strength_id: i64,
    pub type_id: i64,
}

impl NewCandyDrop {
    /// The referenced lookup ID of the given kind.
    pub fn reference(&self, kind: LookupKind) -> i64 {
        match kind {
            LookupKind::Color => self.color_id,
            LookupKind::Sourness => self.sourness_id,
            LookupKind::Strength => self.strength_id,
            LookupKind::Type => self.type_id,
        }
    }

    /// Check the scalar fields; references are checked against the store.
    pub fn check(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.weight <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "weight",
                value: self.weight,
            });
        }
        if self.material_cost < 0 {
            return Err(ValidationError::OutOfRange {
                field: "material_cost",
                value: self.material_cost,
            });
        }
        Ok(())
    }
}

impl CatalogDb {
    /// Validate and insert a new candy drop.
    ///
    /// Reference resolution and the insert run in one immediate transaction,
    /// so either the whole record is stored or nothing is. Returns the stored
    /// record with its labels resolved.
    pub fn create_candy_drop(&mut self, new: &NewCandyDrop) -> Result<CandyDrop> {
        new.check()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        for kind in LookupKind::ALL {
            let id = new.reference(kind);
            let exists = tx
                .prepare_cached(&format!("SELECT 1 FROM {} WHERE id = ?1", kind.table()))?
                .exists(params![id])?;
            if !exists {
                return Err(ValidationError::UnresolvedReference { kind, id }.into());
            }
        }

        tx.execute(
            r#"
            INSERT INTO candydrops (name, weight, material_cost, color_id, sourness_id, strength_id, type_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                new.name,
                new.weight,
                new.material_cost,
                new.color_id,
                new.sourness_id,
                new.strength_id,
                new.type_id,
            ],
        )?;

        let id = tx.last_insert_rowid();
        let created = tx.query_row(
            &format!("{CANDYDROP_SELECT} WHERE d.id = ?1"),
            params![id],
            CandyDrop::from_row,
        )?;

        tx.commit()?;
        debug!("Created candy drop {} ({})", created.id, created.name);
        Ok(created)
    }
}
