// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Seeding of lookup reference data.
//!
//! Lookup rows are owned by whoever sets up the database, not by the query
//! or write layer. This is the hook bootstrap and tests use for it.

use rusqlite::params;
use serde::Deserialize;
use tracing::debug;

use crate::connection::CatalogDb;
use crate::error::Result;
use crate::types::LookupKind;

/// Labels to make sure exist in each lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSeed {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sournesses: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl LookupSeed {
    /// Labels for one lookup table.
    pub fn labels(&self, kind: LookupKind) -> &[String] {
        match kind {
            LookupKind::Color => &self.colors,
            LookupKind::Sourness => &self.sournesses,
            LookupKind::Strength => &self.strengths,
            LookupKind::Type => &self.types,
        }
    }

    pub fn is_empty(&self) -> bool {
        LookupKind::ALL
            .iter()
            .all(|&kind| self.labels(kind).is_empty())
    }
}

impl CatalogDb {
    /// Insert every seed label that is not already present.
    ///
    /// Runs in one transaction. Returns the number of rows inserted.
    pub fn seed_lookups(&mut self, seed: &LookupSeed) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;

        for kind in LookupKind::ALL {
            let sql = format!(
                "INSERT INTO {table} ({label}) SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM {table} WHERE {label} = ?1)",
                table = kind.table(),
                label = kind.label_column(),
            );
            let mut stmt = tx.prepare_cached(&sql)?;
            for label in seed.labels(kind) {
                inserted += stmt.execute(params![label])?;
            }
        }

        tx.commit()?;
        debug!("Seeded {inserted} lookup rows");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_idempotent() {
        let mut db = CatalogDb::open_memory().unwrap();
        let seed = LookupSeed {
            colors: vec!["Rød".into(), "Blå".into()],
            types: vec!["Lakrids".into()],
            ..Default::default()
        };

        assert_eq!(db.seed_lookups(&seed).unwrap(), 3);
        assert_eq!(db.seed_lookups(&seed).unwrap(), 0);

        let colors = db.lookups(LookupKind::Color).unwrap();
        let labels: Vec<_> = colors.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Rød", "Blå"]);
        assert!(db.lookups(LookupKind::Sourness).unwrap().is_empty());
    }

    #[test]
    fn test_empty_seed() {
        assert!(LookupSeed::default().is_empty());
        let seed = LookupSeed {
            strengths: vec!["Stærk".into()],
            ..Default::default()
        };
        assert!(!seed.is_empty());
        assert_eq!(seed.labels(LookupKind::Strength), ["Stærk".to_string()]);
    }
}
