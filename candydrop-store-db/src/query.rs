// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Read query operations for the catalog database.
//!
//! Storage order is ascending `candydrops.id`; every query that does not
//! sort on something else returns rows in that order, and sorted queries
//! fall back to it for ties.

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::{OptionalExtension, Params, params, params_from_iter};

use crate::connection::CatalogDb;
use crate::error::Result;
use crate::schema::CANDYDROP_SELECT;
use crate::types::{CandyDrop, Lookup, LookupKind};

/// Labels bound per statement; SQLite caps host parameters at 32766.
const LABELS_PER_QUERY: usize = 500;

impl CatalogDb {
    fn query_candy_drops<P: Params>(&self, clause: &str, params: P) -> Result<Vec<CandyDrop>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{CANDYDROP_SELECT} {clause}"))?;

        let mut drops = Vec::new();
        let mut rows = stmt.query(params)?;
        while let Some(row) = rows.next()? {
            drops.push(CandyDrop::from_row(row)?);
        }
        Ok(drops)
    }

    /// Every candy drop, in storage order.
    pub fn all_candy_drops(&self) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops("ORDER BY d.id", [])
    }

    /// Look up a single candy drop by ID.
    pub fn candy_drop(&self, id: i64) -> Result<Option<CandyDrop>> {
        let mut drops = self.query_candy_drops("WHERE d.id = ?1", params![id])?;
        Ok(drops.pop())
    }

    /// Count the number of candy drops.
    pub fn count_candy_drops(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM candydrops", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Candy drops whose color label is exactly `label`.
    pub fn candy_drops_by_color(&self, label: &str) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops("WHERE c.name = ?1 ORDER BY d.id", params![label])
    }

    /// Candy drops whose color label is any of `labels`.
    ///
    /// An empty label set matches nothing. Large sets are queried in
    /// batches and merged back into storage order.
    pub fn candy_drops_by_any_color<I, S>(&self, labels: I) -> Result<Vec<CandyDrop>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_owned())
            .collect();
        if labels.is_empty() {
            return Ok(Vec::new());
        }

        let labels: Vec<String> = labels.into_iter().collect();
        let mut matched = BTreeMap::new();
        for chunk in labels.chunks(LABELS_PER_QUERY) {
            let placeholders = (1..=chunk.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            for drop in self.query_candy_drops(
                &format!("WHERE c.name IN ({placeholders}) ORDER BY d.id"),
                params_from_iter(chunk.iter()),
            )? {
                matched.insert(drop.id, drop);
            }
        }
        Ok(matched.into_values().collect())
    }

    /// Candy drops whose color label is not `label`, sorted by name.
    pub fn candy_drops_excluding_color(&self, label: &str) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops(
            "WHERE c.name != ?1 ORDER BY d.name COLLATE BINARY ASC, d.id",
            params![label],
        )
    }

    /// Candy drops whose name starts with `prefix` (case-sensitive).
    pub fn candy_drops_name_starts_with(&self, prefix: &str) -> Result<Vec<CandyDrop>> {
        // LIKE is case-insensitive and treats % and _ as wildcards; compare
        // the leading characters instead.
        self.query_candy_drops(
            "WHERE substr(d.name, 1, length(?1)) = ?1 ORDER BY d.id",
            params![prefix],
        )
    }

    /// Candy drops whose name contains `fragment` (case-sensitive).
    pub fn candy_drops_name_contains(&self, fragment: &str) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops("WHERE instr(d.name, ?1) > 0 ORDER BY d.id", params![fragment])
    }

    /// Candy drops lighter than `threshold` grams, lightest first.
    pub fn candy_drops_lighter_than(&self, threshold: i64) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops(
            "WHERE d.weight < ?1 ORDER BY d.weight ASC, d.id",
            params![threshold],
        )
    }

    /// Candy drops with `low <= weight <= high`, in storage order.
    pub fn candy_drops_weight_between(&self, low: i64, high: i64) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops(
            "WHERE d.weight >= ?1 AND d.weight <= ?2 ORDER BY d.id",
            params![low, high],
        )
    }

    /// The `n` heaviest candy drops, heaviest first.
    ///
    /// Equal weights keep storage order. `n <= 0` yields an empty list.
    pub fn heaviest_candy_drops(&self, n: i64) -> Result<Vec<CandyDrop>> {
        if n <= 0 {
            return Ok(Vec::new());
        }
        self.query_candy_drops("ORDER BY d.weight DESC, d.id LIMIT ?1", params![n])
    }

    /// A uniformly random candy drop, or `None` if the catalog is empty.
    pub fn random_candy_drop(&self) -> Result<Option<CandyDrop>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{CANDYDROP_SELECT} ORDER BY random() LIMIT 1"))?;
        Ok(stmt.query_row([], CandyDrop::from_row).optional()?)
    }

    /// Candy drops that reference the lookup row `id` of `kind`.
    pub fn candy_drops_referencing(&self, kind: LookupKind, id: i64) -> Result<Vec<CandyDrop>> {
        self.query_candy_drops(
            &format!("WHERE d.{} = ?1 ORDER BY d.id", kind.foreign_key()),
            params![id],
        )
    }

    /// All rows of one lookup table, in ID order.
    pub fn lookups(&self, kind: LookupKind) -> Result<Vec<Lookup>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT id, {} FROM {} ORDER BY id",
            kind.label_column(),
            kind.table()
        ))?;

        let mut lookups = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            lookups.push(Lookup {
                id: row.get(0)?,
                label: row.get(1)?,
            });
        }
        Ok(lookups)
    }

    /// Look up one lookup row by ID.
    pub fn lookup(&self, kind: LookupKind, id: i64) -> Result<Option<Lookup>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT id, {} FROM {} WHERE id = ?1",
            kind.label_column(),
            kind.table()
        ))?;

        let lookup = stmt
            .query_row(params![id], |row| {
                Ok(Lookup {
                    id: row.get(0)?,
                    label: row.get(1)?,
                })
            })
            .optional()?;
        Ok(lookup)
    }
}
