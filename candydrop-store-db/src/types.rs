// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database row types for the candy-drop catalog.

use std::fmt;

use rusqlite::Row;
use serde::Serialize;

/// The four lookup tables a candy drop references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Color,
    Sourness,
    Strength,
    Type,
}

impl LookupKind {
    /// Every kind, in the column order used by candy-drop queries.
    pub const ALL: [LookupKind; 4] = [
        LookupKind::Color,
        LookupKind::Sourness,
        LookupKind::Strength,
        LookupKind::Type,
    ];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            LookupKind::Color => "colors",
            LookupKind::Sourness => "sournesses",
            LookupKind::Strength => "strengths",
            LookupKind::Type => "types",
        }
    }

    /// Column holding the display label.
    ///
    /// Colors and types call it `name`, sournesses and strengths `value`.
    pub fn label_column(self) -> &'static str {
        match self {
            LookupKind::Color | LookupKind::Type => "name",
            LookupKind::Sourness | LookupKind::Strength => "value",
        }
    }

    /// Foreign key column on `candydrops`.
    pub fn foreign_key(self) -> &'static str {
        match self {
            LookupKind::Color => "color_id",
            LookupKind::Sourness => "sourness_id",
            LookupKind::Strength => "strength_id",
            LookupKind::Type => "type_id",
        }
    }

    /// Form field name carrying a reference of this kind.
    pub fn field(self) -> &'static str {
        match self {
            LookupKind::Color => "color",
            LookupKind::Sourness => "sourness",
            LookupKind::Strength => "strength",
            LookupKind::Type => "type",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// A row of one of the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    /// Database row ID
    pub id: i64,
    /// Display label (e.g. "Rød", "Mild")
    pub label: String,
}

/// A candy drop with its four category references resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandyDrop {
    /// Database row ID; ascending IDs are storage order
    pub id: i64,
    pub name: String,
    /// Weight in grams
    pub weight: i64,
    /// Material cost in the smallest currency unit
    pub material_cost: i64,
    pub color: Lookup,
    pub sourness: Lookup,
    pub strength: Lookup,
    #[serde(rename = "type")]
    pub kind: Lookup,
}

impl CandyDrop {
    /// The referenced lookup row of the given kind.
    pub fn category(&self, kind: LookupKind) -> &Lookup {
        match kind {
            LookupKind::Color => &self.color,
            LookupKind::Sourness => &self.sourness,
            LookupKind::Strength => &self.strength,
            LookupKind::Type => &self.kind,
        }
    }

    /// Build from a row produced by [`crate::schema::CANDYDROP_SELECT`].
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(CandyDrop {
            id: row.get(0)?,
            name: row.get(1)?,
            weight: row.get(2)?,
            material_cost: row.get(3)?,
            color: Lookup {
                id: row.get(4)?,
                label: row.get(5)?,
            },
            sourness: Lookup {
                id: row.get(6)?,
                label: row.get(7)?,
            },
            strength: Lookup {
                id: row.get(8)?,
                label: row.get(9)?,
            },
            kind: Lookup {
                id: row.get(10)?,
                label: row.get(11)?,
            },
        })
    }
}
