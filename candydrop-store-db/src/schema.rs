// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database schema definitions for the candy-drop catalog.
//!
//! Table and column names match the databases written by the earlier
//! Flask/SQLAlchemy application, so an existing `candydrop.db` opens as-is.

/// Lookup tables (reference data)
pub const LOOKUP_SCHEMA_SQL: &str = r#"
create table if not exists colors (
    id   integer primary key not null,
    name text not null
);

create table if not exists sournesses (
    id    integer primary key not null,
    value text not null
);

create table if not exists strengths (
    id    integer primary key not null,
    value text not null
);

create table if not exists types (
    id   integer primary key not null,
    name text not null
);
"#;

/// Candy-drop fact table and its indexes
pub const CANDYDROP_SCHEMA_SQL: &str = r#"
create table if not exists candydrops (
    id            integer primary key autoincrement not null,
    name          text not null check (length(name) > 0),
    weight        integer not null check (weight > 0),
    material_cost integer not null check (material_cost >= 0),
    color_id      integer not null,
    sourness_id   integer not null,
    strength_id   integer not null,
    type_id       integer not null,
    foreign key (color_id) references colors(id) on delete restrict,
    foreign key (sourness_id) references sournesses(id) on delete restrict,
    foreign key (strength_id) references strengths(id) on delete restrict,
    foreign key (type_id) references types(id) on delete restrict
);

create index if not exists IndexCandyDropColor on candydrops(color_id);
create index if not exists IndexCandyDropSourness on candydrops(sourness_id);
create index if not exists IndexCandyDropStrength on candydrops(strength_id);
create index if not exists IndexCandyDropType on candydrops(type_id);
create index if not exists IndexCandyDropWeight on candydrops(weight);
"#;

/// Projection shared by every candy-drop query.
///
/// Columns 0..=3 are the scalar fields, then one `(id, label)` pair per
/// lookup kind in [`crate::LookupKind::ALL`] order. Callers append their own
/// `WHERE` / `ORDER BY` clauses.
pub(crate) const CANDYDROP_SELECT: &str = r#"
SELECT d.id, d.name, d.weight, d.material_cost,
       c.id, c.name,
       so.id, so.value,
       st.id, st.value,
       t.id, t.name
FROM candydrops d
JOIN colors c ON d.color_id = c.id
JOIN sournesses so ON d.sourness_id = so.id
JOIN strengths st ON d.strength_id = st.id
JOIN types t ON d.type_id = t.id
"#;
