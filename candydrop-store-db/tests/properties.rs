// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Property tests for the catalog queries over arbitrary small catalogs.

use std::collections::BTreeSet;

use candydrop_store_db::{CandyDrop, CatalogDb, LookupKind, LookupSeed, NewCandyDrop};
use proptest::prelude::*;

const COLORS: [&str; 3] = ["Rød", "Blå", "Grøn"];

#[derive(Debug, Clone)]
struct Row {
    name: String,
    weight: i64,
    color: usize,
}

fn arb_row() -> impl Strategy<Value = Row> {
    ("[a-cA-C]{1,4}", 1i64..30, 0..COLORS.len()).prop_map(|(name, weight, color)| Row {
        name,
        weight,
        color,
    })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(arb_row(), 0..12)
}

fn build(rows: &[Row]) -> CatalogDb {
    let mut db = CatalogDb::open_memory().unwrap();
    db.seed_lookups(&LookupSeed {
        colors: COLORS.iter().map(|c| c.to_string()).collect(),
        sournesses: vec!["Mild".into()],
        strengths: vec!["Strong".into()],
        types: vec!["Gum".into()],
    })
    .unwrap();

    let colors = db.lookups(LookupKind::Color).unwrap();
    let first = |kind| db.lookups(kind).unwrap()[0].id;
    let (sourness_id, strength_id, type_id) = (
        first(LookupKind::Sourness),
        first(LookupKind::Strength),
        first(LookupKind::Type),
    );

    for row in rows {
        db.create_candy_drop(&NewCandyDrop {
            name: row.name.clone(),
            weight: row.weight,
            material_cost: 0,
            color_id: colors[row.color].id,
            sourness_id,
            strength_id,
            type_id,
        })
        .unwrap();
    }
    db
}

fn ids(drops: &[CandyDrop]) -> BTreeSet<i64> {
    drops.iter().map(|d| d.id).collect()
}

proptest! {
    #[test]
    fn excluding_and_matching_partition_all(rows in arb_catalog(), color in 0..COLORS.len()) {
        let db = build(&rows);
        let label = COLORS[color];

        let matching = ids(&db.candy_drops_by_color(label).unwrap());
        let excluding = ids(&db.candy_drops_excluding_color(label).unwrap());
        let all = ids(&db.all_candy_drops().unwrap());

        prop_assert!(matching.is_disjoint(&excluding));
        let union: BTreeSet<i64> = matching.union(&excluding).copied().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn any_of_single_label_equals_by_color(rows in arb_catalog(), color in 0..COLORS.len()) {
        let db = build(&rows);
        let label = COLORS[color];

        prop_assert_eq!(
            db.candy_drops_by_any_color([label]).unwrap(),
            db.candy_drops_by_color(label).unwrap()
        );
    }

    #[test]
    fn excluding_is_sorted_by_name(rows in arb_catalog(), color in 0..COLORS.len()) {
        let db = build(&rows);
        let drops = db.candy_drops_excluding_color(COLORS[color]).unwrap();

        for pair in drops.windows(2) {
            prop_assert!(pair[0].name.as_bytes() <= pair[1].name.as_bytes());
        }
    }

    #[test]
    fn lighter_than_is_sorted_and_complete(rows in arb_catalog(), threshold in 0i64..35) {
        let db = build(&rows);
        let drops = db.candy_drops_lighter_than(threshold).unwrap();

        for pair in drops.windows(2) {
            prop_assert!(pair[0].weight <= pair[1].weight);
        }
        prop_assert!(drops.iter().all(|d| d.weight < threshold));
        let expected = rows.iter().filter(|r| r.weight < threshold).count();
        prop_assert_eq!(drops.len(), expected);
    }

    #[test]
    fn weight_between_is_exact(rows in arb_catalog(), low in 0i64..35, high in 0i64..35) {
        let db = build(&rows);
        let drops = db.candy_drops_weight_between(low, high).unwrap();

        prop_assert!(drops.iter().all(|d| low <= d.weight && d.weight <= high));
        let expected: BTreeSet<i64> = db
            .all_candy_drops()
            .unwrap()
            .into_iter()
            .filter(|d| low <= d.weight && d.weight <= high)
            .map(|d| d.id)
            .collect();
        prop_assert_eq!(ids(&drops), expected);
    }

    #[test]
    fn heaviest_returns_top_weights(rows in arb_catalog(), n in -2i64..15) {
        let db = build(&rows);
        let drops = db.heaviest_candy_drops(n).unwrap();

        let wanted = n.max(0).min(rows.len() as i64) as usize;
        prop_assert_eq!(drops.len(), wanted);
        for pair in drops.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }

        let mut weights: Vec<i64> = rows.iter().map(|r| r.weight).collect();
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let top: Vec<i64> = drops.iter().map(|d| d.weight).collect();
        prop_assert_eq!(top, weights[..wanted].to_vec());
    }

    #[test]
    fn random_is_member_or_none(rows in arb_catalog()) {
        let db = build(&rows);
        let all = ids(&db.all_candy_drops().unwrap());

        match db.random_candy_drop().unwrap() {
            Some(drop) => prop_assert!(all.contains(&drop.id)),
            None => prop_assert!(all.is_empty()),
        }
    }

    #[test]
    fn prefix_and_fragment_match_str_semantics(rows in arb_catalog(), needle in "[a-cA-C]{0,2}") {
        let db = build(&rows);

        let starts = db.candy_drops_name_starts_with(&needle).unwrap();
        let expected = rows.iter().filter(|r| r.name.starts_with(&needle)).count();
        prop_assert_eq!(starts.len(), expected);

        let contains = db.candy_drops_name_contains(&needle).unwrap();
        let expected = rows.iter().filter(|r| r.name.contains(&needle)).count();
        prop_assert_eq!(contains.len(), expected);
    }
}
