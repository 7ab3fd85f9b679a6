use crate::{
    filter::{FilterSpec, apply},
    record::Record,
};
use proptest::prelude::*;

const SEARCHABLE: [&str; 2] = ["name", "industry"];

fn prospects() -> Vec<Record> {
    vec![
        Record::new("p1")
            .with("name", "Acme Logistics")
            .with("country", "USA")
            .with("industry", "Transport")
            .with("vais", 91u64),
        Record::new("p2")
            .with("name", "Borealis Labs")
            .with("country", "Canada")
            .with("industry", "Biotech")
            .with("vais", 78u64),
        Record::new("p3")
            .with("name", "Cinder Works")
            .with("country", "USA")
            .with("industry", "Manufacturing")
            .with("vais", 64u64),
        Record::new("p4")
            .with("name", "Dune Analytics Co")
            .with("country", "USA")
            .with("industry", "Software")
            .with("vais", 88u64),
    ]
}

fn ids(rows: &[Record]) -> Vec<String> {
    use crate::record::TableRow;
    rows.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn empty_spec_is_identity() {
    let rows = prospects();
    let filtered = apply(&rows, &FilterSpec::new());

    assert_eq!(filtered, rows);
}

#[test]
fn filter_is_idempotent() {
    let rows = prospects();
    let spec = FilterSpec::new().equals("country", "USA");

    let once = apply(&rows, &spec);
    let twice = apply(&once, &spec);

    assert_eq!(once, twice);
}

#[test]
fn constraints_combine_with_and() {
    let rows = prospects();
    let spec = FilterSpec::new()
        .equals("country", "USA")
        .range("vais", 80u64, 100u64);

    assert_eq!(ids(&apply(&rows, &spec)), ["p1", "p4"]);
}

#[test]
fn sentinel_values_mean_no_constraint() {
    let rows = prospects();

    for sentinel in ["", "all", "All", "ALL"] {
        let spec = FilterSpec::new().equals("country", sentinel);
        assert_eq!(apply(&rows, &spec), rows, "sentinel {sentinel:?}");
    }
}

#[test]
fn search_matches_any_searchable_field_case_insensitively() {
    let rows = prospects();

    let by_name = FilterSpec::new().search("acme", SEARCHABLE);
    assert_eq!(ids(&apply(&rows, &by_name)), ["p1"]);

    let by_industry = FilterSpec::new().search("BIO", SEARCHABLE);
    assert_eq!(ids(&apply(&rows, &by_industry)), ["p2"]);

    let no_match = FilterSpec::new().search("zzz-nothing", SEARCHABLE);
    assert!(apply(&rows, &no_match).is_empty());
}

#[test]
fn blank_search_needle_clears_the_constraint() {
    let rows = prospects();
    let spec = FilterSpec::new().search("   ", SEARCHABLE);

    assert!(spec.is_empty());
    assert_eq!(apply(&rows, &spec), rows);
}

#[test]
fn range_is_inclusive_on_both_bounds() {
    let rows = prospects();
    let spec = FilterSpec::new().range("vais", 64u64, 78u64);

    assert_eq!(ids(&apply(&rows, &spec)), ["p2", "p3"]);
}

#[test]
fn constraint_on_missing_field_never_matches() {
    let rows = prospects();
    let spec = FilterSpec::new().equals("revenue", "high");

    assert!(apply(&rows, &spec).is_empty());
}

#[test]
fn retain_known_fields_drops_unknown_constraints() {
    let rows = prospects();
    let known: Vec<String> = ["name", "country", "industry", "vais"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut spec = FilterSpec::new()
        .equals("revenue", "high")
        .equals("country", "USA");
    spec.retain_known_fields(&known);

    assert_eq!(ids(&apply(&rows, &spec)), ["p1", "p3", "p4"]);
}

#[test]
fn filtering_preserves_input_order() {
    let rows = prospects();
    let spec = FilterSpec::new().equals("country", "USA");

    assert_eq!(ids(&apply(&rows, &spec)), ["p1", "p3", "p4"]);
}

#[test]
fn filter_spec_round_trips_through_serde() {
    let spec = FilterSpec::new()
        .search("acme", SEARCHABLE)
        .equals("country", "USA")
        .range("vais", 50u64, 100u64);

    let json = serde_json::to_string(&spec).unwrap();
    let back: FilterSpec = serde_json::from_str(&json).unwrap();

    assert_eq!(back, spec);
}

fn arb_country() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USA"), Just("Canada"), Just("Germany"), Just("all")]
}

fn arb_rows() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((arb_country(), 0u64..100), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (country, vais))| {
                Record::new(format!("r{i}"))
                    .with("country", country)
                    .with("vais", vais)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filtered_set_is_a_subsequence_of_the_input(rows in arb_rows(), country in arb_country()) {
        let spec = FilterSpec::new().equals("country", country);
        let filtered = apply(&rows, &spec);

        let mut cursor = rows.iter();
        for row in &filtered {
            prop_assert!(cursor.any(|r| r == row));
        }
    }

    #[test]
    fn conjunction_never_widens_the_result(rows in arb_rows(), country in arb_country()) {
        let loose = FilterSpec::new().equals("country", country);
        let tight = FilterSpec::new()
            .equals("country", country)
            .range("vais", 50u64, 100u64);

        let loose_set = apply(&rows, &loose);
        let tight_set = apply(&rows, &tight);

        prop_assert!(tight_set.len() <= loose_set.len());
        for row in &tight_set {
            prop_assert!(loose_set.contains(row));
        }
    }

    #[test]
    fn empty_spec_identity_holds_for_all_inputs(rows in arb_rows()) {
        prop_assert_eq!(apply(&rows, &FilterSpec::new()), rows);
    }
}
