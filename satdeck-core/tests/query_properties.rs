//! Behavioural coverage for the sort and search engines over a synthetic
//! catalog with gaps in every optional column.

use satdeck_core::query::{
    FieldDescriptor, FieldValidator, SearchConfig, SortDirection, SortState,
    all_satellites_config, search, sort_records, tracked_satellites_config,
};
use satdeck_model::{ObjectType, Record, SatelliteData, TrackedSatellite};

const COUNTRIES: [&str; 5] = ["US", "CIS", "PRC", "ESA", "JPN"];

/// Deterministic catalog: every third row lacks a country, every fifth row a
/// launch date, and names repeat so ties exercise stability.
fn catalog(len: usize) -> Vec<SatelliteData> {
    let mut seed: u64 = 0x5eed;
    (0..len)
        .map(|i| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let bucket = (seed >> 33) % 12;
            SatelliteData {
                country_code: (i % 3 != 0)
                    .then(|| COUNTRIES[(seed >> 40) as usize % COUNTRIES.len()].to_string()),
                launch_date: (i % 5 != 0)
                    .then(|| format!("20{:02}-01-{:02}", bucket, 1 + i % 28)),
                object_type: Some(ObjectType::all()[i % ObjectType::all().len()]),
                ..SatelliteData::new(
                    format!("{}", 10_000 + i * 7),
                    format!("SAT-{bucket}"),
                )
            }
        })
        .collect()
}

fn ids(rows: &[SatelliteData]) -> Vec<&str> {
    rows.iter().map(|s| s.norad_cat_id.as_str()).collect()
}

#[test]
fn sort_is_a_permutation_of_its_input() {
    let rows = catalog(120);
    for key in ["name", "countryCode", "launchDate", "decayDate"] {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_records(&rows, key, direction);
            let mut before = ids(&rows);
            let mut after = ids(&sorted);
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after, "{key} {direction}");
        }
    }
}

#[test]
fn nulls_trail_ascending_and_lead_descending() {
    let rows = catalog(90);

    let asc = sort_records(&rows, "countryCode", SortDirection::Asc);
    let first_null = asc
        .iter()
        .position(|s| s.country_code.is_none())
        .expect("catalog has gaps");
    assert!(asc[first_null..].iter().all(|s| s.country_code.is_none()));
    assert!(asc[..first_null].windows(2).all(|w| w[0].country_code <= w[1].country_code));

    let desc = sort_records(&rows, "countryCode", SortDirection::Desc);
    let last_null = desc
        .iter()
        .rposition(|s| s.country_code.is_none())
        .expect("catalog has gaps");
    assert!(desc[..=last_null].iter().all(|s| s.country_code.is_none()));
    assert!(
        desc[last_null + 1..]
            .windows(2)
            .all(|w| w[0].country_code >= w[1].country_code)
    );
}

#[test]
fn equal_keys_keep_input_order() {
    let rows = catalog(200);
    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let sorted = sort_records(&rows, "name", direction);
        for name in sorted.iter().map(|s| s.name.clone()) {
            let in_input: Vec<_> =
                rows.iter().filter(|s| s.name == name).map(|s| &s.norad_cat_id).collect();
            let in_output: Vec<_> =
                sorted.iter().filter(|s| s.name == name).map(|s| &s.norad_cat_id).collect();
            assert_eq!(in_input, in_output, "ties for {name} reordered");
        }
    }
}

#[test]
fn unknown_key_leaves_order_untouched() {
    let rows = catalog(40);
    let sorted = sort_records(&rows, "apogee", SortDirection::Desc);
    assert_eq!(ids(&sorted), ids(&rows));
}

#[test]
fn sorting_does_not_touch_the_input() {
    let rows = catalog(30);
    let snapshot = rows.clone();
    let _ = sort_records(&rows, "launchDate", SortDirection::Desc);
    assert_eq!(rows, snapshot);
}

#[test]
fn header_clicks_drive_sort_state() {
    let rows = catalog(50);
    let state = SortState::default().toggle("launchDate");
    let asc = state.apply(&rows);
    let desc = state.toggle("launchDate").apply(&rows);

    assert_eq!(
        asc.last().and_then(|s| s.field("launchDate")),
        None,
        "ascending puts missing dates last"
    );
    assert_eq!(desc.first().and_then(|s| s.field("launchDate")), None);
    assert_eq!(ids(&SortState::default().apply(&rows)), ids(&rows));
}

#[test]
fn short_queries_leave_search_inactive() {
    let rows = catalog(25);
    let config = all_satellites_config().min_query_length(3);

    for query in ["", "   ", "sa", "  s  "] {
        let result = search(&rows, &config, query);
        assert!(!result.is_active, "{query:?}");
        assert_eq!(result.results, rows);
        assert_eq!(result.filtered_count, result.total_count);
        assert_eq!(result.query, query.trim());
    }
}

#[test]
fn counts_and_order_are_consistent() {
    let rows = catalog(150);
    for query in ["sat-1", "SAT-11", "100", "zzz", "10007"] {
        let result = search(&rows, &all_satellites_config(), query);
        assert!(result.is_active);
        assert_eq!(result.total_count, rows.len());
        assert_eq!(result.filtered_count, result.results.len());
        assert!(result.filtered_count <= result.total_count);

        let mut cursor = rows.iter();
        for hit in &result.results {
            assert!(cursor.any(|row| row == hit), "{query}: results out of input order");
        }
    }
}

#[test]
fn exact_mode_results_are_a_subset_of_partial_mode() {
    let rows = catalog(150);
    for query in ["SAT-1", "sat-10", "10007"] {
        let partial = search(&rows, &all_satellites_config(), query);
        let exact = search(&rows, &all_satellites_config().allow_partial_match(false), query);
        assert!(exact.results.iter().all(|row| partial.results.contains(row)));
    }

    let exact = search(&rows, &all_satellites_config().allow_partial_match(false), "sat-1");
    assert!(exact.results.iter().all(|s| s.name == "SAT-1"));
}

#[test]
fn validators_gate_fields_before_matching() {
    let rows = vec![
        SatelliteData::new("123", "ALPHA 123"),
        SatelliteData::new("999", "BRAVO"),
    ];
    // "12a" cannot be an id, so only names are consulted.
    assert!(search(&rows, &all_satellites_config(), "12a").is_empty());

    let rejects_everything = SearchConfig::new(vec![
        FieldDescriptor::text("name", "Name")
            .with_validator(FieldValidator::from_fn("never", |_| false)),
    ]);
    let result = search(&rows, &rejects_everything, "alpha");
    assert!(result.is_active);
    assert!(result.is_empty());
}

#[test]
fn searching_the_results_again_changes_nothing() {
    let rows = catalog(150);
    let config = all_satellites_config();
    let once = search(&rows, &config, "sat-1");
    let twice = search(&once.results, &config, "sat-1");
    assert_eq!(once.results, twice.results);
}

#[test]
fn repeated_search_returns_identical_results() {
    let rows = catalog(150);
    let config = all_satellites_config();
    for query in ["sat-1", "  10007 ", "   "] {
        let first = search(&rows, &config, query);
        let second = search(&rows, &config, query);
        assert_eq!(first, second, "{query:?}");
    }
    assert!(!search(&rows, &config, "   ").is_active);
}

#[test]
fn absent_international_designator_reads_as_null() {
    let rows: Vec<SatelliteData> = serde_json::from_str(
        r#"[
            {"noradCatId": "1", "name": "NOINTL"},
            {"noradCatId": "2", "name": "HASINTL", "intlDes": "1998-067A"}
        ]"#,
    )
    .unwrap();
    assert_eq!(rows[0].field("intlDes"), None);

    let asc = sort_records(&rows, "intlDes", SortDirection::Asc);
    assert_eq!(names(&asc), ["HASINTL", "NOINTL"]);
    let desc = sort_records(&rows, "intlDes", SortDirection::Desc);
    assert_eq!(names(&desc), ["NOINTL", "HASINTL"]);

    let config = SearchConfig::new(vec![FieldDescriptor::text(
        "intlDes",
        "International designator",
    )])
    .min_query_length(0);
    let result = search(&rows, &config, "");
    assert!(result.is_active);
    assert_eq!(names(&result.results), ["HASINTL"]);
}

fn names(rows: &[SatelliteData]) -> Vec<&str> {
    rows.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn tracked_search_matches_country_codes() {
    let tracked: Vec<TrackedSatellite> = catalog(60).iter().map(TrackedSatellite::from).collect();
    let result = search(&tracked, &tracked_satellites_config(), "prc");
    assert!(!result.is_empty());
    assert!(
        result
            .results
            .iter()
            .all(|s| s.country_code.as_deref() == Some("PRC"))
    );
}
