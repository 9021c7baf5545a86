//! Shared helpers for translating dashboard filter state into catalog
//! requests and client-side row filters.
//!
//! Object types can be restricted server-side through the `objectTypes`
//! query parameter; orbit codes are only known once rows arrive, so both
//! selections are also applied locally to keep a cached full catalog in sync
//! with the current filter panel.

use satdeck_model::{Filters, ObjectType, SatelliteData, SatelliteQueryParams};

/// Whether a satellite passes the attribute filters.
///
/// Each group is a disjunction over its selected values and an empty group
/// passes everything; the two groups are combined conjunctively. A satellite
/// missing the attribute fails a non-empty group.
pub fn matches_filters(satellite: &SatelliteData, filters: &Filters) -> bool {
    let object_type_ok = filters.selected_object_types.is_empty()
        || satellite
            .object_type
            .is_some_and(|t| filters.selected_object_types.contains(&t));

    let orbit_code_ok = filters.selected_orbit_codes.is_empty()
        || satellite
            .parsed_orbit_code()
            .is_some_and(|code| filters.selected_orbit_codes.contains(&code));

    object_type_ok && orbit_code_ok
}

/// Return the satellites passing `filters`, in input order.
pub fn apply_filters(
    records: &[SatelliteData],
    filters: &Filters,
) -> Vec<SatelliteData> {
    if filters.is_empty() {
        return records.to_vec();
    }

    let filtered: Vec<SatelliteData> = records
        .iter()
        .filter(|satellite| matches_filters(satellite, filters))
        .cloned()
        .collect();

    tracing::debug!(
        active = filters.active_count(),
        kept = filtered.len(),
        total = records.len(),
        "applied attribute filters"
    );

    filtered
}

/// Build the catalog request for the current filters. Only object types are
/// pushed to the server.
pub fn query_params_for(filters: &Filters) -> SatelliteQueryParams {
    let mut object_types: Vec<ObjectType> = Vec::new();
    for object_type in &filters.selected_object_types {
        if !object_types.contains(object_type) {
            object_types.push(*object_type);
        }
    }

    SatelliteQueryParams {
        object_types,
        attributes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satdeck_model::{ObjectType, OrbitCode};

    fn sat(
        id: &str,
        object_type: Option<ObjectType>,
        orbit: Option<&str>,
    ) -> SatelliteData {
        SatelliteData {
            object_type,
            orbit_code: orbit.map(str::to_string),
            ..SatelliteData::new(id, format!("SAT {id}"))
        }
    }

    fn catalog() -> Vec<SatelliteData> {
        vec![
            sat("1", Some(ObjectType::Payload), Some("{LEO}")),
            sat("2", Some(ObjectType::Debris), Some("{LEO}")),
            sat("3", Some(ObjectType::Payload), Some("{GEO}")),
            sat("4", None, Some("{GEO}")),
            sat("5", Some(ObjectType::RocketBody), None),
        ]
    }

    fn ids(records: &[SatelliteData]) -> Vec<&str> {
        records.iter().map(|s| s.norad_cat_id.as_str()).collect()
    }

    #[test]
    fn empty_filters_keep_everything() {
        let records = catalog();
        assert_eq!(apply_filters(&records, &Filters::default()), records);
    }

    #[test]
    fn groups_combine_conjunctively() {
        let filters = Filters {
            selected_object_types: vec![ObjectType::Payload],
            selected_orbit_codes: vec![OrbitCode::Geo],
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["3"]);
    }

    #[test]
    fn values_within_a_group_are_alternatives() {
        let filters = Filters {
            selected_object_types: vec![
                ObjectType::Debris,
                ObjectType::RocketBody,
            ],
            selected_orbit_codes: Vec::new(),
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["2", "5"]);
    }

    #[test]
    fn missing_attributes_fail_non_empty_groups() {
        let filters = Filters {
            selected_object_types: Vec::new(),
            selected_orbit_codes: vec![OrbitCode::Leo, OrbitCode::Geo],
        };
        assert_eq!(
            ids(&apply_filters(&catalog(), &filters)),
            vec!["1", "2", "3", "4"]
        );
    }

    #[test]
    fn only_object_types_reach_the_request() {
        let filters = Filters {
            selected_object_types: vec![ObjectType::Payload],
            selected_orbit_codes: vec![OrbitCode::Meo],
        };
        let params = query_params_for(&filters);
        assert_eq!(params.object_types, vec![ObjectType::Payload]);
        assert!(params.attributes.is_empty());
    }

    #[test]
    fn repeated_object_types_are_requested_once() {
        let filters = Filters {
            selected_object_types: vec![
                ObjectType::Payload,
                ObjectType::Debris,
                ObjectType::Payload,
            ],
            selected_orbit_codes: Vec::new(),
        };
        let params = query_params_for(&filters);
        assert_eq!(
            params.object_types,
            vec![ObjectType::Payload, ObjectType::Debris]
        );
    }
}
