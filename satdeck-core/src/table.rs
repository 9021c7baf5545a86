//! Column configuration for the satellite table.

use std::fmt;

use satdeck_model::{Attribute, Record};

use crate::format::{display_value, orbit_code_cell};

/// Renders a raw field value into cell text.
pub type CellFormatter = fn(Option<satdeck_model::FieldValue<'_>>) -> String;

/// Key of the synthetic selection column.
pub const SELECT_COLUMN: &str = "select";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Checkbox,
    Custom,
}

#[derive(Clone)]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub formatter: Option<CellFormatter>,
    pub sortable: bool,
    pub visible: bool,
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("has_formatter", &self.formatter.is_some())
            .field("sortable", &self.sortable)
            .field("visible", &self.visible)
            .finish()
    }
}

impl TableColumn {
    fn text(attribute: Attribute, label: &'static str, sortable: bool) -> Self {
        Self {
            key: attribute.key(),
            label,
            kind: ColumnKind::Text,
            formatter: None,
            sortable,
            visible: true,
        }
    }

    /// Cell text for `record`. The checkbox column reflects `selected`.
    pub fn render<R: Record + ?Sized>(&self, record: &R, selected: bool) -> String {
        match (self.kind, self.formatter) {
            (ColumnKind::Checkbox, _) => {
                if selected { "[x]" } else { "[ ]" }.to_string()
            }
            (_, Some(formatter)) => formatter(record.field(self.key)),
            (_, None) => display_value(record.field(self.key)),
        }
    }
}

/// Columns of the main catalog table, in display order.
pub fn default_columns() -> Vec<TableColumn> {
    vec![
        TableColumn {
            key: SELECT_COLUMN,
            label: "",
            kind: ColumnKind::Checkbox,
            formatter: None,
            sortable: false,
            visible: true,
        },
        TableColumn::text(Attribute::NoradCatId, "NORAD ID", true),
        TableColumn::text(Attribute::Name, "NAME", true),
        TableColumn {
            kind: ColumnKind::Custom,
            formatter: Some(orbit_code_cell),
            ..TableColumn::text(Attribute::OrbitCode, "ORBIT CODE", false)
        },
        TableColumn::text(Attribute::ObjectType, "OBJECT TYPE", false),
        TableColumn::text(Attribute::CountryCode, "COUNTRY", true),
        TableColumn::text(Attribute::LaunchDate, "LAUNCH DATE", true),
    ]
}

/// Columns of the tracked-satellites table.
pub fn tracked_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::text(Attribute::NoradCatId, "NORAD ID", true),
        TableColumn::text(Attribute::Name, "NAME", true),
        TableColumn::text(Attribute::CountryCode, "COUNTRY", true),
    ]
}

/// Whether `key` names a sortable column in `columns`.
pub fn is_sortable(columns: &[TableColumn], key: &str) -> bool {
    columns
        .iter()
        .any(|column| column.sortable && column.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satdeck_model::{ObjectType, SatelliteData, TrackedSatellite};

    #[test]
    fn default_columns_follow_dashboard_layout() {
        let columns = default_columns();
        let keys: Vec<_> = columns.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "select",
                "noradCatId",
                "name",
                "orbitCode",
                "objectType",
                "countryCode",
                "launchDate",
            ]
        );
        assert!(is_sortable(&columns, "launchDate"));
        assert!(!is_sortable(&columns, "orbitCode"));
        assert!(!is_sortable(&columns, "select"));
    }

    #[test]
    fn cells_use_formatters_and_selection() {
        let sat = SatelliteData {
            orbit_code: Some("{GEO}".into()),
            object_type: Some(ObjectType::Debris),
            ..SatelliteData::new("12345", "FRAGMENT")
        };
        let columns = default_columns();

        let rendered: Vec<String> =
            columns.iter().map(|c| c.render(&sat, true)).collect();
        assert_eq!(
            rendered,
            vec!["[x]", "12345", "FRAGMENT", "GEO", "DEBRIS", "", ""]
        );
        assert_eq!(columns[0].render(&sat, false), "[ ]");
    }

    #[test]
    fn tracked_columns_render_reduced_rows() {
        let tracked = TrackedSatellite {
            name: "HST".into(),
            norad_cat_id: "20580".into(),
            country_code: None,
        };
        let rendered: Vec<String> = tracked_columns()
            .iter()
            .map(|c| c.render(&tracked, false))
            .collect();
        assert_eq!(rendered, vec!["20580", "HST", ""]);
    }
}
