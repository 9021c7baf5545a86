//! Terminal tables built from the core column configuration.

use std::io::{self, Write};

use comfy_table::{ContentArrangement, Table, presets::NOTHING};
use satdeck_core::TableColumn;
use satdeck_model::Record;

/// Build a borderless table of `rows`. `selected` drives the checkbox
/// column, if any.
pub fn build_table<R: Record>(
    columns: &[TableColumn],
    rows: &[R],
    selected: impl Fn(&R) -> bool,
) -> Table {
    let columns: Vec<&TableColumn> =
        columns.iter().filter(|column| column.visible).collect();

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(columns.iter().map(|column| column.label));

    for row in rows {
        let is_selected = selected(row);
        table.add_row(
            columns
                .iter()
                .map(|column| column.render(row, is_selected)),
        );
    }
    table
}

pub fn write_table<R: Record, W: Write>(
    out: &mut W,
    columns: &[TableColumn],
    rows: &[R],
    selected: impl Fn(&R) -> bool,
) -> io::Result<()> {
    writeln!(out, "{}", build_table(columns, rows, selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use satdeck_core::default_columns;
    use satdeck_model::SatelliteData;

    #[test]
    fn rows_use_formatters_and_selection() {
        let rows = vec![
            SatelliteData {
                orbit_code: Some("{LEO}".into()),
                country_code: Some("ISS".into()),
                ..SatelliteData::new("25544", "ISS (ZARYA)")
            },
            SatelliteData::new("20580", "HST"),
        ];
        let mut out = Vec::new();
        write_table(&mut out, &default_columns(), &rows, |row| {
            row.norad_cat_id == "20580"
        })
        .expect("write");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("NORAD ID"));
        assert!(text.contains("LAUNCH DATE"));
        assert!(!text.contains("{LEO}"));

        let iss = text
            .lines()
            .find(|line| line.contains("25544"))
            .expect("iss row");
        assert!(iss.contains("[ ]") && iss.contains("LEO"));

        let hst = text
            .lines()
            .find(|line| line.contains("20580"))
            .expect("hst row");
        assert!(hst.contains("[x]"));
    }
}
