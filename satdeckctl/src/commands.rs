use std::io::Write;

use anyhow::{Context, Result};
use satdeck_config::DashboardConfig;
use satdeck_core::query::{
    ChainedSort, FieldSort, SortDirection, SortState, SortStrategy,
    all_satellites_config, apply_filters, query_params_for, search as run_search,
    tracked_satellites_config,
};
use satdeck_core::table::is_sortable;
use satdeck_core::{
    CatalogClient, CatalogService, DashboardStore, FileSource, FilterStore,
    SatelliteSource, default_columns, tracked_columns,
};
use satdeck_model::{Filters, SatelliteData, SatelliteQueryParams};
use serde::Serialize;
use tracing::{info, warn};

use crate::render::write_table;
use crate::{FilterArgs, FiltersCommand, ListArgs, SearchArgs, SourceArgs, TrackedArgs};

impl FilterArgs {
    fn is_empty(&self) -> bool {
        self.object_types.is_empty() && self.orbit_codes.is_empty()
    }

    fn to_filters(&self) -> Filters {
        let mut filters = Filters::default();
        for object_type in &self.object_types {
            if !filters.selected_object_types.contains(object_type) {
                filters.toggle_object_type(*object_type);
            }
        }
        for orbit_code in &self.orbit_codes {
            if !filters.selected_orbit_codes.contains(orbit_code) {
                filters.toggle_orbit_code(*orbit_code);
            }
        }
        filters
    }
}

fn open_source(
    config: &DashboardConfig,
    args: &SourceArgs,
) -> Result<Box<dyn SatelliteSource>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(FileSource::new(path)));
    }

    let base_url = args.api.as_deref().unwrap_or(&config.api.base_url);
    let client = CatalogClient::new(base_url, config.api.timeout())
        .context("failed to create catalog client")?;
    Ok(Box::new(client))
}

async fn fetch(
    config: &DashboardConfig,
    args: &SourceArgs,
    store: &mut DashboardStore,
    params: &SatelliteQueryParams,
) -> Result<()> {
    let service = CatalogService::new(open_source(config, args)?);
    service
        .load_into(store, params)
        .await
        .context("failed to load the satellite catalog")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub async fn list<W: Write>(
    config: &DashboardConfig,
    args: ListArgs,
    out: &mut W,
) -> Result<()> {
    let filters = if args.filters.is_empty() {
        FilterStore::new(&config.storage.filters_path)
            .load()
            .context("failed to read saved filters")?
            .unwrap_or_default()
    } else {
        args.filters.to_filters()
    };

    let mut store = DashboardStore::new();
    store.set_filter_activation(filters.active_count());
    fetch(config, &args.source, &mut store, &query_params_for(&filters)).await?;

    let mut rows = apply_filters(store.all_satellites(), &filters);

    if let Some(query) = &args.search {
        rows = run_search(&rows, &all_satellites_config(), query).into_results();
    }

    if let Some(key) = &args.sort {
        let columns = default_columns();
        for key in std::iter::once(key).chain(&args.then_by) {
            if !is_sortable(&columns, key) {
                warn!(key = %key, "not a sortable table column");
            }
        }

        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        if args.then_by.is_empty() {
            rows = SortState::new(key.as_str(), direction).apply(&rows);
        } else {
            let chain = args.then_by.iter().fold(
                ChainedSort::new().then_by(FieldSort::new(key.as_str(), direction)),
                |chain, secondary| {
                    chain.then_by(FieldSort::new(secondary.as_str(), SortDirection::Asc))
                },
            );
            chain.sort(&mut rows);
        }
    }

    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    store.set_displayed_satellites(rows);

    info!(
        shown = store.displayed_satellites().len(),
        total = store.all_satellites().len(),
        active_filters = store.filter_activation(),
        "listed satellites"
    );

    if args.json {
        write_json(out, store.displayed_satellites())
    } else {
        write_table(out, &default_columns(), store.displayed_satellites(), |_| false)?;
        Ok(())
    }
}

pub async fn search<W: Write>(
    config: &DashboardConfig,
    args: SearchArgs,
    out: &mut W,
) -> Result<()> {
    let mut store = DashboardStore::new();
    fetch(config, &args.source, &mut store, &SatelliteQueryParams::default()).await?;

    let result = run_search(store.all_satellites(), &all_satellites_config(), &args.query);

    if args.json {
        return write_json(out, &result);
    }

    writeln!(
        out,
        "{}/{} satellites match '{}'",
        result.filtered_count, result.total_count, result.query
    )?;
    write_table(out, &default_columns(), &result.results, |_| false)?;
    Ok(())
}

pub async fn tracked<W: Write>(
    config: &DashboardConfig,
    args: TrackedArgs,
    out: &mut W,
) -> Result<()> {
    let mut store = DashboardStore::new();
    fetch(config, &args.source, &mut store, &SatelliteQueryParams::default()).await?;

    let picks: Vec<SatelliteData> = args
        .ids
        .iter()
        .filter_map(|id| {
            let found = store
                .all_satellites()
                .iter()
                .find(|sat| sat.norad_cat_id == *id)
                .cloned();
            if found.is_none() {
                warn!(norad_cat_id = %id, "satellite not in catalog");
            }
            found
        })
        .collect();
    for pick in &picks {
        if !store.is_selected(&pick.norad_cat_id) {
            store.toggle_selected(pick);
        }
    }

    let tracked = store.tracked_satellites();
    let result = run_search(
        &tracked,
        &tracked_satellites_config(),
        args.search.as_deref().unwrap_or_default(),
    );

    if args.json {
        write_json(out, &result.results)
    } else {
        write_table(out, &tracked_columns(), &result.results, |_| true)?;
        Ok(())
    }
}

pub fn filters<W: Write>(
    config: &DashboardConfig,
    command: FiltersCommand,
    out: &mut W,
) -> Result<()> {
    let store = FilterStore::new(&config.storage.filters_path);

    match command {
        FiltersCommand::Show => {
            let filters = store
                .load()
                .context("failed to read saved filters")?
                .unwrap_or_default();
            write_json(out, &filters)
        }
        FiltersCommand::Set(args) => {
            let filters = args.to_filters();
            store.save(&filters).context("failed to save filters")?;
            write_json(out, &filters)
        }
        FiltersCommand::Clear => {
            store.clear().context("failed to clear saved filters")?;
            writeln!(out, "cleared saved filters")?;
            Ok(())
        }
    }
}
