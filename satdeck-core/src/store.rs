//! Dashboard state shared between the catalog fetch and the table views.

use satdeck_model::{SatelliteData, TrackedSatellite};

/// Explicit dashboard context. Starts empty with every flag cleared.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    all_satellites: Vec<SatelliteData>,
    displayed_satellites: Vec<SatelliteData>,
    selected_items: Vec<SatelliteData>,
    filter_activation: usize,
    full_data_fetched: bool,
    loading: bool,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_satellites(&self) -> &[SatelliteData] {
        &self.all_satellites
    }

    pub fn set_all_satellites(&mut self, satellites: Vec<SatelliteData>) {
        self.all_satellites = satellites;
    }

    pub fn displayed_satellites(&self) -> &[SatelliteData] {
        &self.displayed_satellites
    }

    pub fn set_displayed_satellites(&mut self, satellites: Vec<SatelliteData>) {
        self.displayed_satellites = satellites;
    }

    pub fn selected_items(&self) -> &[SatelliteData] {
        &self.selected_items
    }

    pub fn set_selected_items(&mut self, items: Vec<SatelliteData>) {
        self.selected_items = items;
    }

    /// Number of active attribute filter selections.
    pub fn filter_activation(&self) -> usize {
        self.filter_activation
    }

    pub fn set_filter_activation(&mut self, count: usize) {
        self.filter_activation = count;
    }

    pub fn full_data_fetched(&self) -> bool {
        self.full_data_fetched
    }

    pub fn set_full_data_fetched(&mut self, fetched: bool) {
        self.full_data_fetched = fetched;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Checkbox click: select `item` if no selected row shares its NORAD id,
    /// otherwise deselect it. Returns whether the item is now selected.
    pub fn toggle_selected(&mut self, item: &SatelliteData) -> bool {
        match self.position_of(&item.norad_cat_id) {
            Some(pos) => {
                self.selected_items.remove(pos);
                false
            }
            None => {
                self.selected_items.push(item.clone());
                true
            }
        }
    }

    pub fn is_selected(&self, norad_cat_id: &str) -> bool {
        self.position_of(norad_cat_id).is_some()
    }

    /// Selected rows reduced to the tracked-page view, in selection order.
    pub fn tracked_satellites(&self) -> Vec<TrackedSatellite> {
        self.selected_items.iter().map(TrackedSatellite::from).collect()
    }

    fn position_of(&self, norad_cat_id: &str) -> Option<usize> {
        self.selected_items
            .iter()
            .position(|selected| selected.norad_cat_id == norad_cat_id)
    }
}
