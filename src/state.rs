use std::path::Path;

use anyhow::{bail, Result};

use gdp_explorer::data::export::write_records;
use gdp_explorer::data::{self, regions, GdpTable, MapFrame, SeriesRecord};

use crate::color::ColorMap;
use crate::config::AppConfig;

/// Which dashboard is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Series,
    Maps,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until a file is loaded).
    pub table: Option<GdpTable>,

    /// Selected countries, in the order they were picked.
    pub selected: Vec<String>,

    /// Inclusive year range of the line chart.
    pub year_range: (i32, i32),

    /// Long-form records for the current selection (cached).
    pub series: Vec<SeriesRecord>,

    /// Line colour per selected country.
    pub color_map: ColorMap,

    /// Coded, rounded rows for the regional maps.
    pub map_frame: MapFrame,

    pub map_year: i32,

    pub view: View,

    /// Key of the visible map tab.
    pub active_region: &'static str,

    /// Text typed into the country search box.
    pub country_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    default_countries: Vec<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            table: None,
            selected: Vec::new(),
            year_range: (0, 0),
            series: Vec::new(),
            color_map: ColorMap::default(),
            map_frame: MapFrame::default(),
            map_year: config.map_year,
            view: View::Series,
            active_region: regions().first().map(|r| r.key).unwrap_or_default(),
            country_search: String::new(),
            status_message: None,
            default_countries: config.default_countries.clone(),
        }
    }

    /// Ingest a newly loaded table: default selection, full year range,
    /// fresh map rows.
    pub fn set_table(&mut self, table: GdpTable) {
        self.selected = self
            .default_countries
            .iter()
            .filter(|c| table.contains(c))
            .cloned()
            .collect();
        self.year_range = (table.first_year(), table.last_year());
        self.map_frame = MapFrame::build(&table, self.map_year);

        self.table = Some(table);
        self.status_message = None;
        self.refresh_series();
    }

    /// Full year domain of the loaded table.
    pub fn year_domain(&self) -> Option<(i32, i32)> {
        self.table
            .as_ref()
            .map(|t| (t.first_year(), t.last_year()))
    }

    /// Recompute the series and line colours after a selection change.
    pub fn refresh_series(&mut self) {
        self.series = match &self.table {
            Some(table) => data::filter(table, &self.selected, self.year_range),
            None => Vec::new(),
        };
        self.color_map = ColorMap::new(&self.selected);
    }

    /// Add a country to the selection, or remove it if already selected.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(pos) = self.selected.iter().position(|c| c == country) {
            self.selected.remove(pos);
        } else {
            self.selected.push(country.to_string());
        }
        self.refresh_series();
    }

    /// Set the chart's year range, swapped into order and clipped to the
    /// table's domain.
    pub fn set_year_range(&mut self, start: i32, end: i32) {
        let (mut start, mut end) = if start <= end { (start, end) } else { (end, start) };
        if let Some((lo, hi)) = self.year_domain() {
            start = start.clamp(lo, hi);
            end = end.clamp(lo, hi);
        }
        if (start, end) != self.year_range {
            self.year_range = (start, end);
            self.refresh_series();
        }
    }

    /// "Clear Selections": no countries, full year range.
    pub fn clear_selections(&mut self) {
        self.selected.clear();
        if let Some(domain) = self.year_domain() {
            self.year_range = domain;
        }
        self.refresh_series();
    }

    /// Countries matching the search box, in table order.
    pub fn matching_countries(&self) -> Vec<&str> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        let needle = self.country_search.trim().to_lowercase();
        table
            .countries()
            .iter()
            .map(String::as_str)
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn chart_title(&self) -> String {
        format!("GDP per capita ({}–{})", self.year_range.0, self.year_range.1)
    }

    pub fn export_series(&self, path: &Path) -> Result<()> {
        if self.series.is_empty() {
            bail!("Nothing to export: no countries selected");
        }
        write_records(path, &self.series)
    }

    pub fn export_map_rows(&self, path: &Path) -> Result<()> {
        if self.map_frame.is_empty() {
            bail!("Nothing to export: no map data for {}", self.map_year);
        }
        write_records(path, &self.map_frame.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> GdpTable {
        let rows: Vec<(String, Vec<Option<f64>>)> = vec![
            ("United States".to_string(), (1960..=2024).map(|y| Some(f64::from(y))).collect()),
            ("Chad".to_string(), (1960..=2024).map(|_| Some(100.0)).collect()),
            ("World".to_string(), (1960..=2024).map(|_| Some(50.0)).collect()),
        ];
        GdpTable::from_rows(1960..=2024, rows).unwrap()
    }

    fn loaded() -> AppState {
        let mut state = AppState::new(&AppConfig::default());
        state.set_table(table());
        state
    }

    #[test]
    fn loading_selects_defaults_and_full_range() {
        let state = loaded();
        assert_eq!(state.selected, ["United States"]);
        assert_eq!(state.year_range, (1960, 2024));
        assert_eq!(state.series.len(), 65);
        assert_eq!(state.map_frame.len(), 2);
        assert_eq!(state.map_frame.unresolved, ["World"]);
    }

    #[test]
    fn toggling_adds_then_removes() {
        let mut state = loaded();
        state.toggle_country("Chad");
        assert_eq!(state.selected, ["United States", "Chad"]);
        assert_eq!(state.series.len(), 130);
        state.toggle_country("United States");
        assert_eq!(state.selected, ["Chad"]);
        assert!(state.series.iter().all(|r| r.country == "Chad"));
    }

    #[test]
    fn year_range_is_ordered_and_clipped() {
        let mut state = loaded();
        state.set_year_range(1962, 1960);
        assert_eq!(state.year_range, (1960, 1962));
        assert_eq!(state.series.len(), 3);
        assert_eq!(state.chart_title(), "GDP per capita (1960–1962)");

        state.set_year_range(2020, 2100);
        assert_eq!(state.year_range, (2020, 2024));
    }

    #[test]
    fn clear_resets_to_empty_selection() {
        let mut state = loaded();
        state.set_year_range(1990, 2000);
        state.clear_selections();
        assert!(state.selected.is_empty());
        assert!(state.series.is_empty());
        assert_eq!(state.year_range, (1960, 2024));
        assert!(state.export_series(Path::new("out.csv")).is_err());
    }

    #[test]
    fn search_filters_country_list() {
        let mut state = loaded();
        state.country_search = "  CHA ".to_string();
        assert_eq!(state.matching_countries(), ["Chad"]);
        state.country_search.clear();
        assert_eq!(state.matching_countries().len(), 3);
    }
}
