use serde::Serialize;

use super::countries::{resolve, Continent, Iso3, Resolution};
use super::model::GdpTable;
use super::regions::RegionConfig;

/// One coloured country on a regional map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRow {
    #[serde(rename = "Country Name")]
    pub country: String,
    #[serde(rename = "ISO3")]
    pub iso3: Iso3,
    /// GDP per capita rounded to cents.
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(skip)]
    pub continent: Continent,
}

/// Map-ready rows for a single year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapFrame {
    pub rows: Vec<MapRow>,
    /// Names that had a value but no ISO code; dropped from `rows`.
    pub unresolved: Vec<String>,
}

impl MapFrame {
    /// Every country with a value for `year`, ISO-coded and rounded.
    ///
    /// A year outside the table yields an empty frame.
    pub fn build(table: &GdpTable, year: i32) -> Self {
        let Some(row) = table.year_row(year) else {
            log::warn!("No data for map year {year}");
            return MapFrame::default();
        };
        let values = table
            .countries()
            .iter()
            .zip(row)
            .filter_map(|(name, value)| value.map(|v| (name.as_str(), v)));
        Self::from_values(values)
    }

    /// Build a frame from (country name, value) pairs.
    pub fn from_values<'a>(values: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut frame = MapFrame::default();
        for (name, value) in values {
            match resolve(name) {
                Resolution::Resolved(iso3) => frame.rows.push(MapRow {
                    country: name.to_string(),
                    iso3,
                    value: round_cents(value),
                    continent: iso3.identity().continent,
                }),
                Resolution::Unresolved => frame.unresolved.push(name.to_string()),
            }
        }
        if !frame.unresolved.is_empty() {
            log::debug!(
                "Dropped {} rows without an ISO3 code: {:?}",
                frame.unresolved.len(),
                frame.unresolved
            );
        }
        frame
    }

    /// Rows belonging to one map tab.
    pub fn rows_for<'a>(&'a self, region: &'a RegionConfig) -> impl Iterator<Item = &'a MapRow> + 'a {
        self.rows.iter().filter(move |r| r.continent == region.continent)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Round to 2 decimal places, ties to even.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::regions::region;

    #[test]
    fn unresolved_rows_are_dropped() {
        let frame = MapFrame::from_values([("United States", 85_809.899_1), ("Not A Country", 1.0)]);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.rows[0].iso3.as_str(), "USA");
        assert_eq!(frame.rows[0].value, 85_809.9);
        assert_eq!(frame.unresolved, ["Not A Country"]);
    }

    #[test]
    fn values_are_rounded_to_cents() {
        let frame = MapFrame::from_values([("Chad", 1_234.567_8), ("Peru", 7_000.001)]);
        let values: Vec<f64> = frame.rows.iter().map(|r| r.value).collect();
        assert_eq!(values, [1_234.57, 7_000.0]);
    }

    #[test]
    fn build_skips_absent_cells_and_aggregates() {
        let table = GdpTable::from_rows(
            2023..=2024,
            vec![
                ("Germany".into(), vec![Some(1.0), Some(54_343.226)]),
                ("France".into(), vec![Some(1.0), None]),
                ("World".into(), vec![Some(1.0), Some(13_600.0)]),
            ],
        )
        .unwrap();

        let frame = MapFrame::build(&table, 2024);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.rows[0].country, "Germany");
        assert_eq!(frame.rows[0].value, 54_343.23);
        assert_eq!(frame.unresolved, ["World"]);

        assert!(MapFrame::build(&table, 2030).is_empty());
    }

    #[test]
    fn rows_are_split_by_region() {
        let frame = MapFrame::from_values([("Germany", 1.0), ("Kenya", 2.0), ("Peru", 3.0), ("Mexico", 4.0)]);
        let europe: Vec<&str> = frame
            .rows_for(region("europe").unwrap())
            .map(|r| r.country.as_str())
            .collect();
        let north_america: Vec<&str> = frame
            .rows_for(region("north_america").unwrap())
            .map(|r| r.country.as_str())
            .collect();
        assert_eq!(europe, ["Germany"]);
        assert_eq!(north_america, ["Mexico"]);
    }
}
