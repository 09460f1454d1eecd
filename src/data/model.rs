use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::error::LoadError;

// ---------------------------------------------------------------------------
// GdpTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// GDP per capita keyed by (country, year), stored transposed.
///
/// The source file is wide (one row per country, one column per year); here
/// each year owns one row of cells so a year range is a contiguous slice.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpTable {
    first_year: i32,
    /// Country names in source order.
    countries: Vec<String>,
    /// country name → column index into every year row.
    index: BTreeMap<String, usize>,
    /// `cells[year - first_year][country]`.
    cells: Vec<Vec<Option<f64>>>,
}

impl GdpTable {
    /// Build a table from wide, country-major rows.
    ///
    /// Each row holds one value per year of `years`; short rows are padded
    /// with absent values and long rows truncated. Fails with
    /// [`LoadError::DuplicateKey`] if a country name repeats.
    pub fn from_rows(
        years: RangeInclusive<i32>,
        rows: Vec<(String, Vec<Option<f64>>)>,
    ) -> Result<Self, LoadError> {
        let first_year = *years.start();
        let n_years = years.count();

        let mut countries = Vec::with_capacity(rows.len());
        let mut index = BTreeMap::new();
        let mut cells = vec![Vec::with_capacity(rows.len()); n_years];

        for (country, mut values) in rows {
            if index.contains_key(&country) {
                return Err(LoadError::DuplicateKey { country });
            }
            values.resize(n_years, None);
            for (year_row, value) in cells.iter_mut().zip(values) {
                year_row.push(value);
            }
            index.insert(country.clone(), countries.len());
            countries.push(country);
        }

        Ok(GdpTable {
            first_year,
            countries,
            index,
            cells,
        })
    }

    /// First year covered by the table.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year covered by the table. Equals `first_year - 1` when the
    /// table has no year columns.
    pub fn last_year(&self) -> i32 {
        self.first_year + self.cells.len() as i32 - 1
    }

    /// The year domain.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year()..=self.last_year()
    }

    /// Country names in source order.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Column index of a country in every year row.
    pub fn country_index(&self, country: &str) -> Option<usize> {
        self.index.get(country).copied()
    }

    /// All cells for one year, in country order.
    pub fn year_row(&self, year: i32) -> Option<&[Option<f64>]> {
        let offset = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        self.cells.get(offset).map(Vec::as_slice)
    }

    /// A single cell; `None` for unknown keys as well as absent values.
    pub fn value(&self, country: &str, year: i32) -> Option<f64> {
        let col = self.country_index(country)?;
        self.year_row(year)?.get(col).copied().flatten()
    }

    /// Clip `(start, end)` to the table's year domain.
    ///
    /// Returns `None` if the range is inverted or does not overlap.
    pub fn clamp_range(&self, start: i32, end: i32) -> Option<(i32, i32)> {
        let lo = start.max(self.first_year());
        let hi = end.min(self.last_year());
        (start <= end && lo <= hi).then_some((lo, hi))
    }

    pub fn num_countries(&self) -> usize {
        self.countries.len()
    }

    pub fn num_years(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SeriesRecord – one row of the long-form output
// ---------------------------------------------------------------------------

/// One (year, country, value) observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "GDP per capita")]
    pub gdp_per_capita: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GdpTable {
        GdpTable::from_rows(
            1960..=1962,
            vec![
                ("Aruba".into(), vec![Some(1.0), None, Some(3.0)]),
                ("Chad".into(), vec![Some(10.0), Some(20.0)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn transposes_rows_into_years() {
        let table = sample();
        assert_eq!(table.years(), 1960..=1962);
        assert_eq!(table.year_row(1960), Some(&[Some(1.0), Some(10.0)][..]));
        assert_eq!(table.year_row(1961), Some(&[None, Some(20.0)][..]));
        assert_eq!(table.year_row(1962), Some(&[Some(3.0), None][..]));
        assert_eq!(table.year_row(1959), None);
        assert_eq!(table.year_row(1963), None);
    }

    #[test]
    fn value_lookup_handles_unknown_keys() {
        let table = sample();
        assert_eq!(table.value("Chad", 1961), Some(20.0));
        assert_eq!(table.value("Aruba", 1961), None);
        assert_eq!(table.value("Atlantis", 1961), None);
        assert_eq!(table.value("Chad", 2024), None);
    }

    #[test]
    fn duplicate_country_is_rejected() {
        let err = GdpTable::from_rows(
            1960..=1960,
            vec![("Chad".into(), vec![None]), ("Chad".into(), vec![None])],
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateKey { country } if country == "Chad"));
    }

    #[test]
    fn clamp_range_clips_to_domain() {
        let table = sample();
        assert_eq!(table.clamp_range(1900, 2100), Some((1960, 1962)));
        assert_eq!(table.clamp_range(1961, 1961), Some((1961, 1961)));
        assert_eq!(table.clamp_range(1962, 1960), None);
        assert_eq!(table.clamp_range(1970, 1980), None);
    }
}
