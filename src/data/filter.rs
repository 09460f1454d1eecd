use std::collections::BTreeSet;

use super::model::{GdpTable, SeriesRecord};

/// Points of one country's line: `[year, value]` pairs, ascending by year.
pub type CountrySeries = (String, Vec<[f64; 2]>);

/// Slice the table to `countries` and `year_range` and melt it into
/// long-form records.
///
/// * Empty `countries` → empty output ("nothing selected", not an error).
/// * The range is clipped to the table's years; an inverted or
///   non-overlapping range → empty output.
/// * Unknown countries contribute no records.
/// * Absent cells are skipped.
///
/// Output is ascending by year, then in the order `countries` was given;
/// a country listed twice is emitted once.
pub fn filter<S: AsRef<str>>(
    table: &GdpTable,
    countries: &[S],
    year_range: (i32, i32),
) -> Vec<SeriesRecord> {
    let Some((start, end)) = table.clamp_range(year_range.0, year_range.1) else {
        return Vec::new();
    };

    // Resolve column indices once, keeping the caller's order.
    let mut seen = BTreeSet::new();
    let columns: Vec<(&str, usize)> = countries
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| seen.insert(*name))
        .filter_map(|name| table.country_index(name).map(|idx| (name, idx)))
        .collect();
    if columns.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    for year in start..=end {
        let Some(row) = table.year_row(year) else {
            continue;
        };
        for &(name, idx) in &columns {
            if let Some(value) = row[idx] {
                records.push(SeriesRecord {
                    year,
                    country: name.to_string(),
                    gdp_per_capita: value,
                });
            }
        }
    }
    records
}

/// Group long-form records into one point list per country, in the order
/// each country first appears.
pub fn group_by_country(records: &[SeriesRecord]) -> Vec<CountrySeries> {
    let mut groups: Vec<CountrySeries> = Vec::new();
    for rec in records {
        let point = [rec.year as f64, rec.gdp_per_capita];
        match groups.iter_mut().find(|(name, _)| *name == rec.country) {
            Some((_, points)) => points.push(point),
            None => groups.push((rec.country.clone(), vec![point])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    /// United States and Chad over 1960..=2024; Chad has no data before 1961.
    fn table() -> GdpTable {
        let us: Vec<Option<f64>> = (1960..=2024).map(|y| Some(f64::from(y - 1900))).collect();
        let mut chad: Vec<Option<f64>> = (1960..=2024).map(|y| Some(f64::from(y - 1950))).collect();
        chad[0] = None;
        GdpTable::from_rows(
            1960..=2024,
            vec![("United States".into(), us), ("Chad".into(), chad)],
        )
        .unwrap()
    }

    #[test]
    fn three_years_for_one_country() {
        let records = filter(&table(), &["United States"], (1960, 1962));
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, [1960, 1961, 1962]);
        assert!(records.iter().all(|r| r.country == "United States"));
        assert_eq!(records[0].gdp_per_capita, 60.0);
    }

    #[test]
    fn empty_selection_is_empty() {
        let none: [&str; 0] = [];
        assert!(filter(&table(), &none, (1960, 2024)).is_empty());
    }

    #[test]
    fn unknown_country_is_silently_empty() {
        assert!(filter(&table(), &["Atlantis"], (1960, 2024)).is_empty());

        let mixed = filter(&table(), &["Atlantis", "Chad"], (1961, 1961));
        assert_eq!(mixed.len(), 1);
        assert_eq!(mixed[0].country, "Chad");
    }

    #[test]
    fn records_stay_inside_range_and_selection() {
        let table = table();
        for (start, end) in [(1960, 1960), (1975, 1990), (2000, 2024), (1900, 1965)] {
            let records = filter(&table, &["Chad", "United States"], (start, end));
            assert!(!records.is_empty());
            for rec in &records {
                assert!(start <= rec.year && rec.year <= end);
                assert!(rec.country == "Chad" || rec.country == "United States");
            }
        }
    }

    #[test]
    fn order_is_year_then_supplied_order() {
        let records = filter(&table(), &["Chad", "United States"], (1961, 1962));
        let keys: Vec<(i32, &str)> = records.iter().map(|r| (r.year, r.country.as_str())).collect();
        assert_eq!(
            keys,
            [
                (1961, "Chad"),
                (1961, "United States"),
                (1962, "Chad"),
                (1962, "United States"),
            ]
        );
    }

    #[test]
    fn absent_cells_are_skipped() {
        let records = filter(&table(), &["Chad"], (1960, 1961));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 1961);
    }

    #[test]
    fn range_is_clipped_not_rejected() {
        let records = filter(&table(), &["United States"], (2020, 2030));
        assert_eq!(records.len(), 5);
        assert!(filter(&table(), &["United States"], (2030, 2040)).is_empty());
        assert!(filter(&table(), &["United States"], (1990, 1980)).is_empty());
    }

    #[test]
    fn duplicates_are_emitted_once() {
        let records = filter(&table(), &["Chad", "Chad"], (1961, 1963));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = table();
        let first = filter(&table, &["United States", "Chad"], (1970, 1980));
        let second = filter(&table, &["United States", "Chad"], (1970, 1980));
        assert_eq!(first, second);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let records = filter(&table(), &["United States", "Chad"], (1961, 1962));
        let groups = group_by_country(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "United States");
        assert_eq!(groups[0].1, vec![[1961.0, 61.0], [1962.0, 62.0]]);
        assert_eq!(groups[1].0, "Chad");
        assert_eq!(groups[1].1, vec![[1961.0, 11.0], [1962.0, 12.0]]);
    }
}
