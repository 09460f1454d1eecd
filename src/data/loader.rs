use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::LoadError;
use super::model::GdpTable;

/// Header of the row-key column.
pub const COUNTRY_COLUMN: &str = "Country Name";
/// First year column of the World Bank export.
pub const FIRST_YEAR: i32 = 1960;
/// Every year from [`FIRST_YEAR`] up to this one must be present.
pub const LAST_REQUIRED_YEAR: i32 = 2023;
/// Non-blank metadata rows ("Data Source", "Last Updated Date") above the header.
const SKIPPED_METADATA_ROWS: usize = 2;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the GDP table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – World Bank download: two metadata rows, then a header with
///   `Country Name` and one column per year
/// * `.parquet` – wide table with a `Country Name` string column and one
///   numeric column per year, named by the year
pub fn load(path: &Path) -> Result<GdpTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => read_csv(File::open(path)?)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(LoadError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    log::info!(
        "Loaded {} countries for years {}..={} from {}",
        table.num_countries(),
        table.first_year(),
        table.last_year(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Column selection (shared by both formats)
// ---------------------------------------------------------------------------

/// Positions of the retained columns in the source header.
#[derive(Debug)]
struct Columns {
    country: usize,
    /// (column index, year), ascending by year.
    years: Vec<(usize, i32)>,
}

impl Columns {
    fn first_year(&self) -> i32 {
        self.years.first().map(|&(_, y)| y).unwrap_or(FIRST_YEAR)
    }

    fn last_year(&self) -> i32 {
        self.years.last().map(|&(_, y)| y).unwrap_or(FIRST_YEAR - 1)
    }
}

/// Keep `Country Name` plus every header that parses as a year >= 1960.
fn select_columns(headers: &[String]) -> Result<Columns, LoadError> {
    let country = headers
        .iter()
        .position(|h| h == COUNTRY_COLUMN)
        .ok_or_else(|| LoadError::SchemaMismatch {
            column: COUNTRY_COLUMN.to_string(),
        })?;

    let mut years: Vec<(usize, i32)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| h.parse::<i32>().ok().map(|y| (idx, y)))
        .filter(|&(_, y)| y >= FIRST_YEAR)
        .collect();
    years.sort_by_key(|&(_, y)| y);

    for required in FIRST_YEAR..=LAST_REQUIRED_YEAR {
        if !years.iter().any(|&(_, y)| y == required) {
            return Err(LoadError::SchemaMismatch {
                column: required.to_string(),
            });
        }
    }
    for pair in years.windows(2) {
        let (after, next) = (pair[0].1, pair[1].1);
        if next != after + 1 {
            return Err(LoadError::NonContiguousYears { after, next });
        }
    }

    Ok(Columns { country, years })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse the World Bank CSV layout from any reader.
///
/// Blank lines are ignored; the first two non-blank rows are metadata and
/// the third is the header. Trailing columns that are neither the country
/// name nor a year (codes, indicator names, the empty trailing column) are
/// dropped.
pub fn read_csv<R: Read>(source: R) -> Result<GdpTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = reader
        .records()
        .filter(|r| !matches!(r, Ok(rec) if rec.iter().all(|f| f.trim().is_empty())));

    for _ in 0..SKIPPED_METADATA_ROWS {
        records.next().transpose()?;
    }
    let header = records
        .next()
        .transpose()?
        .ok_or_else(|| LoadError::SchemaMismatch {
            column: COUNTRY_COLUMN.to_string(),
        })?;
    let headers: Vec<String> = header
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let columns = select_columns(&headers)?;

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        let country = record.get(columns.country).unwrap_or("").trim().to_string();
        let values = columns
            .years
            .iter()
            .map(|&(idx, year)| parse_cell(record.get(idx).unwrap_or(""), &country, year))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push((country, values));
    }

    GdpTable::from_rows(columns.first_year()..=columns.last_year(), rows)
}

fn parse_cell(raw: &str, country: &str, year: i32) -> Result<Option<f64>, LoadError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| LoadError::InvalidValue {
            country: country.to_string(),
            year,
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a wide Parquet table.
///
/// Year columns may be any numeric type; they are cast to `Float64`, and
/// nulls become absent values. Works with files written by `df.to_parquet()`
/// after resetting the index, and with `generate_sample`.
fn load_parquet(path: &Path) -> Result<GdpTable, LoadError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let columns = select_columns(&headers)?;
    let reader = builder.build()?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;

        let names = cast(batch.column(columns.country), &DataType::Utf8)?;
        let names = names.as_string::<i32>();

        let year_arrays = columns
            .years
            .iter()
            .map(|&(idx, _)| cast(batch.column(idx), &DataType::Float64))
            .collect::<Result<Vec<_>, _>>()?;
        let year_arrays: Vec<_> = year_arrays
            .iter()
            .map(|a| a.as_primitive::<Float64Type>())
            .collect();

        for row in 0..batch.num_rows() {
            let country = if names.is_null(row) {
                String::new()
            } else {
                names.value(row).trim().to_string()
            };
            let values: Vec<Option<f64>> = year_arrays
                .iter()
                .map(|arr| (!arr.is_null(row)).then(|| arr.value(row)))
                .collect();
            rows.push((country, values));
        }
    }

    GdpTable::from_rows(columns.first_year()..=columns.last_year(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a World-Bank-shaped CSV with the given rows of (name, cell text).
    fn world_bank_csv(years: std::ops::RangeInclusive<i32>, rows: &[(&str, &str)]) -> String {
        let mut out = String::from("\u{feff}\"Data Source\",\"World Development Indicators\",\n\n");
        out.push_str("\"Last Updated Date\",\"2025-07-01\",\n\n");
        out.push_str("\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\"");
        for y in years.clone() {
            out.push_str(&format!(",\"{y}\""));
        }
        out.push_str(",\n");
        for (name, cell) in rows {
            out.push_str(&format!("\"{name}\",\"XXX\",\"GDP per capita (current US$)\",\"NY.GDP.PCAP.CD\""));
            for _ in years.clone() {
                out.push_str(&format!(",\"{cell}\""));
            }
            out.push_str(",\n");
        }
        out
    }

    #[test]
    fn reads_world_bank_layout() {
        let csv = world_bank_csv(1960..=2024, &[("United States", "3007.12"), ("Chad", "")]);
        let table = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(table.years(), 1960..=2024);
        assert_eq!(table.countries(), ["United States", "Chad"]);
        assert_eq!(table.value("United States", 1960), Some(3007.12));
        assert_eq!(table.value("United States", 2024), Some(3007.12));
        assert_eq!(table.value("Chad", 1990), None);
    }

    #[test]
    fn missing_year_column_is_schema_mismatch() {
        let csv = world_bank_csv(1961..=2023, &[("Chad", "1")]);
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::SchemaMismatch { column } if column == "1960"));
    }

    #[test]
    fn missing_country_column_is_schema_mismatch() {
        let csv = world_bank_csv(1960..=2023, &[("Chad", "1")]).replace("Country Name", "Name");
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::SchemaMismatch { column } if column == COUNTRY_COLUMN));
    }

    #[test]
    fn duplicate_country_is_rejected() {
        let csv = world_bank_csv(1960..=2023, &[("Chad", "1"), ("Chad", "2")]);
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateKey { country } if country == "Chad"));
    }

    #[test]
    fn non_numeric_cell_is_invalid_value() {
        let csv = world_bank_csv(1960..=2023, &[("Chad", "n/a")]);
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { year: 1960, .. }));
    }

    #[test]
    fn gap_after_required_years_is_rejected() {
        let mut headers: Vec<String> = vec![COUNTRY_COLUMN.to_string()];
        headers.extend((FIRST_YEAR..=LAST_REQUIRED_YEAR).map(|y| y.to_string()));
        headers.push("2025".to_string());
        let err = select_columns(&headers).unwrap_err();
        assert!(matches!(err, LoadError::NonContiguousYears { after: 2023, next: 2025 }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load(Path::new("gdp.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { extension } if extension == "xlsx"));
    }
}
