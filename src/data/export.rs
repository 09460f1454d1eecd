use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

/// Write records to a file.  Dispatch by extension.
///
/// * `.csv`  – header row from the field names, one line per record
/// * `.json` – pretty-printed array of objects
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, records),
        "json" => write_json(path, records),
        other => bail!("Unsupported export extension: .{other}"),
    }?;

    log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for (i, rec) in records.iter().enumerate() {
        writer
            .serialize(rec)
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).context("writing JSON")?;
    writer.flush().context("flushing JSON file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::map::MapFrame;
    use crate::data::model::SeriesRecord;

    fn series() -> Vec<SeriesRecord> {
        vec![
            SeriesRecord {
                year: 1960,
                country: "Chad".into(),
                gdp_per_capita: 104.5,
            },
            SeriesRecord {
                year: 1961,
                country: "Chad".into(),
                gdp_per_capita: 110.25,
            },
        ]
    }

    #[test]
    fn series_to_csv_uses_long_form_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        write_records(&path, &series()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["Year,Country,GDP per capita", "1960,Chad,104.5", "1961,Chad,110.25"]);
    }

    #[test]
    fn map_rows_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        let frame = MapFrame::from_values([("Chad", 1_000.126)]);
        write_records(&path, &frame.rows).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "Country Name": "Chad", "ISO3": "TCD", "Value": 1000.13 }])
        );
    }

    #[test]
    fn unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_records(&dir.path().join("out.xlsx"), &series()).is_err());
    }
}
