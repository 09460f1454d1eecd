use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const FIRST_YEAR: i32 = 1960;
const LAST_YEAR: i32 = 2024;

/// (name, code, GDP per capita in 1960, first year with data)
const COUNTRIES: &[(&str, &str, f64, i32)] = &[
    ("United States", "USA", 3_007.0, 1960),
    ("Germany", "DEU", 1_350.0, 1970),
    ("France", "FRA", 1_330.0, 1960),
    ("Norway", "NOR", 1_440.0, 1960),
    ("Japan", "JPN", 480.0, 1960),
    ("Korea, Rep.", "KOR", 160.0, 1960),
    ("India", "IND", 82.0, 1960),
    ("Mexico", "MEX", 340.0, 1960),
    ("Brazil", "BRA", 230.0, 1960),
    ("Chile", "CHL", 510.0, 1960),
    ("Nigeria", "NGA", 95.0, 1960),
    ("Egypt, Arab Rep.", "EGY", 150.0, 1965),
    ("Kosovo", "XKX", 1_100.0, 2008),
    ("Euro area", "EMU", 1_000.0, 1970),
    ("World", "WLD", 460.0, 1960),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Compound yearly growth with noise; `None` before `first_year`.
fn generate_series(base: f64, first_year: i32, rng: &mut SimpleRng) -> Vec<Option<f64>> {
    let trend = rng.gauss(0.05, 0.015);
    let mut value = base;
    (FIRST_YEAR..=LAST_YEAR)
        .map(|year| {
            value *= 1.0 + rng.gauss(trend, 0.03);
            value = value.max(1.0);
            (year >= first_year).then(|| (value * 1e4).round() / 1e4)
        })
        .collect()
}

fn write_csv(path: &str, rows: &[(&str, &str, Vec<Option<f64>>)]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Always)
        .from_path(path)?;

    writer.write_record(["Data Source", "World Development Indicators", ""])?;
    writer.write_record(["Last Updated Date", "2025-07-01", ""])?;

    let mut header = vec![
        "Country Name".to_string(),
        "Country Code".to_string(),
        "Indicator Name".to_string(),
        "Indicator Code".to_string(),
    ];
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|y| y.to_string()));
    header.push(String::new());
    writer.write_record(&header)?;

    for (name, code, values) in rows {
        let mut record = vec![
            name.to_string(),
            code.to_string(),
            "GDP per capita (current US$)".to_string(),
            "NY.GDP.PCAP.CD".to_string(),
        ];
        record.extend(values.iter().map(|v| v.map(|x| x.to_string()).unwrap_or_default()));
        record.push(String::new());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let rows: Vec<(&str, &str, Vec<Option<f64>>)> = COUNTRIES
        .iter()
        .map(|&(name, code, base, first_year)| {
            (name, code, generate_series(base, first_year, &mut rng))
        })
        .collect();

    // World Bank layout CSV
    let csv_path = "sample_gdp_pc.csv";
    write_csv(csv_path, &rows).expect("Failed to write CSV");

    // Wide Parquet: Country Name + one Float64 column per year
    let mut fields = vec![Field::new("Country Name", DataType::Utf8, false)];
    fields.extend((FIRST_YEAR..=LAST_YEAR).map(|y| Field::new(y.to_string(), DataType::Float64, true)));
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(
        rows.iter().map(|(name, _, _)| *name).collect::<Vec<_>>(),
    ))];
    for offset in 0..(LAST_YEAR - FIRST_YEAR + 1) as usize {
        let values: Float64Array = rows.iter().map(|(_, _, v)| v[offset]).collect();
        columns.push(Arc::new(values));
    }

    let batch = RecordBatch::try_new(schema.clone(), columns).expect("Failed to create RecordBatch");

    let parquet_path = "sample_gdp_pc.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} countries ({FIRST_YEAR}–{LAST_YEAR}) to {csv_path} and {parquet_path}",
        rows.len()
    );
}
