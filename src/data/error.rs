use thiserror::Error;

/// Failures while building a [`GdpTable`](super::model::GdpTable).
///
/// All of these are fatal at startup: the source file is static, so a load
/// is never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },
    #[error("schema mismatch: missing column '{column}'")]
    SchemaMismatch { column: String },
    #[error("duplicate country name '{country}'")]
    DuplicateKey { country: String },
    #[error("country '{country}', year {year}: '{value}' is not a number")]
    InvalidValue {
        country: String,
        year: i32,
        value: String,
    },
    #[error("year columns are not contiguous: {after} is followed by {next}")]
    NonContiguousYears { after: i32, next: i32 },
}
