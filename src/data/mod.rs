//! Data layer: core types, loading, reshaping and country coding.
//!
//! Architecture:
//! ```text
//!  .csv / .parquet (wide: one column per year)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → GdpTable (transposed, years as rows)
//!   └──────────┘
//!        │
//!        ├──────────────────────────┐
//!        ▼                          ▼
//!   ┌──────────┐              ┌──────────┐
//!   │  filter   │ long-form   │   map     │ one year, ISO3-coded rows
//!   └──────────┘  series      └──────────┘
//!                                   │
//!                         countries (resolve) + regions (catalog)
//! ```

pub mod countries;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod map;
pub mod model;
pub mod regions;

pub use countries::{resolve, Continent, CountryIdentity, Iso3, Resolution};
pub use error::LoadError;
pub use filter::{filter, group_by_country};
pub use loader::load;
pub use map::{MapFrame, MapRow};
pub use model::{GdpTable, SeriesRecord};
pub use regions::{region, regions, RegionConfig};
