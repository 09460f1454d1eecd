//! Core data pipeline behind the GDP per capita explorer.
//!
//! The presentation layer (the `gdp-explorer` binary) calls [`data::load`]
//! once at startup and then the pure functions below per interaction:
//!
//! * [`data::filter`] slices the table into long-form series for line charts
//! * [`data::resolve`] maps a country name to its ISO alpha-3 code
//! * [`data::regions`] lists the map tabs and their colour scales
//! * [`data::MapFrame`] builds the coded, rounded rows a map renders

pub mod data;
