use std::path::PathBuf;

/// Where the World Bank download is expected when no path is given.
pub const DEFAULT_DATA_PATH: &str = "./gdp_pc_data.csv";
/// Year column shown on the regional maps.
pub const MAP_YEAR: i32 = 2024;

/// Startup settings compiled into the binary.
///
/// The only runtime override is an optional data path as the first
/// positional argument.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub map_year: i32,
    /// Countries selected when a table is first loaded.
    pub default_countries: Vec<String>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            map_year: MAP_YEAR,
            default_countries: vec!["United States".to_string()],
            window_size: [1400.0, 900.0],
            min_window_size: [700.0, 450.0],
        }
    }
}

impl AppConfig {
    /// Build from process arguments, program name excluded.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().find(|a| !a.starts_with('-')) {
            config.data_path = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = AppConfig::from_args(Vec::new());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn first_positional_argument_is_data_path() {
        let config = AppConfig::from_args(vec!["data/gdp.parquet".to_string()]);
        assert_eq!(config.data_path, PathBuf::from("data/gdp.parquet"));
        assert_eq!(config.map_year, MAP_YEAR);
    }
}
