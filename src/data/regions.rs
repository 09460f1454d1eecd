use super::countries::Continent;

/// Display configuration of one regional map tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionConfig {
    /// Stable identifier, e.g. `"north_america"`.
    pub key: &'static str,
    /// Tab label.
    pub label: &'static str,
    /// Geographic scope name as used by map renderers.
    pub scope: &'static str,
    /// Countries shown on this map.
    pub continent: Continent,
    /// Colour scale bounds; values outside are clamped.
    pub value_range: (f64, f64),
    pub tick_values: &'static [f64],
    /// One label per entry of `tick_values`.
    pub tick_labels: &'static [&'static str],
}

impl RegionConfig {
    /// Map heading.
    pub fn title(&self) -> String {
        format!("{} Countries by GDP per capita (nominal USD)", self.label)
    }

    /// Ticks paired with their labels.
    pub fn ticks(&self) -> impl Iterator<Item = (f64, &'static str)> + '_ {
        self.tick_values
            .iter()
            .copied()
            .zip(self.tick_labels.iter().copied())
    }
}

/// All map tabs, in display order.
pub fn regions() -> &'static [RegionConfig] {
    REGIONS
}

/// Look up a region by key.
pub fn region(key: &str) -> Option<&'static RegionConfig> {
    REGIONS.iter().find(|r| r.key == key)
}

const REGIONS: &[RegionConfig] = &[
    RegionConfig {
        key: "europe",
        label: "Europe",
        scope: "europe",
        continent: Continent::Europe,
        value_range: (0.0, 80_000.0),
        tick_values: &[0.0, 10_000.0, 20_000.0, 30_000.0, 40_000.0, 50_000.0, 60_000.0, 70_000.0, 80_000.0],
        tick_labels: &["0", "10k", "20k", "30k", "40k", "50k", "60k", "70k", "≥80k"],
    },
    RegionConfig {
        key: "north_america",
        label: "North America",
        scope: "north america",
        continent: Continent::NorthAmerica,
        value_range: (0.0, 30_000.0),
        tick_values: &[0.0, 5_000.0, 10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0],
        tick_labels: &["0", "5k", "10k", "15k", "20k", "25k", "≥30k"],
    },
    RegionConfig {
        key: "asia",
        label: "Asia",
        scope: "asia",
        continent: Continent::Asia,
        value_range: (0.0, 50_000.0),
        tick_values: &[0.0, 10_000.0, 20_000.0, 30_000.0, 40_000.0, 50_000.0],
        tick_labels: &["0", "10k", "20k", "30k", "40k", "50k+"],
    },
    RegionConfig {
        key: "south_america",
        label: "South America",
        scope: "south america",
        continent: Continent::SouthAmerica,
        value_range: (0.0, 30_000.0),
        tick_values: &[0.0, 5_000.0, 10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0],
        tick_labels: &["0", "5k", "10k", "15k", "20k", "25k", "30k+"],
    },
    RegionConfig {
        key: "africa",
        label: "Africa",
        scope: "africa",
        continent: Continent::Africa,
        value_range: (0.0, 8_000.0),
        tick_values: &[0.0, 1_000.0, 2_000.0, 3_000.0, 4_000.0, 5_000.0, 6_000.0, 7_000.0, 8_000.0],
        tick_labels: &["0", "1k", "2k", "3k", "4k", "5k", "6k", "7k", "8k+"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_is_preserved() {
        let keys: Vec<&str> = regions().iter().map(|r| r.key).collect();
        assert_eq!(keys, ["europe", "north_america", "asia", "south_america", "africa"]);
    }

    #[test]
    fn every_tick_has_a_label() {
        for r in regions() {
            assert_eq!(r.tick_values.len(), r.tick_labels.len(), "{}", r.key);
        }
    }

    #[test]
    fn ticks_span_the_value_range() {
        for r in regions() {
            assert!(r.value_range.0 < r.value_range.1);
            assert_eq!(r.tick_values.first(), Some(&r.value_range.0));
            assert_eq!(r.tick_values.last(), Some(&r.value_range.1));
            assert!(r.tick_values.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn lookup_and_title() {
        let asia = region("asia").unwrap();
        assert_eq!(asia.title(), "Asia Countries by GDP per capita (nominal USD)");
        assert_eq!(asia.ticks().last(), Some((50_000.0, "50k+")));
        assert!(region("antarctica").is_none());
    }
}
