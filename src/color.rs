use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: country → Color32
// ---------------------------------------------------------------------------

/// Assigns each selected country a distinct line colour.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map for the given countries, in selection order.
    pub fn new(countries: &[String]) -> Self {
        let palette = generate_palette(countries.len());
        let mapping = countries.iter().cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a country.
    pub fn color_for(&self, country: &str) -> Color32 {
        self.mapping
            .get(country)
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}

// ---------------------------------------------------------------------------
// Continuous scale for map values
// ---------------------------------------------------------------------------

/// Red → yellow → green diverging scale (ColorBrewer RdYlGn, 11 classes).
const RD_YL_GN: [(u8, u8, u8); 11] = [
    (165, 0, 38),
    (215, 48, 39),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 139),
    (255, 255, 191),
    (217, 239, 139),
    (166, 217, 106),
    (102, 189, 99),
    (26, 152, 80),
    (0, 104, 55),
];

/// Map a value onto the scale, clamped to `range`.
///
/// Neighbouring stops are blended in linear RGB.
pub fn scale_color(value: f64, range: (f64, f64)) -> Color32 {
    let (lo, hi) = range;
    let t = if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let pos = t as f32 * (RD_YL_GN.len() - 1) as f32;
    let idx = (pos.floor() as usize).min(RD_YL_GN.len() - 2);
    let frac = pos - idx as f32;

    let a = stop(RD_YL_GN[idx]);
    let b = stop(RD_YL_GN[idx + 1]);
    let mixed: LinSrgb = a.mix(b, frac);
    to_color32(mixed.into_color())
}

fn stop((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}
