use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot};

use gdp_explorer::data::{region, regions, MapRow, RegionConfig};

use crate::color::scale_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Regional maps (central panel)
// ---------------------------------------------------------------------------

/// Render the region tabs and the active region's value-coloured view.
pub fn region_maps(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a GDP per capita file to begin  (File → Open…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(format!(
            "GDP per capita (nominal USD) Interactive Maps ({} data)",
            state.map_year
        ));
    });

    ui.horizontal(|ui: &mut Ui| {
        for r in regions() {
            ui.selectable_value(&mut state.active_region, r.key, r.label);
        }
    });
    ui.separator();

    let Some(region) = region(state.active_region) else {
        return;
    };

    let mut rows: Vec<&MapRow> = state.map_frame.rows_for(region).collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(region.title());
    });
    color_legend(ui, region);

    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(format!("No {} data for {}.", state.map_year, region.label));
        });
        return;
    }

    ui.columns(2, |cols| {
        value_bars(&mut cols[0], region, &rows);
        value_table(&mut cols[1], region, &rows);
    });
}

/// Tick labels of the region's colour scale, each in its own colour.
fn color_legend(ui: &mut Ui, region: &RegionConfig) {
    ui.horizontal(|ui: &mut Ui| {
        for (value, label) in region.ticks() {
            let color = scale_color(value, region.value_range);
            ui.label(RichText::new("■").color(color).size(18.0));
            ui.label(label);
        }
    });
}

/// One horizontal bar per country, highest value on top.
fn value_bars(ui: &mut Ui, region: &RegionConfig, rows: &[&MapRow]) {
    let n = rows.len();
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new((n - i) as f64, row.value)
                .name(format!("{}\n{}", row.country, format_usd(row.value)))
                .fill(scale_color(row.value, region.value_range))
        })
        .collect();

    Plot::new(("region_bars", region.key))
        .show_axes([true, false])
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Country / ISO3 / value listing.
fn value_table(ui: &mut Ui, region: &RegionConfig, rows: &[&MapRow]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto())
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Country");
            });
            header.col(|ui| {
                ui.strong("ISO3");
            });
            header.col(|ui| {
                ui.strong("GDP per capita");
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.country);
                    });
                    table_row.col(|ui| {
                        ui.monospace(row.iso3.as_str());
                    });
                    table_row.col(|ui| {
                        ui.label(
                            RichText::new(format_usd(row.value))
                                .color(scale_color(row.value, region.value_range)),
                        );
                    });
                });
            }
        });
}

/// `$12,345.67` style with thousands separators.
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.5), "$999.50");
        assert_eq!(format_usd(1_234.567), "$1,234.57");
        assert_eq!(format_usd(85_809.9), "$85,809.90");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_usd(-42.0), "-$42.00");
    }
}
