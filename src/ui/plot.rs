use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use gdp_explorer::data::group_by_country;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GDP line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the per-country GDP line chart.
///
/// An empty selection always shows the placeholder, never a stale chart.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a GDP per capita file to begin  (File → Open…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.chart_title());
    });

    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Select one or more countries to plot.");
        });
        return;
    }

    Plot::new("gdp_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("GDP per capita")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (country, points) in group_by_country(&state.series) {
                let line = Line::new(PlotPoints::from(points))
                    .name(&country)
                    .color(state.color_map.color_for(&country))
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}
