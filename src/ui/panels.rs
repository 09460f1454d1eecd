use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – country and year selectors
// ---------------------------------------------------------------------------

/// Render the selector panel of the line-chart view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Select countries:");
    ui.separator();

    let Some((first_year, last_year)) = state.year_domain() else {
        ui.label("No dataset loaded.");
        return;
    };

    // ---- Current selection as removable chips ----
    let mut toggled: Option<String> = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for country in &state.selected {
            let color = state.color_map.color_for(country);
            if ui
                .small_button(RichText::new(format!("✕ {country}")).color(color))
                .clicked()
            {
                toggled = Some(country.clone());
            }
        }
    });
    ui.add_space(4.0);

    ui.add(egui::TextEdit::singleline(&mut state.country_search).hint_text("Search…"));

    // ---- Matching countries (checkboxes) ----
    let candidates: Vec<String> = state
        .matching_countries()
        .into_iter()
        .map(str::to_owned)
        .collect();
    ScrollArea::vertical()
        .max_height(ui.available_height() * 0.6)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for country in &candidates {
                let mut checked = state.selected.contains(country);
                if ui.checkbox(&mut checked, country.as_str()).changed() {
                    toggled = Some(country.clone());
                }
            }
        });

    if let Some(country) = toggled {
        state.toggle_country(&country);
    }

    // ---- Year range ----
    ui.separator();
    ui.strong("Select year range:");
    let (mut start, mut end) = state.year_range;
    ui.add(egui::Slider::new(&mut start, first_year..=last_year).text("From"));
    ui.add(egui::Slider::new(&mut end, first_year..=last_year).text("To"));
    if (start, end) != state.year_range {
        state.set_year_range(start, end);
    }

    ui.add_space(12.0);
    ui.vertical_centered(|ui: &mut Ui| {
        if ui.button("Clear Selections").clicked() {
            state.clear_selections();
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Export series…").clicked() {
                if let Some(path) = save_file_dialog("Export series", "gdp_series.csv") {
                    let result = state.export_series(&path);
                    report_export(state, "series", result);
                }
                ui.close_menu();
            }
            if ui.button("Export map rows…").clicked() {
                let name = format!("gdp_map_{}.csv", state.map_year);
                if let Some(path) = save_file_dialog("Export map rows", &name) {
                    let result = state.export_map_rows(&path);
                    report_export(state, "map rows", result);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.view, View::Series, "GDP per capita Plotter");
        ui.selectable_value(&mut state.view, View::Maps, "Regional Maps");

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} countries loaded, {} selected",
                table.num_countries(),
                state.selected.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn report_export(state: &mut AppState, what: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => state.status_message = None,
        Err(e) => {
            log::error!("Failed to export {what}: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open GDP per capita data")
        .add_filter("Supported files", &["csv", "parquet", "pq"])
        .add_filter("World Bank CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match gdp_explorer::data::load(&path) {
            Ok(table) => state.set_table(table),
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

fn save_file_dialog(title: &str, file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .set_file_name(file_name)
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file()
}
