use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{map, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GdpExplorerApp {
    pub state: AppState,
}

impl GdpExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GdpExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        match self.state.view {
            View::Series => {
                // ---- Left side panel: selectors ----
                egui::SidePanel::left("selector_panel")
                    .default_width(260.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        panels::side_panel(ui, &mut self.state);
                    });

                // ---- Central panel: line chart ----
                egui::CentralPanel::default().show(ctx, |ui| {
                    plot::series_plot(ui, &self.state);
                });
            }
            View::Maps => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    map::region_maps(ui, &mut self.state);
                });
            }
        }
    }
}
