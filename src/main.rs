mod app;
mod color;
mod config;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::GdpExplorerApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_args(std::env::args().skip(1));
    let mut state = AppState::new(&config);

    // A present-but-broken file is fatal; a missing one leaves File → Open.
    if config.data_path.exists() {
        let table = gdp_explorer::data::load(&config.data_path)
            .with_context(|| format!("loading {}", config.data_path.display()))?;
        state.set_table(table);
    } else {
        log::warn!(
            "{} not found, starting without data",
            config.data_path.display()
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "GDP per capita Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(GdpExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow!("running UI: {e}"))
}
