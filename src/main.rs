use eframe::egui;

use penguin_dash::data::loader;
use penguin_dash::state::AppState;
use penguin_dash::{DashboardConfig, PenguinDashApp};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env().unwrap_or_else(|e| {
        log::warn!("Ignoring config: {e:#}");
        DashboardConfig::default()
    });

    let mut status = None;
    let dataset = match &config.dataset_path {
        Some(path) => loader::load_file(path).or_else(|e| {
            log::error!("Failed to load {}: {e:#}", path.display());
            status = Some(format!("Error: {e:#} (showing built-in data)"));
            loader::load_embedded()
        })?,
        None => loader::load_embedded()?,
    };
    log::info!(
        "Loaded {} penguins with species {:?}",
        dataset.len(),
        dataset.species()
    );

    let mut state = AppState::new(dataset, &config);
    state.status_message = status;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Data",
        options,
        Box::new(|_cc| Ok(Box::new(PenguinDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
