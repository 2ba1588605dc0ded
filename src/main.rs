//! Heatwave Viewer - Latvia extreme heat indicators
//!
//! Interactive charts for the Heat Wave Index and heatwave-day counts across
//! observations, historical model runs, and the SSP scenarios.

mod charts;
mod data;
mod gui;

use std::path::PathBuf;

use eframe::egui;
use tracing::error;
use tracing_subscriber::EnvFilter;

use gui::HeatwaveApp;

/// Overrides the directory holding the two CSV datasets.
const DATA_DIR_ENV: &str = "HEATWAVE_DATA_DIR";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let data_dir = std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    // The HWI dataset is required; the heatwave-days dataset may be absent
    // and only disables its tab.
    let climate = match data::load_climate_data(&data_dir) {
        Ok(data) => data,
        Err(e) => {
            error!(dir = %data_dir.display(), error = %e, "failed to load HWI dataset");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("Latvija — ekstremālo karstuma rādītāji"),
        ..Default::default()
    };

    eframe::run_native(
        "Heatwave Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(HeatwaveApp::new(cc, climate)))),
    )
}
