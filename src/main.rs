// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::info;

mod app;
mod config;
mod file;
mod state;
mod ui;
mod utils;

use app::AqalApp;
use config::Settings;
use config::settings::APP_NAME;

fn main() -> Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.log_filter)?;
    info!(
        path = ?Settings::default_path(),
        settings = ?settings,
        "Loaded settings"
    );
    info!(storage_key = %settings.storage_key, "Starting AQAL Explorer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([480.0, 560.0])
            .with_title("AQAL Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            Box::new(AqalApp::new(cc, settings))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("AQAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    Ok(())
}
