// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod state;
mod ui;
mod upload;

use app::QualityApp;
use config::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    tracing::info!("analysis endpoint: {}", config.endpoint_base());

    let app = QualityApp::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_title("Code Quality Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "Code Quality Analyzer",
        options,
        Box::new(move |_cc| Box::new(app)),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
