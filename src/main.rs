//! Doc Reader - PDF/DOCX document library
//!
//! Pick documents from disk, keep them in an in-memory library, and open
//! them from a simple two-screen interface.

mod app;
mod core;
mod ui;

use app::ReaderApp;
use crate::core::config::AppConfig;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e:#}");
        AppConfig::default()
    });

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    tracing::info!("Starting Doc Reader...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Doc Reader"),
        ..Default::default()
    };

    eframe::run_native(
        "Doc Reader",
        native_options,
        Box::new(|cc| Ok(Box::new(ReaderApp::new(cc, config)?))),
    )
}
