//! Per-size method comparison viewer.
//!
//! Reads the benchmark CSV, keeps the sizes of interest, drops failed
//! executions (negative totals) and displays a 2x2 grid comparing the
//! Nord-Ouest and Balas-Hammer total times.

use anyhow::{anyhow, Result};
use eframe::egui;
use nuage::config::PlotConfig;
use nuage::gui::ComparisonApp;
use nuage::pipeline;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PlotConfig::method_comparison();
    let data = pipeline::method_comparison(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Construction methods: total time by problem size"),
        ..Default::default()
    };

    eframe::run_native(
        "Construction methods: total time by problem size",
        options,
        Box::new(move |cc| Ok(Box::new(ComparisonApp::new(cc, data)))),
    )
    .map_err(|e| anyhow!("failed to open the plot window: {e}"))
}
