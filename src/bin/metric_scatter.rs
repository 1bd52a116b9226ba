//! Single-metric scatter viewer.
//!
//! Reads the benchmark CSV, keeps the sizes of interest, jitters the x
//! coordinate and displays one scatter panel colored by problem size.

use anyhow::{anyhow, Result};
use eframe::egui;
use nuage::config::PlotConfig;
use nuage::gui::MetricScatterApp;
use nuage::pipeline;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PlotConfig::metric_scatter();
    let data = pipeline::metric_scatter(&config)?;

    let title = format!("Experimental complexity ({})", config.metric);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(MetricScatterApp::new(cc, data)))),
    )
    .map_err(|e| anyhow!("failed to open the plot window: {e}"))
}
