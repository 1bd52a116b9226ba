//! Metric Scatter Window
//! Single-panel display of one metric against the jittered problem size.

use crate::charts::{MetricScatterData, ScatterPlotter};
use egui::RichText;

pub struct MetricScatterApp {
    data: MetricScatterData,
}

impl MetricScatterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data: MetricScatterData) -> Self {
        Self { data }
    }
}

impl eframe::App for MetricScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "Experimental complexity scatter ({})",
                        self.data.metric
                    ))
                    .size(18.0)
                    .strong(),
                );
            });
            ui.add_space(8.0);

            ScatterPlotter::draw_metric_scatter(ui, &self.data);
        });
    }
}
