//! Method Comparison Window
//! 2x2 grid of per-size panels comparing the two construction methods,
//! with a single deduplicated figure-level legend.

use crate::charts::{ComparisonData, ScatterPlotter, BH_COLOR, NW_COLOR};
use crate::config::{METHOD_BH_LABEL, METHOD_NW_LABEL};
use egui::RichText;

const PANEL_SPACING: f32 = 12.0;

pub struct ComparisonApp {
    data: ComparisonData,
}

impl ComparisonApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data: ComparisonData) -> Self {
        Self { data }
    }

    /// One legend row for the whole figure instead of one per panel.
    fn draw_legend(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (color, label) in [(NW_COLOR, METHOD_NW_LABEL), (BH_COLOR, METHOD_BH_LABEL)] {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(RichText::new(label).size(13.0));
                ui.add_space(12.0);
            }
        });
    }
}

impl eframe::App for ComparisonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Total time by problem size: Nord-Ouest vs Balas-Hammer")
                        .size(18.0)
                        .strong(),
                );
            });
            ui.add_space(4.0);
            Self::draw_legend(ui);
            ui.add_space(6.0);

            let panel_width = (ui.available_width() - PANEL_SPACING) / 2.0;
            let panel_height =
                ((ui.available_height() - PANEL_SPACING) / 2.0 - 28.0).max(120.0);

            for row in self.data.panels.chunks(2) {
                ui.horizontal(|ui| {
                    for panel in row {
                        ui.vertical(|ui| {
                            ui.set_width(panel_width);
                            ui.label(
                                RichText::new(format!(
                                    "n = {} ({} runs expected)",
                                    panel.size, self.data.expected_runs
                                ))
                                .size(13.0)
                                .strong(),
                            );
                            ScatterPlotter::draw_method_panel(ui, panel, panel_height);
                        });
                        ui.add_space(PANEL_SPACING);
                    }
                });
                ui.add_space(PANEL_SPACING);
            }
        });
    }
}
