//! Chart Plotter Module
//! Scatter layers for the two plot variants using egui_plot.

use crate::config::{METHOD_BH_LABEL, METHOD_NW_LABEL};
use egui::Color32;
use egui_plot::{GridMark, Legend, Plot, PlotPoints, Points};

/// Sequential palette keyed by problem size (viridis anchors).
pub const SIZE_PALETTE: [Color32; 4] = [
    Color32::from_rgb(68, 1, 84),    // Violet
    Color32::from_rgb(49, 104, 142), // Blue
    Color32::from_rgb(53, 183, 121), // Green
    Color32::from_rgb(253, 231, 37), // Yellow
];

/// Colors for the two compared methods.
pub const NW_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue
pub const BH_COLOR: Color32 = Color32::from_rgb(255, 127, 14); // Orange

/// Points of one problem size, jitter already applied to x.
#[derive(Clone, Debug)]
pub struct SizeGroup {
    pub size: i64,
    pub points: Vec<[f64; 2]>,
}

/// Chart data for the single-metric scatter.
#[derive(Clone, Debug)]
pub struct MetricScatterData {
    pub metric: String,
    pub tick_sizes: Vec<i64>,
    pub groups: Vec<SizeGroup>,
}

/// One per-size comparison panel: both method clouds at their jittered
/// category positions (Nord-Ouest near 0, Balas-Hammer near 1).
#[derive(Clone)]
pub struct SizePanel {
    pub size: i64,
    pub runs: usize,
    pub nord_ouest: Vec<[f64; 2]>,
    pub balas_hammer: Vec<[f64; 2]>,
}

/// Chart data for the per-size method comparison grid.
#[derive(Clone)]
pub struct ComparisonData {
    pub expected_runs: usize,
    pub panels: Vec<SizePanel>,
}

/// Draws the scatter layers for both plot variants.
pub struct ScatterPlotter;

impl ScatterPlotter {
    /// Get color for a size group.
    pub fn size_color(group_index: usize) -> Color32 {
        SIZE_PALETTE[group_index % SIZE_PALETTE.len()]
    }

    /// Draw the single-metric scatter.
    /// X ticks are pinned to the true (non-jittered) sizes; the legend is
    /// keyed by `n`.
    pub fn draw_metric_scatter(ui: &mut egui::Ui, data: &MetricScatterData) {
        let ticks = data.tick_sizes.clone();
        let tick_labels = data.tick_sizes.clone();

        Plot::new("metric_scatter")
            .legend(Legend::default())
            .x_axis_label("Problem size n")
            .y_axis_label(format!("Measured value ({})", data.metric))
            .allow_scroll(false)
            // Force the gridlines onto the exact size values
            .x_grid_spacer(move |_input| {
                ticks
                    .iter()
                    .map(|&size| GridMark {
                        value: size as f64,
                        step_size: 1000.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let value = mark.value.round() as i64;
                if tick_labels.contains(&value) {
                    value.to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, group) in data.groups.iter().enumerate() {
                    let points = PlotPoints::from_iter(group.points.iter().copied());
                    plot_ui.points(
                        Points::new(points)
                            .radius(4.0)
                            .color(Self::size_color(i))
                            .name(format!("n = {}", group.size)),
                    );
                }
            });
    }

    /// Draw one comparison panel. The figure-level legend replaces the
    /// per-panel one.
    pub fn draw_method_panel(ui: &mut egui::Ui, panel: &SizePanel, height: f32) {
        Plot::new(format!("method_panel_{}", panel.size))
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label("Total time (s)")
            .include_x(-0.5)
            .include_x(1.5)
            .x_grid_spacer(|_input| {
                vec![
                    GridMark {
                        value: 0.0,
                        step_size: 2.0,
                    },
                    GridMark {
                        value: 1.0,
                        step_size: 2.0,
                    },
                ]
            })
            .x_axis_formatter(|mark, _range| match mark.value.round() as i64 {
                0 => METHOD_NW_LABEL.to_string(),
                1 => METHOD_BH_LABEL.to_string(),
                _ => String::new(),
            })
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(panel.nord_ouest.iter().copied()))
                        .radius(3.0)
                        .color(NW_COLOR),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(panel.balas_hammer.iter().copied()))
                        .radius(3.0)
                        .color(BH_COLOR),
                );
            });
    }
}
