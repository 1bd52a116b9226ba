//! Charts module - chart data and scatter rendering

mod plotter;

pub use plotter::{
    ComparisonData, MetricScatterData, ScatterPlotter, SizeGroup, SizePanel, BH_COLOR, NW_COLOR,
    SIZE_PALETTE,
};
