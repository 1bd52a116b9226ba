//! Shared Pipeline
//! Loader -> Filter -> Jitter orchestration shared by the two plot
//! variants; the binaries only render the prepared chart data.

use crate::charts::{ComparisonData, MetricScatterData, SizeGroup, SizePanel};
use crate::config::{PlotConfig, METHOD_BH_COLUMN, METHOD_NW_COLUMN, RUNS_PER_SIZE};
use crate::data::{self, Jitter, ResultTable, TableError};
use tracing::info;

/// Load, filter and jitter the table for the single-metric scatter.
pub fn metric_scatter(config: &PlotConfig) -> Result<MetricScatterData, TableError> {
    let table = ResultTable::from_csv(&config.source_path)?;
    info!(
        "loaded {} rows from {}",
        table.height(),
        config.source_path.display()
    );

    let table = data::keep_sizes(&table, &config.accepted_sizes)?;
    info!("{} rows after size filter", table.height());

    build_metric_scatter(&table, config)
}

/// Jitter and group an already-filtered table for the scatter renderer.
///
/// The metric column is resolved here, before any window opens.
pub fn build_metric_scatter(
    table: &ResultTable,
    config: &PlotConfig,
) -> Result<MetricScatterData, TableError> {
    let sizes = table.sizes()?;
    let values = table.metric_values(&config.metric)?;

    let mut jitter = Jitter::with_seed(config.seed);
    let offsets = jitter.uniform(table.height(), config.jitter_range);

    let mut tick_sizes = config.accepted_sizes.clone();
    tick_sizes.sort_unstable();

    let mut groups: Vec<SizeGroup> = tick_sizes
        .iter()
        .map(|&size| SizeGroup {
            size,
            points: Vec::new(),
        })
        .collect();

    for ((&size, &value), &offset) in sizes.iter().zip(&values).zip(&offsets) {
        if let Some(group) = groups.iter_mut().find(|g| g.size == size) {
            group.points.push([size as f64 + offset, value]);
        }
    }

    Ok(MetricScatterData {
        metric: config.metric.clone(),
        tick_sizes,
        groups,
    })
}

/// Load, filter and jitter the table for the per-size method comparison.
pub fn method_comparison(config: &PlotConfig) -> Result<ComparisonData, TableError> {
    let table = ResultTable::from_csv(&config.source_path)?;
    info!(
        "loaded {} rows from {}",
        table.height(),
        config.source_path.display()
    );

    let table = data::keep_sizes(&table, &config.accepted_sizes)?;
    let table = data::drop_negative(&table, &[METHOD_NW_COLUMN, METHOD_BH_COLUMN])?;
    info!(
        "{} rows after size and non-negativity filters",
        table.height()
    );

    build_method_comparison(&table, config)
}

/// Jitter an already-filtered table into per-size method panels.
///
/// Sizes with fewer rows than expected simply yield fewer points; an
/// absent size yields an empty panel.
pub fn build_method_comparison(
    table: &ResultTable,
    config: &PlotConfig,
) -> Result<ComparisonData, TableError> {
    let sizes = table.sizes()?;
    let no = table.metric_values(METHOD_NW_COLUMN)?;
    let bh = table.metric_values(METHOD_BH_COLUMN)?;

    let mut jitter = Jitter::with_seed(config.seed);

    let mut ordered = config.accepted_sizes.clone();
    ordered.sort_unstable();

    let mut panels = Vec::with_capacity(ordered.len());
    for &size in &ordered {
        let rows: Vec<usize> = sizes
            .iter()
            .enumerate()
            .filter(|(_, &n)| n == size)
            .map(|(i, _)| i)
            .collect();

        let xs_no = jitter.around(0.0, rows.len(), config.jitter_range);
        let xs_bh = jitter.around(1.0, rows.len(), config.jitter_range);
        info!("panel n = {}: {} points per method", size, rows.len());

        panels.push(SizePanel {
            size,
            runs: rows.len(),
            nord_ouest: rows.iter().zip(xs_no).map(|(&i, x)| [x, no[i]]).collect(),
            balas_hammer: rows.iter().zip(xs_bh).map(|(&i, x)| [x, bh[i]]).collect(),
        });
    }

    Ok(ComparisonData {
        expected_runs: RUNS_PER_SIZE,
        panels,
    })
}
