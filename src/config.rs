//! Plot Configuration
//! Explicit configuration values for the two plot variants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Problem-size column written by the benchmark.
pub const SIZE_COLUMN: &str = "n";

/// Total metric columns for the two compared construction methods.
pub const METHOD_NW_COLUMN: &str = "total_no";
pub const METHOD_BH_COLUMN: &str = "total_bh";

/// Display names for the two methods.
pub const METHOD_NW_LABEL: &str = "Nord-Ouest";
pub const METHOD_BH_LABEL: &str = "Balas-Hammer";

/// Executions the benchmark performs per problem size.
pub const RUNS_PER_SIZE: usize = 100;

/// Default location of the benchmark output, relative to the working directory.
const DEFAULT_SOURCE: &str = "../resultats_complexite.csv";

/// Parameters for one plotting session.
///
/// Both plot variants consume the same shape; the constructors carry the
/// fixed values each variant uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Semicolon-delimited CSV produced by the complexity benchmark.
    pub source_path: PathBuf,
    /// Metric column plotted on the y-axis of the single-metric scatter.
    pub metric: String,
    /// Problem sizes kept by the size filter, ascending.
    pub accepted_sizes: Vec<i64>,
    /// Half-width of the symmetric jitter interval.
    pub jitter_range: f64,
    /// Seed for the jitter generator.
    pub seed: u64,
}

impl PlotConfig {
    /// Configuration for the single-metric scatter: one panel of `metric`
    /// against the jittered problem size.
    pub fn metric_scatter() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE),
            metric: METHOD_NW_COLUMN.to_string(),
            accepted_sizes: vec![10, 40, 100],
            jitter_range: 1.0,
            seed: 42,
        }
    }

    /// Configuration for the per-size method comparison grid. The jitter is
    /// small because it offsets the fixed category positions 0 and 1.
    pub fn method_comparison() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE),
            metric: METHOD_NW_COLUMN.to_string(),
            accepted_sizes: vec![10, 40, 100, 400],
            jitter_range: 0.08,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = PlotConfig::metric_scatter();
        let json = serde_json::to_string(&config).unwrap();
        let back: PlotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metric, METHOD_NW_COLUMN);
        assert_eq!(back.accepted_sizes, vec![10, 40, 100]);
        assert_eq!(back.seed, 42);
    }

    #[test]
    fn comparison_config_covers_four_sizes() {
        let config = PlotConfig::method_comparison();
        assert_eq!(config.accepted_sizes, vec![10, 40, 100, 400]);
        assert!(config.jitter_range < 0.5);
    }
}
