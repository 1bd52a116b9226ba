//! End-to-end pipeline checks against a fixture CSV.

use nuage::charts::MetricScatterData;
use nuage::config::PlotConfig;
use nuage::data::{self, ResultTable, TableError};
use nuage::pipeline;
use std::io::Write;
use std::path::PathBuf;

const FIXTURE: &str = "n;total_no;total_bh\n10;2.0;3.0\n40;5.0;-1.0\n100;1.0;0.5\n";

fn fixture_csv(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("resultats_complexite.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    path
}

fn flat_points(data: &MetricScatterData) -> Vec<[f64; 2]> {
    data.groups
        .iter()
        .flat_map(|group| group.points.clone())
        .collect()
}

#[test]
fn both_filters_leave_two_points_for_the_metric_scatter() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = PlotConfig::metric_scatter();
    config.source_path = fixture_csv(&dir);

    let table = ResultTable::from_csv(&config.source_path).unwrap();
    let table = data::keep_sizes(&table, &config.accepted_sizes).unwrap();
    let table = data::drop_negative(&table, &["total_no", "total_bh"]).unwrap();
    assert_eq!(table.height(), 2);

    let chart = pipeline::build_metric_scatter(&table, &config).unwrap();
    let points = flat_points(&chart);
    assert_eq!(points.len(), 2);

    let p10 = points.iter().find(|p| p[1] == 2.0).unwrap();
    assert!((p10[0] - 10.0).abs() <= config.jitter_range);
    let p100 = points.iter().find(|p| p[1] == 1.0).unwrap();
    assert!((p100[0] - 100.0).abs() <= config.jitter_range);
}

#[test]
fn comparison_pipeline_builds_one_panel_per_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = PlotConfig::method_comparison();
    config.source_path = fixture_csv(&dir);

    let chart = pipeline::method_comparison(&config).unwrap();
    assert_eq!(chart.panels.len(), 4);
    assert_eq!(chart.expected_runs, 100);

    let sizes: Vec<i64> = chart.panels.iter().map(|p| p.size).collect();
    assert_eq!(sizes, vec![10, 40, 100, 400]);

    // n=40 fails the non-negativity filter; n=400 has no rows at all.
    let runs: Vec<usize> = chart.panels.iter().map(|p| p.runs).collect();
    assert_eq!(runs, vec![1, 0, 1, 0]);

    let p10 = &chart.panels[0];
    assert_eq!(p10.nord_ouest.len(), 1);
    assert_eq!(p10.nord_ouest[0][1], 2.0);
    assert!(p10.nord_ouest[0][0].abs() <= config.jitter_range);
    assert!((p10.balas_hammer[0][0] - 1.0).abs() <= config.jitter_range);
    assert_eq!(p10.balas_hammer[0][1], 3.0);
}

#[test]
fn unknown_metric_fails_before_any_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = PlotConfig::metric_scatter();
    config.source_path = fixture_csv(&dir);
    config.metric = "theta_zz".to_string();

    let err = pipeline::metric_scatter(&config).unwrap_err();
    assert!(matches!(err, TableError::MissingColumn(name) if name == "theta_zz"));
}

#[test]
fn missing_csv_aborts_the_pipeline() {
    let mut config = PlotConfig::metric_scatter();
    config.source_path = PathBuf::from("no/such/resultats_complexite.csv");

    let err = pipeline::metric_scatter(&config).unwrap_err();
    assert!(matches!(err, TableError::FileNotFound(_)));
}

#[test]
fn jittered_scatter_is_reproducible_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = PlotConfig::metric_scatter();
    config.source_path = fixture_csv(&dir);

    let a = pipeline::metric_scatter(&config).unwrap();
    let b = pipeline::metric_scatter(&config).unwrap();
    assert_eq!(flat_points(&a), flat_points(&b));
}
