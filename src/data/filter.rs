//! Row Filters
//! Best-effort row selection over the result table. Rows failing a
//! predicate are dropped silently, by design.

use crate::data::loader::{ResultTable, TableError};
use polars::prelude::*;

/// Keep exactly the rows whose problem size is in `accepted`, preserving
/// relative order.
pub fn keep_sizes(table: &ResultTable, accepted: &[i64]) -> Result<ResultTable, TableError> {
    let sizes = table.sizes()?;
    let flags: Vec<bool> = sizes.iter().map(|n| accepted.contains(n)).collect();
    apply_mask(table, &flags)
}

/// Keep the rows where every named column is non-negative.
///
/// The benchmark writes -1 totals for failed executions; NaN and null
/// values fail the predicate and are dropped with them.
pub fn drop_negative(table: &ResultTable, columns: &[&str]) -> Result<ResultTable, TableError> {
    let mut flags = vec![true; table.height()];
    for name in columns {
        let values = table.metric_values(name)?;
        for (flag, value) in flags.iter_mut().zip(&values) {
            *flag &= *value >= 0.0;
        }
    }
    apply_mask(table, &flags)
}

fn apply_mask(table: &ResultTable, flags: &[bool]) -> Result<ResultTable, TableError> {
    let mask = BooleanChunked::from_slice("mask".into(), flags);
    let df = table.dataframe().filter(&mask)?;
    Ok(ResultTable::from_dataframe(df))
}
