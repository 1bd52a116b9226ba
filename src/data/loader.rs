//! Result Table Loader
//! Loads the benchmark CSV into a Polars DataFrame and provides
//! schema-checked column access.

use crate::config::SIZE_COLUMN;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Column `{0}` is missing from the result table")]
    MissingColumn(String),
    #[error("Column `{column}` is not numeric (found {dtype})")]
    NotNumeric { column: String, dtype: String },
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// One benchmark execution per row, read-only after load.
#[derive(Debug, Clone)]
pub struct ResultTable {
    df: DataFrame,
}

impl ResultTable {
    /// Load a semicolon-delimited CSV with a header row.
    ///
    /// Malformed rows are not skipped; any parse error is fatal.
    pub fn from_csv(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::FileNotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_separator(b';')
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        Ok(Self { df })
    }

    /// Wrap an already-built DataFrame.
    pub fn from_dataframe(df: DataFrame) -> Self {
        Self { df }
    }

    /// Get the number of rows in the table.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Get a reference to the underlying DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get list of column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get list of numeric column names.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| is_numeric(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }

    fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.df
            .column(name)
            .map_err(|_| TableError::MissingColumn(name.to_string()))
    }

    /// The problem-size column as integers.
    ///
    /// Null sizes map to -1, which never matches an accepted size.
    pub fn sizes(&self) -> Result<Vec<i64>, TableError> {
        let col = self.column(SIZE_COLUMN)?;
        if !is_numeric(col.dtype()) {
            return Err(TableError::NotNumeric {
                column: SIZE_COLUMN.to_string(),
                dtype: col.dtype().to_string(),
            });
        }

        let casted = col.cast(&DataType::Int64)?;
        let ca = casted.i64()?;
        Ok((0..ca.len()).map(|i| ca.get(i).unwrap_or(-1)).collect())
    }

    /// A named metric column as floats. Null values map to NaN.
    pub fn metric_values(&self, name: &str) -> Result<Vec<f64>, TableError> {
        let col = self.column(name)?;
        if !is_numeric(col.dtype()) {
            return Err(TableError::NotNumeric {
                column: name.to_string(),
                dtype: col.dtype().to_string(),
            });
        }

        let casted = col.cast(&DataType::Float64)?;
        let ca = casted.f64()?;
        Ok((0..ca.len()).map(|i| ca.get(i).unwrap_or(f64::NAN)).collect())
    }
}
