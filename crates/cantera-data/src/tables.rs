//! Named metric tables.
//!
//! Every source file in the cleaned dataset is loaded into a [`MetricTable`]:
//! a polars `DataFrame` tagged with the table name so schema failures can
//! point at the offending file.

use std::path::Path;

use polars::prelude::*;

use crate::error::{DataError, Result};

/// A named table of per-club metrics.
///
/// Holds a club-identifier column plus one or more numeric metric columns.
/// The name is carried along purely for error reporting.
#[derive(Debug, Clone)]
pub struct MetricTable {
    name: String,
    frame: DataFrame,
}

impl MetricTable {
    /// Create a metric table from an already-loaded frame.
    pub fn new(name: impl Into<String>, frame: DataFrame) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }

    /// Table name (used in error messages).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying frame.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Consume the table, returning the underlying frame.
    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Whether a column with the given name exists.
    pub fn has_column(&self, column: &str) -> bool {
        self.frame
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == column)
    }

    /// Drop duplicate rows by `key`, keeping the first occurrence.
    ///
    /// Row order is preserved. Source tables are expected to be unique per
    /// club already; this enforces that precondition before a join.
    pub fn dedup_by(&self, key: &str) -> Result<Self> {
        if !self.has_column(key) {
            return Err(DataError::MissingColumn {
                table: self.name.clone(),
                column: key.to_string(),
            });
        }
        let frame = self
            .frame
            .clone()
            .lazy()
            .unique_stable(Some(vec![key.into()]), UniqueKeepStrategy::First)
            .collect()?;
        Ok(Self::new(self.name.clone(), frame))
    }
}

/// Read a CSV file into a [`MetricTable`].
///
/// The first line is treated as the header row; column dtypes are inferred.
pub fn read_metric_table(path: impl AsRef<Path>, name: impl Into<String>) -> Result<MetricTable> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(MetricTable::new(name, frame))
}
