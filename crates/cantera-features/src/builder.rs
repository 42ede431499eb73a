//! Feature table builder.
//!
//! Joins independently sourced metric tables into one row-per-club frame.
//! The base table anchors the join: every base row survives, side tables
//! contribute their non-key columns, and clubs absent from a side table get
//! nulls for that table's metrics.

use cantera_data::MetricTable;
use polars::prelude::*;
use thiserror::Error;

/// Errors that can occur while building a feature table.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The join key column is absent from one of the input tables.
    #[error("Join key '{key}' missing from table '{table}'")]
    MissingJoinKey {
        /// Name of the table missing the key.
        table: String,
        /// The join key that was expected.
        key: String,
    },

    /// Polars error during the join.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Internal row-order column used to restore base ordering after the joins.
const ROW_ORDER: &str = "__cantera_row_order";

/// Left-join `others` onto `base` in order, keyed by `join_key`.
///
/// Invariants of the result:
/// - height equals the base table height,
/// - base row order is preserved,
/// - clubs missing from a side table get nulls for its columns.
///
/// Colliding non-key column names are kept as-is; source tables are expected
/// to disambiguate upstream (e.g. `AvgAge_x` vs `AvgAge_y`).
///
/// Fails with [`FeatureError::MissingJoinKey`] naming the first table that
/// lacks the key column.
pub fn build_feature_table(
    base: &MetricTable,
    others: &[MetricTable],
    join_key: &str,
) -> Result<DataFrame, FeatureError> {
    for table in std::iter::once(base).chain(others.iter()) {
        if !table.has_column(join_key) {
            return Err(FeatureError::MissingJoinKey {
                table: table.name().to_string(),
                key: join_key.to_string(),
            });
        }
    }

    // Left joins do not guarantee row order across engines; pin the base
    // order with an index column and restore it afterwards.
    let mut joined = base
        .frame()
        .clone()
        .lazy()
        .with_row_index(ROW_ORDER, None);

    for table in others {
        joined = joined.join(
            table.frame().clone().lazy(),
            [col(join_key)],
            [col(join_key)],
            JoinArgs::new(JoinType::Left),
        );
    }

    let frame = joined
        .collect()?
        .sort([ROW_ORDER], SortMultipleOptions::default())?
        .drop(ROW_ORDER)?;
    Ok(frame)
}
