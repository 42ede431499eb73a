//! Single-club feature rows.

use std::collections::HashMap;

use polars::prelude::*;

use crate::error::Result;

/// Metric name to numeric value mapping for one club.
///
/// Built either from a row of a joined feature table or by hand for a
/// custom-club prediction. Nulls in the source row are simply absent here;
/// scoring reports them as missing features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    values: HashMap<String, f64>,
}

impl FeatureRow {
    /// Empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metric value, consuming and returning the row (builder style).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Set a metric value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Get a metric value.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of metrics present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no metrics.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of this row with the given metric values replaced.
    ///
    /// Used for counterfactual scoring; the original row is untouched.
    #[must_use]
    pub fn with_overrides<I, S>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut modified = self.clone();
        for (name, value) in overrides {
            modified.insert(name, value);
        }
        modified
    }

    /// Extract the numeric columns of row `row` from a feature table.
    ///
    /// Non-numeric columns (the club identifier) are cast to null and
    /// skipped, as are nulls left behind by the join; both surface later as
    /// missing features if a model asks for them.
    pub fn from_frame(frame: &DataFrame, row: usize) -> Result<Self> {
        let mut values = HashMap::with_capacity(frame.width());
        for column in frame.get_columns() {
            let Ok(cast) = column.cast(&DataType::Float64) else {
                continue;
            };
            let floats = cast.f64()?;
            if let Some(value) = floats.get(row) {
                values.insert(column.name().to_string(), value);
            }
        }
        Ok(Self { values })
    }
}
