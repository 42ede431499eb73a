//! Counterfactual score sensitivity.

use serde::Serialize;

use crate::artifact::ModelBundle;
use crate::error::Result;
use crate::row::FeatureRow;
use crate::scoring::predict_score;

/// Result of scoring a row against a hypothetically modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDelta {
    /// Score of the unmodified row.
    pub baseline: f64,
    /// Score of the modified row.
    pub adjusted: f64,
    /// `adjusted - baseline`.
    pub delta: f64,
}

/// Score both rows and report the difference.
///
/// Pure: neither row is mutated, and no state is carried between calls.
pub fn score_delta(
    original: &FeatureRow,
    modified: &FeatureRow,
    bundle: &ModelBundle,
) -> Result<ScoreDelta> {
    let baseline = predict_score(original, bundle)?;
    let adjusted = predict_score(modified, bundle)?;
    Ok(ScoreDelta {
        baseline,
        adjusted,
        delta: adjusted - baseline,
    })
}
