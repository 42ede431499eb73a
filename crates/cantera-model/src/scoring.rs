//! Score computation and batch ranking.

use std::cmp::Ordering;
use std::fmt;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::artifact::ModelBundle;
use crate::error::{ModelError, Result};
use crate::predictor::Predictor;
use crate::row::FeatureRow;

/// Investment recommendation band, derived purely from rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Ranks 1-3.
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    /// Ranks 4-7.
    #[serde(rename = "Moderate Buy")]
    ModerateBuy,
    /// Rank 8 and below.
    #[serde(rename = "High Risk / Hold")]
    HighRiskHold,
}

impl Recommendation {
    /// Highest rank still considered a strong buy.
    pub const STRONG_BUY_MAX_RANK: usize = 3;
    /// Highest rank still considered a moderate buy.
    pub const MODERATE_BUY_MAX_RANK: usize = 7;

    /// Band for a 1-based rank. Thresholds are fixed, not configurable.
    pub const fn from_rank(rank: usize) -> Self {
        if rank <= Self::STRONG_BUY_MAX_RANK {
            Self::StrongBuy
        } else if rank <= Self::MODERATE_BUY_MAX_RANK {
            Self::ModerateBuy
        } else {
            Self::HighRiskHold
        }
    }

    /// Human-readable band label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::ModerateBuy => "Moderate Buy",
            Self::HighRiskHold => "High Risk / Hold",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One club's position in a batch ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedClub {
    /// 1-based position after sorting by score.
    pub rank: usize,
    /// Club identifier.
    pub club: String,
    /// Predicted score.
    pub score: f64,
    /// Recommendation band derived from the rank.
    pub recommendation: Recommendation,
}

/// Predict a single score for one club's feature row.
///
/// Features are extracted in the order the bundle declares them; the model
/// output is returned unchanged (no clamping, no post-processing).
pub fn predict_score(row: &FeatureRow, bundle: &ModelBundle) -> Result<f64> {
    let mut features = Vec::with_capacity(bundle.features.len());
    for name in &bundle.features {
        let value = row.get(name).ok_or_else(|| ModelError::MissingFeature {
            feature: name.clone(),
        })?;
        features.push(value);
    }
    Ok(bundle.model.predict(&features))
}

/// Score every row of a feature table and rank descending.
///
/// The sort is stable: equal scores keep their original table order. Ranks
/// are 1-based positions after the sort.
pub fn rank_clubs(
    table: &DataFrame,
    bundle: &ModelBundle,
    club_col: &str,
) -> Result<Vec<RankedClub>> {
    let clubs = table.column(club_col)?.str()?;

    let mut scored = Vec::with_capacity(table.height());
    for idx in 0..table.height() {
        let club = clubs
            .get(idx)
            .ok_or(ModelError::NullClub { row: idx })?
            .to_string();
        let row = FeatureRow::from_frame(table, idx)?;
        let score = predict_score(&row, bundle)?;
        scored.push((club, score));
    }

    // Stable sort keeps original row order for ties.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(idx, (club, score))| {
            let rank = idx + 1;
            RankedClub {
                rank,
                club,
                score,
                recommendation: Recommendation::from_rank(rank),
            }
        })
        .collect())
}
