//! Pairwise match outcome odds.
//!
//! Combines two sporting-strength scalars with the Log5 formula to produce
//! a win-probability pair for a head-to-head matchup.

use polars::prelude::*;
use serde::Serialize;

use crate::artifact::ModelBundle;
use crate::error::{ModelError, Result};
use crate::row::FeatureRow;
use crate::scoring::predict_score;

/// Win probabilities for a two-club matchup. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchOdds {
    /// Probability the home side wins.
    pub home: f64,
    /// Probability the away side wins.
    pub away: f64,
}

/// Log5 win probability from two strength scalars in `[0, 1]`.
///
/// When the denominator is zero (both strengths 0 or both 1) there is no
/// information to split on, and the result falls back to a fair coin. That
/// fallback is policy, not an error.
pub fn log5_win_probability(home_strength: f64, away_strength: f64) -> MatchOdds {
    let denom = home_strength * (1.0 - away_strength) + away_strength * (1.0 - home_strength);
    let home = if denom != 0.0 {
        home_strength * (1.0 - away_strength) / denom
    } else {
        0.5
    };
    MatchOdds {
        home,
        away: 1.0 - home,
    }
}

/// A resolved head-to-head prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    /// Home club name.
    pub home: String,
    /// Away club name.
    pub away: String,
    /// Predicted sporting strength of the home club.
    pub home_strength: f64,
    /// Predicted sporting strength of the away club.
    pub away_strength: f64,
    /// Log5 win probabilities.
    pub odds: MatchOdds,
}

/// Find the row index of a club in a feature table, by identifier column.
pub fn find_club_row(table: &DataFrame, club_col: &str, club: &str) -> Result<Option<usize>> {
    let names = table.column(club_col)?.str()?;
    Ok(names.iter().position(|name| name == Some(club)))
}

/// Predict a matchup between two clubs from a feature table.
///
/// Both clubs' strengths come from the bundled sporting model; the odds are
/// the Log5 combination of the two. The clubs must differ and both must be
/// present in the table.
pub fn matchup(
    table: &DataFrame,
    bundle: &ModelBundle,
    club_col: &str,
    home: &str,
    away: &str,
) -> Result<Matchup> {
    if home == away {
        return Err(ModelError::SameClub {
            club: home.to_string(),
        });
    }

    let strength_of = |club: &str| -> Result<f64> {
        let idx = find_club_row(table, club_col, club)?.ok_or_else(|| ModelError::UnknownClub {
            club: club.to_string(),
        })?;
        let row = FeatureRow::from_frame(table, idx)?;
        predict_score(&row, bundle)
    };

    let home_strength = strength_of(home)?;
    let away_strength = strength_of(away)?;

    Ok(Matchup {
        home: home.to_string(),
        away: away.to_string(),
        home_strength,
        away_strength,
        odds: log5_win_probability(home_strength, away_strength),
    })
}
