//! Ranking summaries and text rendering.

use std::fmt;

use cantera_model::RankedClub;
use serde::Serialize;

/// Headline numbers for a ranking run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingSummary {
    /// Top-ranked club.
    pub top_pick: String,
    /// Score of the top-ranked club.
    pub top_score: f64,
    /// Median score across all ranked clubs.
    pub median_score: f64,
    /// Model confidence (held-out R²), when the artifact recorded one.
    pub model_r2: Option<f64>,
}

impl RankingSummary {
    /// Summarize a non-empty ranking. Returns `None` for an empty one.
    pub fn from_rankings(rankings: &[RankedClub], model_r2: Option<f64>) -> Option<Self> {
        let top = rankings.first()?;
        Some(Self {
            top_pick: top.club.clone(),
            top_score: top.score,
            median_score: median(rankings.iter().map(|r| r.score)),
            model_r2,
        })
    }
}

impl fmt::Display for RankingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Top pick: {} (score {:.1}), median score {:.1}",
            self.top_pick, self.top_score, self.median_score
        )?;
        if let Some(r2) = self.model_r2 {
            write!(f, ", model R\u{b2} {r2:.3}")?;
        }
        Ok(())
    }
}

/// Median of the given scores; 0 for an empty iterator.
fn median(scores: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = scores.collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Render rankings as an aligned text table, optionally truncated to `top`.
pub fn format_rankings(rankings: &[RankedClub], top: Option<usize>) -> String {
    let shown = top.map_or(rankings.len(), |n| n.min(rankings.len()));
    let width = rankings
        .iter()
        .take(shown)
        .map(|r| r.club.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = format!("{:>4}  {:<width$}  {:>8}  Recommendation\n", "Rank", "Club", "Score");
    for entry in &rankings[..shown] {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>8.1}  {}\n",
            entry.rank, entry.club, entry.score, entry.recommendation
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cantera_model::Recommendation;

    fn rankings() -> Vec<RankedClub> {
        [("Real Madrid", 92.0), ("Barcelona", 88.0), ("Girona", 71.0), ("Sevilla", 55.0)]
            .iter()
            .enumerate()
            .map(|(idx, (club, score))| RankedClub {
                rank: idx + 1,
                club: (*club).to_string(),
                score: *score,
                recommendation: Recommendation::from_rank(idx + 1),
            })
            .collect()
    }

    #[test]
    fn test_summary_from_rankings() {
        let summary = RankingSummary::from_rankings(&rankings(), Some(0.91)).unwrap();
        assert_eq!(summary.top_pick, "Real Madrid");
        assert_relative_eq!(summary.top_score, 92.0);
        // Even count: mean of the two middle scores.
        assert_relative_eq!(summary.median_score, (88.0 + 71.0) / 2.0);
        assert_eq!(summary.model_r2, Some(0.91));
    }

    #[test]
    fn test_empty_rankings_have_no_summary() {
        assert!(RankingSummary::from_rankings(&[], None).is_none());
    }

    #[test]
    fn test_format_rankings_truncates() {
        let text = format_rankings(&rankings(), Some(2));
        assert!(text.contains("Real Madrid"));
        assert!(text.contains("Barcelona"));
        assert!(!text.contains("Sevilla"));
        assert!(text.contains("Strong Buy"));
    }

    #[test]
    fn test_format_rankings_full() {
        let text = format_rankings(&rankings(), None);
        assert_eq!(text.lines().count(), 5);
    }
}
