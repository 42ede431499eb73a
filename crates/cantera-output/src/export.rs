//! Export of scoring results.
//!
//! CSV and JSON export for ranking tables and matchup predictions.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use cantera_model::{Matchup, RankedClub};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized format name.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Parse a format name (`csv`, `json`, `pretty-json`).
    pub fn parse(name: &str) -> Result<Self, ExportError> {
        match name {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Flat matchup record for CSV export.
#[derive(Debug, Serialize)]
struct MatchupFlat {
    home: String,
    away: String,
    home_strength: f64,
    away_strength: f64,
    home_win_probability: f64,
    away_win_probability: f64,
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for Vec<RankedClub> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.as_slice().export_to_string(format)
    }
}

impl Exporter for [RankedClub] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for record in self {
                    wtr.serialize(record)?;
                }
                let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)
                    .unwrap_or_default();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Matchup {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.serialize(MatchupFlat {
                    home: self.home.clone(),
                    away: self.away.clone(),
                    home_strength: self.home_strength,
                    away_strength: self.away_strength,
                    home_win_probability: self.odds.home,
                    away_win_probability: self.odds.away,
                })?;
                let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)
                    .unwrap_or_default();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantera_model::{MatchOdds, Recommendation};

    fn rankings() -> Vec<RankedClub> {
        vec![
            RankedClub {
                rank: 1,
                club: "Real Sociedad".to_string(),
                score: 77.5,
                recommendation: Recommendation::StrongBuy,
            },
            RankedClub {
                rank: 8,
                club: "Alaves".to_string(),
                score: 31.0,
                recommendation: Recommendation::HighRiskHold,
            },
        ]
    }

    #[test]
    fn test_rankings_csv_export() {
        let csv = rankings().export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("rank,club,score,recommendation"));
        assert!(csv.contains("1,Real Sociedad,77.5,Strong Buy"));
        assert!(csv.contains("8,Alaves,31.0,High Risk / Hold"));
    }

    #[test]
    fn test_rankings_json_round_trip() {
        let original = rankings();
        let json = original.export_to_string(ExportFormat::Json).unwrap();
        let back: Vec<RankedClub> = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let json = rankings().export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("  "));
    }

    #[test]
    fn test_matchup_csv_export() {
        let matchup = Matchup {
            home: "Celta Vigo".to_string(),
            away: "Granada".to_string(),
            home_strength: 0.7,
            away_strength: 0.3,
            odds: MatchOdds {
                home: 0.49 / 0.58,
                away: 1.0 - 0.49 / 0.58,
            },
        };
        let csv = matchup.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("Celta Vigo"));
        assert!(csv.contains("home_win_probability"));
    }

    #[test]
    fn test_export_to_file() {
        let path = std::env::temp_dir().join("cantera_rankings_export.csv");
        rankings().export_to_file(&path, ExportFormat::Csv).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Real Sociedad"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::parse("json").unwrap(), ExportFormat::Json);
        assert_eq!(
            ExportFormat::parse("pretty-json").unwrap(),
            ExportFormat::PrettyJson
        );
        assert!(ExportFormat::parse("xml").is_err());
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
