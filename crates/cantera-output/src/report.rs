//! Report generation for scoring runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A scoring report: which model ran, when, and what it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Name of the model artifact used.
    pub model_name: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Number of clubs scored.
    pub clubs_scored: usize,

    /// Report contents (JSON format).
    pub contents: serde_json::Value,
}

impl Report {
    /// Create a new report.
    pub fn new(model_name: String, clubs_scored: usize, contents: serde_json::Value) -> Self {
        Self {
            model_name,
            timestamp: Utc::now(),
            clubs_scored,
            contents,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    model_name: Option<String>,
    clubs_scored: Option<usize>,
    contents: Option<serde_json::Value>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model artifact name.
    pub fn model_name(mut self, name: String) -> Self {
        self.model_name = Some(name);
        self
    }

    /// Set the number of clubs scored.
    pub const fn clubs_scored(mut self, count: usize) -> Self {
        self.clubs_scored = Some(count);
        self
    }

    /// Set the report contents.
    pub fn contents(mut self, contents: serde_json::Value) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Build the report.
    pub fn build(self) -> Report {
        Report::new(
            self.model_name.unwrap_or_default(),
            self.clubs_scored.unwrap_or(0),
            self.contents.unwrap_or(serde_json::Value::Null),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = Report::new(
            "laliga_rf_model".to_string(),
            20,
            serde_json::json!({"top_pick": "Real Madrid"}),
        );

        assert_eq!(report.model_name, "laliga_rf_model");
        assert_eq!(report.clubs_scored, 20);
    }

    #[test]
    fn test_report_builder() {
        let report = ReportBuilder::new()
            .model_name("sporting_rf_model".to_string())
            .clubs_scored(18)
            .contents(serde_json::json!({"key": "value"}))
            .build();

        assert_eq!(report.model_name, "sporting_rf_model");
        assert_eq!(report.clubs_scored, 18);
        assert!(report.to_json().unwrap().contains("sporting_rf_model"));
    }
}
