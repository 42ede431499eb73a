//! Cleaned dataset directory layout.
//!
//! The upstream analysis pipeline writes its cleaned tables under a single
//! root directory. This module knows the file layout and hands out loaded
//! [`MetricTable`]s by logical name.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tables::{MetricTable, read_metric_table};

/// Root directory of the cleaned datasets.
///
/// Layout (relative to the root):
///
/// ```text
/// Analysis/performance_metrics.csv
/// Analysis/xg_metrics.csv
/// Analysis/league_positions.csv
/// SquadAnalysis/squad_value_scores.csv
/// Financial/financial_scores.csv
/// Financial/attendance_metrics.csv
/// ```
#[derive(Debug, Clone)]
pub struct DatasetDir {
    root: PathBuf,
}

impl DatasetDir {
    /// Create a dataset directory rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self, relative: &str, name: &str) -> Result<MetricTable> {
        read_metric_table(self.root.join(relative), name)
    }

    /// Match results, points, win/loss rates per club.
    pub fn performance_metrics(&self) -> Result<MetricTable> {
        self.load("Analysis/performance_metrics.csv", "performance_metrics")
    }

    /// Expected-goals metrics per club.
    pub fn xg_metrics(&self) -> Result<MetricTable> {
        self.load("Analysis/xg_metrics.csv", "xg_metrics")
    }

    /// Season-by-season league positions per club.
    pub fn league_positions(&self) -> Result<MetricTable> {
        self.load("Analysis/league_positions.csv", "league_positions")
    }

    /// Squad market value scores and age profile per club.
    pub fn squad_value_scores(&self) -> Result<MetricTable> {
        self.load("SquadAnalysis/squad_value_scores.csv", "squad_value_scores")
    }

    /// Financial scores (attendance, matchday revenue) per club.
    pub fn financial_scores(&self) -> Result<MetricTable> {
        self.load("Financial/financial_scores.csv", "financial_scores")
    }

    /// Attendance metrics per club.
    pub fn attendance_metrics(&self) -> Result<MetricTable> {
        self.load("Financial/attendance_metrics.csv", "attendance_metrics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_dir_loads_known_layout() {
        let root = std::env::temp_dir().join("cantera_dataset_dir_test");
        std::fs::create_dir_all(root.join("Analysis")).unwrap();
        std::fs::write(
            root.join("Analysis/performance_metrics.csv"),
            "Team,WinRate\nSevilla,0.44\nOsasuna,0.35\n",
        )
        .unwrap();

        let dir = DatasetDir::new(&root);
        let table = dir.performance_metrics().unwrap();
        assert_eq!(table.name(), "performance_metrics");
        assert_eq!(table.height(), 2);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = DatasetDir::new("/nonexistent/cantera");
        assert!(dir.xg_metrics().is_err());
    }
}
