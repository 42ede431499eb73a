//! Data pipeline assembling the joined feature table.
//!
//! Loads the cleaned metric tables from disk, enforces one row per club,
//! and left-joins them onto the performance table.

use cantera_data::{DataError, DatasetDir};
use cantera_features::{FeatureError, build_feature_table};
use polars::prelude::*;

/// Club identifier column shared by all metric tables.
pub(crate) const CLUB_COLUMN: &str = "Team";

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    /// Table load error.
    #[error("Data load error: {0}")]
    Data(#[from] DataError),
    /// Join error.
    #[error("Feature table error: {0}")]
    Feature(#[from] FeatureError),
}

/// Build the row-per-club feature table from a dataset directory.
///
/// The performance table anchors the join; squad, financial and
/// expected-goals metrics are merged onto it. Clubs missing from a side
/// table keep their row with nulls for that table's metrics.
pub(crate) fn load_joined_table(dir: &DatasetDir) -> Result<DataFrame, PipelineError> {
    let performance = dir.performance_metrics()?.dedup_by(CLUB_COLUMN)?;
    let squad = dir.squad_value_scores()?.dedup_by(CLUB_COLUMN)?;
    let financial = dir.financial_scores()?.dedup_by(CLUB_COLUMN)?;
    let xg = dir.xg_metrics()?.dedup_by(CLUB_COLUMN)?;

    Ok(build_feature_table(
        &performance,
        &[squad, financial, xg],
        CLUB_COLUMN,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_dataset(root: &std::path::Path) {
        std::fs::create_dir_all(root.join("Analysis")).unwrap();
        std::fs::create_dir_all(root.join("SquadAnalysis")).unwrap();
        std::fs::create_dir_all(root.join("Financial")).unwrap();
        std::fs::write(
            root.join("Analysis/performance_metrics.csv"),
            "Team,WinRate,GoalDifference\nGetafe,0.32,-6\nGirona,0.51,14\n",
        )
        .unwrap();
        std::fs::write(
            root.join("Analysis/xg_metrics.csv"),
            "Team,AvgxG,xGDifference\nGetafe,1.1,-0.3\nGirona,1.6,0.4\n",
        )
        .unwrap();
        std::fs::write(
            root.join("SquadAnalysis/squad_value_scores.csv"),
            "Team,SquadValueScore\nGirona,41.0\nGetafe,28.5\n",
        )
        .unwrap();
        std::fs::write(
            root.join("Financial/financial_scores.csv"),
            "Team,AvgAttendance\nGetafe,11500.0\nGirona,12200.0\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_joined_table() {
        let root = std::env::temp_dir().join("cantera_pipeline_test");
        write_dataset(&root);

        let dir = DatasetDir::new(&root);
        let table = load_joined_table(&dir).unwrap();

        assert_eq!(table.height(), 2);
        // Base order comes from the performance table.
        let teams = table.column("Team").unwrap();
        let teams = teams.str().unwrap();
        assert_eq!(teams.get(0), Some("Getafe"));
        // All four sources contributed columns.
        for column in ["WinRate", "SquadValueScore", "AvgAttendance", "AvgxG"] {
            assert!(
                table.get_column_names().iter().any(|c| c.as_str() == column),
                "missing column {column}"
            );
        }

        std::fs::remove_dir_all(&root).ok();
    }
}
