//! Error types for the scoring engine.

use thiserror::Error;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur during scoring.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A feature declared by the model is absent (or null) in the input row.
    #[error("Feature '{feature}' absent or null in input row")]
    MissingFeature {
        /// The feature name that could not be resolved.
        feature: String,
    },

    /// A club name was not found in the feature table.
    #[error("Unknown club: '{club}'")]
    UnknownClub {
        /// The club name that was looked up.
        club: String,
    },

    /// The same club was given for both sides of a matchup.
    #[error("Matchup requires two different clubs, got '{club}' twice")]
    SameClub {
        /// The duplicated club name.
        club: String,
    },

    /// The club identifier column contains a null.
    #[error("Null club identifier at row {row}")]
    NullClub {
        /// Zero-based row index with the null identifier.
        row: usize,
    },

    /// The model artifact is structurally invalid.
    #[error("Invalid model artifact: {reason}")]
    InvalidArtifact {
        /// What failed validation.
        reason: String,
    },

    /// Polars error (feature table access).
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error reading an artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact deserialization error.
    #[error("Artifact parse error: {0}")]
    Json(#[from] serde_json::Error),
}
