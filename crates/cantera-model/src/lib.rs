#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cantera-analytics/cantera/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod artifact;
pub mod counterfactual;
pub mod error;
pub mod matchup;
pub mod metrics;
pub mod predictor;
pub mod row;
pub mod scoring;

pub use artifact::{DEFAULT_INVESTMENT_FEATURES, FeatureImportance, ModelBundle};
pub use counterfactual::{ScoreDelta, score_delta};
pub use error::{ModelError, Result};
pub use matchup::{MatchOdds, Matchup, find_club_row, log5_win_probability, matchup};
pub use metrics::r_squared;
pub use predictor::{DecisionTree, ForestModel, LinearModel, Model, Predictor, TreeNode};
pub use row::FeatureRow;
pub use scoring::{RankedClub, Recommendation, predict_score, rank_clubs};
