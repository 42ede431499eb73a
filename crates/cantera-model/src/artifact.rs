//! Serialized model artifacts.
//!
//! The training pipeline ships its models as JSON artifacts. Two shapes are
//! accepted: a full bundle carrying the model together with its feature
//! list, evaluation metrics and feature importances, or a bare model. A bare
//! model is bound to the default investment feature list.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::predictor::{Model, TreeNode};

/// Feature list used when an artifact ships a bare model without one.
pub const DEFAULT_INVESTMENT_FEATURES: [&str; 8] = [
    "AvgLeaguePosition",
    "GoalDifference",
    "xGDifference",
    "PointsPerGame",
    "WinRate",
    "SquadValueScore",
    "AvgAttendance",
    "AvgAge_x",
];

/// Importance weight of a single feature, as reported by training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    /// Feature name.
    pub feature: String,
    /// Relative importance weight.
    pub importance: f64,
}

/// A loaded predictor plus everything the engine needs to apply it.
///
/// Immutable once loaded; computations borrow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    /// The trained model.
    pub model: Model,
    /// Ordered input feature names the model expects.
    pub features: Vec<String>,
    /// Evaluation metrics from training (e.g. `test_r2`).
    #[serde(default)]
    pub metrics: HashMap<String, f64>,
    /// Feature importance table from training.
    #[serde(default)]
    pub feature_importance: Vec<FeatureImportance>,
}

/// Either artifact shape found on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Artifact {
    Bundle(ModelBundle),
    Bare(Model),
}

impl ModelBundle {
    /// Wrap a bare model with the default investment feature list.
    pub fn from_bare(model: Model) -> Self {
        Self {
            model,
            features: DEFAULT_INVESTMENT_FEATURES
                .iter()
                .map(|f| (*f).to_string())
                .collect(),
            metrics: HashMap::new(),
            feature_importance: Vec::new(),
        }
    }

    /// Parse an artifact from JSON text. Accepts a bundle or a bare model.
    pub fn from_json(text: &str) -> Result<Self> {
        let bundle = match serde_json::from_str::<Artifact>(text)? {
            Artifact::Bundle(bundle) => bundle,
            Artifact::Bare(model) => Self::from_bare(model),
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Evaluation metric by name, if training recorded it.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Structural validation of the artifact.
    ///
    /// Rejects feature lists that do not match the model arity, empty
    /// forests, and trees with dangling child references.
    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(ModelError::InvalidArtifact {
                reason: "empty feature list".to_string(),
            });
        }
        match &self.model {
            Model::Linear(linear) => {
                if linear.coefficients.len() != self.features.len() {
                    return Err(ModelError::InvalidArtifact {
                        reason: format!(
                            "{} coefficients for {} features",
                            linear.coefficients.len(),
                            self.features.len()
                        ),
                    });
                }
            }
            Model::Forest(forest) => {
                if forest.trees.is_empty() {
                    return Err(ModelError::InvalidArtifact {
                        reason: "forest has no trees".to_string(),
                    });
                }
                for (tree_idx, tree) in forest.trees.iter().enumerate() {
                    if tree.nodes.is_empty() {
                        return Err(ModelError::InvalidArtifact {
                            reason: format!("tree {tree_idx} has no nodes"),
                        });
                    }
                    for node in &tree.nodes {
                        if let TreeNode::Split {
                            feature,
                            left,
                            right,
                            ..
                        } = node
                        {
                            if *feature >= self.features.len() {
                                return Err(ModelError::InvalidArtifact {
                                    reason: format!(
                                        "tree {tree_idx} splits on feature index {feature}, \
                                         only {} features bound",
                                        self.features.len()
                                    ),
                                });
                            }
                            if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                                return Err(ModelError::InvalidArtifact {
                                    reason: format!("tree {tree_idx} has a dangling child index"),
                                });
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::{DecisionTree, ForestModel, LinearModel};

    fn bundle_json() -> &'static str {
        r#"{
            "model": {
                "kind": "linear",
                "intercept": 10.0,
                "coefficients": [1.0, -2.0]
            },
            "features": ["WinRate", "AvgLeaguePosition"],
            "metrics": {"test_r2": 0.87, "train_r2": 0.93},
            "feature_importance": [
                {"feature": "WinRate", "importance": 0.7},
                {"feature": "AvgLeaguePosition", "importance": 0.3}
            ]
        }"#
    }

    #[test]
    fn test_bundle_artifact_keeps_metadata() {
        let bundle = ModelBundle::from_json(bundle_json()).unwrap();
        assert_eq!(bundle.features, vec!["WinRate", "AvgLeaguePosition"]);
        assert_eq!(bundle.metric("test_r2"), Some(0.87));
        assert_eq!(bundle.feature_importance.len(), 2);
    }

    #[test]
    fn test_bare_artifact_gets_default_features() {
        let json = r#"{
            "kind": "linear",
            "intercept": 0.0,
            "coefficients": [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]
        }"#;
        let bundle = ModelBundle::from_json(json).unwrap();
        assert_eq!(bundle.features.len(), DEFAULT_INVESTMENT_FEATURES.len());
        assert_eq!(bundle.features[0], "AvgLeaguePosition");
        assert!(bundle.metrics.is_empty());
        assert!(bundle.feature_importance.is_empty());
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let bundle = ModelBundle {
            model: Model::Linear(LinearModel {
                intercept: 0.0,
                coefficients: vec![1.0],
            }),
            features: vec!["WinRate".to_string(), "PointsPerGame".to_string()],
            metrics: HashMap::new(),
            feature_importance: Vec::new(),
        };
        assert!(matches!(
            bundle.validate(),
            Err(ModelError::InvalidArtifact { .. })
        ));
    }

    #[test]
    fn test_dangling_child_rejected() {
        let bundle = ModelBundle {
            model: Model::Forest(ForestModel {
                trees: vec![DecisionTree {
                    nodes: vec![TreeNode::Split {
                        feature: 0,
                        threshold: 0.5,
                        left: 5,
                        right: 6,
                    }],
                }],
            }),
            features: vec!["WinRate".to_string()],
            metrics: HashMap::new(),
            feature_importance: Vec::new(),
        };
        assert!(matches!(
            bundle.validate(),
            Err(ModelError::InvalidArtifact { .. })
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join("cantera_artifact_load_test.json");
        std::fs::write(&path, bundle_json()).unwrap();
        let bundle = ModelBundle::load(&path).unwrap();
        assert_eq!(bundle.features.len(), 2);
        std::fs::remove_file(&path).ok();
    }
}
