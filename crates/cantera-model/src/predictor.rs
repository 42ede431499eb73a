//! Predictor capability and concrete model families.
//!
//! The scoring engine treats a trained model as an opaque capability: a
//! function from a feature vector to a scalar. The concrete families here
//! cover what the training pipeline serializes today; anything implementing
//! [`Predictor`] can be scored.

use serde::{Deserialize, Serialize};

/// A trained predictor: maps an ordered feature vector to a scalar score.
///
/// Implementations must be pure; the engine relies on identical inputs
/// producing identical outputs.
pub trait Predictor {
    /// Predict a scalar score from an ordered feature vector.
    fn predict(&self, features: &[f64]) -> f64;
}

/// Linear regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Intercept term.
    pub intercept: f64,
    /// Per-feature coefficients, in feature-list order.
    pub coefficients: Vec<f64>,
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// A node in a serialized regression tree.
///
/// Trees are stored as flat node arrays; split nodes reference children by
/// index, evaluation starts at node 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal split: `features[feature] <= threshold` goes left.
    Split {
        /// Index into the feature vector.
        feature: usize,
        /// Split threshold.
        threshold: f64,
        /// Node index of the left child.
        left: usize,
        /// Node index of the right child.
        right: usize,
    },
    /// Terminal node carrying the predicted value.
    Leaf {
        /// Predicted value at this leaf.
        value: f64,
    },
}

/// A single regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Flat node storage; node 0 is the root.
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Evaluate the tree on a feature vector.
    ///
    /// A NaN feature value fails the `<=` comparison and follows the right
    /// branch. Returns NaN for a structurally broken tree (dangling child
    /// index); [`crate::ModelBundle::validate`] rejects those at load time.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut node = self.nodes.first();
        while let Some(TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        }) = node
        {
            let value = features.get(*feature).copied().unwrap_or(f64::NAN);
            let next = if value <= *threshold { *left } else { *right };
            node = self.nodes.get(next);
        }
        match node {
            Some(TreeNode::Leaf { value }) => *value,
            _ => f64::NAN,
        }
    }
}

/// An ensemble of regression trees; the prediction is the mean of the
/// per-tree outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    /// Member trees.
    pub trees: Vec<DecisionTree>,
}

impl Predictor for ForestModel {
    fn predict(&self, features: &[f64]) -> f64 {
        if self.trees.is_empty() {
            return f64::NAN;
        }
        let total: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        total / self.trees.len() as f64
    }
}

/// Any model family the engine can deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    /// Linear regression.
    Linear(LinearModel),
    /// Averaged regression-tree ensemble.
    Forest(ForestModel),
}

impl Predictor for Model {
    fn predict(&self, features: &[f64]) -> f64 {
        match self {
            Self::Linear(m) => m.predict(features),
            Self::Forest(m) => m.predict(features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: low },
                TreeNode::Leaf { value: high },
            ],
        }
    }

    #[test]
    fn test_linear_predict() {
        let model = LinearModel {
            intercept: 1.0,
            coefficients: vec![2.0, -0.5],
        };
        assert_relative_eq!(model.predict(&[3.0, 4.0]), 1.0 + 6.0 - 2.0);
    }

    #[test]
    fn test_tree_routing() {
        let tree = stump(0, 0.5, 10.0, 20.0);
        assert_relative_eq!(tree.predict(&[0.4]), 10.0);
        assert_relative_eq!(tree.predict(&[0.6]), 20.0);
        // Boundary: <= goes left.
        assert_relative_eq!(tree.predict(&[0.5]), 10.0);
    }

    #[test]
    fn test_forest_averages_trees() {
        let forest = ForestModel {
            trees: vec![stump(0, 0.5, 10.0, 20.0), stump(0, 0.5, 30.0, 40.0)],
        };
        assert_relative_eq!(forest.predict(&[0.0]), 20.0);
        assert_relative_eq!(forest.predict(&[1.0]), 30.0);
    }

    #[test]
    fn test_nan_feature_goes_right() {
        let tree = stump(0, 0.5, 10.0, 20.0);
        assert_relative_eq!(tree.predict(&[f64::NAN]), 20.0);
    }

    #[test]
    fn test_model_json_round_trip() {
        let model = Model::Forest(ForestModel {
            trees: vec![stump(1, 25.0, -1.0, 1.0)],
        });
        let json = serde_json::to_string(&model).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
