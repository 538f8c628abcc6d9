//! Fitted classifiers
//!
//! All three model families sit behind the [`Classifier`] trait: given a feature
//! vector, produce a class id. The registry owns the fitted instances and the
//! predictor only ever talks to the trait.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod bayes;
pub mod forest;
pub mod tree;

pub use bayes::NaiveBayesClassifier;
pub use forest::ForestClassifier;
pub use tree::TreeClassifier;

/// Feature matrix and class ids handed to linfa for fitting
pub type TrainingSet = linfa::DatasetBase<Array2<f64>, Array1<usize>>;

/// The model families that can be fitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// A single decision tree
    Tree,
    /// Bootstrap-aggregated decision trees
    Forest,
    /// Gaussian naive Bayes
    NaiveBayes,
}

impl ModelKind {
    /// All model kinds, in vote-preference order
    pub const ALL: [Self; 3] = [Self::Tree, Self::Forest, Self::NaiveBayes];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Forest => "forest",
            Self::NaiveBayes => "naive_bayes",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which classifier(s) answer a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Ask one classifier
    Single(ModelKind),
    /// Ask all three and take the plurality, preferring the tree on a split
    Auto,
}

impl Algorithm {
    pub const TREE: Self = Self::Single(ModelKind::Tree);
    pub const FOREST: Self = Self::Single(ModelKind::Forest);
    pub const NAIVE_BAYES: Self = Self::Single(ModelKind::NaiveBayes);

    /// Parse an algorithm name, falling back to the tree for unknown names
    #[must_use]
    pub fn from_name_or_tree(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown algorithm {name:?}, using the decision tree");
            Self::TREE
        })
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tree" | "decision_tree" => Ok(Self::TREE),
            "random" | "forest" | "random_forest" => Ok(Self::FOREST),
            "gnb" | "bayes" | "naive_bayes" => Ok(Self::NAIVE_BAYES),
            "auto" => Ok(Self::Auto),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(kind) => kind.fmt(f),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// A fitted model mapping feature vectors to class ids
pub trait Classifier: Send + Sync {
    /// Model family
    fn kind(&self) -> ModelKind;

    /// Predict one class id per row of `records`
    fn predict_batch(&self, records: ArrayView2<'_, f64>) -> Array1<usize>;

    /// Predict the class id of a single feature vector
    fn predict(&self, features: ArrayView1<'_, f64>) -> Option<usize> {
        self.predict_batch(features.insert_axis(Axis(0)))
            .first()
            .copied()
    }
}

/// Share of rows whose predicted class equals the target; `None` for no rows
#[must_use]
pub fn accuracy(classifier: &dyn Classifier, records: ArrayView2<'_, f64>, targets: &[usize]) -> Option<f64> {
    if targets.is_empty() {
        return None;
    }
    let predicted = classifier.predict_batch(records);
    let correct = predicted
        .iter()
        .zip(targets)
        .filter(|(p, t)| p == t)
        .count();
    Some(correct as f64 / targets.len() as f64)
}
