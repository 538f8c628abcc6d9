//! Single decision tree.

use linfa::prelude::*;
use linfa_trees::DecisionTree;
use ndarray::{Array1, ArrayView2};

use crate::error::{Error, Result};
use crate::models::{Classifier, ModelKind, TrainingSet};

/// A decision tree fitted on every training example
pub struct TreeClassifier {
    model: DecisionTree<f64, usize>,
}

impl TreeClassifier {
    /// Fit a tree, optionally limiting its depth
    pub fn fit(dataset: &TrainingSet, max_depth: Option<usize>) -> Result<Self> {
        let model = fit_tree(dataset, max_depth)?;
        Ok(Self { model })
    }
}

/// Fit a bare linfa decision tree; shared with the forest
pub(crate) fn fit_tree(dataset: &TrainingSet, max_depth: Option<usize>) -> Result<DecisionTree<f64, usize>> {
    DecisionTree::params()
        .max_depth(max_depth)
        .fit(dataset)
        .map_err(|e| Error::training("decision tree", e))
}

impl Classifier for TreeClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::Tree
    }

    fn predict_batch(&self, records: ArrayView2<'_, f64>) -> Array1<usize> {
        self.model.predict(&records)
    }
}
