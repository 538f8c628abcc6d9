//! Gaussian naive Bayes.

use linfa::prelude::*;
use linfa_bayes::GaussianNb;
use ndarray::{Array1, ArrayView2};

use crate::error::{Error, Result};
use crate::models::{Classifier, ModelKind, TrainingSet};

/// Per-class Gaussian likelihoods over the 0/1 symptom features
pub struct NaiveBayesClassifier {
    model: GaussianNb<f64, usize>,
}

impl NaiveBayesClassifier {
    pub fn fit(dataset: &TrainingSet) -> Result<Self> {
        let model = GaussianNb::params()
            .fit(dataset)
            .map_err(|e| Error::training("gaussian naive bayes", e))?;
        Ok(Self { model })
    }
}

impl Classifier for NaiveBayesClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::NaiveBayes
    }

    fn predict_batch(&self, records: ArrayView2<'_, f64>) -> Array1<usize> {
        self.model.predict(&records)
    }
}
