//! Diagnostics collected while building a model set.

use std::time::Duration;

use serde::Serialize;

use crate::models::ModelKind;

/// Accuracy of one classifier on the training and testing data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelScore {
    pub model: ModelKind,
    /// `None` when there were no rows to score
    pub train_accuracy: Option<f64>,
    /// `None` when the testing dataset is empty
    pub test_accuracy: Option<f64>,
}

/// Summary of a model build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub training_rows: usize,
    pub testing_rows: usize,
    pub symptom_count: usize,
    pub disease_count: usize,
    /// Raw labels that matched nothing and were appended to the disease list
    pub appended_labels: Vec<String>,
    pub scores: Vec<ModelScore>,
    pub elapsed: Duration,
}

impl BuildReport {
    /// Score of one model family
    #[must_use]
    pub fn score(&self, model: ModelKind) -> Option<&ModelScore> {
        self.scores.iter().find(|s| s.model == model)
    }
}
