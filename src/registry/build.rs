//! Building a model set from raw datasets.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use ndarray::{Array1, ArrayView1};

use crate::algorithm::{LabelMapping, LabelReconciler, encode};
use crate::config::ClassifierConfig;
use crate::dataset::{RawDataset, TrainingData};
use crate::error::{Error, Result};
use crate::models::{
    Classifier, ForestClassifier, ModelKind, NaiveBayesClassifier, TrainingSet, TreeClassifier,
    accuracy,
};
use crate::registry::report::{BuildReport, ModelScore};
use crate::utils::logging::{create_fit_progress_bar, log_reconciliation};
use crate::vocab::{DiseaseVocabulary, SymptomVocabulary};

/// Fitted classifiers together with the vocabularies they were fitted against
///
/// Immutable once built; share it through an `Arc`.
pub struct ModelSet {
    symptoms: Arc<SymptomVocabulary>,
    diseases: Arc<DiseaseVocabulary>,
    labels: LabelMapping,
    tree: Box<dyn Classifier>,
    forest: Box<dyn Classifier>,
    naive_bayes: Box<dyn Classifier>,
    report: Option<BuildReport>,
}

impl fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSet")
            .field("symptoms", &self.symptoms.len())
            .field("diseases", &self.diseases.len())
            .field("labels", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl ModelSet {
    /// Assemble a model set from already fitted classifiers
    ///
    /// Each classifier is placed in the slot its [`Classifier::kind`] names.
    pub fn from_parts(
        symptoms: SymptomVocabulary,
        diseases: DiseaseVocabulary,
        classifiers: [Box<dyn Classifier>; 3],
    ) -> Result<Self> {
        let mut tree = None;
        let mut forest = None;
        let mut naive_bayes = None;
        for classifier in classifiers {
            let slot = match classifier.kind() {
                ModelKind::Tree => &mut tree,
                ModelKind::Forest => &mut forest,
                ModelKind::NaiveBayes => &mut naive_bayes,
            };
            if slot.replace(classifier).is_some() {
                return Err(Error::InvalidOperation(
                    "model set needs exactly one classifier of each kind".to_string(),
                ));
            }
        }

        match (tree, forest, naive_bayes) {
            (Some(tree), Some(forest), Some(naive_bayes)) => Ok(Self {
                symptoms: Arc::new(symptoms),
                diseases: Arc::new(diseases),
                labels: LabelMapping::default(),
                tree,
                forest,
                naive_bayes,
                report: None,
            }),
            _ => Err(Error::InvalidOperation(
                "model set needs exactly one classifier of each kind".to_string(),
            )),
        }
    }

    /// Reconcile labels, encode features and fit all three classifiers
    pub fn build(
        data: &TrainingData,
        config: &ClassifierConfig,
        symptoms: SymptomVocabulary,
        diseases: DiseaseVocabulary,
        verbose: bool,
    ) -> Result<Self> {
        let start = Instant::now();
        let TrainingData { training, testing } = data;
        if training.is_empty() {
            return Err(Error::dataset_load(training.name(), "no training rows"));
        }
        if symptoms.is_empty() {
            return Err(Error::Vocabulary("symptom vocabulary is empty".to_string()));
        }

        let train_labels = training.labels(&config.label_column)?;
        let test_labels = testing.labels(&config.label_column)?;

        let mut reconciler = LabelReconciler::new(diseases);
        for raw in train_labels.iter().chain(&test_labels) {
            reconciler.reconcile_label(raw);
        }
        let (diseases, labels) = reconciler.finish();
        log_reconciliation(&config.label_column, &labels, diseases.len());

        let train_set = examples(training, &train_labels, &labels, &symptoms)?;
        let test_set = examples(testing, &test_labels, &labels, &symptoms)?;

        log::info!("Fitting decision tree on {} rows", train_set.records.nrows());
        let tree = TreeClassifier::fit(&train_set, config.max_depth)?;

        log::info!("Fitting forest of {} trees", config.forest.n_trees);
        let progress =
            create_fit_progress_bar(config.forest.n_trees as u64, "fitting forest", verbose);
        let forest = ForestClassifier::fit(&train_set, &config.forest, config.max_depth, &progress)?;
        progress.finish_and_clear();

        log::info!("Fitting gaussian naive bayes");
        let naive_bayes = NaiveBayesClassifier::fit(&train_set)?;

        let classifiers: [&dyn Classifier; 3] = [&tree, &forest, &naive_bayes];
        let scores = classifiers
            .iter()
            .map(|classifier| ModelScore {
                model: classifier.kind(),
                train_accuracy: accuracy(
                    *classifier,
                    train_set.records.view(),
                    train_set.targets.as_slice().unwrap_or_default(),
                ),
                test_accuracy: accuracy(
                    *classifier,
                    test_set.records.view(),
                    test_set.targets.as_slice().unwrap_or_default(),
                ),
            })
            .collect();

        let report = BuildReport {
            training_rows: training.len(),
            testing_rows: testing.len(),
            symptom_count: symptoms.len(),
            disease_count: diseases.len(),
            appended_labels: labels.appended().map(str::to_string).collect(),
            scores,
            elapsed: start.elapsed(),
        };
        log::info!("Built models in {:?}", report.elapsed);

        Ok(Self {
            symptoms: Arc::new(symptoms),
            diseases: Arc::new(diseases),
            labels,
            tree: Box::new(tree),
            forest: Box::new(forest),
            naive_bayes: Box::new(naive_bayes),
            report: Some(report),
        })
    }

    /// Symptom vocabulary shared by all classifiers
    #[must_use]
    pub fn symptoms(&self) -> &Arc<SymptomVocabulary> {
        &self.symptoms
    }

    /// Disease vocabulary, including labels appended during reconciliation
    #[must_use]
    pub fn diseases(&self) -> &Arc<DiseaseVocabulary> {
        &self.diseases
    }

    /// Raw label to class id mapping produced by reconciliation
    #[must_use]
    pub fn labels(&self) -> &LabelMapping {
        &self.labels
    }

    /// Build diagnostics; absent for sets assembled with [`ModelSet::from_parts`]
    #[must_use]
    pub fn report(&self) -> Option<&BuildReport> {
        self.report.as_ref()
    }

    /// The fitted classifier of one model family
    #[must_use]
    pub fn classifier(&self, kind: ModelKind) -> &dyn Classifier {
        match kind {
            ModelKind::Tree => self.tree.as_ref(),
            ModelKind::Forest => self.forest.as_ref(),
            ModelKind::NaiveBayes => self.naive_bayes.as_ref(),
        }
    }

    /// Encode reported symptoms against this set's symptom vocabulary
    pub fn encode<I, S>(&self, reported: I) -> Array1<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        encode(&self.symptoms, reported)
    }

    /// Disease predicted by one classifier; `None` if its class id has no name
    #[must_use]
    pub fn predict_label(&self, kind: ModelKind, features: ArrayView1<'_, f64>) -> Option<&str> {
        let id = self.classifier(kind).predict(features)?;
        let label = self.diseases.name(id);
        if label.is_none() {
            log::warn!("{kind} predicted class {id}, which has no disease name");
        }
        label
    }
}

/// Feature matrix and class ids of one dataset
fn examples(
    dataset: &RawDataset,
    raw_labels: &[&str],
    labels: &LabelMapping,
    symptoms: &SymptomVocabulary,
) -> Result<TrainingSet> {
    let records = dataset.feature_matrix(symptoms)?;
    let targets = raw_labels
        .iter()
        .map(|raw| {
            labels.get(raw).ok_or_else(|| {
                Error::InvalidOperation(format!("label {raw:?} was not reconciled"))
            })
        })
        .collect::<Result<Array1<usize>>>()?;
    Ok(TrainingSet::new(records, targets))
}
