//! A Rust library for predicting diseases from reported symptoms, with label
//! reconciliation across datasets, one-hot symptom encoding, and tree, forest
//! and naive Bayes classifiers combined by plurality vote.

pub mod algorithm;
pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod models;
pub mod predictor;
pub mod registry;
pub mod utils;
pub mod vocab;

// Re-export the most common types for easier use
// Core types
pub use config::{ClassifierConfig, ForestConfig};
pub use error::{Error, Result};
pub use models::{Algorithm, Classifier, ModelKind};
pub use predictor::{Predictor, predict_with};
pub use registry::{BuildReport, ModelRegistry, ModelSet};

// Vocabularies and the core algorithms
pub use algorithm::{LabelMapping, MatchKind, encode, plurality_vote, reconcile};
pub use vocab::{DiseaseVocabulary, SymptomVocabulary, normalize_label, ulcer_type};

// Data sources
pub use dataset::{CsvSource, InMemorySource, RawDataset, TrainingData, TrainingSource};
pub use loader::read_csv_dataset;

// Process-wide call surface
pub use api::{build_models, predict_symptoms};
