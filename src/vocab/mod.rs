//! Symptom and disease vocabularies.
//!
//! The symptom vocabulary fixes the layout of feature vectors; the disease
//! vocabulary fixes class ids. Both are frozen once a model set is built and are
//! shared by reference between the classifiers.

pub mod canonical;
pub mod diseases;
pub mod symptoms;

pub use diseases::{DiseaseVocabulary, normalize_label, ulcer_type};
pub use symptoms::{SymptomVocabulary, display_name};
