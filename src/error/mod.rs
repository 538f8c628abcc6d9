//! Error handling for the symptom classifier.

use std::io;

pub mod util;

/// Errors that can occur while loading data, building models or predicting
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A training or testing dataset is missing or malformed
    #[error("Dataset load error for {path}: {reason}")]
    DatasetLoad {
        /// Path (or name) of the dataset that failed
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A vocabulary could not be constructed
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// A classifier failed to fit
    #[error("Training error: {0}")]
    Training(String),

    /// Feature matrix had an unexpected shape
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Models were requested before any successful build
    #[error("Models have not been built")]
    ModelNotBuilt,

    /// Unknown algorithm name
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Invalid operation, such as a poisoned lock
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error with attached context
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a dataset load error for the given path
    pub fn dataset_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DatasetLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a training error from any displayable fitting failure
    pub fn training(model: &str, err: impl std::fmt::Display) -> Self {
        Self::Training(format!("{model}: {err}"))
    }
}

/// Result type for symptom classifier operations
pub type Result<T> = std::result::Result<T, Error>;
