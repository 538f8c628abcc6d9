//! Sources of training and testing data for a model build.

use std::fmt;
use std::path::PathBuf;

use crate::config::ClassifierConfig;
use crate::dataset::RawDataset;
use crate::error::Result;
use crate::loader::read_csv_dataset;

/// The two datasets a build consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingData {
    /// Examples the classifiers are fitted on
    pub training: RawDataset,
    /// Held-out examples used for accuracy diagnostics
    pub testing: RawDataset,
}

/// Something that can produce the raw datasets for a build
pub trait TrainingSource: Send + Sync + fmt::Debug {
    /// Load both datasets
    fn load(&self) -> Result<TrainingData>;
}

/// Reads the training and testing CSV files from disk
#[derive(Debug, Clone)]
pub struct CsvSource {
    training_path: PathBuf,
    testing_path: PathBuf,
}

impl CsvSource {
    #[must_use]
    pub fn new(training_path: impl Into<PathBuf>, testing_path: impl Into<PathBuf>) -> Self {
        Self {
            training_path: training_path.into(),
            testing_path: testing_path.into(),
        }
    }

    /// Use the file locations of a configuration
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.training_path(), config.testing_path())
    }
}

impl TrainingSource for CsvSource {
    fn load(&self) -> Result<TrainingData> {
        Ok(TrainingData {
            training: read_csv_dataset(&self.training_path)?,
            testing: read_csv_dataset(&self.testing_path)?,
        })
    }
}

/// Serves datasets that are already in memory
#[derive(Debug, Clone)]
pub struct InMemorySource {
    data: TrainingData,
}

impl InMemorySource {
    #[must_use]
    pub fn new(training: RawDataset, testing: RawDataset) -> Self {
        Self {
            data: TrainingData { training, testing },
        }
    }
}

impl TrainingSource for InMemorySource {
    fn load(&self) -> Result<TrainingData> {
        Ok(self.data.clone())
    }
}
