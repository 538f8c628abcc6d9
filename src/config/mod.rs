//! Configuration for building the symptom classifiers.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable pointing at a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "SYMPTOM_CLASSIFIER_CONFIG";

/// Environment variable overriding the dataset directory
pub const DATA_DIR_ENV_VAR: &str = "SYMPTOM_CLASSIFIER_DATA_DIR";

/// Configuration for the bagged forest of decision trees
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees in the forest
    pub n_trees: usize,
    /// Base seed for bootstrap sampling; tree `i` uses `seed + i`
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
        }
    }
}

/// Configuration for loading datasets and fitting classifiers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Directory containing the training and testing files
    pub data_dir: PathBuf,
    /// Training dataset file name, relative to `data_dir`
    pub training_file: String,
    /// Testing dataset file name, relative to `data_dir`
    pub testing_file: String,
    /// Name of the outcome column holding the disease label
    pub label_column: String,
    /// Maximum depth of the single decision tree (and of each forest tree)
    pub max_depth: Option<usize>,
    /// Forest settings
    pub forest: ForestConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            training_file: "training.csv".to_string(),
            testing_file: "Testing.csv".to_string(),
            label_column: "prognosis".to_string(),
            max_depth: None,
            forest: ForestConfig::default(),
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dataset directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the training and testing file names
    #[must_use]
    pub fn with_files(mut self, training: impl Into<String>, testing: impl Into<String>) -> Self {
        self.training_file = training.into();
        self.testing_file = testing.into();
        self
    }

    /// Set the outcome column name
    #[must_use]
    pub fn with_label_column(mut self, column: impl Into<String>) -> Self {
        self.label_column = column.into();
        self
    }

    /// Limit tree depth
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the forest size and seed
    #[must_use]
    pub fn with_forest(mut self, n_trees: usize, seed: u64) -> Self {
        self.forest = ForestConfig { n_trees, seed };
        self
    }

    /// Full path to the training dataset
    #[must_use]
    pub fn training_path(&self) -> PathBuf {
        self.data_dir.join(&self.training_file)
    }

    /// Full path to the testing dataset
    #[must_use]
    pub fn testing_path(&self) -> PathBuf {
        self.data_dir.join(&self.testing_file)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Resolve the configuration from the environment
    ///
    /// `SYMPTOM_CLASSIFIER_CONFIG` names a JSON file; otherwise
    /// `SYMPTOM_CLASSIFIER_DATA_DIR` overrides the default data directory.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            log::debug!("Loading classifier configuration from {path}");
            return Self::from_json_file(Path::new(&path));
        }

        let config = Self::default();
        Ok(match std::env::var(DATA_DIR_ENV_VAR) {
            Ok(dir) => config.with_data_dir(dir),
            Err(_) => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ClassifierConfig::default();
        assert_eq!(config.training_path(), PathBuf::from("data/training.csv"));
        assert_eq!(config.testing_path(), PathBuf::from("data/Testing.csv"));
        assert_eq!(config.label_column, "prognosis");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClassifierConfig::new()
            .with_data_dir("/srv/symptoms")
            .with_files("train.csv", "holdout.csv")
            .with_label_column("disease")
            .with_max_depth(8)
            .with_forest(25, 7);

        assert_eq!(config.training_path(), PathBuf::from("/srv/symptoms/train.csv"));
        assert_eq!(config.testing_path(), PathBuf::from("/srv/symptoms/holdout.csv"));
        assert_eq!(config.label_column, "disease");
        assert_eq!(config.max_depth, Some(8));
        assert_eq!(config.forest, ForestConfig { n_trees: 25, seed: 7 });
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_dir": "/srv/data", "forest": {"n_trees": 7}}"#).unwrap();

        let config = ClassifierConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.forest.n_trees, 7);
        assert_eq!(config.forest.seed, 42);
        assert_eq!(config.training_file, "training.csv");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            ClassifierConfig::from_json_file(&path),
            Err(Error::Config(_))
        ));
    }
}
