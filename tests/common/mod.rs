//! Shared fixtures for integration tests
//!
//! Fixtures are small synthetic datasets laid out like the real training and
//! testing files: one 0/1 column per canonical symptom plus a `prognosis`
//! column.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use symptom_classifier::vocab::canonical::SYMPTOMS;
use symptom_classifier::{ClassifierConfig, RawDataset};

/// Forest size used by tests; large enough that two-row bootstraps vote reliably
pub const TEST_TREES: usize = 101;

/// Default configuration with a fixed forest
#[must_use]
pub fn test_config(data_dir: &Path) -> ClassifierConfig {
    ClassifierConfig::default()
        .with_data_dir(data_dir)
        .with_forest(TEST_TREES, 42)
}

/// Header row: every canonical symptom, then the outcome column
#[must_use]
pub fn headers() -> Vec<String> {
    SYMPTOMS
        .iter()
        .map(|s| (*s).to_string())
        .chain(std::iter::once("prognosis".to_string()))
        .collect()
}

/// A row with only the given symptoms set
#[must_use]
pub fn row(symptoms: &[&str], label: &str) -> Vec<String> {
    SYMPTOMS
        .iter()
        .map(|s| (if symptoms.contains(s) { "1" } else { "0" }).to_string())
        .chain(std::iter::once(label.to_string()))
        .collect()
}

/// Dataset built from `(symptoms, label)` rows
#[must_use]
pub fn dataset(name: &str, rows: &[(&[&str], &str)]) -> RawDataset {
    RawDataset::new(
        name,
        headers(),
        rows.iter().map(|(symptoms, label)| row(symptoms, label)).collect(),
    )
}

/// Two rows, two labels, one distinguishing symptom each
#[must_use]
pub fn two_row_dataset(name: &str) -> RawDataset {
    dataset(
        name,
        &[(&["itching"], "Zeta syndrome"), (&["cough"], "Omega syndrome")],
    )
}

/// Write a dataset as CSV under `dir`
pub fn write_csv(dir: &Path, file: &str, headers: &[String], rows: &[Vec<String>]) -> PathBuf {
    let mut contents = headers.join(",");
    contents.push('\n');
    for row in rows {
        contents.push_str(&row.join(","));
        contents.push('\n');
    }
    let path = dir.join(file);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}
