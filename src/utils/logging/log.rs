//! Log lines for dataset reads, label reconciliation and user input

use std::time::Duration;

use itertools::Itertools;

use crate::algorithm::{LabelMapping, MatchKind};
use crate::dataset::RawDataset;

/// Log the shape of a dataset that was just read
pub fn log_dataset_read(dataset: &RawDataset, elapsed: Duration) {
    log::info!(
        "Read {} rows x {} columns from {} in {:?}",
        dataset.len(),
        dataset.headers().len(),
        dataset.name(),
        elapsed
    );
}

/// Summarize how the labels of `column` resolved against the disease vocabulary
///
/// Appended labels are listed at warn level since each one becomes a class the
/// canonical disease list does not know.
pub fn log_reconciliation(column: &str, mapping: &LabelMapping, disease_count: usize) {
    let kinds = mapping
        .iter()
        .filter_map(|(raw, _)| mapping.match_kind(raw))
        .counts();
    let count = |kind| kinds.get(&kind).copied().unwrap_or(0);

    log::info!(
        "Reconciled {} distinct {column:?} labels into {disease_count} diseases ({} exact, {} substring, {} appended)",
        mapping.len(),
        count(MatchKind::Exact),
        count(MatchKind::Substring),
        count(MatchKind::Appended)
    );

    if count(MatchKind::Appended) > 0 {
        log::warn!(
            "Labels not in the disease list were added as new classes: {}",
            mapping.appended().join(", ")
        );
    }
}

/// Warn about reported symptoms the vocabulary does not recognize
pub fn log_unknown_symptoms(unknown: &[&str]) {
    if !unknown.is_empty() {
        log::warn!("Ignoring unrecognized symptoms: {}", unknown.join(", "));
    }
}
