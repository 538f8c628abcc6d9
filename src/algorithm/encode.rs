//! One-hot feature encoding of reported symptoms.

use ndarray::Array1;
use rustc_hash::FxHashSet;

use crate::vocab::SymptomVocabulary;

/// Encode reported symptoms against the vocabulary
///
/// Position `i` is `1.0` when `vocabulary[i]` appears in `reported` (exact match,
/// no normalization), otherwise `0.0`. Names outside the vocabulary are ignored.
pub fn encode<I, S>(vocabulary: &SymptomVocabulary, reported: I) -> Array1<f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let reported: Vec<S> = reported.into_iter().collect();
    let present: FxHashSet<&str> = reported.iter().map(|s| s.as_ref()).collect();

    if log::log_enabled!(log::Level::Trace) {
        for name in &present {
            if vocabulary.position(name).is_none() {
                log::trace!("Ignoring unrecognized symptom {name:?}");
            }
        }
    }

    vocabulary
        .names()
        .iter()
        .map(|name| if present.contains(name.as_str()) { 1.0 } else { 0.0 })
        .collect()
}
