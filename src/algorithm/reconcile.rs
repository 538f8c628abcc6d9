//! Label reconciliation
//!
//! Raw outcome labels come from independently authored datasets with
//! inconsistent spelling, spacing and case. Reconciliation maps each distinct raw
//! label onto a class id of the disease vocabulary:
//!
//! 1. a normalized exact match against the vocabulary, else
//! 2. the first vocabulary entry (in id order) whose normalized form contains, or
//!    is contained by, the normalized label, else
//! 3. a new entry appended to the vocabulary holding the raw label verbatim.
//!
//! Step 2 merges every label that substring-matches the same entry. That merge is
//! deterministic and is kept as-is: changing it would move historical labels to
//! different ids.
//!
//! A label that normalizes to the empty string (blank or punctuation only) is
//! contained in every entry and resolves to class 0. Empty cells are not read as
//! a missing value and are not given a class of their own.

use rustc_hash::FxHashMap;

use crate::vocab::{DiseaseVocabulary, normalize_label};

/// How a raw label was resolved to its class id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Normalized names are equal
    Exact,
    /// One normalized name contains the other
    Substring,
    /// No match; the label was appended to the vocabulary
    Appended,
}

/// Mapping from raw label to class id, remembering first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    ids: FxHashMap<String, (usize, MatchKind)>,
    order: Vec<String>,
}

impl LabelMapping {
    /// Class id assigned to a raw label
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<usize> {
        self.ids.get(raw).map(|(id, _)| *id)
    }

    /// How a raw label was matched
    #[must_use]
    pub fn match_kind(&self, raw: &str) -> Option<MatchKind> {
        self.ids.get(raw).map(|(_, kind)| *kind)
    }

    /// Number of distinct raw labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Raw labels and their ids in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|raw| (raw.as_str(), self.ids[raw].0))
    }

    /// Raw labels that had to be appended to the vocabulary
    pub fn appended(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|raw| self.ids[*raw].1 == MatchKind::Appended)
            .map(String::as_str)
    }
}

/// Incremental reconciler over a growing disease vocabulary
#[derive(Debug, Clone)]
pub struct LabelReconciler {
    vocabulary: DiseaseVocabulary,
    mapping: LabelMapping,
}

impl LabelReconciler {
    #[must_use]
    pub fn new(vocabulary: DiseaseVocabulary) -> Self {
        Self {
            vocabulary,
            mapping: LabelMapping::default(),
        }
    }

    /// Resolve one raw label, appending it to the vocabulary if nothing matches
    ///
    /// A label seen before keeps the id it was first given.
    pub fn reconcile_label(&mut self, raw: &str) -> usize {
        if let Some(id) = self.mapping.get(raw) {
            return id;
        }

        let normalized = normalize_label(raw);
        let (id, kind) = if let Some(id) = self.vocabulary.exact_match(&normalized) {
            (id, MatchKind::Exact)
        } else if let Some(id) = self.vocabulary.substring_match(&normalized) {
            log::debug!(
                "Label {raw:?} matched {:?} by substring",
                self.vocabulary.name(id).unwrap_or_default()
            );
            (id, MatchKind::Substring)
        } else {
            let id = self.vocabulary.push(raw.to_string());
            log::debug!("Label {raw:?} has no match, appended as class {id}");
            (id, MatchKind::Appended)
        };

        self.mapping.ids.insert(raw.to_string(), (id, kind));
        self.mapping.order.push(raw.to_string());
        id
    }

    /// Vocabulary as extended so far
    #[must_use]
    pub fn vocabulary(&self) -> &DiseaseVocabulary {
        &self.vocabulary
    }

    /// Finish reconciliation, returning the extended vocabulary and the mapping
    #[must_use]
    pub fn finish(self) -> (DiseaseVocabulary, LabelMapping) {
        (self.vocabulary, self.mapping)
    }
}

/// Reconcile raw labels against a vocabulary in iteration order
///
/// Blank labels resolve to class 0; see the module docs.
pub fn reconcile<I, S>(canonical: DiseaseVocabulary, raw_labels: I) -> (DiseaseVocabulary, LabelMapping)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reconciler = LabelReconciler::new(canonical);
    for raw in raw_labels {
        reconciler.reconcile_label(raw.as_ref());
    }
    reconciler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let canonical = DiseaseVocabulary::new(["Allergy", "Fungal infection", "GERD"]);
        let (vocab, mapping) = reconcile(canonical, ["Fungal Infection ", "Fungal infection"]);

        assert_eq!(mapping.get("Fungal Infection "), Some(1));
        assert_eq!(mapping.get("Fungal infection"), Some(1));
        assert_eq!(mapping.match_kind("Fungal Infection "), Some(MatchKind::Exact));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_verbatim_canonical_label_keeps_its_position() {
        let (vocab, mapping) = reconcile(DiseaseVocabulary::canonical(), ["AIDS"]);
        assert_eq!(mapping.get("AIDS"), Some(6));
        assert_eq!(vocab.len(), 41);
    }

    #[test]
    fn test_unmatched_labels_appended_in_first_seen_order() {
        let canonical = DiseaseVocabulary::new(["Malaria", "Dengue"]);
        let (vocab, mapping) = reconcile(canonical, ["Zika", "Malaria", "Ebola", "Zika"]);

        assert_eq!(mapping.get("Zika"), Some(2));
        assert_eq!(mapping.get("Ebola"), Some(3));
        assert_eq!(mapping.len(), 3);
        assert_eq!(vocab.names(), ["Malaria", "Dengue", "Zika", "Ebola"]);
        assert_eq!(mapping.appended().collect::<Vec<_>>(), ["Zika", "Ebola"]);
    }

    #[test]
    fn test_substring_matches_merge_onto_first_entry() {
        let canonical = DiseaseVocabulary::new(["Hepatitis B", "Hepatitis", "Arthritis"]);
        let (vocab, mapping) = reconcile(canonical, ["hepatitis", "Chronic Arthritis", "Hep"]);

        // "hepatitis" is an exact match for index 1, not a substring of index 0
        assert_eq!(mapping.get("hepatitis"), Some(1));
        assert_eq!(mapping.get("Chronic Arthritis"), Some(2));
        assert_eq!(mapping.match_kind("Chronic Arthritis"), Some(MatchKind::Substring));
        // "hep" is contained in both hepatitis entries; the first one wins
        assert_eq!(mapping.get("Hep"), Some(0));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_two_distinct_labels_silently_merged() {
        let canonical = DiseaseVocabulary::new(["Diabetes"]);
        let (_, mapping) = reconcile(canonical, ["Diabetes Type 1", "Diabetes Type 2"]);
        assert_eq!(mapping.get("Diabetes Type 1"), mapping.get("Diabetes Type 2"));
    }

    #[test]
    fn test_appended_labels_are_matched_later() {
        let canonical = DiseaseVocabulary::new(["Malaria"]);
        let (vocab, mapping) = reconcile(canonical, ["Lyme disease", "LYME DISEASE", "Lyme"]);

        assert_eq!(mapping.get("Lyme disease"), Some(1));
        assert_eq!(mapping.get("LYME DISEASE"), Some(1));
        assert_eq!(mapping.get("Lyme"), Some(1));
        assert_eq!(vocab.name(1), Some("Lyme disease"));
    }

    #[test]
    fn test_empty_label_maps_to_first_entry() {
        let (_, mapping) = reconcile(DiseaseVocabulary::canonical(), ["  "]);
        assert_eq!(mapping.get("  "), Some(0));
    }

    #[test]
    fn test_reconciler_vocabulary_grows_as_labels_are_appended() {
        let mut reconciler = LabelReconciler::new(DiseaseVocabulary::new(["Malaria"]));
        assert_eq!(reconciler.reconcile_label("malaria "), 0);
        assert_eq!(reconciler.vocabulary().len(), 1);

        assert_eq!(reconciler.reconcile_label("Zika"), 1);
        assert_eq!(reconciler.vocabulary().names(), ["Malaria", "Zika"]);
        assert_eq!(reconciler.vocabulary().exact_match("zika"), Some(1));
    }

    #[test]
    fn test_deterministic() {
        let labels = ["Zika", "Peptic ulcer diseae", "Common Cold", "Bird flu", "hepatitis A"];
        let first = reconcile(DiseaseVocabulary::canonical(), labels);
        let second = reconcile(DiseaseVocabulary::canonical(), labels);
        assert_eq!(first, second);
        assert_eq!(first.1.get("hepatitis A"), Some(19));
    }
}
