//! Append-only disease vocabulary with normalized lookup.

use rustc_hash::FxHashMap;

use crate::vocab::canonical::DISEASES;

/// Normalize a disease label for matching
///
/// Lower-cases the label and drops every character that is not an ASCII letter
/// or digit. Used by both reconciliation and lookups so they never disagree.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Ulcer category of a predicted disease label, if it names one
///
/// Matches `ulcer` or `peptic` anywhere in the lower-cased label with spaces
/// removed, so the canonical `Pepticulcerdiseae` spelling is caught.
#[must_use]
pub fn ulcer_type(label: &str) -> Option<&'static str> {
    let compact: String = label.to_lowercase().chars().filter(|c| *c != ' ').collect();
    (compact.contains("ulcer") || compact.contains("peptic")).then_some("Peptic ulcer")
}

/// Ordered list of disease names; position is the class id
///
/// Entries are only ever appended, so an id handed out once stays valid for the
/// lifetime of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseVocabulary {
    names: Vec<String>,
    normalized: Vec<String>,
    /// Normalized name to the first index carrying it
    index: FxHashMap<String, usize>,
}

impl DiseaseVocabulary {
    /// Create a vocabulary from names in class id order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self {
            names: Vec::new(),
            normalized: Vec::new(),
            index: FxHashMap::default(),
        };
        for name in names {
            vocab.push(name.into());
        }
        vocab
    }

    /// The built-in disease list
    #[must_use]
    pub fn canonical() -> Self {
        Self::new(DISEASES)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Disease names in class id order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Reverse lookup of a class id; `None` when out of range
    #[must_use]
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// First index whose normalized name equals `normalized`
    #[must_use]
    pub fn exact_match(&self, normalized: &str) -> Option<usize> {
        self.index.get(normalized).copied()
    }

    /// First index whose normalized name contains, or is contained by, `normalized`
    #[must_use]
    pub fn substring_match(&self, normalized: &str) -> Option<usize> {
        self.normalized
            .iter()
            .position(|entry| entry.contains(normalized) || normalized.contains(entry.as_str()))
    }

    /// Append a name and return its new class id
    pub(crate) fn push(&mut self, name: String) -> usize {
        let id = self.names.len();
        let normalized = normalize_label(&name);
        self.index.entry(normalized.clone()).or_insert(id);
        self.normalized.push(normalized);
        self.names.push(name);
        id
    }
}

impl Default for DiseaseVocabulary {
    fn default() -> Self {
        Self::canonical()
    }
}
