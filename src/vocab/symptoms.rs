//! Ordered symptom vocabulary.

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::vocab::canonical::SYMPTOMS;

/// Ordered list of unique symptom names; position is the feature index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomVocabulary {
    names: Vec<String>,
}

impl SymptomVocabulary {
    /// Create a vocabulary, rejecting empty or duplicate names
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for name in &names {
            if name.is_empty() {
                return Err(Error::Vocabulary("empty symptom name".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::Vocabulary(format!("duplicate symptom name: {name}")));
            }
        }
        Ok(Self { names })
    }

    /// The built-in symptom list
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            names: SYMPTOMS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Symptom names in feature order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Feature index of a symptom, if recognized
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl Default for SymptomVocabulary {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Human-readable form of a symptom name (`skin_rash` becomes `skin rash`)
#[must_use]
pub fn display_name(symptom: &str) -> String {
    symptom.replace('_', " ")
}
