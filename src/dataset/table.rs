//! A raw table of string cells with normalized headers.

use ndarray::Array2;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::vocab::SymptomVocabulary;

/// Normalize header names
///
/// Embedded spaces are removed so headers line up with symptom names, and
/// repeated names are renamed `name.1`, `name.2`, ... in order of appearance.
pub fn normalize_headers<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut taken: FxHashSet<String> = FxHashSet::default();
    let mut suffixes: FxHashMap<String, usize> = FxHashMap::default();
    let mut out = Vec::new();

    for header in headers {
        let base: String = header.as_ref().chars().filter(|c| *c != ' ').collect();
        let mut name = base.clone();
        if taken.contains(&name) {
            let suffix = suffixes.entry(base.clone()).or_insert(0);
            loop {
                *suffix += 1;
                let candidate = format!("{base}.{suffix}");
                if !taken.contains(&candidate) {
                    name = candidate;
                    break;
                }
            }
        }
        taken.insert(name.clone());
        out.push(name);
    }

    out
}

/// A dataset as read from disk: header names plus string cells per row
///
/// Rows may be ragged; missing trailing cells only matter if a column that is
/// actually used is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDataset {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawDataset {
    /// Create a dataset; headers are normalized with [`normalize_headers`]
    pub fn new<H, S>(name: impl Into<String>, headers: H, rows: Vec<Vec<String>>) -> Self
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            headers: normalize_headers(headers),
            rows,
        }
    }

    /// Name used in error messages (usually the file path)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by its normalized name
    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column).ok_or_else(|| {
            Error::dataset_load(&self.name, format!("missing column {column:?}"))
        })
    }

    fn cell(&self, row: usize, col: usize) -> Result<&str> {
        self.rows[row].get(col).map(String::as_str).ok_or_else(|| {
            Error::dataset_load(
                &self.name,
                format!("row {} has no value for column {:?}", row + 1, self.headers[col]),
            )
        })
    }

    /// Values of the outcome column, verbatim, in row order
    pub fn labels(&self, column: &str) -> Result<Vec<&str>> {
        let col = self.require_column(column)?;
        (0..self.rows.len()).map(|row| self.cell(row, col)).collect()
    }

    /// Feature matrix with one column per vocabulary symptom, in vocabulary order
    ///
    /// Every symptom must be present as a column; other columns are ignored.
    pub fn feature_matrix(&self, vocabulary: &SymptomVocabulary) -> Result<Array2<f64>> {
        let columns = vocabulary
            .names()
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>>>()?;

        let mut values = Vec::with_capacity(self.rows.len() * columns.len());
        for row in 0..self.rows.len() {
            for &col in &columns {
                let raw = self.cell(row, col)?;
                let value: f64 = raw.trim().parse().map_err(|_| {
                    Error::dataset_load(
                        &self.name,
                        format!(
                            "row {} column {:?}: expected a number, found {raw:?}",
                            row + 1,
                            self.headers[col]
                        ),
                    )
                })?;
                values.push(value);
            }
        }

        Ok(Array2::from_shape_vec((self.rows.len(), columns.len()), values)?)
    }
}
