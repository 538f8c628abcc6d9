//! Raw tabular datasets and the sources they are loaded from.

pub mod source;
pub mod table;

pub use source::{CsvSource, InMemorySource, TrainingData, TrainingSource};
pub use table::{RawDataset, normalize_headers};
