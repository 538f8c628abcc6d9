//! CSV dataset loading utilities

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::dataset::RawDataset;
use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::utils::logging::log_dataset_read;

/// Read a CSV file into a [`RawDataset`]
///
/// The first row holds the column names. Rows with fewer or more cells than the
/// header are accepted; cells are kept verbatim.
pub fn read_csv_dataset(path: &Path) -> Result<RawDataset> {
    log::info!("Reading dataset {}", path.display());
    let start = Instant::now();

    let file = safe_open_file(path, "reading dataset")?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read row {} of {}", idx + 1, path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let dataset = RawDataset::new(path.display().to_string(), headers, rows);
    log_dataset_read(&dataset, start.elapsed());
    Ok(dataset)
}
