//! Progress reporting for model fitting, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a fitting progress bar
pub const DEFAULT_FIT_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

/// Create a progress bar for fitting `length` models
///
/// The bar is hidden unless `visible` is set, so quiet builds print nothing.
#[must_use]
pub fn create_fit_progress_bar(length: u64, description: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    if let Ok(style) = ProgressStyle::default_bar().template(DEFAULT_FIT_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(description.to_string());
    pb
}
