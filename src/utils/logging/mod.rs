//! Logging, console reporting and progress utilities.

pub mod console;
pub mod log;
pub mod progress;

pub use self::log::{log_dataset_read, log_reconciliation, log_unknown_symptoms};
pub use console::print_build_report;
pub use progress::create_fit_progress_bar;
