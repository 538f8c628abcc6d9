//! Console output utilities
//!
//! This module provides formatted console output of build diagnostics.

use crate::registry::BuildReport;

fn percent(accuracy: Option<f64>) -> String {
    accuracy.map_or_else(|| "n/a".to_string(), |a| format!("{:.0} %", a * 100.0))
}

/// Print the accuracy diagnostics of a model build
pub fn print_build_report(report: &BuildReport) {
    println!(
        "Trained on {} rows, evaluated on {} rows ({} symptoms, {} diseases)",
        report.training_rows, report.testing_rows, report.symptom_count, report.disease_count
    );
    if !report.appended_labels.is_empty() {
        println!(
            "Labels added to the disease list: {}",
            report.appended_labels.join(", ")
        );
    }
    for score in &report.scores {
        println!(
            " {:<12} train score: {:>6}  test score: {:>6}",
            score.model.to_string(),
            percent(score.train_accuracy),
            percent(score.test_accuracy)
        );
    }
    println!("Built in {:?}", report.elapsed);
}
