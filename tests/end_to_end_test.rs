mod common;

use std::sync::Arc;

use common::{headers, row, test_config, two_row_dataset, write_csv};
use symptom_classifier::{
    Algorithm, CsvSource, DiseaseVocabulary, InMemorySource, ModelKind, ModelRegistry, Predictor,
    RawDataset, Result, SymptomVocabulary,
};

const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::TREE,
    Algorithm::FOREST,
    Algorithm::NAIVE_BAYES,
    Algorithm::Auto,
];

fn two_row_predictor() -> Predictor {
    let dir = std::env::temp_dir();
    let registry = ModelRegistry::new(
        InMemorySource::new(two_row_dataset("training"), two_row_dataset("testing")),
        test_config(&dir),
    )
    .with_vocabularies(
        SymptomVocabulary::new(["itching", "cough"]).expect("valid vocabulary"),
        DiseaseVocabulary::canonical(),
    );
    Predictor::new(Arc::new(registry))
}

/// The distinguishing symptom of a row predicts that row's label with every algorithm
#[test]
fn test_distinguishing_symptom_predicts_its_row() -> Result<()> {
    let predictor = two_row_predictor();

    for algorithm in ALGORITHMS {
        assert_eq!(
            predictor.predict(["itching"], algorithm)?.as_deref(),
            Some("Zeta syndrome"),
            "{algorithm}"
        );
        assert_eq!(
            predictor.predict(["cough"], algorithm)?.as_deref(),
            Some("Omega syndrome"),
            "{algorithm}"
        );
    }
    Ok(())
}

/// Classifiers are total: no symptoms still yields a label
#[test]
fn test_empty_symptoms_yield_a_label() -> Result<()> {
    let predictor = two_row_predictor();

    for algorithm in ALGORITHMS {
        let label = predictor.predict(Vec::<String>::new(), algorithm)?;
        assert!(
            matches!(label.as_deref(), Some("Zeta syndrome" | "Omega syndrome")),
            "{algorithm} gave {label:?}"
        );
    }
    Ok(())
}

/// Unknown symptom names are ignored rather than rejected
#[test]
fn test_unknown_symptoms_ignored() -> Result<()> {
    let predictor = two_row_predictor();
    let label = predictor.predict(["itching", "third_eye", "Cough"], Algorithm::TREE)?;
    assert_eq!(label.as_deref(), Some("Zeta syndrome"));
    Ok(())
}

/// Labels reconciled onto canonical diseases come back under the canonical name
#[test]
fn test_canonical_labels_from_csv() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let training = vec![
        row(&["itching", "skin_rash"], "Fungal infection"),
        row(&["continuous_sneezing", "chills"], "Allergy"),
        row(&["vomiting", "fatigue"], "Zika"),
    ];
    let testing = vec![
        row(&["itching", "skin_rash"], "Fungal Infection "),
        row(&["continuous_sneezing", "chills"], "Allergy"),
    ];
    write_csv(dir.path(), "training.csv", &headers(), &training);
    write_csv(dir.path(), "Testing.csv", &headers(), &testing);

    let config = test_config(dir.path());
    let registry = Arc::new(ModelRegistry::new(CsvSource::from_config(&config), config));
    let predictor = Predictor::new(Arc::clone(&registry));

    assert_eq!(
        predictor.predict(["itching", "skin_rash"], Algorithm::TREE)?.as_deref(),
        Some("Fungalinfection")
    );
    assert_eq!(
        predictor.predict(["vomiting", "fatigue"], Algorithm::Auto)?.as_deref(),
        Some("Zika")
    );

    let models = registry.get()?;
    assert_eq!(models.diseases().len(), 42);
    assert_eq!(models.labels().get("Fungal Infection "), Some(0));
    assert_eq!(models.labels().get("Zika"), Some(41));

    let report = models.report().expect("built models carry a report");
    assert_eq!(report.training_rows, 3);
    assert_eq!(report.testing_rows, 2);
    assert_eq!(report.appended_labels, ["Zika"]);
    let tree = report.score(ModelKind::Tree).expect("tree score");
    assert_eq!(tree.train_accuracy, Some(1.0));
    assert_eq!(tree.test_accuracy, Some(1.0));
    Ok(())
}

/// Header spaces are stripped before matching symptom names
#[test]
fn test_header_spaces_stripped() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut spaced = headers();
    spaced[0] = " itch ing".to_string();
    spaced[1] = "skin_rash ".to_string();
    let rows = vec![row(&["itching"], "Malaria"), row(&["cough"], "Dengue")];
    write_csv(dir.path(), "training.csv", &spaced, &rows);
    write_csv(dir.path(), "Testing.csv", &spaced, &rows);

    let config = test_config(dir.path());
    let predictor = Predictor::new(Arc::new(ModelRegistry::from_config(config)));
    assert_eq!(
        predictor.predict(["itching"], Algorithm::TREE)?.as_deref(),
        Some("Malaria")
    );
    Ok(())
}

/// A missing symptom column fails the build with a dataset error
#[test]
fn test_missing_column_fails_build() {
    let without_itching: Vec<String> = headers().into_iter().skip(1).collect();
    let cells = row(&[], "Malaria")[1..].to_vec();
    let broken = RawDataset::new("training", without_itching, vec![cells]);
    let registry = ModelRegistry::new(
        InMemorySource::new(broken.clone(), broken),
        test_config(&std::env::temp_dir()),
    );

    let err = Predictor::new(Arc::new(registry))
        .predict(["itching"], Algorithm::TREE)
        .unwrap_err();
    assert!(matches!(err, symptom_classifier::Error::DatasetLoad { .. }));
    assert!(err.to_string().contains("itching"));
}

/// Missing dataset files surface as dataset errors
#[test]
fn test_missing_files_fail_build() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ModelRegistry::from_config(test_config(dir.path()));
    let err = registry.ensure_built().unwrap_err();
    assert!(matches!(err, symptom_classifier::Error::DatasetLoad { .. }));
    assert!(!registry.is_built());
}

/// File names, outcome column and tree depth all come from the configuration
#[test]
fn test_configured_files_and_label_column() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut renamed = headers();
    if let Some(last) = renamed.last_mut() {
        *last = "outcome".to_string();
    }
    let rows = vec![row(&["itching"], "Malaria"), row(&["cough"], "Dengue")];
    write_csv(dir.path(), "train_v2.csv", &renamed, &rows);
    write_csv(dir.path(), "holdout_v2.csv", &renamed, &rows);

    let config = test_config(dir.path())
        .with_files("train_v2.csv", "holdout_v2.csv")
        .with_label_column("outcome")
        .with_max_depth(4);
    let registry = Arc::new(ModelRegistry::from_config(config));
    let predictor = Predictor::new(Arc::clone(&registry));

    assert_eq!(
        predictor.predict(["cough"], Algorithm::FOREST)?.as_deref(),
        Some("Dengue")
    );
    assert_eq!(registry.config().max_depth, Some(4));
    assert_eq!(registry.get()?.labels().get("Malaria"), Some(15));
    Ok(())
}
