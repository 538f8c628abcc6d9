//! Process-wide prediction call surface
//!
//! Front ends that do not manage their own [`ModelRegistry`] use these
//! functions. They share one registry, created on first use from
//! [`ClassifierConfig::from_env`].

use std::sync::{Arc, OnceLock};

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::models::Algorithm;
use crate::predictor::Predictor;
use crate::registry::{ModelRegistry, ModelSet};

static DEFAULT_REGISTRY: OnceLock<Arc<ModelRegistry>> = OnceLock::new();

/// The shared registry, configured from the environment on first access
pub fn default_registry() -> Result<Arc<ModelRegistry>> {
    if let Some(registry) = DEFAULT_REGISTRY.get() {
        return Ok(Arc::clone(registry));
    }
    let config = ClassifierConfig::from_env()?;
    Ok(Arc::clone(
        DEFAULT_REGISTRY.get_or_init(|| Arc::new(ModelRegistry::from_config(config))),
    ))
}

/// Build (or reuse) the shared models
///
/// The returned set exposes the three classifiers and both vocabularies.
/// `verbose` prints accuracy diagnostics and has no other effect.
pub fn build_models(verbose: bool) -> Result<Arc<ModelSet>> {
    default_registry()?.build_models(verbose)
}

/// Predict a disease with the shared models
///
/// `algorithm_name` is `tree`, `random`, `gnb` or `auto`; anything else uses the
/// tree. Returns `Ok(None)` when no prediction can be made.
pub fn predict_symptoms<I, S>(symptoms: I, algorithm_name: &str) -> Result<Option<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let algorithm = Algorithm::from_name_or_tree(algorithm_name);
    Predictor::new(default_registry()?).predict(symptoms, algorithm)
}
