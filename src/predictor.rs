//! Disease prediction from reported symptoms.

use std::sync::Arc;

use crate::algorithm::plurality_vote;
use crate::error::Result;
use crate::models::{Algorithm, ModelKind};
use crate::registry::{ModelRegistry, ModelSet};

/// Answers prediction requests against a registry, building it on first use
#[derive(Debug, Clone)]
pub struct Predictor {
    registry: Arc<ModelRegistry>,
}

impl Predictor {
    #[must_use]
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    /// Predict a disease for the reported symptoms
    ///
    /// Errors only come from building the models. A prediction that cannot be
    /// made is `Ok(None)`.
    pub fn predict<I, S>(&self, reported: I, algorithm: Algorithm) -> Result<Option<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let models = self.registry.ensure_built()?;
        Ok(predict_with(&models, reported, algorithm))
    }
}

/// Predict against an already built model set
pub fn predict_with<I, S>(models: &ModelSet, reported: I, algorithm: Algorithm) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let features = models.encode(reported);

    let label = match algorithm {
        Algorithm::Single(kind) => models.predict_label(kind, features.view()),
        Algorithm::Auto => {
            let votes = ModelKind::ALL.map(|kind| models.predict_label(kind, features.view()));
            log::debug!("Votes (tree, forest, naive bayes): {votes:?}");
            plurality_vote(&votes)
        }
    };
    label.map(str::to_string)
}
