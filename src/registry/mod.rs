//! Model registry
//!
//! Owns the lazily built [`ModelSet`]. The first caller of
//! [`ModelRegistry::ensure_built`] loads the datasets and fits the classifiers
//! while holding the registry lock, so concurrent callers wait for that build and
//! then share its result. Nothing is published until all three classifiers are
//! fitted. The cached set lives until [`ModelRegistry::reset`] is called.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::ClassifierConfig;
use crate::dataset::{CsvSource, TrainingSource};
use crate::error::{Error, Result};
use crate::utils::logging::print_build_report;
use crate::vocab::{DiseaseVocabulary, SymptomVocabulary};

pub mod build;
pub mod report;

pub use build::ModelSet;
pub use report::{BuildReport, ModelScore};

/// Lazily built, cached model state
pub struct ModelRegistry {
    source: Arc<dyn TrainingSource>,
    config: ClassifierConfig,
    symptoms: SymptomVocabulary,
    diseases: DiseaseVocabulary,
    state: Mutex<Option<Arc<ModelSet>>>,
    builds: AtomicUsize,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("builds", &self.build_count())
            .finish_non_exhaustive()
    }
}

impl ModelRegistry {
    /// Create a registry that builds from `source` using the canonical vocabularies
    pub fn new(source: impl TrainingSource + 'static, config: ClassifierConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
            symptoms: SymptomVocabulary::canonical(),
            diseases: DiseaseVocabulary::canonical(),
            state: Mutex::new(None),
            builds: AtomicUsize::new(0),
        }
    }

    /// Create a registry that reads the CSV files named by `config`
    #[must_use]
    pub fn from_config(config: ClassifierConfig) -> Self {
        Self::new(CsvSource::from_config(&config), config)
    }

    /// Replace the vocabularies used for the next build
    #[must_use]
    pub fn with_vocabularies(mut self, symptoms: SymptomVocabulary, diseases: DiseaseVocabulary) -> Self {
        self.symptoms = symptoms;
        self.diseases = diseases;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Lock the cached state
    ///
    /// A build that panicked poisons the mutex but never stores a set, so the
    /// cached value is still consistent and the poison is cleared.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<ModelSet>>> {
        self.state.lock().unwrap_or_else(|poisoned| {
            log::warn!("Model registry lock was poisoned by a failed build, recovering");
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Return the cached model set, building it first if needed
    pub fn ensure_built(&self) -> Result<Arc<ModelSet>> {
        self.build_models(false)
    }

    /// Like [`ModelRegistry::ensure_built`], printing accuracy diagnostics when `verbose`
    ///
    /// `verbose` never changes which models are returned; an existing set is
    /// reused and its diagnostics printed.
    pub fn build_models(&self, verbose: bool) -> Result<Arc<ModelSet>> {
        let mut state = self.lock();

        let models = match state.as_ref() {
            Some(models) => Arc::clone(models),
            None => {
                log::info!("Building models from {:?}", self.source);
                let data = self.source.load()?;
                let models = Arc::new(ModelSet::build(
                    &data,
                    &self.config,
                    self.symptoms.clone(),
                    self.diseases.clone(),
                    verbose,
                )?);
                self.builds.fetch_add(1, Ordering::SeqCst);
                *state = Some(Arc::clone(&models));
                models
            }
        };
        drop(state);

        if verbose {
            if let Some(report) = models.report() {
                print_build_report(report);
            }
        }
        Ok(models)
    }

    /// Return the cached model set without building
    pub fn get(&self) -> Result<Arc<ModelSet>> {
        self.lock().as_ref().map(Arc::clone).ok_or(Error::ModelNotBuilt)
    }

    /// Whether a model set is cached
    pub fn is_built(&self) -> bool {
        self.lock().is_some()
    }

    /// Install an already built model set, replacing any cached one
    pub fn install(&self, models: ModelSet) -> Result<Arc<ModelSet>> {
        let models = Arc::new(models);
        *self.lock() = Some(Arc::clone(&models));
        Ok(models)
    }

    /// Drop the cached model set; the next [`ModelRegistry::ensure_built`] rebuilds
    ///
    /// Handles returned earlier stay valid.
    pub fn reset(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }

    /// Number of builds performed so far
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}
