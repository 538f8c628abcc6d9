//! Bagged forest of decision trees
//!
//! Each tree is fitted on a bootstrap sample (rows drawn with replacement, as
//! many as the training set has) and the forest predicts the class most trees
//! agree on, the smallest class id winning a tie. Tree `i` draws its sample from
//! a generator seeded with `seed + i`, so a forest is reproducible regardless of
//! how rayon schedules the fits.

use indicatif::ProgressBar;
use itertools::Itertools;
use linfa::prelude::*;
use linfa_trees::DecisionTree;
use ndarray::{Array1, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::ForestConfig;
use crate::error::{Error, Result};
use crate::models::tree::fit_tree;
use crate::models::{Classifier, ModelKind, TrainingSet};

pub struct ForestClassifier {
    trees: Vec<DecisionTree<f64, usize>>,
}

impl ForestClassifier {
    /// Fit `config.n_trees` trees in parallel, ticking `progress` once per tree
    pub fn fit(
        dataset: &TrainingSet,
        config: &ForestConfig,
        max_depth: Option<usize>,
        progress: &ProgressBar,
    ) -> Result<Self> {
        if config.n_trees == 0 {
            return Err(Error::Training("forest: n_trees must be at least 1".to_string()));
        }
        let rows = dataset.records.nrows();
        if rows == 0 {
            return Err(Error::Training("forest: no training rows".to_string()));
        }

        let trees = (0..config.n_trees)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
                let sample: Vec<usize> = (0..rows).map(|_| rng.random_range(0..rows)).collect();
                let bootstrap = TrainingSet::new(
                    dataset.records.select(Axis(0), &sample),
                    dataset.targets.select(Axis(0), &sample),
                );
                let tree = fit_tree(&bootstrap, max_depth)?;
                progress.inc(1);
                Ok(tree)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { trees })
    }

    /// Number of trees in the forest
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl Classifier for ForestClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::Forest
    }

    fn predict_batch(&self, records: ArrayView2<'_, f64>) -> Array1<usize> {
        let per_tree: Vec<Array1<usize>> = self.trees.iter().map(|t| t.predict(&records)).collect();

        (0..records.nrows())
            .map(|row| {
                per_tree
                    .iter()
                    .map(|votes| votes[row])
                    .counts()
                    .into_iter()
                    .max_by(|(a_id, a_n), (b_id, b_n)| a_n.cmp(b_n).then(b_id.cmp(a_id)))
                    .map_or(0, |(id, _)| id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    fn separable() -> TrainingSet {
        let records: Array2<f64> = array![
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
        ];
        TrainingSet::new(records, array![0, 0, 1, 1, 2, 2])
    }

    #[test]
    fn test_forest_fits_requested_tree_count() {
        let config = ForestConfig { n_trees: 15, seed: 7 };
        let forest = ForestClassifier::fit(&separable(), &config, None, &ProgressBar::hidden()).unwrap();
        assert_eq!(forest.len(), 15);
        assert_eq!(forest.kind(), ModelKind::Forest);
    }

    #[test]
    fn test_forest_predicts_separable_classes() {
        let config = ForestConfig { n_trees: 50, seed: 1 };
        let forest = ForestClassifier::fit(&separable(), &config, None, &ProgressBar::hidden()).unwrap();

        let probe = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(forest.predict_batch(probe.view()).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_forest_is_reproducible() {
        let config = ForestConfig { n_trees: 20, seed: 99 };
        let a = ForestClassifier::fit(&separable(), &config, None, &ProgressBar::hidden()).unwrap();
        let b = ForestClassifier::fit(&separable(), &config, None, &ProgressBar::hidden()).unwrap();

        let probe = array![[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 1.0]];
        assert_eq!(a.predict_batch(probe.view()), b.predict_batch(probe.view()));
    }

    #[test]
    fn test_zero_trees_rejected() {
        let config = ForestConfig { n_trees: 0, seed: 0 };
        assert!(ForestClassifier::fit(&separable(), &config, None, &ProgressBar::hidden()).is_err());
    }
}
