//! Scoring trees against held-out data
//! and estimating accuracy by cross-validation.
use crate::dataset::{Dataset, LabeledData};
use crate::tree::DecisionTree;

// Provides a struct that drives repeated build/tune/score cycles.
pub(crate) mod cross_validation;

pub use cross_validation::CrossValidation;


/// Fraction of examples in `dataset` that `tree` classifies
/// with their true label.
/// An empty dataset scores `0.0`.
pub fn accuracy<D>(
    tree: &DecisionTree<D::Label, D::Value>,
    dataset: &D,
) -> f64
    where D: Dataset,
{
    if dataset.size() == 0 {
        return 0.0;
    }

    let correct = dataset.data()
        .iter()
        .filter(|item| *tree.classify(*item) == item.label())
        .count();
    correct as f64 / dataset.size() as f64
}
