//! Estimates classification accuracy by n-fold cross-validation.
use colored::Colorize;

use super::accuracy;
use crate::dataset::Dataset;
use crate::errors::SaplingError;
use crate::tree::{DecisionTreeBuilder, Tuning};

const WIDTH: usize = 9;

/// A struct that estimates the accuracy of tuned trees
/// by holding out contiguous folds of a dataset.
///
/// Every offset `i` with `i + fold_size < dataset.size()`
/// contributes one fold `[i, i + fold_size)`:
/// a tree is built and tuned on the complement
/// and scored against the fold,
/// and the mean score over all folds is returned.
/// A fold size of zero, or one that reaches the end of the dataset,
/// leaves nothing to evaluate and fails with
/// [`SaplingError::NoFolds`].
///
/// Folds are contiguous index ranges, so callers with ordered data
/// may want [`Dataset::shuffled`] in front of this.
///
/// # Example
/// ```no_run
/// use sapling::prelude::*;
///
/// # fn main() -> Result<(), SaplingError> {
/// let records = RecordReader::new()
///     .file("records.tsv")
///     .read()?;
/// let estimate = CrossValidation::new(&records)
///     .fold_size(1)
///     .tuning(Tuning::Stride(4))
///     .verbose(true)
///     .run()?;
/// println!("estimated accuracy: {estimate}");
/// # Ok(())
/// # }
/// ```
pub struct CrossValidation<'a, D> {
    dataset: &'a D,
    fold_size: usize,
    tuning: Tuning,
    verbose: bool,
}


impl<'a, D> CrossValidation<'a, D>
    where D: Dataset + Sync,
{
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(dataset: &'a D) -> Self {
        Self {
            dataset,
            fold_size: 1,
            tuning: Tuning::None,
            verbose: false,
        }
    }


    /// Set the fold size.
    /// Default value is `1.`
    #[inline]
    pub fn fold_size(mut self, fold_size: usize) -> Self {
        self.fold_size = fold_size;
        self
    }


    /// Set the tuning method applied to each fold's tree.
    /// Default value is `Tuning::None.`
    #[inline]
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints a line per fold.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the score of every fold, in offset order.
    pub fn scores(&self) -> Result<Vec<f64>, SaplingError> {
        let size = self.dataset.size();
        if self.fold_size == 0 || self.fold_size >= size {
            return Err(SaplingError::NoFolds {
                fold_size: self.fold_size,
                size,
            });
        }

        let mut scores = Vec::with_capacity(size - self.fold_size);
        for i in 0..size - self.fold_size {
            let upper = i + self.fold_size;
            let training = self.dataset.excluding_range(i, upper)?;
            let testing = self.dataset.from_range(i, upper)?;

            let tree = DecisionTreeBuilder::new(&training)
                .tuning(self.tuning)
                .build()?;
            let score = accuracy(&tree, &testing);

            if self.verbose {
                println!(
                    "{}    {}    {}",
                    format!("  [fold {i: >4}]").bold().red(),
                    format!("[TRAIN {: >WIDTH$}]", training.size())
                        .bold().green(),
                    format!("[SCORE {score: >WIDTH$.4}]").bold().yellow(),
                );
            }
            scores.push(score);
        }
        Ok(scores)
    }


    /// Returns the mean score across all folds.
    pub fn run(&self) -> Result<f64, SaplingError> {
        let scores = self.scores()?;
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(mean)
    }
}
