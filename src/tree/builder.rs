//! Builds tuned decision trees.
use super::decision_tree::DecisionTree;
use crate::dataset::Dataset;
use crate::errors::SaplingError;


/// How [`DecisionTreeBuilder`] carves a tuning partition
/// out of its dataset before training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tuning {
    /// Train on the full dataset and skip pruning.
    None,
    /// Hold out every example whose index is a multiple of the stride,
    /// train on the rest, and prune against the held-out partition.
    Stride(usize),
    /// Like [`Tuning::Stride`] with an effective stride of
    /// `dataset.size() / n`, holding out roughly `n` examples.
    Size(usize),
}


/// A struct that builds a [`DecisionTree`],
/// optionally tuned by reduced-error pruning.
///
/// # Example
/// ```no_run
/// use sapling::prelude::*;
///
/// # fn main() -> Result<(), SaplingError> {
/// # let records = RecordReader::new().file("records.tsv").read()?;
/// let tree = DecisionTreeBuilder::new(&records)
///     .tuning(Tuning::Stride(4))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a, D> {
    dataset: &'a D,
    tuning: Tuning,
}


impl<'a, D> DecisionTreeBuilder<'a, D> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default no tuning partition is held out
    /// and the tree is left unpruned.
    pub fn new(dataset: &'a D) -> Self {
        Self { dataset, tuning: Tuning::None }
    }


    /// Set the tuning method.
    /// Default value is `Tuning::None`.
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}


impl<'a, D> DecisionTreeBuilder<'a, D>
    where D: Dataset + Sync,
{
    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self)
        -> Result<DecisionTree<D::Label, D::Value>, SaplingError>
    {
        let stride = match self.tuning {
            Tuning::None => {
                return DecisionTree::build(self.dataset);
            },
            Tuning::Stride(stride) => stride,
            Tuning::Size(n) => {
                if n == 0 {
                    return Err(SaplingError::InvalidStride);
                }
                self.dataset.size() / n
            },
        };

        let (tuning_set, training_set) =
            self.dataset.split_by_stride(stride)?;
        let mut tree = DecisionTree::build(&training_set)?;
        tree.prune(&tuning_set);
        Ok(tree)
    }
}
