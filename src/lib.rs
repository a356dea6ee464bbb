#![warn(missing_docs)]

//!
//! A crate for inducing classification trees over discrete features
//! and discrete labels.
//!
//! Trees are grown by greedy maximum-information-gain splitting
//! and then simplified by reduced-error pruning against a held-out
//! tuning partition, so the returned tree generalizes instead of
//! memorizing its training data.
//! `n`-fold cross-validation over contiguous held-out folds
//! estimates how accurate such a tree is.
//!
//! The algorithms are generic over the dataset:
//! anything implementing [`Dataset`] (with examples implementing
//! [`LabeledData`]) can be learned from,
//! and the crate ships [`RecordSet`]/[`Record`] plus a
//! tab-delimited [`RecordReader`] for the common
//! char-labeled case.

pub mod dataset;
pub mod errors;
pub mod evaluation;
pub mod prelude;
pub mod tree;


pub use dataset::{
    Dataset,
    FeatureValue,
    Label,
    LabeledData,
    Record,
    RecordReader,
    RecordSet,
};
pub use errors::SaplingError;
pub use evaluation::{accuracy, CrossValidation};
pub use tree::{DecisionTree, DecisionTreeBuilder, NodeId, Tuning};
