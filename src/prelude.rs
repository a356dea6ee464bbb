//! Exports the dataset abstractions, tree types, and evaluators.
//!
pub use crate::dataset::{
    // Dataset abstractions
    Dataset,
    LabeledData,

    // Bound sets for label and feature-value types
    FeatureValue,
    Label,


    // Char-valued records --------------------
    Record,
    RecordReader,
    RecordSet,
};


pub use crate::tree::{
    // The tree and its builder
    DecisionTree,
    DecisionTreeBuilder,
    NodeId,
    Tuning,
};


pub use crate::evaluation::{
    accuracy,
    CrossValidation,
};


pub use crate::errors::SaplingError;
