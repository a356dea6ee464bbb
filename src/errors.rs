//! Errors
//!
//! Custom error types used throughout the `sapling` crate.
use thiserror::Error;

/// Errors that can occur while subsetting datasets,
/// inducing trees, or cross-validating them.
///
/// Every variant signals a contract violation by the caller,
/// never a transient condition, so nothing here is retried internally.
#[derive(Debug, Error)]
pub enum SaplingError {
    /// An example carries a feature value outside the declared universe.
    #[error("Feature value `{0}` is not in the declared feature-value universe.")]
    UnknownFeatureValue(String),
    /// An example carries a label outside the declared universe.
    #[error("Label `{0}` is not in the declared label universe.")]
    UnknownLabel(String),
    /// A root node cannot resolve a label from an empty dataset.
    #[error("Cannot build a tree node from an empty dataset with no parent.")]
    EmptyDataset,
    /// Stride-based splitting needs a stride of at least 1.
    #[error("Stride must be at least 1.")]
    InvalidStride,
    /// Range-based subsetting with invalid indices.
    #[error("Range [{lower}, {upper}) is out of bounds for a dataset of size {size}.")]
    RangeOutOfBounds {
        /// Lower bound, inclusive.
        lower: usize,
        /// Upper bound, exclusive.
        upper: usize,
        /// Number of examples in the dataset.
        size: usize,
    },
    /// Cross-validation evaluated zero folds.
    #[error("Fold size {fold_size} leaves no folds to evaluate in a dataset of size {size}.")]
    NoFolds {
        /// Requested fold size.
        fold_size: usize,
        /// Number of examples in the dataset.
        size: usize,
    },
    /// A record line did not follow the expected tab-delimited layout.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    /// The record file could not be read.
    #[error("Unable to read records: {0}")]
    Io(#[from] std::io::Error),
}
