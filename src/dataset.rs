//! Datasets of labeled examples and the operations
//! tree induction needs from them.

// Provides the dataset and labeled-data abstractions.
pub(crate) mod dataset_traits;
// Provides a concrete char-valued record/dataset pair.
pub(crate) mod record;
// Provides a struct that reads a tab-delimited record file.
pub(crate) mod record_reader;


pub use dataset_traits::{Dataset, FeatureValue, Label, LabeledData};
pub use record::{Record, RecordSet};
pub use record_reader::RecordReader;
