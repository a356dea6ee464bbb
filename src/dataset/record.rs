//! A concrete record/dataset pair for single-character
//! labels and feature values,
//! the shape produced by [`RecordReader`](super::RecordReader).
use super::dataset_traits::{Dataset, LabeledData};


/// One labeled case: an identifier, a single-character label,
/// and a vector of single-character feature values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    label: char,
    features: Vec<char>,
}


impl Record {
    /// Construct a new [`Record`].
    #[inline]
    pub fn new<S: Into<String>>(id: S, label: char, features: Vec<char>)
        -> Self
    {
        Self { id: id.into(), label, features }
    }


    /// Returns the identifier of this record.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }
}


impl LabeledData for Record {
    type Label = char;
    type Value = char;


    #[inline]
    fn label(&self) -> char {
        self.label
    }


    /// Returns the `i`-th feature value.
    /// Panics if `i` is past the end of the feature vector.
    #[inline]
    fn feature(&self, i: usize) -> char {
        self.features[i]
    }


    #[inline]
    fn feature_count(&self) -> usize {
        self.features.len()
    }
}


/// A dataset of [`Record`]s.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<Record>,
    labels: Vec<char>,
    feature_values: Vec<char>,
}


impl RecordSet {
    /// The label handed out when a dataset cannot determine one.
    /// `E` for error; it should never appear in real data.
    pub const DEFAULT_LABEL: char = 'E';


    /// Construct a [`RecordSet`] from records and the full universes
    /// of possible labels and feature values.
    /// The universes must cover every value occurring in `records`.
    #[inline]
    pub fn new(
        records: Vec<Record>,
        labels: Vec<char>,
        feature_values: Vec<char>,
    ) -> Self
    {
        Self { records, labels, feature_values }
    }
}


impl Dataset for RecordSet {
    type Label = char;
    type Value = char;
    type Item = Record;


    #[inline]
    fn data(&self) -> &[Record] {
        &self.records[..]
    }


    #[inline]
    fn labels(&self) -> &[char] {
        &self.labels[..]
    }


    #[inline]
    fn feature_values(&self) -> &[char] {
        &self.feature_values[..]
    }


    #[inline]
    fn default_label(&self) -> char {
        Self::DEFAULT_LABEL
    }


    #[inline]
    fn spawn_subset(
        &self,
        items: Vec<Record>,
        labels: Vec<char>,
        feature_values: Vec<char>,
    ) -> Self
    {
        Self::new(items, labels, feature_values)
    }
}
