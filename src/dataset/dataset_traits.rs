//! Defines the labeled-data and dataset abstractions
//! that the tree induction algorithms operate on.
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use log::debug;
use rand::prelude::*;

use crate::errors::SaplingError;


/// Bound set for label types.
/// Bound once here so the dataset and tree signatures stay short.
pub trait Label: Clone + Ord + Debug + Display {}
impl<T> Label for T
    where T: Clone + Ord + Debug + Display
{}


/// Bound set for feature-value types.
pub trait FeatureValue: Clone + Ord + Debug + Display {}
impl<T> FeatureValue for T
    where T: Clone + Ord + Debug + Display
{}


/// A single labeled example.
/// The induction algorithms never look past this capability set,
/// so any record type can back a dataset.
pub trait LabeledData {
    /// Label type of this example.
    type Label: Label;
    /// Feature-value type of this example.
    type Value: FeatureValue;


    /// Returns the label of this example.
    fn label(&self) -> Self::Label;


    /// Returns the `i`-th feature value of this example.
    fn feature(&self, i: usize) -> Self::Value;


    /// Returns the length of the feature vector.
    fn feature_count(&self) -> usize;
}


/// An immutable collection of labeled examples
/// together with the full universes of possible labels
/// and possible feature values.
///
/// The universes are established once from the full dataset and
/// propagated unchanged to every subset,
/// so a tree induced from any subset can still classify
/// every value present in the original data.
/// No dataset is mutated after construction;
/// each splitting operation spawns new datasets
/// that own their example sequences.
pub trait Dataset: Sized {
    /// Label type shared by all examples of this dataset.
    type Label: Label;
    /// Feature-value type shared by all examples of this dataset.
    type Value: FeatureValue;
    /// The example type stored in this dataset.
    type Item: LabeledData<Label = Self::Label, Value = Self::Value> + Clone;


    /// Returns the examples of this dataset.
    fn data(&self) -> &[Self::Item];


    /// Returns the universe of possible labels.
    fn labels(&self) -> &[Self::Label];


    /// Returns the universe of possible feature values.
    fn feature_values(&self) -> &[Self::Value];


    /// Returns a label that acts as a placeholder
    /// when a dataset cannot otherwise determine one.
    /// It should not occur in the data.
    fn default_label(&self) -> Self::Label;


    /// Spawns a new dataset of the same concrete type
    /// from the given examples and universes.
    fn spawn_subset(
        &self,
        items: Vec<Self::Item>,
        labels: Vec<Self::Label>,
        feature_values: Vec<Self::Value>,
    ) -> Self;


    /// Returns the number of examples in this dataset.
    #[inline]
    fn size(&self) -> usize {
        self.data().len()
    }


    /// Partitions this dataset by the `i`-th feature.
    ///
    /// The returned map has one entry for **every** value
    /// in the declared feature-value universe.
    /// Values that no example carries map to empty datasets;
    /// induction must consider the full universe,
    /// not just the values observed at one node.
    ///
    /// An example whose `i`-th feature value lies outside the universe
    /// is a contract violation and fails with
    /// [`SaplingError::UnknownFeatureValue`].
    fn partition_by_feature(
        &self,
        i: usize,
    ) -> Result<BTreeMap<Self::Value, Self>, SaplingError>
    {
        let mut buckets = self.feature_values()
            .iter()
            .cloned()
            .map(|value| (value, Vec::new()))
            .collect::<BTreeMap<_, Vec<Self::Item>>>();

        for item in self.data() {
            let value = item.feature(i);
            match buckets.get_mut(&value) {
                Some(bucket) => { bucket.push(item.clone()); },
                None => {
                    return Err(
                        SaplingError::UnknownFeatureValue(value.to_string())
                    );
                },
            }
        }

        let subsets = buckets.into_iter()
            .map(|(value, items)| {
                let subset = self.spawn_subset(
                    items,
                    self.labels().to_vec(),
                    self.feature_values().to_vec(),
                );
                (value, subset)
            })
            .collect();
        Ok(subsets)
    }


    /// Groups the examples of this dataset by their label.
    /// Labels that no example carries are absent from the map.
    fn group_by_label(&self) -> BTreeMap<Self::Label, Vec<&Self::Item>> {
        let mut groups: BTreeMap<Self::Label, Vec<&Self::Item>>
            = BTreeMap::new();
        for item in self.data() {
            groups.entry(item.label()).or_default().push(item);
        }
        groups
    }


    /// Splits this dataset in two by index stride.
    ///
    /// The first returned dataset contains the examples at positions
    /// that are multiples of `stride` (the tuning partition),
    /// the second contains the remainder (the training partition).
    /// A stride of `0` fails with [`SaplingError::InvalidStride`].
    fn split_by_stride(
        &self,
        stride: usize,
    ) -> Result<(Self, Self), SaplingError>
    {
        if stride == 0 {
            return Err(SaplingError::InvalidStride);
        }

        let mut on_stride = Vec::new();
        let mut remainder = Vec::new();
        for (i, item) in self.data().iter().enumerate() {
            if i % stride == 0 {
                on_stride.push(item.clone());
            } else {
                remainder.push(item.clone());
            }
        }

        let on_stride = self.spawn_subset(
            on_stride, self.labels().to_vec(), self.feature_values().to_vec(),
        );
        let remainder = self.spawn_subset(
            remainder, self.labels().to_vec(), self.feature_values().to_vec(),
        );
        Ok((on_stride, remainder))
    }


    /// Returns a dataset containing every example
    /// **except** those in the half-open index range `[lower, upper)`.
    fn excluding_range(
        &self,
        lower: usize,
        upper: usize,
    ) -> Result<Self, SaplingError>
    {
        self.check_range(lower, upper)?;
        let items = self.data()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i < lower || *i >= upper)
            .map(|(_, item)| item.clone())
            .collect();
        let subset = self.spawn_subset(
            items, self.labels().to_vec(), self.feature_values().to_vec(),
        );
        Ok(subset)
    }


    /// Returns a dataset containing only the examples
    /// in the half-open index range `[lower, upper)`.
    fn from_range(
        &self,
        lower: usize,
        upper: usize,
    ) -> Result<Self, SaplingError>
    {
        self.check_range(lower, upper)?;
        let items = self.data()[lower..upper].to_vec();
        let subset = self.spawn_subset(
            items, self.labels().to_vec(), self.feature_values().to_vec(),
        );
        Ok(subset)
    }


    /// Shannon entropy of the label distribution of this dataset,
    /// base 2, with the declared label universe as the category set.
    /// Categories with zero occurrences contribute nothing
    /// (`0 log₂ 0 ≔ 0`), and an empty dataset has entropy `0.0`.
    ///
    /// An example labeled outside the declared universe fails with
    /// [`SaplingError::UnknownLabel`].
    fn entropy(&self) -> Result<f64, SaplingError> {
        let data = self.data();
        if data.is_empty() {
            debug!("entropy of an empty dataset defined as 0");
            return Ok(0.0);
        }

        let mut counts = self.labels()
            .iter()
            .cloned()
            .map(|label| (label, 0_usize))
            .collect::<BTreeMap<_, _>>();
        for item in data {
            let label = item.label();
            match counts.get_mut(&label) {
                Some(count) => { *count += 1; },
                None => {
                    return Err(SaplingError::UnknownLabel(label.to_string()));
                },
            }
        }

        let n = data.len() as f64;
        let entropy = counts.values()
            .map(|&count| {
                let p = count as f64 / n;
                if p == 0.0 { 0.0 } else { -p * p.log2() }
            })
            .sum::<f64>();
        Ok(entropy)
    }


    /// Returns a copy of this dataset with its examples shuffled
    /// by a seeded RNG.
    /// Useful in front of [`CrossValidation`](crate::CrossValidation),
    /// whose folds are contiguous index ranges.
    fn shuffled(&self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut items = self.data().to_vec();
        items.shuffle(&mut rng);
        self.spawn_subset(
            items, self.labels().to_vec(), self.feature_values().to_vec(),
        )
    }


    #[doc(hidden)]
    fn check_range(&self, lower: usize, upper: usize)
        -> Result<(), SaplingError>
    {
        let size = self.size();
        if lower > upper || upper > size {
            return Err(SaplingError::RangeOutOfBounds { lower, upper, size });
        }
        Ok(())
    }
}
