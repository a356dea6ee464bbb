//! Reads tab-delimited record files into a [`RecordSet`].
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::record::{Record, RecordSet};
use crate::errors::SaplingError;


/// A struct that returns [`RecordSet`].
///
/// Each line of the file is one case with three tab-separated columns:
/// an identifier, a single-character label,
/// and a string of characters holding one feature value per position.
///
/// The label and feature-value universes are collected from the
/// whole file and stored in sorted order,
/// so that everything downstream iterates them deterministically.
///
/// # Example
/// ```no_run
/// use sapling::RecordReader;
///
/// let records = RecordReader::new()
///     .file("path/to/records.tsv")
///     .read()?;
/// # Ok::<(), sapling::SaplingError>(())
/// ```
pub struct RecordReader<P> {
    file: Option<P>,
}


impl<P> RecordReader<P> {
    /// Construct a new instance of [`RecordReader`].
    pub fn new() -> Self {
        Self { file: None }
    }
}


impl<P> Default for RecordReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> RecordReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns the parsed [`RecordSet`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<RecordSet, SaplingError> {
        let Some(file) = self.file else {
            return Err(SaplingError::MalformedRecord(
                "no record file was set; use `RecordReader::file`".into()
            ));
        };
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut label_universe = BTreeSet::new();
        let mut value_universe = BTreeSet::new();
        let mut records = Vec::new();
        let mut feature_count = None;

        for (lineno, line) in lines.enumerate() {
            let line = line?;
            let mut columns = line.split('\t');
            let (Some(id), Some(label), Some(features)) =
                (columns.next(), columns.next(), columns.next())
            else {
                return Err(SaplingError::MalformedRecord(format!(
                    "line {} has fewer than 3 tab-separated columns",
                    lineno + 1,
                )));
            };

            let Some(label) = label.chars().next() else {
                return Err(SaplingError::MalformedRecord(format!(
                    "line {} has an empty label", lineno + 1,
                )));
            };
            label_universe.insert(label);

            let features = features.chars().collect::<Vec<_>>();
            match feature_count {
                None => { feature_count = Some(features.len()); },
                Some(count) if count != features.len() => {
                    return Err(SaplingError::MalformedRecord(format!(
                        "line {} has {} feature values, expected {}",
                        lineno + 1, features.len(), count,
                    )));
                },
                Some(_) => {},
            }
            value_universe.extend(features.iter().copied());

            records.push(Record::new(id, label, features));
        }

        let labels = label_universe.into_iter().collect::<Vec<_>>();
        let feature_values = value_universe.into_iter().collect::<Vec<_>>();
        debug!(
            "read {} records, {} labels, {} feature values",
            records.len(), labels.len(), feature_values.len(),
        );

        Ok(RecordSet::new(records, labels, feature_values))
    }
}
