mod error;
mod loader;
mod record;


pub use error::DatasetError;
pub use loader::CsvColumns;
pub use record::Record;

use crate::clusterer::Point;
use serde::{Deserialize, Serialize};

/// Ordered, read-once collection of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep the leading `percentage` of rows (row count truncated)
    pub fn head_percentage(mut self, percentage: f64) -> Result<Self, DatasetError> {
        let n = prefix_len(self.records.len(), percentage)?;
        self.records.truncate(n);
        Ok(self)
    }

    /// One-dimensional points, one per record, in record order
    pub fn points(&self) -> Vec<Point> {
        self.records.iter().map(|r| vec![r.value]).collect()
    }

    /// Scalar value per record, in record order
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Number of leading rows selected by `percentage` out of `len`
pub fn prefix_len(len: usize, percentage: f64) -> Result<usize, DatasetError> {
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err(DatasetError::InvalidParameter(format!(
            "Percentage must be within [0, 100], got {}",
            percentage
        )));
    }

    Ok((len as f64 * (percentage / 100.0)) as usize)
}
