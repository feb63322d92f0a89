mod render;


use crate::clusterer::{ClusterError, ClusterResult, Point};
use crate::dataset::Dataset;
use crate::outlier::{OutlierRule, OutlierSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record as it appears in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub index: usize,
    pub name: String,
    pub value: f64,
}

/// Members of one cluster, in dataset order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterGroup {
    pub id: usize,
    pub size: usize,
    pub centroid: Point,
    pub members: Vec<ReportEntry>,
}

/// Cluster membership followed by flagged outliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub iterations: usize,
    pub groups: Vec<ClusterGroup>,
    pub outlier_rule: OutlierRule,
    pub mean: f64,
    pub std_dev: f64,
    pub outliers: Vec<ReportEntry>,
}

impl Report {
    /// Join cluster labels and outlier indices back onto the dataset records.
    ///
    /// Groups are ordered by ascending cluster id; labels with no members
    /// are left out.
    pub fn build(
        dataset: &Dataset,
        result: &ClusterResult,
        outliers: &OutlierSet,
    ) -> Result<Self, ClusterError> {
        if result.assignments.len() != dataset.len() {
            return Err(ClusterError::InvalidParameter(format!(
                "{} labels for {} records",
                result.assignments.len(),
                dataset.len()
            )));
        }

        let mut by_label: BTreeMap<usize, Vec<ReportEntry>> = BTreeMap::new();
        for (index, &label) in result.assignments.iter().enumerate() {
            by_label
                .entry(label)
                .or_default()
                .push(entry(dataset, index)?);
        }

        let groups = by_label
            .into_iter()
            .map(|(id, members)| ClusterGroup {
                id,
                size: members.len(),
                centroid: result.centroids.get(id).cloned().unwrap_or_default(),
                members,
            })
            .collect();

        let outlier_entries = outliers
            .indices
            .iter()
            .map(|&index| entry(dataset, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            iterations: result.iterations,
            groups,
            outlier_rule: outliers.rule,
            mean: outliers.mean,
            std_dev: outliers.std_dev,
            outliers: outlier_entries,
        })
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn entry(dataset: &Dataset, index: usize) -> Result<ReportEntry, ClusterError> {
    let record = dataset.get(index).ok_or_else(|| {
        ClusterError::InvalidParameter(format!("Record index {} out of range", index))
    })?;

    Ok(ReportEntry {
        index,
        name: record.name.clone(),
        value: record.value,
    })
}
