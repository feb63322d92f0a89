use crate::clusterer::{kmeans, ClusterError, KMeansConfig};
use crate::dataset::Dataset;
use crate::outlier::OutlierRule;
use crate::report::Report;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Settings for a full cluster-then-flag run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub kmeans: KMeansConfig,
    pub outlier_rule: OutlierRule,
}

impl AnalysisConfig {
    pub fn new(k: usize) -> Self {
        Self {
            kmeans: KMeansConfig::new(k),
            outlier_rule: OutlierRule::default(),
        }
    }

    pub fn kmeans(mut self, kmeans: KMeansConfig) -> Self {
        self.kmeans = kmeans;
        self
    }

    pub fn outlier_rule(mut self, rule: OutlierRule) -> Self {
        self.outlier_rule = rule;
        self
    }
}

/// Cluster the dataset's values, flag outliers and assemble the report
pub fn analyze(dataset: &Dataset, config: &AnalysisConfig) -> Result<Report, ClusterError> {
    let points = dataset.points();
    let result = kmeans(&points, &config.kmeans)?;

    let outliers = config
        .outlier_rule
        .apply(&dataset.values(), &result.assignments);
    info!(
        rule = ?config.outlier_rule,
        outliers = outliers.len(),
        "Outlier detection complete"
    );

    Report::build(dataset, &result, &outliers)
}
