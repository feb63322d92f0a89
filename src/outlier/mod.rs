mod stats;


pub use stats::{mean, population_std_dev};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width of the accepted band, in standard deviations
pub const SIGMA_BAND: f64 = 2.0;

/// Which records count as outliers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierRule {
    /// Value outside mean ± 2σ over the whole dataset
    #[default]
    Sigma,
    /// Member of a cluster smaller than the mean cluster size
    SmallClusters,
}

/// Flagged record indices plus the statistics they were judged against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierSet {
    pub rule: OutlierRule,
    pub indices: Vec<usize>,
    pub mean: f64,
    pub std_dev: f64,
}

impl OutlierSet {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Accepted value band `(lower, upper)` for the sigma rule
    pub fn band(&self) -> (f64, f64) {
        (
            self.mean - SIGMA_BAND * self.std_dev,
            self.mean + SIGMA_BAND * self.std_dev,
        )
    }
}

impl OutlierRule {
    /// Apply the rule to per-record values and their cluster labels
    pub fn apply(self, values: &[f64], assignments: &[usize]) -> OutlierSet {
        match self {
            OutlierRule::Sigma => detect_outliers(values),
            OutlierRule::SmallClusters => OutlierSet {
                rule: self,
                indices: small_cluster_outliers(assignments),
                mean: mean(values),
                std_dev: population_std_dev(values),
            },
        }
    }
}

/// Flag every value strictly outside mean ± 2σ (population σ).
///
/// Uses global statistics; cluster labels play no part.
pub fn detect_outliers(values: &[f64]) -> OutlierSet {
    let mean = mean(values);
    let std_dev = population_std_dev(values);
    let lower = mean - SIGMA_BAND * std_dev;
    let upper = mean + SIGMA_BAND * std_dev;

    let indices: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v < lower || v > upper)
        .map(|(i, _)| i)
        .collect();

    debug!(mean, std_dev, flagged = indices.len(), "Sigma outlier scan");

    OutlierSet {
        rule: OutlierRule::Sigma,
        indices,
        mean,
        std_dev,
    }
}

/// Flag members of clusters whose size is below the mean cluster size.
///
/// Cluster sizes are counted over labels `0..=max`, so unused labels
/// below the highest one count as empty clusters.
pub fn small_cluster_outliers(assignments: &[usize]) -> Vec<usize> {
    let Some(&max_label) = assignments.iter().max() else {
        return vec![];
    };

    let mut sizes = vec![0usize; max_label + 1];
    for &a in assignments {
        sizes[a] += 1;
    }

    let mean_size = assignments.len() as f64 / sizes.len() as f64;

    assignments
        .iter()
        .enumerate()
        .filter(|&(_, &a)| (sizes[a] as f64) < mean_size)
        .map(|(i, _)| i)
        .collect()
}
