use super::{ClusterError, DEFAULT_MAX_ITERS, DEFAULT_RANGE, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// How the starting centroids are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitStrategy {
    /// k distinct points drawn from the data
    #[default]
    Sampled,
    /// Each coordinate drawn uniformly from `[min, max]`
    Ranged { min: f64, max: f64 },
}

impl InitStrategy {
    /// Ranged init over the 0-10 rating scale
    pub fn rating_scale() -> Self {
        InitStrategy::Ranged {
            min: DEFAULT_RANGE.0,
            max: DEFAULT_RANGE.1,
        }
    }

    /// Reject ranged bounds that cannot be sampled from
    pub fn check(&self) -> Result<(), ClusterError> {
        let InitStrategy::Ranged { min, max } = *self else {
            return Ok(());
        };

        if !min.is_finite() || !max.is_finite() {
            return Err(ClusterError::InvalidParameter(format!(
                "Init range bounds must be finite: [{}, {}]",
                min, max
            )));
        }
        if min > max {
            return Err(ClusterError::InvalidParameter(format!(
                "Init range is empty: [{}, {}]",
                min, max
            )));
        }
        // the sampler scales the width up slightly; keep it well inside f64
        let width = max - min;
        if !width.is_finite() || width > f64::MAX / 2.0 {
            return Err(ClusterError::InvalidParameter(format!(
                "Init range is too wide: [{}, {}]",
                min, max
            )));
        }

        Ok(())
    }
}

/// Parameters for a single k-means run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansConfig {
    pub k: usize,
    pub max_iters: usize,
    pub init: InitStrategy,
    pub seed: u64,
}

impl KMeansConfig {
    /// Create a config for `k` clusters with default limits
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iters: DEFAULT_MAX_ITERS,
            init: InitStrategy::default(),
            seed: DEFAULT_SEED,
        }
    }

    /// Set the iteration cap
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the centroid initialization strategy
    pub fn init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    /// Set the seed used by [`kmeans`](super::kmeans)
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check parameters that do not depend on the data
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.k == 0 {
            return Err(ClusterError::InvalidParameter(
                "k must be at least 1".to_string(),
            ));
        }

        if self.max_iters == 0 {
            return Err(ClusterError::InvalidParameter(
                "max_iters must be at least 1".to_string(),
            ));
        }

        self.init.check()?;

        Ok(())
    }
}
