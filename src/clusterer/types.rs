use serde::{Deserialize, Serialize};

/// A point in feature space; a rating is a one-dimensional point
pub type Point = Vec<f64>;

/// Cluster label per point, indexed by point position
pub type Assignment = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    pub members: Vec<usize>,
    pub centroid: Point,
}

/// Outcome of a converged k-means run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub assignments: Assignment,
    pub centroids: Vec<Point>,
    pub iterations: usize,
}

impl ClusterResult {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Member indices per cluster, one entry per centroid (possibly empty)
    pub fn clusters(&self) -> Vec<Cluster> {
        let mut clusters: Vec<Cluster> = self
            .centroids
            .iter()
            .enumerate()
            .map(|(id, centroid)| Cluster {
                id,
                members: vec![],
                centroid: centroid.clone(),
            })
            .collect();

        // labels without a centroid are skipped
        for (point_idx, &cluster_idx) in self.assignments.iter().enumerate() {
            if let Some(cluster) = clusters.get_mut(cluster_idx) {
                cluster.members.push(point_idx);
            }
        }

        clusters
    }
}
