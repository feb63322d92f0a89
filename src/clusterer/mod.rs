mod assign;
mod centroid;
mod config;
mod distance;
mod error;
mod init;
mod kmeans;
mod types;

#[cfg(test)]
mod tests;

pub use assign::assign_clusters;
pub use centroid::{compute_centroid, update_centroids};
pub use config::{InitStrategy, KMeansConfig};
pub use distance::euclidean_distance;
pub use error::ClusterError;
pub use init::initialize_centroids;
pub use kmeans::{kmeans, kmeans_from_centroids, kmeans_with_rng};
pub use types::{Assignment, Cluster, ClusterResult, Point};

/// Iteration cap for the convergence loop
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// Bounds for ranged init on the IMDB rating scale
pub const DEFAULT_RANGE: (f64, f64) = (0.0, 10.0);
