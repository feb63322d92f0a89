// Public API exports
pub mod clusterer;
pub mod dataset;
pub mod outlier;
pub mod pipeline;
pub mod report;

// Re-export main types for convenience
pub use clusterer::{
    assign_clusters, euclidean_distance, initialize_centroids, kmeans, kmeans_from_centroids,
    kmeans_with_rng, update_centroids, Assignment, Cluster, ClusterError, ClusterResult,
    InitStrategy, KMeansConfig, Point,
};

pub use dataset::{CsvColumns, Dataset, DatasetError, Record};

pub use outlier::{detect_outliers, small_cluster_outliers, OutlierRule, OutlierSet};

pub use pipeline::{analyze, AnalysisConfig};

pub use report::{ClusterGroup, Report, ReportEntry};
