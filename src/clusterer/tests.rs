use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn points_1d(values: &[f64]) -> Vec<Point> {
    values.iter().map(|&v| vec![v]).collect()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

// ========================================================================
// Convergence loop
// ========================================================================

#[test]
fn test_three_groups_from_pinned_seeds() {
    let points = points_1d(&[1.0, 1.2, 5.0, 5.1, 9.0, 9.2]);
    let seeds = vec![points[0].clone(), points[2].clone(), points[4].clone()];

    let res = kmeans_from_centroids(&points, seeds, DEFAULT_MAX_ITERS, &mut rng()).unwrap();

    assert_eq!(res.assignments, vec![0, 0, 1, 1, 2, 2]);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.k(), 3);
    assert!((res.centroids[0][0] - 1.1).abs() < 1e-9);
    assert!((res.centroids[1][0] - 5.05).abs() < 1e-9);
    assert!((res.centroids[2][0] - 9.1).abs() < 1e-9);
}

#[test]
fn test_three_groups_any_seed_order() {
    let points = points_1d(&[1.0, 1.2, 5.0, 5.1, 9.0, 9.2]);
    let seeds = vec![points[4].clone(), points[0].clone(), points[2].clone()];

    let res = kmeans_from_centroids(&points, seeds, DEFAULT_MAX_ITERS, &mut rng()).unwrap();

    assert_eq!(res.assignments, vec![1, 1, 2, 2, 0, 0]);
}

#[test]
fn test_k_equals_n_gives_singletons() {
    let points = points_1d(&[2.0, 4.0, 6.0, 8.0]);
    let config = KMeansConfig::new(4);

    let res = kmeans(&points, &config).unwrap();

    let mut labels = res.assignments.clone();
    labels.sort_unstable();
    assert_eq!(labels, vec![0, 1, 2, 3]);
    assert!(res.clusters().iter().all(|c| c.members.len() == 1));
}

#[test]
fn test_result_is_fixed_point() {
    let points = points_1d(&[1.0, 1.5, 2.0, 4.8, 5.0, 5.3, 8.7, 9.0, 9.6]);
    let config = KMeansConfig::new(3).seed(7);

    let res = kmeans(&points, &config).unwrap();

    let mut r = rng();
    let again = update_centroids(&points, &res.assignments, 3, &mut r).unwrap();
    assert_eq!(assign_clusters(&points, &again).unwrap(), res.assignments);
}

#[test]
fn test_labels_in_range_with_ranged_init() {
    let points = points_1d(&[1.0, 1.5, 2.0, 4.8, 5.0, 5.3, 8.7, 9.0, 9.6]);
    let config = KMeansConfig::new(3).init(InitStrategy::rating_scale());

    let res = kmeans(&points, &config).unwrap();

    assert_eq!(res.assignments.len(), points.len());
    assert!(res.assignments.iter().all(|&a| a < 3));
    assert_eq!(res.centroids.len(), 3);
}

#[test]
fn test_same_seed_same_result() {
    let points = points_1d(&[7.1, 6.4, 8.8, 5.5, 7.9, 3.2, 8.1, 6.6]);
    let config = KMeansConfig::new(2).seed(1234);

    assert_eq!(kmeans(&points, &config).unwrap(), kmeans(&points, &config).unwrap());
}

#[test]
fn test_two_dimensional_points() {
    let points = vec![
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![5.0, 5.0],
        vec![5.2, 4.9],
    ];
    let seeds = vec![points[0].clone(), points[2].clone()];

    let res = kmeans_from_centroids(&points, seeds, 10, &mut rng()).unwrap();

    assert_eq!(res.assignments, vec![0, 0, 1, 1]);
}

#[test]
fn test_iteration_cap() {
    let points = points_1d(&[0.0, 1.0, 2.0, 3.0, 10.0]);
    let seeds = vec![vec![0.0], vec![1.0]];

    let result = kmeans_from_centroids(&points, seeds, 1, &mut rng());

    assert_eq!(result.unwrap_err(), ClusterError::NonConvergence { max_iters: 1 });
}

// ========================================================================
// Preconditions
// ========================================================================

#[test]
fn test_zero_points() {
    let result = kmeans(&[], &KMeansConfig::new(1));
    assert!(matches!(result, Err(ClusterError::InsufficientData(_))));
}

#[test]
fn test_k_exceeds_points() {
    let result = kmeans(&points_1d(&[1.0, 2.0]), &KMeansConfig::new(3));
    assert!(matches!(result, Err(ClusterError::InsufficientData(_))));
}

#[test]
fn test_k_exceeds_points_ranged() {
    let config = KMeansConfig::new(3).init(InitStrategy::rating_scale());
    let result = kmeans(&points_1d(&[1.0, 2.0]), &config);
    assert!(matches!(result, Err(ClusterError::InsufficientData(_))));
}

#[test]
fn test_zero_k() {
    let result = kmeans(&points_1d(&[1.0, 2.0]), &KMeansConfig::new(0));
    assert!(matches!(result, Err(ClusterError::InvalidParameter(_))));
}

#[test]
fn test_overflowing_ranged_bounds() {
    let config = KMeansConfig::new(2).init(InitStrategy::Ranged {
        min: -1e308,
        max: 1e308,
    });
    let result = kmeans(&points_1d(&[1.0, 2.0, 3.0]), &config);
    assert!(matches!(result, Err(ClusterError::InvalidParameter(_))));
}

#[test]
fn test_mixed_dimensions() {
    let points = vec![vec![1.0], vec![1.0, 2.0]];
    let result = kmeans(&points, &KMeansConfig::new(1));
    assert_eq!(
        result.unwrap_err(),
        ClusterError::DimensionMismatch { left: 1, right: 2 }
    );
}

#[test]
fn test_seed_dimension_mismatch() {
    let points = points_1d(&[1.0, 2.0]);
    let seeds = vec![vec![1.0, 1.0]];
    let result = kmeans_from_centroids(&points, seeds, 10, &mut rng());
    assert!(matches!(result, Err(ClusterError::DimensionMismatch { .. })));
}

// ========================================================================
// Centroid updater
// ========================================================================

#[test]
fn test_update_means() {
    let points = points_1d(&[1.0, 3.0, 10.0, 20.0]);
    let centroids = update_centroids(&points, &[0, 0, 1, 1], 2, &mut rng()).unwrap();

    assert_eq!(centroids, vec![vec![2.0], vec![15.0]]);
}

#[test]
fn test_update_reseeds_empty_clusters() {
    let points = points_1d(&[1.0, 2.0, 3.0]);
    let centroids = update_centroids(&points, &[0, 0, 0], 3, &mut rng()).unwrap();

    assert_eq!(centroids.len(), 3);
    assert_eq!(centroids[0], vec![2.0]);
    assert!(points.contains(&centroids[1]));
    assert!(points.contains(&centroids[2]));
}

#[test]
fn test_update_label_out_of_range() {
    let points = points_1d(&[1.0, 2.0]);
    let result = update_centroids(&points, &[0, 2], 2, &mut rng());
    assert!(matches!(result, Err(ClusterError::InvalidParameter(_))));
}

#[test]
fn test_update_length_mismatch() {
    let points = points_1d(&[1.0, 2.0]);
    let result = update_centroids(&points, &[0], 1, &mut rng());
    assert!(matches!(result, Err(ClusterError::InvalidParameter(_))));
}

#[test]
fn test_compute_centroid_2d() {
    let a = [0.0, 2.0];
    let b = [4.0, 6.0];
    assert_eq!(compute_centroid(&[&a[..], &b[..]]), Some(vec![2.0, 4.0]));
}

#[test]
fn test_compute_centroid_empty() {
    assert_eq!(compute_centroid(&[]), None);
}

#[test]
fn test_update_mixed_dimensions() {
    let points = vec![vec![1.0], vec![3.0, 5.0]];
    let result = update_centroids(&points, &[0, 0], 1, &mut rng());
    assert_eq!(
        result.unwrap_err(),
        ClusterError::DimensionMismatch { left: 1, right: 2 }
    );
}

// ========================================================================
// Result grouping
// ========================================================================

#[test]
fn test_clusters_grouping() {
    let res = ClusterResult {
        assignments: vec![1, 0, 1, 1],
        centroids: vec![vec![0.0], vec![1.0], vec![2.0]],
        iterations: 2,
    };

    let clusters = res.clusters();
    assert_eq!(clusters.len(), 3);
    assert_eq!(clusters[0].members, vec![1]);
    assert_eq!(clusters[1].members, vec![0, 2, 3]);
    assert!(clusters[2].members.is_empty());
    assert_eq!(clusters[2].centroid, vec![2.0]);
}

#[test]
fn test_clusters_skip_unknown_labels() {
    let res = ClusterResult {
        assignments: vec![0, 5, 1],
        centroids: vec![vec![0.0], vec![1.0]],
        iterations: 1,
    };

    let clusters = res.clusters();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].members, vec![0]);
    assert_eq!(clusters[1].members, vec![2]);
}
