use crate::clusterer::{
    assign::assign_clusters,
    centroid::update_centroids,
    distance::common_dimension,
    init::initialize_centroids,
    types::{ClusterResult, Point},
    ClusterError, KMeansConfig,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Run k-means with a `ChaCha8Rng` seeded from `config.seed`
pub fn kmeans(points: &[Point], config: &KMeansConfig) -> Result<ClusterResult, ClusterError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    kmeans_with_rng(points, config, &mut rng)
}

/// Run k-means drawing all randomness from `rng`
pub fn kmeans_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    config.validate()?;
    check_points(points, config.k)?;

    info!(
        k = config.k,
        points = points.len(),
        init = ?config.init,
        "Starting k-means"
    );

    let centroids = initialize_centroids(points, config.k, &config.init, rng)?;
    converge(points, centroids, config.max_iters, rng)
}

/// Run the assign/update loop from caller-supplied starting centroids
pub fn kmeans_from_centroids<R: Rng + ?Sized>(
    points: &[Point],
    centroids: Vec<Point>,
    max_iters: usize,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    if max_iters == 0 {
        return Err(ClusterError::InvalidParameter(
            "max_iters must be at least 1".to_string(),
        ));
    }
    if centroids.is_empty() {
        return Err(ClusterError::InvalidParameter(
            "k must be at least 1".to_string(),
        ));
    }
    check_points(points, centroids.len())?;

    converge(points, centroids, max_iters, rng)
}

fn converge<R: Rng + ?Sized>(
    points: &[Point],
    mut centroids: Vec<Point>,
    max_iters: usize,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    let k = centroids.len();
    let mut assignments = assign_clusters(points, &centroids)?;
    let mut iterations = 0;

    loop {
        if iterations >= max_iters {
            warn!(max_iters, "k-means hit the iteration cap");
            return Err(ClusterError::NonConvergence { max_iters });
        }
        iterations += 1;

        let new_centroids = update_centroids(points, &assignments, k, rng)?;
        let new_assignments = assign_clusters(points, &new_centroids)?;
        centroids = new_centroids;

        if new_assignments == assignments {
            break; // converged
        }

        let moved = new_assignments
            .iter()
            .zip(assignments.iter())
            .filter(|(a, b)| a != b)
            .count();
        debug!(iteration = iterations, moved, "Assignment changed");

        assignments = new_assignments;
    }

    info!(iterations, "k-means converged");

    Ok(ClusterResult {
        assignments,
        centroids,
        iterations,
    })
}

fn check_points(points: &[Point], k: usize) -> Result<(), ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::InsufficientData(
            "No points to cluster".to_string(),
        ));
    }

    if k > points.len() {
        return Err(ClusterError::InsufficientData(format!(
            "k={} exceeds the {} available points",
            k,
            points.len()
        )));
    }

    if common_dimension(points)? == 0 {
        return Err(ClusterError::InvalidParameter(
            "Points must have at least one coordinate".to_string(),
        ));
    }

    Ok(())
}
