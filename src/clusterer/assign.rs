use super::{distance::euclidean_distance, Assignment, ClusterError, Point};

/// Label each point with the index of its nearest centroid.
///
/// Ties resolve to the lowest centroid index.
pub fn assign_clusters(points: &[Point], centroids: &[Point]) -> Result<Assignment, ClusterError> {
    if centroids.is_empty() {
        return Err(ClusterError::InvalidParameter(
            "At least one centroid is required".to_string(),
        ));
    }

    points
        .iter()
        .map(|point| nearest_centroid(point, centroids))
        .collect()
}

fn nearest_centroid(point: &[f64], centroids: &[Point]) -> Result<usize, ClusterError> {
    let mut best = 0;
    let mut best_dist = euclidean_distance(point, &centroids[0])?;

    for (c, center) in centroids.iter().enumerate().skip(1) {
        let dist = euclidean_distance(point, center)?;
        // strict: an equal distance keeps the earlier index
        if dist < best_dist {
            best = c;
            best_dist = dist;
        }
    }

    Ok(best)
}
