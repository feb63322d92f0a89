use super::{distance::common_dimension, ClusterError, Point};
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

/// Coordinate-wise mean; `None` for an empty set
pub fn compute_centroid(vectors: &[&[f64]]) -> Option<Point> {
    let dim = vectors.first()?.len();
    let mut out = vec![0.0; dim];

    for v in vectors {
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }

    let n = vectors.len() as f64;
    for acc in out.iter_mut() {
        *acc /= n;
    }

    Some(out)
}

/// Recompute `k` centroids from the current assignment.
///
/// A cluster that received no points is reseeded with a random point
/// from the full dataset, so every index always has a centroid.
pub fn update_centroids<R: Rng + ?Sized>(
    points: &[Point],
    assignments: &[usize],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Point>, ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::InsufficientData(
            "Cannot update centroids from zero points".to_string(),
        ));
    }

    if assignments.len() != points.len() {
        return Err(ClusterError::InvalidParameter(format!(
            "Assignment has {} labels for {} points",
            assignments.len(),
            points.len()
        )));
    }

    common_dimension(points)?;

    if let Some(&label) = assignments.iter().find(|&&a| a >= k) {
        return Err(ClusterError::InvalidParameter(format!(
            "Cluster label {} out of range for k={}",
            label, k
        )));
    }

    let mut centroids = Vec::with_capacity(k);

    for c in 0..k {
        let members: Vec<&[f64]> = members_of(points, assignments, c).collect();

        match compute_centroid(&members) {
            Some(mean) => centroids.push(mean),
            None => {
                let seed = points.choose(rng).cloned().ok_or_else(|| {
                    ClusterError::InsufficientData("No point to reseed from".into())
                })?;
                debug!(cluster = c, centroid = ?seed, "Reseeding empty cluster");
                centroids.push(seed);
            }
        }
    }

    Ok(centroids)
}

fn members_of<'a>(
    points: &'a [Point],
    assignments: &'a [usize],
    cluster: usize,
) -> impl Iterator<Item = &'a [f64]> {
    points
        .iter()
        .zip(assignments.iter())
        .filter(move |&(_, a)| *a == cluster)
        .map(|(p, _)| &p[..])
}

