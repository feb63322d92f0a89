use super::ClusterError;

/// Euclidean distance between two points of equal dimensionality
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, ClusterError> {
    if a.len() != b.len() {
        return Err(ClusterError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(sum.sqrt())
}

/// Shared dimensionality of a point set; 0 when empty
pub(super) fn common_dimension(points: &[Vec<f64>]) -> Result<usize, ClusterError> {
    let dim = points.first().map_or(0, |p| p.len());

    match points.iter().find(|p| p.len() != dim) {
        Some(p) => Err(ClusterError::DimensionMismatch {
            left: dim,
            right: p.len(),
        }),
        None => Ok(dim),
    }
}
