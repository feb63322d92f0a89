use super::{ClusterError, InitStrategy, Point};
use rand::{seq::SliceRandom, Rng};

/// Produce `k` starting centroids using the given strategy
pub fn initialize_centroids<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    strategy: &InitStrategy,
    rng: &mut R,
) -> Result<Vec<Point>, ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::InsufficientData(
            "Cannot initialize centroids from zero points".to_string(),
        ));
    }

    if k == 0 {
        return Err(ClusterError::InvalidParameter(
            "k must be at least 1".to_string(),
        ));
    }

    if k > points.len() {
        return Err(ClusterError::InsufficientData(format!(
            "Cannot initialize {} centroids from {} points",
            k,
            points.len()
        )));
    }

    strategy.check()?;

    match *strategy {
        InitStrategy::Sampled => Ok(points.choose_multiple(rng, k).cloned().collect()),
        InitStrategy::Ranged { min, max } => {
            let dim = points[0].len();
            Ok((0..k)
                .map(|_| (0..dim).map(|_| rng.gen_range(min..=max)).collect::<Point>())
                .collect())
        }
    }
}
