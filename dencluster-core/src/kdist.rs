//! k-distance graph used to pick a DBSCAN radius.
//!
//! Plotting the sorted k-distances and looking for the elbow gives a good
//! `eps` for `min_pts = k`.

use std::{cmp::Ordering, sync::Arc};

use tracing::{info, instrument};

use crate::{
    Result,
    builder::default_min_pts,
    distance::euclidean_distance,
    error::{ClusteringError, IndexError},
    index::{ScalarOf, SpatialIndex},
    point::Spatial,
};

/// Returns the distance of every point to its `k`-th nearest neighbour,
/// sorted from largest to smallest.
///
/// The query point itself is the zeroth neighbour and is not counted.
///
/// # Errors
/// - [`ClusteringError::InvalidK`] when `k` is zero.
/// - [`ClusteringError::InsufficientNeighbors`] when the index holds `k`
///   points or fewer.
/// - [`ClusteringError::SelfPointMissing`] when a nearest-neighbour query
///   returns nothing for an indexed point.
///
/// # Examples
/// ```
/// use dencluster_core::{LinearIndex, Point, sorted_k_distances};
///
/// let index: LinearIndex<Point<1>> =
///     [0.0, 1.0, 3.0].into_iter().map(|x| Point::new([x])).collect();
/// let distances = sorted_k_distances(&index, 1)?;
/// assert_eq!(distances, [2.0, 1.0, 1.0]);
/// # Ok::<(), dencluster_core::ClusteringError>(())
/// ```
#[instrument(
    name = "kdist.sorted",
    err,
    skip(index),
    fields(index = %index.name(), points = index.len()),
)]
pub fn sorted_k_distances<const D: usize, I>(index: &I, k: usize) -> Result<Vec<ScalarOf<I, D>>>
where
    I: SpatialIndex<D>,
{
    if k == 0 {
        return Err(ClusteringError::InvalidK { got: k });
    }
    let points = index.len();
    if points <= k {
        return Err(ClusteringError::InsufficientNeighbors {
            index: Arc::from(index.name()),
            k,
            points,
        });
    }

    let mut distances = Vec::with_capacity(points);
    for handle in index.handles() {
        let point = index.get(handle).ok_or_else(|| {
            ClusteringError::from_index(index.name(), IndexError::UnknownHandle { handle })
        })?;
        let centre = point.coordinates();

        let mut nearest = index.query_nearest(*centre, k.saturating_add(1));
        if nearest.next().is_none() {
            return Err(ClusteringError::SelfPointMissing {
                index: Arc::from(index.name()),
                handle,
                found: 0,
            });
        }
        let neighbour = nearest
            .nth(k - 1)
            .ok_or_else(|| ClusteringError::InsufficientNeighbors {
                index: Arc::from(index.name()),
                k,
                points,
            })?;
        let other = index.get(neighbour).ok_or_else(|| {
            ClusteringError::from_index(
                index.name(),
                IndexError::UnknownHandle { handle: neighbour },
            )
        })?;
        distances.push(euclidean_distance(centre, other.coordinates()));
    }

    distances.sort_by(|left, right| right.partial_cmp(left).unwrap_or(Ordering::Equal));
    info!(
        largest = ?distances.first(),
        smallest = ?distances.last(),
        "k-distance graph computed"
    );
    Ok(distances)
}

/// Runs [`sorted_k_distances`] with `k = 2 * D`.
///
/// # Errors
/// Same as [`sorted_k_distances`].
pub fn sorted_k_distances_default<const D: usize, I>(index: &I) -> Result<Vec<ScalarOf<I, D>>>
where
    I: SpatialIndex<D>,
{
    sorted_k_distances(index, default_min_pts::<D>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        LinearIndex, Point, PointHandle,
        error::ClusteringErrorCode,
        test_utils::{SelfTampering, TamperedIndex},
    };
    use rstest::rstest;

    fn line(xs: &[f64]) -> LinearIndex<Point<1>> {
        xs.iter().map(|x| Point::new([*x])).collect()
    }

    #[test]
    fn k_zero_is_rejected() {
        let error = sorted_k_distances(&line(&[0.0, 1.0]), 0).expect_err("k must be positive");
        assert_eq!(error, ClusteringError::InvalidK { got: 0 });
    }

    #[rstest]
    #[case::empty(&[], 1)]
    #[case::exactly_k(&[0.0, 1.0], 2)]
    fn too_few_points_are_reported(#[case] xs: &[f64], #[case] k: usize) {
        let error = sorted_k_distances(&line(xs), k).expect_err("not enough points");
        assert_eq!(error.code(), ClusteringErrorCode::InsufficientNeighbors);
    }

    #[test]
    fn second_neighbour_is_measured() {
        let distances = sorted_k_distances(&line(&[0.0, 1.0, 3.0, 7.0]), 2).expect("k is valid");
        assert_eq!(distances, [6.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn default_k_follows_the_dimension() {
        let index: LinearIndex<Point<1>> = line(&[0.0, 1.0, 2.0]);
        let distances = sorted_k_distances_default(&index).expect("three points cover k = 2");
        assert_eq!(distances, [2.0, 2.0, 1.0]);
    }

    #[test]
    fn estimator_does_not_touch_labels() {
        let index = line(&[0.0, 1.0, 2.0]);
        sorted_k_distances(&index, 1).expect("k is valid");
        assert!(
            index
                .iter()
                .all(|(_, point)| crate::Labelled::label(point).is_unclassified())
        );
    }

    #[test]
    fn empty_nearest_sequence_reports_the_missing_self_point() {
        let index = TamperedIndex::new(line(&[0.0, 1.0, 2.0]), SelfTampering::Drop);
        let error = sorted_k_distances(&index, 1).expect_err("queries return nothing");
        match error {
            ClusteringError::SelfPointMissing { handle, found, .. } => {
                assert_eq!(handle, PointHandle::new(0));
                assert_eq!(found, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
