//! Radius queries built on top of [`SpatialIndex`].
//!
//! A neighbourhood is every indexed point strictly closer than `eps` to the
//! query point, the query point included. Two strategies compute it; both
//! must agree on the resulting set.

use std::sync::Arc;

use crate::{
    distance::euclidean_distance,
    error::{ClusteringError, IndexError, Result},
    index::{PointHandle, SpatialIndex},
    point::Spatial,
};

/// How [`neighborhood`] asks the index for candidates.
///
/// # Examples
/// ```
/// use dencluster_core::QueryStrategy;
///
/// assert_eq!(QueryStrategy::default(), QueryStrategy::BoxBounded);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueryStrategy {
    /// Walk the nearest-neighbour sequence and stop at the first point at or
    /// beyond `eps`.
    NearestExpanding,
    /// Fetch the bounding box of the eps-sphere and keep the points inside
    /// the sphere.
    #[default]
    BoxBounded,
}

/// Result of a radius query around one indexed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    origin: PointHandle,
    members: Vec<PointHandle>,
}

impl Neighborhood {
    /// Returns the query point.
    #[must_use]
    #[rustfmt::skip]
    pub fn origin(&self) -> PointHandle { self.origin }

    /// Returns every member in query order, the origin included.
    #[must_use]
    pub fn members(&self) -> &[PointHandle] {
        &self.members
    }

    /// Returns the number of members, the origin included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the neighbourhood has no members.
    ///
    /// A neighbourhood produced by [`neighborhood`] always contains its
    /// origin, so this is `false` for every successful query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Yields the members other than the origin.
    pub fn others(&self) -> impl Iterator<Item = PointHandle> + '_ {
        let origin = self.origin;
        self.members
            .iter()
            .copied()
            .filter(move |member| *member != origin)
    }

    /// Returns whether `handle` is a member.
    #[must_use]
    pub fn contains(&self, handle: PointHandle) -> bool {
        self.members.contains(&handle)
    }
}

/// Collects the eps-neighbourhood of `handle`.
///
/// # Errors
/// - [`ClusteringError::Index`] when `handle` is not stored in `index`.
/// - [`ClusteringError::SelfPointMissing`] when the index did not return the
///   query point exactly once.
///
/// # Examples
/// ```
/// use dencluster_core::{LinearIndex, Point, QueryStrategy, SpatialIndex, neighborhood};
///
/// let mut index = LinearIndex::new();
/// let a = index.insert(Point::<2>::new([0.0, 0.0]));
/// let b = index.insert(Point::<2>::new([0.0, 1.0]));
/// index.insert(Point::<2>::new([0.0, 2.0]));
///
/// let hood = neighborhood(&index, a, 1.5, QueryStrategy::BoxBounded)?;
/// assert_eq!(hood.members(), [a, b]);
/// assert_eq!(hood.others().collect::<Vec<_>>(), [b]);
/// # Ok::<(), dencluster_core::ClusteringError>(())
/// ```
pub fn neighborhood<const D: usize, I>(
    index: &I,
    handle: PointHandle,
    eps: <I::Point as Spatial<D>>::Scalar,
    strategy: QueryStrategy,
) -> Result<Neighborhood>
where
    I: SpatialIndex<D>,
{
    let point = index.get(handle).ok_or_else(|| {
        ClusteringError::from_index(index.name(), IndexError::UnknownHandle { handle })
    })?;
    let centre = *point.coordinates();

    let within = |candidate: PointHandle| {
        index
            .get(candidate)
            .is_some_and(|other| euclidean_distance(&centre, other.coordinates()) < eps)
    };

    let members: Vec<PointHandle> = match strategy {
        QueryStrategy::NearestExpanding => index
            .query_nearest(centre, index.len())
            .take_while(|candidate| within(*candidate))
            .collect(),
        QueryStrategy::BoxBounded => {
            let (min, max) = point.bounding_corners(eps);
            index
                .query_within_box(min, max)
                .filter(|candidate| within(*candidate))
                .collect()
        }
    };

    let found = members.iter().filter(|member| **member == handle).count();
    if found != 1 {
        return Err(ClusteringError::SelfPointMissing {
            index: Arc::from(index.name()),
            handle,
            found,
        });
    }

    Ok(Neighborhood {
        origin: handle,
        members,
    })
}
