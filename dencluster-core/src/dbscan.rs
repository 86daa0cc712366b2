//! DBSCAN labelling over any [`SpatialIndex`].
//!
//! Provides the configured [`Dbscan`] engine and the one-shot [`cluster`]
//! helper. Labels are written back into the indexed records.

use std::{collections::VecDeque, fmt, num::NonZeroUsize};

use num_traits::Float;
use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    builder::DbscanBuilder,
    error::{ClusteringError, IndexError},
    index::{LabelOf, PointHandle, SpatialIndex},
    label::ClusterLabel,
    neighbors::{Neighborhood, QueryStrategy, neighborhood},
    point::Spatial,
};

/// Density-based clustering engine.
///
/// # Examples
/// ```
/// use dencluster_core::{DbscanBuilder, LinearIndex, Point, SpatialIndex};
///
/// let mut index: LinearIndex<Point<2>> = [[0.0, 0.0], [0.0, 1.0], [0.0, 2.0], [10.0, 10.0]]
///     .into_iter()
///     .map(Point::new)
///     .collect();
///
/// let dbscan = DbscanBuilder::<2>::new(1.5)
///     .with_min_pts(2)
///     .build()
///     .expect("builder must succeed");
/// dbscan.cluster(&mut index).expect("run must succeed");
///
/// let labels: Vec<String> = index
///     .handles()
///     .filter_map(|handle| index.label(handle))
///     .map(|label| label.to_string())
///     .collect();
/// assert_eq!(labels, ["0", "0", "0", "Noise"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dbscan<const D: usize, S = f64> {
    eps: S,
    min_pts: NonZeroUsize,
    strategy: QueryStrategy,
}

impl<const D: usize, S> Dbscan<D, S>
where
    S: Float + fmt::Debug,
{
    pub(crate) fn new(eps: S, min_pts: NonZeroUsize, strategy: QueryStrategy) -> Self {
        Self {
            eps,
            min_pts,
            strategy,
        }
    }

    /// Returns the neighbourhood radius.
    #[must_use]
    pub fn eps(&self) -> S {
        self.eps
    }

    /// Returns the minimum neighbourhood size for a core point.
    #[must_use]
    pub fn min_pts(&self) -> NonZeroUsize {
        self.min_pts
    }

    /// Returns the neighbourhood query strategy.
    #[must_use]
    pub fn strategy(&self) -> QueryStrategy {
        self.strategy
    }

    /// Labels every record in `index` as a cluster member or noise.
    ///
    /// Existing labels are discarded first, so repeated runs over the same
    /// records produce the same labelling.
    ///
    /// # Errors
    /// - [`ClusteringError::SelfPointMissing`] when the index omits or repeats
    ///   a query point in its own neighbourhood.
    /// - [`ClusteringError::IdentifierExhausted`] when the label width cannot
    ///   name another cluster.
    /// - [`ClusteringError::Index`] when the index rejects one of its own
    ///   handles.
    ///
    /// Labels are left partially assigned when an error is returned.
    #[instrument(
        name = "dbscan.cluster",
        err,
        skip(self, index),
        fields(
            index = %index.name(),
            points = index.len(),
            eps = ?self.eps,
            min_pts = self.min_pts.get(),
            strategy = ?self.strategy,
        ),
    )]
    pub fn cluster<I>(&self, index: &mut I) -> Result<()>
    where
        I: SpatialIndex<D>,
        I::Point: Spatial<D, Scalar = S>,
    {
        if index.is_empty() {
            warn!("index is empty, nothing to cluster");
            return Ok(());
        }

        let handles: Vec<PointHandle> = index.handles().collect();
        for &handle in &handles {
            write_label(index, handle, ClusterLabel::UNCLASSIFIED)?;
        }

        let mut working: LabelOf<I, D> = ClusterLabel::CLUSTER0;
        let mut clusters = 0_usize;
        for &handle in &handles {
            if !read_label(index, handle)?.is_unclassified() {
                continue;
            }
            let hood = neighborhood(index, handle, self.eps, self.strategy)?;
            if hood.len() < self.min_pts.get() {
                write_label(index, handle, ClusterLabel::NOISE)?;
                continue;
            }

            let members = self.expand(index, &hood, working)?;
            debug!(cluster = %working, members, "cluster expanded");
            clusters += 1;
            working = working
                .next_valid_cluster_id()
                .map_err(|error| ClusteringError::from_label(index.name(), error))?;
        }

        let mut noise = 0_usize;
        for &handle in &handles {
            if read_label(index, handle)?.is_noise() {
                noise += 1;
            }
        }
        info!(clusters, noise, "clustering completed");
        Ok(())
    }

    /// Grows the cluster seeded by the core neighbourhood `hood` and returns
    /// how many labels were written.
    fn expand<I>(&self, index: &mut I, hood: &Neighborhood, id: LabelOf<I, D>) -> Result<usize>
    where
        I: SpatialIndex<D>,
        I::Point: Spatial<D, Scalar = S>,
    {
        for &member in hood.members() {
            write_label(index, member, id)?;
        }
        let mut written = hood.len();

        let mut worklist: VecDeque<PointHandle> = hood.others().collect();
        while let Some(seed) = worklist.pop_front() {
            let reach = neighborhood(index, seed, self.eps, self.strategy)?;
            if reach.len() < self.min_pts.get() {
                continue;
            }
            for member in reach.others() {
                let previous = read_label(index, member)?;
                if !(previous.is_unclassified() || previous.is_noise()) {
                    continue;
                }
                write_label(index, member, id)?;
                written += 1;
                if previous.is_unclassified() {
                    worklist.push_back(member);
                }
            }
        }
        Ok(written)
    }
}

/// Runs DBSCAN over `index` with the given settings.
///
/// Shorthand for building a [`Dbscan`] through [`DbscanBuilder`] and calling
/// [`Dbscan::cluster`].
///
/// # Errors
/// Returns the configuration errors of [`DbscanBuilder::build`] and the run
/// errors of [`Dbscan::cluster`].
///
/// # Examples
/// ```
/// use dencluster_core::{ClusterLabel, LinearIndex, Point, QueryStrategy, SpatialIndex, cluster};
///
/// let mut index = LinearIndex::new();
/// let only = index.insert(Point::<2>::new([0.0, 0.0]));
/// cluster(&mut index, 1.0, 1, QueryStrategy::NearestExpanding)?;
/// assert_eq!(index.label(only), Some(ClusterLabel::CLUSTER0));
/// # Ok::<(), dencluster_core::ClusteringError>(())
/// ```
pub fn cluster<const D: usize, I>(
    index: &mut I,
    eps: <I::Point as Spatial<D>>::Scalar,
    min_pts: usize,
    strategy: QueryStrategy,
) -> Result<()>
where
    I: SpatialIndex<D>,
{
    DbscanBuilder::<D, _>::new(eps)
        .with_min_pts(min_pts)
        .with_strategy(strategy)
        .build()?
        .cluster(index)
}

fn read_label<const D: usize, I>(index: &I, handle: PointHandle) -> Result<LabelOf<I, D>>
where
    I: SpatialIndex<D>,
{
    index.label(handle).ok_or_else(|| {
        ClusteringError::from_index(index.name(), IndexError::UnknownHandle { handle })
    })
}

fn write_label<const D: usize, I>(
    index: &mut I,
    handle: PointHandle,
    label: LabelOf<I, D>,
) -> Result<()>
where
    I: SpatialIndex<D>,
{
    index
        .set_label(handle, label)
        .map_err(|error| ClusteringError::from_index(index.name(), error))
}
