//! Post-run inspection helpers.

use std::collections::BTreeMap;

use crate::{
    index::{PointHandle, SpatialIndex},
    label::{ClusterLabel, LabelWidth},
    point::Labelled,
};

/// Number of records carrying each label.
///
/// Iteration follows label order: regular clusters by id, then noise, then
/// unclassified.
///
/// # Examples
/// ```
/// use dencluster_core::{ClusterLabel, LabelCounts};
///
/// let counts = LabelCounts::from_labels([
///     ClusterLabel::<u16>::CLUSTER0,
///     ClusterLabel::NOISE,
///     ClusterLabel::CLUSTER0,
/// ]);
/// assert_eq!(counts.get(ClusterLabel::CLUSTER0), 2);
/// assert_eq!(counts.cluster_count(), 1);
/// assert_eq!(counts.noise_count(), 1);
/// assert_eq!(counts.total(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts<W: LabelWidth = u32> {
    counts: BTreeMap<ClusterLabel<W>, usize>,
    total: usize,
}

impl<W: LabelWidth> LabelCounts<W> {
    /// Tallies the labels currently stored in `index`.
    #[must_use]
    pub fn from_index<const D: usize, I>(index: &I) -> Self
    where
        I: SpatialIndex<D>,
        I::Point: Labelled<Width = W>,
    {
        Self::from_labels(index.handles().filter_map(|handle| index.label(handle)))
    }

    /// Tallies an arbitrary sequence of labels.
    #[must_use]
    pub fn from_labels(labels: impl IntoIterator<Item = ClusterLabel<W>>) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for label in labels {
            *counts.entry(label).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Returns how many records carry `label`.
    #[must_use]
    pub fn get(&self, label: ClusterLabel<W>) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Iterates over `(label, count)` pairs with a non-zero count.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterLabel<W>, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }

    /// Returns the number of distinct regular clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.counts.keys().filter(|label| label.is_regular()).count()
    }

    /// Returns how many records are noise.
    #[must_use]
    #[rustfmt::skip]
    pub fn noise_count(&self) -> usize { self.get(ClusterLabel::NOISE) }

    /// Returns how many records are still unclassified.
    #[must_use]
    #[rustfmt::skip]
    pub fn unclassified_count(&self) -> usize { self.get(ClusterLabel::UNCLASSIFIED) }

    /// Returns the number of records tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Calls `visit` for every record in `index`, in handle order.
///
/// # Examples
/// ```
/// use dencluster_core::{LinearIndex, Point, Spatial, for_each_point};
///
/// let index: LinearIndex<Point<1>> = [1.0, 2.0].into_iter().map(|x| Point::new([x])).collect();
/// let mut sum = 0.0;
/// for_each_point(&index, |_, point| sum += point.coordinates()[0]);
/// assert!((sum - 3.0_f64).abs() < f64::EPSILON);
/// ```
pub fn for_each_point<const D: usize, I, F>(index: &I, mut visit: F)
where
    I: SpatialIndex<D>,
    F: FnMut(PointHandle, &I::Point),
{
    for handle in index.handles() {
        if let Some(point) = index.get(handle) {
            visit(handle, point);
        }
    }
}
