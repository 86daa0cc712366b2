//! Spatial index abstraction consumed by the clustering engine.

mod linear;

use core::fmt;

use crate::{
    error::IndexError,
    label::ClusterLabel,
    point::{Labelled, Spatial},
};

pub use self::linear::LinearIndex;

/// Opaque identifier of a record held by a [`SpatialIndex`].
///
/// Handles are only meaningful for the index that issued them.
///
/// # Examples
/// ```
/// use dencluster_core::PointHandle;
///
/// let handle = PointHandle::new(3);
/// assert_eq!(handle.get(), 3);
/// assert_eq!(handle.to_string(), "#3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointHandle(usize);

impl PointHandle {
    /// Wraps a raw slot number.
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw slot number.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for PointHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Label type of the records stored in `I`.
pub type LabelOf<I, const D: usize> =
    ClusterLabel<<<I as SpatialIndex<D>>::Point as Labelled>::Width>;

/// Coordinate scalar of the records stored in `I`.
pub type ScalarOf<I, const D: usize> = <<I as SpatialIndex<D>>::Point as Spatial<D>>::Scalar;

/// A collection of records that answers box and nearest-neighbour queries.
///
/// Query methods borrow the index immutably, so callers that intend to
/// relabel records must finish consuming the iterator first.
///
/// # Examples
/// ```
/// use dencluster_core::{LinearIndex, Point, SpatialIndex};
///
/// let mut index = LinearIndex::new();
/// let a = index.insert(Point::<2>::new([0.0, 0.0]));
/// let b = index.insert(Point::<2>::new([5.0, 0.0]));
///
/// let nearest: Vec<_> = index.query_nearest([4.0, 0.0], 1).collect();
/// assert_eq!(nearest, [b]);
///
/// let boxed: Vec<_> = index.query_within_box([-1.0, -1.0], [1.0, 1.0]).collect();
/// assert_eq!(boxed, [a]);
/// ```
pub trait SpatialIndex<const D: usize> {
    /// Record type stored by the index.
    type Point: Spatial<D> + Labelled;

    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the number of stored records.
    fn len(&self) -> usize;

    /// Returns whether the index holds no records.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `point` and returns its handle.
    fn insert(&mut self, point: Self::Point) -> PointHandle;

    /// Returns the record behind `handle`.
    fn get(&self, handle: PointHandle) -> Option<&Self::Point>;

    /// Returns the label of the record behind `handle`.
    fn label(&self, handle: PointHandle) -> Option<ClusterLabel<<Self::Point as Labelled>::Width>> {
        self.get(handle).map(Labelled::label)
    }

    /// Overwrites the label of the record behind `handle`.
    ///
    /// # Errors
    /// Returns [`IndexError::UnknownHandle`] when `handle` was not issued by
    /// this index.
    fn set_label(
        &mut self,
        handle: PointHandle,
        label: ClusterLabel<<Self::Point as Labelled>::Width>,
    ) -> Result<(), IndexError>;

    /// Yields every handle in an order that is stable between mutations.
    fn handles(&self) -> impl Iterator<Item = PointHandle> + '_;

    /// Yields the handles of records inside the inclusive box `[min, max]`.
    fn query_within_box(
        &self,
        min: [<Self::Point as Spatial<D>>::Scalar; D],
        max: [<Self::Point as Spatial<D>>::Scalar; D],
    ) -> impl Iterator<Item = PointHandle> + '_;

    /// Yields at most `count` handles in ascending distance from `origin`.
    fn query_nearest(
        &self,
        origin: [<Self::Point as Spatial<D>>::Scalar; D],
        count: usize,
    ) -> impl Iterator<Item = PointHandle> + '_;
}
