use core::cmp::Ordering;

use crate::{
    distance::euclidean_distance,
    error::IndexError,
    index::{PointHandle, SpatialIndex},
    label::ClusterLabel,
    point::{Labelled, Spatial},
};

/// Brute-force [`SpatialIndex`] backed by a `Vec`.
///
/// Handles are insertion positions. Every query scans all records, which
/// keeps the implementation obviously correct and makes it the reference
/// other indices are checked against.
///
/// # Examples
/// ```
/// use dencluster_core::{LinearIndex, Point, SpatialIndex};
///
/// let index: LinearIndex<Point<1>> = [0.0, 1.0, 3.0]
///     .into_iter()
///     .map(|x| Point::new([x]))
///     .collect();
/// assert_eq!(index.len(), 3);
/// assert_eq!(index.name(), "linear");
/// ```
#[derive(Clone, Debug)]
pub struct LinearIndex<R> {
    name: String,
    points: Vec<R>,
}

impl<R> LinearIndex<R> {
    /// Creates an empty index named `linear`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("linear")
    }

    /// Creates an empty index with a custom diagnostic name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Creates an empty index with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Iterates over every record together with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (PointHandle, &R)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(slot, point)| (PointHandle::new(slot), point))
    }

    /// Returns the stored records in handle order.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.points
    }

    /// Consumes the index and returns the records in handle order.
    #[must_use]
    pub fn into_points(self) -> Vec<R> {
        self.points
    }
}

impl<R> Default for LinearIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FromIterator<R> for LinearIndex<R> {
    fn from_iter<It: IntoIterator<Item = R>>(iter: It) -> Self {
        Self {
            points: iter.into_iter().collect(),
            ..Self::new()
        }
    }
}

impl<R> Extend<R> for LinearIndex<R> {
    fn extend<It: IntoIterator<Item = R>>(&mut self, iter: It) {
        self.points.extend(iter);
    }
}

impl<const D: usize, R> SpatialIndex<D> for LinearIndex<R>
where
    R: Spatial<D> + Labelled,
{
    type Point = R;

    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, point: R) -> PointHandle {
        let handle = PointHandle::new(self.points.len());
        self.points.push(point);
        handle
    }

    fn get(&self, handle: PointHandle) -> Option<&R> {
        self.points.get(handle.get())
    }

    fn set_label(
        &mut self,
        handle: PointHandle,
        label: ClusterLabel<R::Width>,
    ) -> Result<(), IndexError> {
        let point = self
            .points
            .get_mut(handle.get())
            .ok_or(IndexError::UnknownHandle { handle })?;
        point.set_label(label);
        Ok(())
    }

    fn handles(&self) -> impl Iterator<Item = PointHandle> + '_ {
        (0..self.points.len()).map(PointHandle::new)
    }

    fn query_within_box(
        &self,
        min: [R::Scalar; D],
        max: [R::Scalar; D],
    ) -> impl Iterator<Item = PointHandle> + '_ {
        self.iter().filter_map(move |(handle, point)| {
            let inside = point
                .coordinates()
                .iter()
                .zip(min.iter().zip(&max))
                .all(|(value, (low, high))| low <= value && value <= high);
            inside.then_some(handle)
        })
    }

    fn query_nearest(
        &self,
        origin: [R::Scalar; D],
        count: usize,
    ) -> impl Iterator<Item = PointHandle> + '_ {
        let mut ranked: Vec<_> = self
            .iter()
            .map(|(handle, point)| {
                (euclidean_distance(&origin, point.coordinates()), handle)
            })
            .collect();
        ranked.sort_by(|(left, left_handle), (right, right_handle)| {
            left.partial_cmp(right)
                .unwrap_or(Ordering::Equal)
                .then(left_handle.cmp(right_handle))
        });
        ranked.truncate(count);
        ranked.into_iter().map(|(_, handle)| handle)
    }
}
