//! Point records and the traits the engine reaches them through.
//!
//! The engine never inspects a concrete record type. It reads coordinates
//! through [`Spatial`] and reads or writes the cluster label through
//! [`Labelled`]; [`Point`] is the generic record shipped with the crate.

use core::fmt;

use num_traits::Float;

use crate::{
    error::PointError,
    label::{ClusterLabel, LabelWidth},
};

/// A record with a location in `D`-dimensional Euclidean space.
pub trait Spatial<const D: usize> {
    /// Coordinate scalar.
    type Scalar: Float + fmt::Debug;

    /// Returns the coordinates used for distance computations.
    fn coordinates(&self) -> &[Self::Scalar; D];

    /// Returns the corners of the axis-aligned box bounding the sphere of
    /// radius `half_edge` centred on this record.
    ///
    /// # Examples
    /// ```
    /// use dencluster_core::{Point, Spatial};
    ///
    /// let point = Point::<2>::new([1.0, -1.0]);
    /// let (min, max) = point.bounding_corners(0.5);
    /// assert_eq!(min, [0.5, -1.5]);
    /// assert_eq!(max, [1.5, -0.5]);
    /// ```
    fn bounding_corners(
        &self,
        half_edge: Self::Scalar,
    ) -> ([Self::Scalar; D], [Self::Scalar; D]) {
        let centre = self.coordinates();
        (
            centre.map(|axis| axis - half_edge),
            centre.map(|axis| axis + half_edge),
        )
    }
}

/// A record carrying a mutable [`ClusterLabel`].
pub trait Labelled {
    /// Raw label storage.
    type Width: LabelWidth;

    /// Returns the current label.
    fn label(&self) -> ClusterLabel<Self::Width>;

    /// Replaces the current label.
    fn set_label(&mut self, label: ClusterLabel<Self::Width>);
}

/// Generic point record.
///
/// - `D`: spatial dimension.
/// - `S`: coordinate scalar.
/// - `A`/`T`: count and scalar of the uninterpreted attribute array.
/// - `L`: label width.
/// - `P`: opaque payload, moved with the record and never inspected.
///
/// Equality compares coordinates only.
///
/// # Examples
/// ```
/// use dencluster_core::{ClusterLabel, Labelled, Point, Spatial};
///
/// let point = Point::<3>::new([0.0, 1.0, 2.0])
///     .with_attributes([7_u8, 9])
///     .with_payload("station-12");
///
/// assert_eq!(point.coordinates(), &[0.0, 1.0, 2.0]);
/// assert_eq!(point.attributes(), &[7, 9]);
/// assert_eq!(*point.payload(), "station-12");
/// assert!(point.label().is_unclassified());
/// ```
#[derive(Clone, Debug)]
pub struct Point<const D: usize, S = f64, const A: usize = 0, T = S, L: LabelWidth = u32, P = ()> {
    coordinates: [S; D],
    attributes: [T; A],
    label: ClusterLabel<L>,
    payload: P,
}

impl<const D: usize, S, const A: usize, T, L> Point<D, S, A, T, L, ()>
where
    S: Float,
    T: Default,
    L: LabelWidth,
{
    /// Creates an unclassified record with default attributes and no payload.
    #[must_use]
    pub fn new(coordinates: [S; D]) -> Self {
        Self {
            coordinates,
            attributes: core::array::from_fn(|_| T::default()),
            label: ClusterLabel::default(),
            payload: (),
        }
    }

    /// Creates a record after checking that every coordinate is finite.
    ///
    /// # Errors
    /// Returns [`PointError::NonFinite`] naming the first NaN or infinite axis.
    ///
    /// # Examples
    /// ```
    /// use dencluster_core::{Point, PointError};
    ///
    /// assert!(Point::<2>::try_new([0.0, 1.0]).is_ok());
    /// assert_eq!(
    ///     Point::<2>::try_new([0.0, f64::NAN]).err(),
    ///     Some(PointError::NonFinite { axis: 1 }),
    /// );
    /// ```
    pub fn try_new(coordinates: [S; D]) -> Result<Self, PointError> {
        if let Some(axis) = coordinates.iter().position(|value| !value.is_finite()) {
            return Err(PointError::NonFinite { axis });
        }
        Ok(Self::new(coordinates))
    }
}

impl<const D: usize, S, const A: usize, T, L, P> Point<D, S, A, T, L, P>
where
    L: LabelWidth,
{
    /// Replaces the attribute array, changing its length and scalar if needed.
    #[must_use]
    pub fn with_attributes<const B: usize, U>(self, attributes: [U; B]) -> Point<D, S, B, U, L, P> {
        Point {
            coordinates: self.coordinates,
            attributes,
            label: self.label,
            payload: self.payload,
        }
    }

    /// Attaches a payload, replacing any previous one.
    #[must_use]
    pub fn with_payload<Q>(self, payload: Q) -> Point<D, S, A, T, L, Q> {
        Point {
            coordinates: self.coordinates,
            attributes: self.attributes,
            label: self.label,
            payload,
        }
    }

    /// Reinterprets the label storage with another width.
    ///
    /// The label is reset to unclassified.
    #[must_use]
    pub fn with_label_width<M: LabelWidth>(self) -> Point<D, S, A, T, M, P> {
        Point {
            coordinates: self.coordinates,
            attributes: self.attributes,
            label: ClusterLabel::default(),
            payload: self.payload,
        }
    }

    /// Returns the attribute array.
    #[must_use]
    #[rustfmt::skip]
    pub fn attributes(&self) -> &[T; A] { &self.attributes }

    /// Returns the payload.
    #[must_use]
    #[rustfmt::skip]
    pub fn payload(&self) -> &P { &self.payload }

    /// Returns the payload mutably.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Consumes the record and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<const D: usize, S, const A: usize, T, L, P> Spatial<D> for Point<D, S, A, T, L, P>
where
    S: Float + fmt::Debug,
    L: LabelWidth,
{
    type Scalar = S;

    fn coordinates(&self) -> &[S; D] {
        &self.coordinates
    }
}

impl<const D: usize, S, const A: usize, T, L, P> Labelled for Point<D, S, A, T, L, P>
where
    L: LabelWidth,
{
    type Width = L;

    fn label(&self) -> ClusterLabel<L> {
        self.label
    }

    fn set_label(&mut self, label: ClusterLabel<L>) {
        self.label = label;
    }
}

impl<const D: usize, S, const A: usize, T, L, P> PartialEq for Point<D, S, A, T, L, P>
where
    S: PartialEq,
    L: LabelWidth,
{
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}
