//! Fixture types for the DBSCAN property suites.

use crate::{LinearIndex, Point};

/// Shape of a generated point cloud.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Layout {
    /// A few dense Gaussian-ish blobs with sparse outliers.
    Blobs,
    /// Points spread uniformly over a square.
    Uniform,
    /// Integer lattice points, many at exactly `eps` from each other.
    Lattice,
    /// Few distinct locations, each repeated several times.
    Duplicates,
}

/// Input for one property case.
#[derive(Clone, Debug)]
pub(super) struct DbscanFixture {
    /// Generated coordinates, in insertion order.
    pub points: Vec<[f64; 2]>,
    /// Neighbourhood radius.
    pub eps: f64,
    /// Minimum neighbourhood size.
    pub min_pts: usize,
    /// Layout the points were drawn from.
    pub layout: Layout,
}

impl DbscanFixture {
    /// Builds a fresh reference index over the fixture's points.
    pub(super) fn index(&self) -> LinearIndex<Point<2>> {
        self.points.iter().copied().map(Point::new).collect()
    }
}
