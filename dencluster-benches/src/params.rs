//! Benchmark parameter types.

use std::fmt;

use dencluster_core::QueryStrategy;

/// Parameters for a DBSCAN benchmark run.
#[derive(Clone, Debug)]
pub struct DbscanBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Neighbourhood query strategy under test.
    pub strategy: QueryStrategy,
}

impl fmt::Display for DbscanBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{:?}", self.point_count, self.strategy)
    }
}

/// Parameters for a k-distance benchmark run.
#[derive(Clone, Debug)]
pub struct KDistanceBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Neighbour rank measured for every point.
    pub k: usize,
}

impl fmt::Display for KDistanceBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.k)
    }
}
