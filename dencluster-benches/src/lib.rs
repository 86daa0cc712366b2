//! Benchmark support crate for dencluster.
//!
//! Provides seeded synthetic point clouds and parameter types used by the
//! Criterion benchmarks for DBSCAN and the k-distance estimator.

pub mod error;
pub mod params;
pub mod source;
