//! Benchmark setup error type.

use crate::source::SyntheticError;
use dencluster_core::ClusteringError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// DBSCAN configuration or a warm-up run failed.
    #[error("clustering failed: {0}")]
    Clustering(#[from] ClusteringError),
}
