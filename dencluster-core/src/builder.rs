//! Builder utilities for configuring the DBSCAN engine.
//!
//! Holds raw, unvalidated settings and turns them into a [`Dbscan`] once
//! [`DbscanBuilder::build`] accepts them.

use std::{fmt, num::NonZeroUsize};

use num_traits::Float;

use crate::{Result, dbscan::Dbscan, error::ClusteringError, neighbors::QueryStrategy};

/// Default neighbourhood size for `D`-dimensional data.
///
/// Follows the common `MinPts = 2 * D` rule of thumb, never dropping below one.
#[must_use]
pub const fn default_min_pts<const D: usize>() -> usize {
    let twice = D.saturating_mul(2);
    if twice == 0 { 1 } else { twice }
}

/// Configures and constructs [`Dbscan`] instances.
///
/// # Examples
/// ```
/// use dencluster_core::{DbscanBuilder, QueryStrategy};
///
/// let dbscan = DbscanBuilder::<2>::new(0.5)
///     .with_min_pts(3)
///     .with_strategy(QueryStrategy::NearestExpanding)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(dbscan.min_pts().get(), 3);
/// assert_eq!(dbscan.strategy(), QueryStrategy::NearestExpanding);
/// ```
#[derive(Debug, Clone)]
pub struct DbscanBuilder<const D: usize, S = f64> {
    eps: S,
    min_pts: usize,
    strategy: QueryStrategy,
}

impl<const D: usize, S: Float + fmt::Debug> DbscanBuilder<D, S> {
    /// Creates a builder with radius `eps` and default settings otherwise.
    ///
    /// # Examples
    /// ```
    /// use dencluster_core::{DbscanBuilder, QueryStrategy};
    ///
    /// let builder = DbscanBuilder::<3>::new(1.0);
    /// assert_eq!(builder.min_pts(), 6);
    /// assert_eq!(builder.strategy(), QueryStrategy::BoxBounded);
    /// ```
    #[must_use]
    pub fn new(eps: S) -> Self {
        Self {
            eps,
            min_pts: default_min_pts::<D>(),
            strategy: QueryStrategy::default(),
        }
    }

    /// Overrides the neighbourhood radius.
    #[must_use]
    pub fn with_eps(mut self, eps: S) -> Self {
        self.eps = eps;
        self
    }

    /// Returns the configured neighbourhood radius.
    #[must_use]
    pub fn eps(&self) -> S {
        self.eps
    }

    /// Overrides the minimum neighbourhood size, the query point included.
    ///
    /// # Examples
    /// ```
    /// use dencluster_core::DbscanBuilder;
    ///
    /// let builder = DbscanBuilder::<2>::new(1.0).with_min_pts(10);
    /// assert_eq!(builder.min_pts(), 10);
    /// ```
    #[must_use]
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Returns the configured minimum neighbourhood size.
    #[must_use]
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Selects how neighbourhoods are queried.
    #[must_use]
    pub fn with_strategy(mut self, strategy: QueryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured query strategy.
    #[must_use]
    pub fn strategy(&self) -> QueryStrategy {
        self.strategy
    }

    /// Validates the configuration and constructs a [`Dbscan`] instance.
    ///
    /// # Errors
    /// - [`ClusteringError::InvalidEps`] when `eps` is not finite or not
    ///   strictly positive.
    /// - [`ClusteringError::InvalidMinPts`] when `min_pts` is zero.
    ///
    /// # Examples
    /// ```
    /// use dencluster_core::{ClusteringErrorCode, DbscanBuilder};
    ///
    /// let error = DbscanBuilder::<2>::new(-1.0).build().expect_err("negative eps");
    /// assert_eq!(error.code(), ClusteringErrorCode::InvalidEps);
    /// ```
    pub fn build(self) -> Result<Dbscan<D, S>> {
        if !(self.eps.is_finite() && self.eps > S::zero()) {
            return Err(ClusteringError::InvalidEps {
                eps: self.eps.to_f64().unwrap_or(f64::NAN),
            });
        }
        let min_pts = NonZeroUsize::new(self.min_pts)
            .ok_or(ClusteringError::InvalidMinPts { got: self.min_pts })?;

        Ok(Dbscan::new(self.eps, min_pts, self.strategy))
    }
}
