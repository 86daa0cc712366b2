//! Synthetic point clouds for benchmarking.
//!
//! Provides [`BlobConfig`], which generates a [`LinearIndex`] of planar
//! points scattered around seeded blob centres. Generation is seeded for
//! reproducibility across benchmark runs.

use dencluster_core::{LinearIndex, Point};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Side length of the square the blob centres are drawn from.
const EXTENT: f64 = 100.0;

/// Errors that may occur during synthetic point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested blob count was zero.
    #[error("blob count must be greater than zero")]
    ZeroBlobs,
    /// The blob spread was not a finite positive number.
    #[error("blob spread must be finite and greater than zero (got {spread})")]
    InvalidSpread {
        /// The rejected spread.
        spread: f64,
    },
}

/// Configuration for synthetic blob generation.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Number of blob centres the points are shared between.
    pub blobs: usize,
    /// Half-width of the square each blob scatters its points over.
    pub spread: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl BlobConfig {
    /// Generates the blobs eagerly into a fresh index.
    ///
    /// Points are dealt to the blob centres in turn, so blob sizes differ by
    /// at most one.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroPoints`] if `point_count` is zero,
    /// [`SyntheticError::ZeroBlobs`] if `blobs` is zero, or
    /// [`SyntheticError::InvalidSpread`] if `spread` is not finite and
    /// positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use dencluster_benches::source::BlobConfig;
    /// use dencluster_core::SpatialIndex;
    ///
    /// let config = BlobConfig { point_count: 10, blobs: 2, spread: 1.0, seed: 42 };
    /// let index = config.generate().expect("valid config");
    /// assert_eq!(index.len(), 10);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "points are offset from their blob centre"
    )]
    pub fn generate(&self) -> Result<LinearIndex<Point<2>>, SyntheticError> {
        if self.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if self.blobs == 0 {
            return Err(SyntheticError::ZeroBlobs);
        }
        if !(self.spread.is_finite() && self.spread > 0.0) {
            return Err(SyntheticError::InvalidSpread {
                spread: self.spread,
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let centres: Vec<[f64; 2]> = (0..self.blobs)
            .map(|_| [rng.gen_range(0.0..EXTENT), rng.gen_range(0.0..EXTENT)])
            .collect();

        let mut index = LinearIndex::with_capacity(self.point_count);
        index.extend(
            centres
                .iter()
                .cycle()
                .take(self.point_count)
                .map(|&[x, y]| {
                    Point::new([
                        x + rng.gen_range(-self.spread..self.spread),
                        y + rng.gen_range(-self.spread..self.spread),
                    ])
                }),
        );
        Ok(index)
    }
}
