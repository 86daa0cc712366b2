//! Shared test utilities for `dencluster-core`.

use std::iter;

use dencluster_test_support::ci::proptest_profile::ProptestProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{
    error::IndexError,
    index::{PointHandle, SpatialIndex},
    label::ClusterLabel,
    point::{Labelled, Spatial},
};

/// Builds a proptest configuration honouring the CI overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestProfile::from_env(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// How [`TamperedIndex`] corrupts query results.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SelfTampering {
    /// Queries return nothing.
    Drop,
    /// Queries return every handle twice.
    Duplicate,
}

/// Wraps an index and corrupts its query answers so self-inclusion checks
/// can be exercised.
pub(crate) struct TamperedIndex<I> {
    inner: I,
    tampering: SelfTampering,
}

impl<I> TamperedIndex<I> {
    pub(crate) fn new(inner: I, tampering: SelfTampering) -> Self {
        Self { inner, tampering }
    }

    fn copies(&self) -> usize {
        match self.tampering {
            SelfTampering::Drop => 0,
            SelfTampering::Duplicate => 2,
        }
    }
}

impl<const D: usize, I: SpatialIndex<D>> SpatialIndex<D> for TamperedIndex<I> {
    type Point = I::Point;

    fn name(&self) -> &str {
        "tampered"
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn insert(&mut self, point: I::Point) -> PointHandle {
        self.inner.insert(point)
    }

    fn get(&self, handle: PointHandle) -> Option<&I::Point> {
        self.inner.get(handle)
    }

    fn set_label(
        &mut self,
        handle: PointHandle,
        label: ClusterLabel<<I::Point as Labelled>::Width>,
    ) -> Result<(), IndexError> {
        self.inner.set_label(handle, label)
    }

    fn handles(&self) -> impl Iterator<Item = PointHandle> + '_ {
        self.inner.handles()
    }

    fn query_within_box(
        &self,
        min: [<I::Point as Spatial<D>>::Scalar; D],
        max: [<I::Point as Spatial<D>>::Scalar; D],
    ) -> impl Iterator<Item = PointHandle> + '_ {
        let copies = self.copies();
        self.inner
            .query_within_box(min, max)
            .flat_map(move |handle| iter::repeat_n(handle, copies))
    }

    fn query_nearest(
        &self,
        origin: [<I::Point as Spatial<D>>::Scalar; D],
        count: usize,
    ) -> impl Iterator<Item = PointHandle> + '_ {
        let copies = self.copies();
        self.inner
            .query_nearest(origin, count)
            .flat_map(move |handle| iter::repeat_n(handle, copies))
    }
}
