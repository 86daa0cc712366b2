//! Property runners checked against brute-force oracles.
//!
//! Every runner receives a [`DbscanFixture`] and returns a
//! [`TestCaseResult`] so the same checks serve both proptest and the seeded
//! rstest cases.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    ClusterLabel, LabelCounts, LinearIndex, Point, QueryStrategy, Spatial, SpatialIndex, cluster,
    euclidean_distance, neighborhood, sorted_k_distances,
};

use super::types::DbscanFixture;

const STRATEGIES: [QueryStrategy; 2] = [QueryStrategy::NearestExpanding, QueryStrategy::BoxBounded];

fn clustered(
    fixture: &DbscanFixture,
    strategy: QueryStrategy,
) -> Result<LinearIndex<Point<2>>, TestCaseError> {
    let mut index = fixture.index();
    cluster(&mut index, fixture.eps, fixture.min_pts, strategy).map_err(|error| {
        TestCaseError::fail(format!(
            "clustering failed: {error} (layout={:?}, points={}, eps={}, min_pts={})",
            fixture.layout,
            fixture.points.len(),
            fixture.eps,
            fixture.min_pts,
        ))
    })?;
    Ok(index)
}

fn labels(index: &LinearIndex<Point<2>>) -> Vec<ClusterLabel> {
    SpatialIndex::<2>::handles(index)
        .filter_map(|handle| index.label(handle))
        .collect()
}

fn oracle_neighbours(fixture: &DbscanFixture, origin: &[f64; 2]) -> Vec<usize> {
    fixture
        .points
        .iter()
        .enumerate()
        .filter(|(_, other)| euclidean_distance(origin, other) < fixture.eps)
        .map(|(slot, _)| slot)
        .collect()
}

fn oracle_cores(fixture: &DbscanFixture) -> Vec<bool> {
    fixture
        .points
        .iter()
        .map(|point| oracle_neighbours(fixture, point).len() >= fixture.min_pts)
        .collect()
}

/// Every point ends up in a cluster or as noise, and cluster ids are
/// contiguous from zero.
pub(super) fn run_completeness_property(fixture: &DbscanFixture) -> TestCaseResult {
    for strategy in STRATEGIES {
        let index = clustered(fixture, strategy)?;
        let counts = LabelCounts::from_index(&index);
        if counts.unclassified_count() != 0 {
            return Err(TestCaseError::fail(format!(
                "{} points left unclassified with {strategy:?}",
                counts.unclassified_count()
            )));
        }
        if counts.total() != fixture.points.len() {
            return Err(TestCaseError::fail("label count does not match point count"));
        }
        let regular = counts.iter().filter(|(label, _)| label.is_regular());
        for (expected, (label, _)) in regular.enumerate() {
            if usize::try_from(label.raw()).ok() != Some(expected) {
                return Err(TestCaseError::fail(format!(
                    "cluster ids are not contiguous: found {label} at position {expected}"
                )));
            }
        }
    }
    Ok(())
}

/// Clustering the same index twice yields identical labels.
pub(super) fn run_idempotence_property(fixture: &DbscanFixture) -> TestCaseResult {
    let mut index = clustered(fixture, QueryStrategy::default())?;
    let first = labels(&index);
    cluster(&mut index, fixture.eps, fixture.min_pts, QueryStrategy::default())
        .map_err(|error| TestCaseError::fail(format!("second run failed: {error}")))?;
    prop_assert_labels_eq(&first, &labels(&index), "second run changed labels")
}

/// Clusters are anchored on core points: each cluster has a core member,
/// core points are never noise, neighbouring core points share a cluster,
/// and no noise point lies within `eps` of a core point.
pub(super) fn run_density_witness_property(fixture: &DbscanFixture) -> TestCaseResult {
    let index = clustered(fixture, QueryStrategy::default())?;
    let assigned = labels(&index);
    let cores = oracle_cores(fixture);

    let counts = LabelCounts::from_labels(assigned.iter().copied());
    for (label, _) in counts.iter().filter(|(label, _)| label.is_regular()) {
        let witnessed = assigned
            .iter()
            .zip(&cores)
            .any(|(assigned, core)| *assigned == label && *core);
        if !witnessed {
            return Err(TestCaseError::fail(format!("cluster {label} has no core member")));
        }
    }

    for (slot, point) in fixture.points.iter().enumerate() {
        let (Some(label), Some(core)) = (assigned.get(slot), cores.get(slot)) else {
            return Err(TestCaseError::fail(format!("point {slot} is missing a label")));
        };
        for neighbour in oracle_neighbours(fixture, point) {
            let (Some(other_label), Some(other_core)) =
                (assigned.get(neighbour), cores.get(neighbour))
            else {
                return Err(TestCaseError::fail(format!(
                    "point {neighbour} is missing a label"
                )));
            };
            if *core && label.is_noise() {
                return Err(TestCaseError::fail(format!("core point {slot} was labelled noise")));
            }
            if *core && *other_core && label != other_label {
                return Err(TestCaseError::fail(format!(
                    "core points {slot} and {neighbour} are within eps but labelled \
                     {label} and {other_label}"
                )));
            }
            if *core && other_label.is_noise() {
                return Err(TestCaseError::fail(format!(
                    "noise point {neighbour} lies within eps of core point {slot}"
                )));
            }
        }
    }
    Ok(())
}

/// Both query strategies assign exactly the same labels.
pub(super) fn run_strategy_equivalence_property(fixture: &DbscanFixture) -> TestCaseResult {
    let nearest = clustered(fixture, QueryStrategy::NearestExpanding)?;
    let boxed = clustered(fixture, QueryStrategy::BoxBounded)?;
    prop_assert_labels_eq(&labels(&nearest), &labels(&boxed), "strategies disagree")
}

/// Every neighbourhood contains its origin and matches the brute-force set.
pub(super) fn run_neighbourhood_oracle_property(fixture: &DbscanFixture) -> TestCaseResult {
    let index = fixture.index();
    for (handle, point) in index.iter() {
        let mut expected = oracle_neighbours(fixture, point.coordinates());
        expected.sort_unstable();
        for strategy in STRATEGIES {
            let hood = neighborhood(&index, handle, fixture.eps, strategy)
                .map_err(|error| TestCaseError::fail(format!("query failed: {error}")))?;
            if !hood.contains(handle) {
                return Err(TestCaseError::fail(format!(
                    "{handle} missing from its own neighbourhood"
                )));
            }
            let mut got: Vec<usize> = hood.members().iter().map(|member| member.get()).collect();
            got.sort_unstable();
            if got != expected {
                return Err(TestCaseError::fail(format!(
                    "{strategy:?} neighbourhood of {handle} was {got:?}, expected {expected:?}"
                )));
            }
        }
    }
    Ok(())
}

/// The k-distance graph is sorted descending and matches brute force.
#[expect(
    clippy::float_arithmetic,
    reason = "oracle distances are compared within a tolerance"
)]
pub(super) fn run_k_distance_property(fixture: &DbscanFixture) -> TestCaseResult {
    let index = fixture.index();
    let points = fixture.points.len();
    for k in 1..points.min(4) {
        let got = sorted_k_distances(&index, k)
            .map_err(|error| TestCaseError::fail(format!("k = {k} failed: {error}")))?;
        if got.windows(2).any(|pair| matches!(pair, [a, b] if a < b)) {
            return Err(TestCaseError::fail(format!("k = {k} distances are not descending")));
        }

        let mut expected: Vec<f64> = fixture
            .points
            .iter()
            .filter_map(|origin| {
                let mut distances: Vec<f64> = fixture
                    .points
                    .iter()
                    .map(|other| euclidean_distance(origin, other))
                    .collect();
                distances.sort_by(f64::total_cmp);
                distances.get(k).copied()
            })
            .collect();
        expected.sort_by(|a, b| b.total_cmp(a));
        let matches = got.len() == expected.len()
            && got.iter().zip(&expected).all(|(a, b)| (a - b).abs() < 1e-9);
        if !matches {
            return Err(TestCaseError::fail(format!(
                "k = {k}: got {got:?}, expected {expected:?}"
            )));
        }
    }
    Ok(())
}

fn prop_assert_labels_eq(
    left: &[ClusterLabel],
    right: &[ClusterLabel],
    context: &str,
) -> TestCaseResult {
    if left == right {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!("{context}: {left:?} vs {right:?}")))
    }
}
