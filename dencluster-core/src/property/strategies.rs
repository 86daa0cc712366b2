//! Point-cloud generators for the DBSCAN property suites.
//!
//! Each generator is driven by a seeded [`SmallRng`] so that a failing case
//! can be replayed from its seed alone.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::types::{DbscanFixture, Layout};

const MIN_POINTS: usize = 1;
const MAX_POINTS: usize = 60;
const SIDE: f64 = 20.0;

/// Generates fixtures across every [`Layout`].
pub(super) fn fixture_strategy() -> impl Strategy<Value = DbscanFixture> {
    let layout = prop_oneof![
        3 => Just(Layout::Blobs),
        2 => Just(Layout::Uniform),
        2 => Just(Layout::Lattice),
        1 => Just(Layout::Duplicates),
    ];
    (layout, any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

/// Generates a fixture for an explicit layout.
pub(super) fn generate_fixture(layout: Layout, rng: &mut SmallRng) -> DbscanFixture {
    let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let points = match layout {
        Layout::Blobs => blobs(rng, count),
        Layout::Uniform => (0..count).map(|_| uniform(rng)).collect(),
        Layout::Lattice => (0..count)
            .map(|_| {
                [
                    f64::from(rng.gen_range(0_u8..8)),
                    f64::from(rng.gen_range(0_u8..8)),
                ]
            })
            .collect(),
        Layout::Duplicates => {
            let sites: Vec<[f64; 2]> = (0..rng.gen_range(1..=4)).map(|_| uniform(rng)).collect();
            (0..count)
                .filter_map(|_| sites.get(rng.gen_range(0..sites.len())).copied())
                .collect()
        }
    };
    let eps = match layout {
        Layout::Lattice => f64::from(rng.gen_range(1_u8..=3)),
        _ => rng.gen_range(0.3..3.0),
    };
    DbscanFixture {
        points,
        eps,
        min_pts: rng.gen_range(1..=6),
        layout,
    }
}

fn uniform(rng: &mut SmallRng) -> [f64; 2] {
    [rng.gen_range(0.0..SIDE), rng.gen_range(0.0..SIDE)]
}

#[expect(
    clippy::float_arithmetic,
    reason = "points are offset from their blob centre"
)]
fn blobs(rng: &mut SmallRng, count: usize) -> Vec<[f64; 2]> {
    let centres: Vec<[f64; 2]> = (0..rng.gen_range(1..=4)).map(|_| uniform(rng)).collect();
    (0..count)
        .map(|_| {
            if rng.gen_bool(0.1) {
                return uniform(rng);
            }
            let [x, y] = centres
                .get(rng.gen_range(0..centres.len()))
                .copied()
                .unwrap_or([0.0, 0.0]);
            [x + rng.gen_range(-1.0..1.0), y + rng.gen_range(-1.0..1.0)]
        })
        .collect()
}
