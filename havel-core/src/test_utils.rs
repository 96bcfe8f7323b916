//! Shared test utilities for `havel-core`.

use havel_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::{Rng, rngs::SmallRng};

use crate::{degree::DegreeSequence, graph::RealizedGraph, realize::realize};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `HAVEL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Draws a random simple graph and returns its degree sequence, which is
/// therefore graphic.
pub(crate) fn graphic_sequence(rng: &mut SmallRng, vertices: usize, edge_probability: f64) -> DegreeSequence {
    let mut degrees = vec![0; vertices];
    for u in 0..vertices {
        for v in (u + 1)..vertices {
            if rng.gen_bool(edge_probability) {
                degrees[u] += 1;
                degrees[v] += 1;
            }
        }
    }
    DegreeSequence::new(degrees).expect("vertex count must be positive")
}

/// Realizes a degree sequence that the test knows to be graphic.
pub(crate) fn realized(degrees: &[usize]) -> RealizedGraph {
    let sequence = DegreeSequence::new(degrees.to_vec()).expect("non-empty sequence");
    realize(&sequence).expect("test sequence must be graphic")
}
