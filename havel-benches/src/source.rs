//! Seeded degree-sequence generators.
//!
//! Every generator derives degrees from a graph it builds on the fly, so the
//! returned sequences are graphic and realization never fails inside a
//! benchmark loop.

use havel_core::DegreeSequence;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`random_sequence`].
#[derive(Clone, Debug)]
pub struct RandomSequenceConfig {
    /// Number of vertices.
    pub vertices: usize,
    /// Probability, in percent, that any vertex pair is joined.
    pub edge_percent: u32,
    /// RNG seed.
    pub seed: u64,
}

/// Degrees of an Erdős–Rényi graph drawn with the configured seed.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for zero vertices and
/// [`BenchSetupError::PercentOutOfRange`] for percentages above 100.
///
/// # Examples
/// ```
/// use havel_benches::source::{RandomSequenceConfig, random_sequence};
///
/// let config = RandomSequenceConfig { vertices: 16, edge_percent: 25, seed: 7 };
/// let sequence = random_sequence(&config)?;
/// assert!(sequence.is_graphic());
/// # Ok::<(), havel_benches::error::BenchSetupError>(())
/// ```
pub fn random_sequence(config: &RandomSequenceConfig) -> Result<DegreeSequence, BenchSetupError> {
    if config.vertices == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertices",
        });
    }
    if config.edge_percent > 100 {
        return Err(BenchSetupError::PercentOutOfRange {
            got: config.edge_percent,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut degrees = vec![0_usize; config.vertices];
    for u in 0..config.vertices {
        for v in (u + 1)..config.vertices {
            if rng.gen_ratio(config.edge_percent, 100) {
                bump(&mut degrees, u);
                bump(&mut degrees, v);
            }
        }
    }
    Ok(DegreeSequence::new(degrees)?)
}

/// Degrees of the circulant graph joining each vertex to its `degree / 2`
/// nearest neighbours on either side.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for zero vertices and
/// [`BenchSetupError::UnrealizableCirculant`] when `degree` is odd or not
/// below `vertices`.
pub fn circulant_sequence(
    vertices: usize,
    degree: usize,
) -> Result<DegreeSequence, BenchSetupError> {
    if vertices == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertices",
        });
    }
    if degree % 2 != 0 || degree >= vertices {
        return Err(BenchSetupError::UnrealizableCirculant { degree, vertices });
    }
    Ok(DegreeSequence::new(vec![degree; vertices])?)
}

fn bump(degrees: &mut [usize], vertex: usize) {
    if let Some(degree) = degrees.get_mut(vertex) {
        *degree += 1;
    }
}
