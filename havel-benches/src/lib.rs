//! Benchmark support crate for havel.
//!
//! Provides seeded degree-sequence generators and parameter types used by the
//! Criterion benchmarks for realization and the two connectivity analyzers.

pub mod error;
pub mod params;
pub mod source;
