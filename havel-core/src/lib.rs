//! Havel core library.
//!
//! Realizes simple undirected graphs from degree sequences (Havel–Hakimi) and
//! analyzes their connectivity, either with the single-vertex removal survey
//! or with exact max-flow computations.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod builder;
pub mod connectivity;
mod degree;
mod error;
mod graph;
mod reachability;
mod realize;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    analyzer::{Analysis, Analyzer},
    builder::{AnalyzerBuilder, DEFAULT_MAX_VERTICES, MethodSelection},
    connectivity::{
        ConnectivityReport, Method, edge_connectivity, exact, survey, survey_edge_score,
        survey_vertex_score, vertex_connectivity,
    },
    degree::DegreeSequence,
    error::{HavelError, HavelErrorCode, InfeasibleReason, InputError, InputErrorCode, Result},
    graph::{Graph, RealizedGraph},
    reachability::{ReachableSet, reachable_from},
    realize::realize,
};
