//! Error types for the Havel core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Malformed input rejected before realization starts.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// The degree sequence contained no vertices.
    #[error("degree sequence must contain at least one vertex")]
    EmptySequence,
    /// The declared vertex count was zero or negative.
    #[error("vertex count must be positive (got {got})")]
    NonPositiveVertexCount {
        /// Vertex count supplied by the caller.
        got: i64,
    },
    /// A degree entry was negative.
    #[error("vertex {vertex} has negative degree {degree}")]
    NegativeDegree {
        /// Vertex whose requested degree was negative.
        vertex: usize,
        /// The offending degree value.
        degree: i64,
    },
    /// The declared vertex count did not match the number of degrees supplied.
    #[error("declared {declared} vertices but {provided} degrees were given")]
    LengthMismatch {
        /// Vertex count declared up front.
        declared: usize,
        /// Number of degree values actually supplied.
        provided: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`InputError`] variants.
    enum InputErrorCode for InputError {
        /// The degree sequence contained no vertices.
        EmptySequence => EmptySequence => "INPUT_EMPTY_SEQUENCE",
        /// The declared vertex count was zero or negative.
        NonPositiveVertexCount => NonPositiveVertexCount { .. } => "INPUT_NON_POSITIVE_VERTEX_COUNT",
        /// A degree entry was negative.
        NegativeDegree => NegativeDegree { .. } => "INPUT_NEGATIVE_DEGREE",
        /// The declared vertex count did not match the number of degrees supplied.
        LengthMismatch => LengthMismatch { .. } => "INPUT_LENGTH_MISMATCH",
    }
}

/// Why a degree sequence could not be realized as a simple graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InfeasibleReason {
    /// The vertex wants more neighbours than there are unsatisfied vertices.
    DegreeExceedsPeers {
        /// Number of vertices still accepting edges.
        peers: usize,
    },
    /// Connecting the vertex would drive a neighbour's residual degree below zero.
    NegativeResidual {
        /// Neighbour whose residual degree would underflow.
        neighbour: usize,
    },
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegreeExceedsPeers { peers } => {
                write!(f, "only {peers} unsatisfied vertices remain")
            }
            Self::NegativeResidual { neighbour } => {
                write!(f, "vertex {neighbour} would drop below zero residual degree")
            }
        }
    }
}

/// Error type produced by the Havel core API.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HavelError {
    /// The supplied input was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// The degree sequence cannot be realized as a simple graph.
    #[error("the degree sequence cannot form a simple graph: vertex {vertex} needs degree {degree} but {reason}")]
    InfeasibleSequence {
        /// Vertex being connected when realization failed.
        vertex: usize,
        /// Residual degree that vertex still required.
        degree: usize,
        /// Which feasibility check failed.
        reason: InfeasibleReason,
    },
    /// A vertex identifier was outside the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The requested vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge would have joined a vertex to itself.
    #[error("self-loop on vertex {vertex} is not allowed in a simple graph")]
    SelfLoop {
        /// Vertex named at both ends of the edge.
        vertex: usize,
    },
    /// The sequence exceeds the analyzer's configured vertex bound.
    #[error("sequence has {vertices} vertices but the analyzer accepts at most {max_vertices}")]
    TooManyVertices {
        /// Number of vertices in the rejected sequence.
        vertices: usize,
        /// Configured upper bound.
        max_vertices: usize,
    },
    /// The analyzer's vertex bound must be at least one.
    #[error("max_vertices must be at least 1 (got {got})")]
    InvalidMaxVertices {
        /// The invalid bound supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HavelError`] variants.
    enum HavelErrorCode for HavelError {
        /// The supplied input was malformed.
        InvalidInput => InvalidInput(..) => "HAVEL_INVALID_INPUT",
        /// The degree sequence cannot be realized as a simple graph.
        InfeasibleSequence => InfeasibleSequence { .. } => "HAVEL_INFEASIBLE_SEQUENCE",
        /// A vertex identifier was outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "HAVEL_VERTEX_OUT_OF_RANGE",
        /// An edge would have joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "HAVEL_SELF_LOOP",
        /// The sequence exceeds the analyzer's configured vertex bound.
        TooManyVertices => TooManyVertices { .. } => "HAVEL_TOO_MANY_VERTICES",
        /// The analyzer's vertex bound must be at least one.
        InvalidMaxVertices => InvalidMaxVertices { .. } => "HAVEL_INVALID_MAX_VERTICES",
    }
}

impl HavelError {
    /// Retrieve the inner [`InputErrorCode`] when the error stems from malformed input.
    #[must_use]
    pub const fn input_code(&self) -> Option<InputErrorCode> {
        match self {
            Self::InvalidInput(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HavelError>;
