//! Error types for the Kruskal core library.
//!
//! Defines error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::graph::{WEIGHT_CEILING, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint referenced a node outside `[0, node_count)`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the matrix.
        node_count: usize,
    },
    /// An edge weight reached the scan sentinel.
    #[error(
        "edge ({source_node}, {target_node}) has weight {weight}; weights must be below {ceiling}",
        ceiling = WEIGHT_CEILING
    )]
    WeightOutOfRange {
        /// First endpoint of the rejected edge.
        source_node: usize,
        /// Second endpoint of the rejected edge.
        target_node: usize,
        /// The rejected weight.
        weight: Weight,
    },
    /// The node list and the adjacency matrix disagree on the node count.
    #[error("node list has {names} names but the matrix has {matrix} rows")]
    NodeCountMismatch {
        /// Number of names supplied.
        names: usize,
        /// Dimension of the adjacency matrix.
        matrix: usize,
    },
    /// Two nodes share a display name.
    #[error("node name `{name}` is used more than once")]
    DuplicateNode {
        /// The repeated name.
        name: Arc<str>,
    },
    /// A node was given an empty display name.
    #[error("node {index} has an empty name")]
    EmptyNodeName {
        /// Index of the unnamed node.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint referenced a node outside the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// An edge weight reached the scan sentinel.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
        /// The node list and the adjacency matrix disagree on the node count.
        NodeCountMismatch => NodeCountMismatch { .. } => "GRAPH_NODE_COUNT_MISMATCH",
        /// Two nodes share a display name.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// A node was given an empty display name.
        EmptyNodeName => EmptyNodeName { .. } => "GRAPH_EMPTY_NODE_NAME",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// A node index fell outside the partition.
    #[error("node {node} is out of range for a partition of {len} nodes")]
    OutOfRange {
        /// The requested node.
        node: usize,
        /// Number of nodes tracked by the partition.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// A node index fell outside the partition.
        OutOfRange => OutOfRange { .. } => "DISJOINT_SET_OUT_OF_RANGE",
    }
}

/// Error type produced when running [`crate::Kruskal`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KruskalError {
    /// Kruskal's algorithm only accepts undirected graphs.
    #[error("Kruskal's algorithm cannot be run on a directed graph.")]
    DirectedGraph,
    /// The selection loop handed the disjoint set an index it does not track.
    #[error("Kruskal invariant violated: {invariant}: {error}")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// Underlying disjoint-set failure.
        #[source]
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// Kruskal's algorithm only accepts undirected graphs.
        DirectedGraph => DirectedGraph => "KRUSKAL_DIRECTED_GRAPH",
        /// The selection loop violated a disjoint-set precondition.
        InvariantViolation => InvariantViolation { .. } => "KRUSKAL_INVARIANT_VIOLATION",
    }
}

impl KruskalError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in a
    /// [`crate::DisjointSet`].
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::InvariantViolation { error, .. } => Some(error.code()),
            Self::DirectedGraph => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
