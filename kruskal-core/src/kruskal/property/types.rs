//! Type definitions for Kruskal property-based tests.

use test_strategy::Arbitrary;

use crate::{Graph, Weight};
use crate::test_utils::undirected_graph;

/// Weight and topology profile for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightProfile {
    /// Every edge carries a distinct weight, so the minimum forest is unique.
    #[weight(2)]
    Unique,
    /// Weights drawn from a pool of one to three values, stressing the
    /// row-major tie-break.
    #[weight(3)]
    ManyIdentical,
    /// Weights spanning negative and positive values.
    #[weight(2)]
    Mixed,
    /// A random spanning tree plus a handful of extra edges.
    #[weight(2)]
    Sparse,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// Generated undirected graph with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct GraphCase {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Unique undirected edges as `(smaller, larger, weight)`.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Profile used during generation.
    pub profile: WeightProfile,
}

impl GraphCase {
    /// Builds the numbered undirected graph described by the case.
    pub(super) fn graph(&self) -> Graph {
        undirected_graph(self.node_count, &self.edges)
    }

    /// One-line context appended to failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "profile={:?}, nodes={}, edges={}",
            self.profile,
            self.node_count,
            self.edges.len()
        )
    }
}
