//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{AdjacencyMatrix, Graph, GraphKind, NodeList, Weight};

/// Builds a standard proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Builds an undirected matrix from `(left, right, weight)` triples.
pub(crate) fn matrix_from_edges(node_count: usize, edges: &[(usize, usize, Weight)]) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::new(node_count);
    for &(left, right, weight) in edges {
        matrix
            .connect(left, right, weight)
            .expect("fixture edges must be valid");
    }
    matrix
}

/// Builds an undirected, numbered graph from `(left, right, weight)` triples.
pub(crate) fn undirected_graph(node_count: usize, edges: &[(usize, usize, Weight)]) -> Graph {
    Graph::new(
        GraphKind::UNDIRECTED_WEIGHTED,
        NodeList::numbered(node_count),
        matrix_from_edges(node_count, edges),
    )
    .expect("fixture graph must be valid")
}
