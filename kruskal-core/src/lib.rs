//! Kruskal core library.
//!
//! Computes minimum spanning forests of small, dense, undirected graphs with
//! Kruskal's greedy edge selection over an adjacency matrix, using a
//! disjoint set to reject cycle-forming edges.

mod builder;
mod disjoint_set;
mod error;
mod forest;
mod graph;
mod kruskal;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DisjointSetStrategy, KruskalBuilder},
    disjoint_set::{DisjointSet, OwnerTable, RankedForest},
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, KruskalError,
        KruskalErrorCode, Result,
    },
    forest::{ForestEdge, PATH_SEPARATOR, RootwardPath, SpanningForest, render_paths},
    graph::{AdjacencyMatrix, Graph, GraphKind, NodeList, WEIGHT_CEILING, Weight},
    kruskal::Kruskal,
};
