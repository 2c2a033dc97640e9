//! Kruskal minimum spanning forest driver.
//!
//! Each iteration scans the whole adjacency matrix for the lightest edge that
//! still exists, accepts it when its endpoints lie in different disjoint-set
//! components, and deletes it from the working matrix either way. The loop
//! ends once no edge remains. Ties go to the first minimum met in row-major
//! order.

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    Result,
    builder::DisjointSetStrategy,
    disjoint_set::{DisjointSet, OwnerTable, RankedForest},
    error::{DisjointSetError, KruskalError},
    forest::{ForestEdge, SpanningForest},
    graph::{AdjacencyMatrix, Graph, WEIGHT_CEILING},
};

/// Entry point for computing minimum spanning forests.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyMatrix, Graph, GraphKind, KruskalBuilder, NodeList};
///
/// let mut matrix = AdjacencyMatrix::new(4);
/// matrix.connect(0, 1, 1)?;
/// matrix.connect(1, 2, 2)?;
/// matrix.connect(2, 3, 3)?;
/// matrix.connect(0, 3, 4)?;
/// let graph = Graph::new(GraphKind::UNDIRECTED_WEIGHTED, NodeList::numbered(4), matrix)?;
///
/// let forest = KruskalBuilder::new().build().run(&graph)?;
/// assert_eq!(forest.edges().len(), 3);
/// assert_eq!(forest.total_weight(), 6);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Kruskal {
    disjoint_set: DisjointSetStrategy,
}

impl Kruskal {
    pub(crate) fn new(disjoint_set: DisjointSetStrategy) -> Self {
        Self { disjoint_set }
    }

    /// Returns the disjoint-set strategy used by [`Kruskal::run`].
    #[must_use]
    pub fn disjoint_set(&self) -> DisjointSetStrategy {
        self.disjoint_set
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// The graph is left untouched; edges are deleted from a working copy of
    /// its matrix as they are considered.
    ///
    /// # Errors
    /// Returns [`KruskalError::DirectedGraph`] for directed input, before any
    /// working state is allocated, and [`KruskalError::InvariantViolation`] if
    /// the selection loop ever hands the disjoint set an untracked node.
    #[instrument(
        name = "core.kruskal",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strategy = self.disjoint_set.as_str(),
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningForest> {
        if graph.kind().directed {
            warn!("directed graph rejected before selection");
            return Err(KruskalError::DirectedGraph);
        }

        let node_count = graph.node_count();
        let mut matrix = graph.matrix().clone();
        let forest = match self.disjoint_set {
            DisjointSetStrategy::OwnerTable => {
                select_forest(&mut matrix, &mut OwnerTable::new(node_count))?
            }
            DisjointSetStrategy::RankedForest => {
                select_forest(&mut matrix, &mut RankedForest::new(node_count))?
            }
        };

        info!(
            accepted = forest.edges().len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "spanning forest complete"
        );
        Ok(forest)
    }
}

/// Runs the selection loop over `matrix`, consuming every edge it holds.
///
/// `set` must track exactly `matrix.node_count()` singleton components.
pub(crate) fn select_forest<D: DisjointSet>(
    matrix: &mut AdjacencyMatrix,
    set: &mut D,
) -> Result<SpanningForest> {
    let node_count = matrix.node_count();
    let mut parents = vec![None; node_count];
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));

    while let Some(candidate) = lightest_edge(matrix) {
        let (source, target) = (candidate.source(), candidate.target());
        let source_owner = set.find(source).map_err(untracked_endpoint)?;
        let target_owner = set.find(target).map_err(untracked_endpoint)?;

        if source_owner == target_owner {
            trace!(source, target, weight = candidate.weight(), "edge would close a cycle");
        } else {
            if let Some(parent) = parents.get_mut(source) {
                *parent = Some(target);
            }
            set.union(source, target).map_err(untracked_endpoint)?;
            debug!(source, target, weight = candidate.weight(), "edge accepted");
            edges.push(candidate);
        }

        matrix.remove(source, target);
    }

    Ok(SpanningForest::new(parents, edges))
}

/// Returns the lightest present edge, keeping the first one met in
/// row-major order when weights tie.
///
/// Returns `None` exactly when the matrix has no edges left, since every
/// stored weight is below [`WEIGHT_CEILING`].
fn lightest_edge(matrix: &AdjacencyMatrix) -> Option<ForestEdge> {
    let mut lightest = None;
    let mut min_weight = WEIGHT_CEILING;
    for (row, column, weight) in matrix.present_cells() {
        if weight < min_weight {
            min_weight = weight;
            lightest = Some(ForestEdge::new(row, column, weight));
        }
    }
    lightest
}

fn untracked_endpoint(error: DisjointSetError) -> KruskalError {
    KruskalError::InvariantViolation {
        invariant: "selected edge endpoints must be tracked by the disjoint set",
        error,
    }
}


#[cfg(test)]
mod property;
