//! Dense graph model consumed by the Kruskal driver.
//!
//! A [`Graph`] bundles the loader-supplied pieces the algorithm reads: the
//! directedness flags, the ordered node names and a fixed-size weighted
//! adjacency matrix. The matrix is intended for small graphs; every selection
//! step rescans all `N * N` cells.

use std::{collections::HashSet, sync::Arc};

use crate::error::GraphError;

/// Integer edge weight stored in the adjacency matrix.
pub type Weight = i32;

/// Sentinel used as the initial minimum while scanning for the lightest edge.
///
/// No stored weight may reach this value; [`AdjacencyMatrix::set`] and
/// [`AdjacencyMatrix::connect`] reject anything at or above it.
pub const WEIGHT_CEILING: Weight = 0xFFFF;

/// Shape flags reported by the graph loader.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GraphKind {
    /// Whether edges are one-way.
    pub directed: bool,
    /// Whether edge weights were supplied (unweighted edges carry weight 1).
    pub weighted: bool,
}

impl GraphKind {
    /// Undirected, weighted graph kind.
    pub const UNDIRECTED_WEIGHTED: Self = Self {
        directed: false,
        weighted: true,
    };
}

/// Ordered display names, indexable by node index.
///
/// # Examples
/// ```
/// use kruskal_core::NodeList;
///
/// let nodes = NodeList::new(vec!["a".into(), "b".into()])?;
/// assert_eq!(nodes.name(1), Some("b"));
/// assert_eq!(nodes.index_of("a"), Some(0));
/// # Ok::<(), kruskal_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeList {
    names: Vec<Arc<str>>,
}

impl NodeList {
    /// Builds a node list, rejecting empty and duplicate names.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyNodeName`] or [`GraphError::DuplicateNode`].
    pub fn new(names: Vec<String>) -> Result<Self, GraphError> {
        let mut seen = HashSet::with_capacity(names.len());
        let mut stored = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            if name.is_empty() {
                return Err(GraphError::EmptyNodeName { index });
            }
            let name: Arc<str> = Arc::from(name);
            if !seen.insert(Arc::clone(&name)) {
                return Err(GraphError::DuplicateNode { name });
            }
            stored.push(name);
        }
        Ok(Self { names: stored })
    }

    /// Returns node names `0..n` rendered as decimal indices.
    #[must_use]
    pub fn numbered(node_count: usize) -> Self {
        Self {
            names: (0..node_count)
                .map(|index| Arc::from(index.to_string()))
                .collect(),
        }
    }

    /// Returns the display name for `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(AsRef::as_ref)
    }

    /// Returns the index carrying `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate.as_ref() == name)
    }

    /// Number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.names.len() }

    /// Returns `true` when the list holds no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Iterates over the names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(AsRef::as_ref)
    }
}

/// Dense `N * N` row-major weight matrix.
///
/// Absent cells mean "no edge". The diagonal is never reported as an edge,
/// so self-loops cannot become Kruskal candidates.
///
/// # Examples
/// ```
/// use kruskal_core::AdjacencyMatrix;
///
/// let mut matrix = AdjacencyMatrix::new(3);
/// matrix.connect(0, 2, 7)?;
/// assert!(matrix.contains(2, 0));
/// matrix.remove(0, 2);
/// assert!(!matrix.has_edges());
/// # Ok::<(), kruskal_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    node_count: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrix {
    /// Creates a matrix for `node_count` nodes with no edges.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            cells: vec![None; node_count.saturating_mul(node_count)],
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.node_count && column < self.node_count)
            .then(|| row.saturating_mul(self.node_count).saturating_add(column))
    }

    fn checked_offset(&self, row: usize, column: usize) -> Result<usize, GraphError> {
        let node = row.max(column);
        self.offset(row, column).ok_or(GraphError::NodeOutOfRange {
            node,
            node_count: self.node_count,
        })
    }

    /// Stores `weight` in the single cell `(row, column)`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for indices outside the matrix
    /// and [`GraphError::WeightOutOfRange`] when `weight >= WEIGHT_CEILING`.
    pub fn set(&mut self, row: usize, column: usize, weight: Weight) -> Result<(), GraphError> {
        let offset = self.checked_offset(row, column)?;
        if weight >= WEIGHT_CEILING {
            return Err(GraphError::WeightOutOfRange {
                source_node: row,
                target_node: column,
                weight,
            });
        }
        if let Some(cell) = self.cells.get_mut(offset) {
            *cell = Some(weight);
        }
        Ok(())
    }

    /// Stores an undirected edge in both `(left, right)` and `(right, left)`.
    ///
    /// # Errors
    /// Same conditions as [`AdjacencyMatrix::set`].
    pub fn connect(&mut self, left: usize, right: usize, weight: Weight) -> Result<(), GraphError> {
        self.set(left, right, weight)?;
        self.set(right, left, weight)
    }

    /// Returns the stored weight of cell `(row, column)`, ignoring the
    /// diagonal rule applied by [`AdjacencyMatrix::contains`].
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> Option<Weight> {
        self.offset(row, column)
            .and_then(|offset| self.cells.get(offset).copied().flatten())
    }

    /// Edge-existence predicate: `true` when `(row, column)` holds an edge and
    /// is not a self-loop.
    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row != column && self.weight(row, column).is_some()
    }

    /// Deletes the edge between `left` and `right` in both directions.
    pub fn remove(&mut self, left: usize, right: usize) {
        for (row, column) in [(left, right), (right, left)] {
            if let Some(cell) = self
                .offset(row, column)
                .and_then(|offset| self.cells.get_mut(offset))
            {
                *cell = None;
            }
        }
    }

    /// Returns `true` while any non-diagonal edge remains.
    #[must_use]
    pub fn has_edges(&self) -> bool {
        self.present_cells().next().is_some()
    }

    /// Returns `true` when every cell mirrors its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count).all(|row| {
            (row..self.node_count).all(|column| self.weight(row, column) == self.weight(column, row))
        })
    }

    /// Iterates over present non-diagonal cells in row-major order as
    /// `(row, column, weight)`.
    pub fn present_cells(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let n = self.node_count;
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |column| {
                if row == column {
                    return None;
                }
                self.weight(row, column).map(|weight| (row, column, weight))
            })
        })
    }
}

/// A loaded graph: shape flags, node names and adjacency matrix.
///
/// The graph is immutable once built; Kruskal runs work on their own copy of
/// the matrix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    kind: GraphKind,
    nodes: NodeList,
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Assembles a graph from its parts.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeCountMismatch`] when the node list length
    /// differs from the matrix dimension.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{AdjacencyMatrix, Graph, GraphKind, NodeList};
    ///
    /// let mut matrix = AdjacencyMatrix::new(2);
    /// matrix.connect(0, 1, 3)?;
    /// let graph = Graph::new(GraphKind::UNDIRECTED_WEIGHTED, NodeList::numbered(2), matrix)?;
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), kruskal_core::GraphError>(())
    /// ```
    pub fn new(kind: GraphKind, nodes: NodeList, matrix: AdjacencyMatrix) -> Result<Self, GraphError> {
        if nodes.len() != matrix.node_count() {
            return Err(GraphError::NodeCountMismatch {
                names: nodes.len(),
                matrix: matrix.node_count(),
            });
        }
        Ok(Self {
            kind,
            nodes,
            matrix,
        })
    }

    /// Shape flags reported by the loader.
    #[must_use]
    #[rustfmt::skip]
    pub fn kind(&self) -> GraphKind { self.kind }

    /// Node display names.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &NodeList { &self.nodes }

    /// Adjacency matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }

    /// Number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.matrix.node_count() }

    /// Number of edges: present cells for directed graphs, unordered pairs
    /// otherwise.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let cells = self.matrix.present_cells();
        if self.kind.directed {
            cells.count()
        } else {
            cells.filter(|(row, column, _)| row < column).count()
        }
    }
}
