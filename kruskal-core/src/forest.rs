//! Spanning forest produced by the Kruskal driver and its path printer.
//!
//! Each accepted edge sets one parent link, from the edge's first endpoint to
//! its second. Following parent links from any node reaches a forest root,
//! a node whose parent is undefined.

use std::io::{self, Write};

use crate::graph::{NodeList, Weight};

/// Separator written between consecutive nodes of a rendered path.
pub const PATH_SEPARATOR: &str = " -- ";

/// An edge accepted into the spanning forest.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ForestEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl ForestEdge {
    pub(crate) const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// First endpoint; its parent link points at [`ForestEdge::target`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    parents: Vec<Option<usize>>,
    edges: Vec<ForestEdge>,
}

impl SpanningForest {
    pub(crate) fn new(parents: Vec<Option<usize>>, edges: Vec<ForestEdge>) -> Self {
        Self { parents, edges }
    }

    /// Returns the parent link recorded for `node`, if any.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    /// Parent links in node order.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<usize>] { &self.parents }

    /// Accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[ForestEdge] { &self.edges }

    /// Number of nodes covered by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.parents.len() }

    /// Number of trees, one per connected component of the input.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.node_count().saturating_sub(self.edges.len())
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Sum of accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(|edge| i64::from(edge.weight)).sum()
    }

    /// Nodes without a parent link, in index order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(node, parent)| parent.is_none().then_some(node))
    }

    /// Walks parent links from `node` towards its root.
    ///
    /// The walk yields `node` first and stops after at most
    /// [`SpanningForest::node_count`] steps. Out-of-range nodes yield nothing.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{AdjacencyMatrix, Graph, GraphKind, KruskalBuilder, NodeList};
    ///
    /// let mut matrix = AdjacencyMatrix::new(3);
    /// matrix.connect(0, 1, 1)?;
    /// matrix.connect(1, 2, 2)?;
    /// let graph = Graph::new(GraphKind::UNDIRECTED_WEIGHTED, NodeList::numbered(3), matrix)?;
    /// let forest = KruskalBuilder::new().build().run(&graph)?;
    /// let path: Vec<usize> = forest.rootward_path(0).collect();
    /// assert_eq!(path, [0, 1, 2]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn rootward_path(&self, node: usize) -> RootwardPath<'_> {
        RootwardPath {
            forest: self,
            next: (node < self.node_count()).then_some(node),
            remaining: self.node_count(),
        }
    }
}

/// Iterator over a node's root-ward path. See [`SpanningForest::rootward_path`].
#[derive(Clone, Debug)]
pub struct RootwardPath<'a> {
    forest: &'a SpanningForest,
    next: Option<usize>,
    remaining: usize,
}

impl Iterator for RootwardPath<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.forest.parent(current);
        Some(current)
    }
}

/// Writes one line per node, in index order, listing its root-ward path as
/// `name -- name -- ... -- root`.
///
/// Nodes without a display name are rendered by index.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use kruskal_core::{AdjacencyMatrix, Graph, GraphKind, KruskalBuilder, NodeList, render_paths};
///
/// let mut matrix = AdjacencyMatrix::new(3);
/// matrix.connect(0, 1, 4)?;
/// let nodes = NodeList::new(vec!["a".into(), "b".into(), "c".into()])?;
/// let graph = Graph::new(GraphKind::UNDIRECTED_WEIGHTED, nodes, matrix)?;
/// let forest = KruskalBuilder::new().build().run(&graph)?;
///
/// let mut out = Vec::new();
/// render_paths(&forest, graph.nodes(), &mut out)?;
/// assert_eq!(String::from_utf8(out)?, "a -- b\nb\nc\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_paths(
    forest: &SpanningForest,
    nodes: &NodeList,
    mut writer: impl Write,
) -> io::Result<()> {
    for node in 0..forest.node_count() {
        for (step, current) in forest.rootward_path(node).enumerate() {
            if step > 0 {
                writer.write_all(PATH_SEPARATOR.as_bytes())?;
            }
            match nodes.name(current) {
                Some(name) => writer.write_all(name.as_bytes())?,
                None => write!(writer, "{current}")?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
