//! Named graph fixtures shared by the core, provider and CLI test suites.
//!
//! Fixtures are plain data so this crate does not depend on `kruskal-core`.
//! [`GraphFixture::document`] renders the line-based graph document accepted
//! by `kruskal-providers-text`.

use std::fmt::Write as _;

/// A small graph described by names and `(left, right, weight)` triples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphFixture {
    /// Display names in node order.
    pub names: Vec<String>,
    /// Edges by node index.
    pub edges: Vec<(usize, usize, i32)>,
    /// Whether the edges are one-way.
    pub directed: bool,
}

impl GraphFixture {
    /// Builds an undirected fixture.
    #[must_use]
    pub fn undirected(names: &[&str], edges: &[(usize, usize, i32)]) -> Self {
        Self {
            names: names.iter().map(|name| (*name).to_owned()).collect(),
            edges: edges.to_vec(),
            directed: false,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Renders the fixture as a weighted graph document.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::fixtures::GraphFixture;
    ///
    /// let fixture = GraphFixture::undirected(&["a", "b"], &[(0, 1, 5)]);
    /// assert_eq!(fixture.document(), "2 1 0 1\na\nb\na b 5\n");
    /// ```
    #[must_use]
    pub fn document(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {} 1",
            self.names.len(),
            self.edges.len(),
            u8::from(self.directed)
        );
        for name in &self.names {
            let _ = writeln!(out, "{name}");
        }
        for &(left, right, weight) in &self.edges {
            let left = self.names.get(left).map_or("?", String::as_str);
            let right = self.names.get(right).map_or("?", String::as_str);
            let _ = writeln!(out, "{left} {right} {weight}");
        }
        out
    }
}

/// Four nodes on a path `A-B-C-D` plus a heavier closing edge `A-D`.
#[must_use]
pub fn square_with_heavy_diagonal() -> GraphFixture {
    GraphFixture::undirected(
        &["A", "B", "C", "D"],
        &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4)],
    )
}

/// Three nodes and no edges.
#[must_use]
pub fn isolated_triple() -> GraphFixture {
    GraphFixture::undirected(&["x", "y", "z"], &[])
}

/// Two disjoint triangles `a-b-c` and `d-e-f` with distinct weights.
#[must_use]
pub fn two_triangles() -> GraphFixture {
    GraphFixture::undirected(
        &["a", "b", "c", "d", "e", "f"],
        &[
            (0, 1, 1),
            (1, 2, 2),
            (0, 2, 3),
            (3, 4, 4),
            (4, 5, 5),
            (3, 5, 6),
        ],
    )
}

/// One directed edge `p -> q`.
#[must_use]
pub fn directed_pair() -> GraphFixture {
    GraphFixture {
        names: vec!["p".to_owned(), "q".to_owned()],
        edges: vec![(0, 1, 1)],
        directed: true,
    }
}
