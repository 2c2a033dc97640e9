//! Builder utilities for configuring Kruskal runs.
//!
//! Exposes the disjoint-set strategy selection surface used before
//! constructing [`Kruskal`] instances.

use crate::kruskal::Kruskal;

/// Selects the disjoint-set implementation a [`Kruskal`] run uses for cycle
/// detection.
///
/// Both strategies accept the same edges and record the same parent links;
/// they differ only in cost per operation.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSetStrategy;
///
/// assert_eq!(DisjointSetStrategy::default(), DisjointSetStrategy::OwnerTable);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisjointSetStrategy {
    /// Direct owner lookup with a linear rewrite on every union.
    #[default]
    OwnerTable,
    /// Union by rank with path compression.
    RankedForest,
}

impl DisjointSetStrategy {
    /// Stable identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OwnerTable => "owner-table",
            Self::RankedForest => "ranked-forest",
        }
    }
}

/// Configures and constructs [`Kruskal`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::{DisjointSetStrategy, KruskalBuilder};
///
/// let kruskal = KruskalBuilder::new()
///     .with_disjoint_set(DisjointSetStrategy::RankedForest)
///     .build();
/// assert_eq!(kruskal.disjoint_set(), DisjointSetStrategy::RankedForest);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KruskalBuilder {
    disjoint_set: DisjointSetStrategy,
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the disjoint-set strategy.
    #[must_use]
    pub fn with_disjoint_set(mut self, strategy: DisjointSetStrategy) -> Self {
        self.disjoint_set = strategy;
        self
    }

    /// Returns the configured disjoint-set strategy.
    #[must_use]
    pub fn disjoint_set(&self) -> DisjointSetStrategy {
        self.disjoint_set
    }

    /// Constructs the configured [`Kruskal`] instance.
    #[must_use]
    pub fn build(self) -> Kruskal {
        Kruskal::new(self.disjoint_set)
    }
}
