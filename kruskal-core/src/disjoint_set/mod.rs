//! Disjoint-set (union-find) partitions over node indices.
//!
//! Kruskal's driver only relies on the observable contract: after any
//! sequence of unions, `find(u) == find(v)` exactly when `u` and `v` share a
//! component. Representative values themselves carry no meaning outside the
//! implementation that produced them.

mod owner_table;
mod ranked_forest;

pub use self::{owner_table::OwnerTable, ranked_forest::RankedForest};

use crate::error::DisjointSetError;

/// A partition of `0..len()` that only ever coarsens.
pub trait DisjointSet {
    /// Number of nodes tracked by the partition.
    fn len(&self) -> usize;

    /// Returns whether the partition tracks no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the representative of `node`'s component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when `node >= len()`.
    fn find(&mut self, node: usize) -> Result<usize, DisjointSetError>;

    /// Merges the components containing `left` and `right`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when either index is outside
    /// the partition. No state changes on error.
    fn union(&mut self, left: usize, right: usize) -> Result<(), DisjointSetError>;

    /// Number of components currently in the partition.
    fn component_count(&self) -> usize;

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when either index is outside
    /// the partition.
    fn same_set(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }
}

pub(crate) fn check_range(node: usize, len: usize) -> Result<usize, DisjointSetError> {
    if node < len {
        Ok(node)
    } else {
        Err(DisjointSetError::OutOfRange { node, len })
    }
}
