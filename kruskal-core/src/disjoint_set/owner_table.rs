//! Shallow owner-table partition.
//!
//! Every node stores its component owner directly, so `find` is a single
//! lookup. `union` rewrites every entry that carried the left owner to the
//! right owner in one linear pass, which keeps all entries of a component
//! equal without any root walk.

use crate::error::DisjointSetError;

use super::{DisjointSet, check_range};

/// Disjoint set with O(1) `find` and O(n) `union`.
///
/// # Examples
/// ```
/// use kruskal_core::{DisjointSet, OwnerTable};
///
/// let mut set = OwnerTable::new(3);
/// set.union(0, 2)?;
/// assert_eq!(set.find(0)?, set.find(2)?);
/// assert_eq!(set.owners(), &[2, 1, 2]);
/// # Ok::<(), kruskal_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTable {
    owners: Vec<usize>,
    components: usize,
}

impl OwnerTable {
    /// Creates `node_count` singleton components, each node owning itself.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            owners: (0..node_count).collect(),
            components: node_count,
        }
    }

    /// Raw owner values in node order.
    #[must_use]
    #[rustfmt::skip]
    pub fn owners(&self) -> &[usize] { &self.owners }

    fn owner(&self, node: usize) -> Result<usize, DisjointSetError> {
        let len = self.owners.len();
        let node = check_range(node, len)?;
        self.owners
            .get(node)
            .copied()
            .ok_or(DisjointSetError::OutOfRange { node, len })
    }
}

impl DisjointSet for OwnerTable {
    fn len(&self) -> usize {
        self.owners.len()
    }

    fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        self.owner(node)
    }

    fn union(&mut self, left: usize, right: usize) -> Result<(), DisjointSetError> {
        let target = self.owner(left)?;
        let replacement = self.owner(right)?;
        if target == replacement {
            return Ok(());
        }
        for owner in &mut self.owners {
            if *owner == target {
                *owner = replacement;
            }
        }
        self.components = self.components.saturating_sub(1);
        Ok(())
    }

    fn component_count(&self) -> usize {
        self.components
    }
}
