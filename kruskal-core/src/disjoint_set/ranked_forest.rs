//! Union by rank with path compression.

use std::cmp::Ordering;

use crate::error::DisjointSetError;

use super::{DisjointSet, check_range};

/// Disjoint set with near-constant amortised `find` and `union`.
///
/// Representatives are tree roots. Equal ranks are broken towards the
/// smaller root index so the structure evolves deterministically.
#[derive(Clone, Debug)]
pub struct RankedForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl RankedForest {
    /// Creates `node_count` singleton trees.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    fn parent_of(&self, node: usize) -> usize {
        self.parent.get(node).copied().unwrap_or(node)
    }

    fn rank_of(&self, node: usize) -> u8 {
        self.rank.get(node).copied().unwrap_or(0)
    }

    fn root(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent_of(root) != root {
            root = self.parent_of(root);
        }

        let mut current = node;
        while current != root {
            let next = self.parent_of(current);
            if let Some(slot) = self.parent.get_mut(current) {
                *slot = root;
            }
            current = next;
        }

        root
    }

    fn attach(&mut self, child: usize, parent: usize) {
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
    }
}

impl DisjointSet for RankedForest {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        let node = check_range(node, self.parent.len())?;
        Ok(self.root(node))
    }

    fn union(&mut self, left: usize, right: usize) -> Result<(), DisjointSetError> {
        let len = self.parent.len();
        let left = check_range(left, len)?;
        let right = check_range(right, len)?;

        let left_root = self.root(left);
        let right_root = self.root(right);
        if left_root == right_root {
            return Ok(());
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        match left_rank.cmp(&right_rank) {
            Ordering::Greater => self.attach(right_root, left_root),
            Ordering::Less => self.attach(left_root, right_root),
            Ordering::Equal => {
                let (root, child) = if left_root <= right_root {
                    (left_root, right_root)
                } else {
                    (right_root, left_root)
                };
                self.attach(child, root);
                if let Some(rank) = self.rank.get_mut(root) {
                    *rank = rank.saturating_add(1);
                }
            }
        }

        self.components = self.components.saturating_sub(1);
        Ok(())
    }

    fn component_count(&self) -> usize {
        self.components
    }
}
