//! Reference answers computed without the Kruskal selection loop.

use std::collections::HashSet;

use crate::Weight;

use super::types::GraphCase;

/// Expected shape of a minimum spanning forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct ForestSummary {
    pub(super) total_weight: i64,
    pub(super) edge_count: usize,
    pub(super) component_count: usize,
}

/// Computes the minimum spanning forest summary with Prim's algorithm, run
/// once from every node that is not yet covered.
pub(super) fn prim_summary(case: &GraphCase) -> ForestSummary {
    let n = case.node_count;
    let adjacency = adjacency(case);
    let mut covered = vec![false; n];
    let mut total_weight = 0_i64;
    let mut edge_count = 0;
    let mut component_count = 0;

    for start in 0..n {
        if covered[start] {
            continue;
        }
        component_count += 1;
        covered[start] = true;
        let mut frontier: Vec<(Weight, usize)> = adjacency[start].clone();
        while let Some(index) = lightest_uncovered(&frontier, &covered) {
            let (weight, node) = frontier.swap_remove(index);
            covered[node] = true;
            total_weight += i64::from(weight);
            edge_count += 1;
            frontier.extend(adjacency[node].iter().copied());
        }
    }

    ForestSummary {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Exhaustive minimum over every acyclic edge subset of the right size.
///
/// Returns `None` when the case has too many edges to enumerate.
pub(super) fn brute_force_total(case: &GraphCase) -> Option<i64> {
    const MAX_EDGES: usize = 12;
    if case.edges.len() > MAX_EDGES {
        return None;
    }
    let target = prim_summary(case).edge_count;
    let mut best: Option<i64> = None;
    for mask in 0_u32..(1 << case.edges.len()) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let chosen: Vec<_> = case
            .edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if !is_acyclic(case.node_count, &chosen) {
            continue;
        }
        let total = chosen.iter().map(|&(_, _, w)| i64::from(w)).sum();
        best = Some(best.map_or(total, |current| current.min(total)));
    }
    best
}

/// Labels every node with the smallest index reachable from it.
pub(super) fn component_labels(case: &GraphCase) -> Vec<usize> {
    let adjacency = adjacency(case);
    let mut labels = vec![usize::MAX; case.node_count];
    for start in 0..case.node_count {
        if labels[start] != usize::MAX {
            continue;
        }
        let mut stack = vec![start];
        labels[start] = start;
        while let Some(node) = stack.pop() {
            for &(_, next) in &adjacency[node] {
                if labels[next] == usize::MAX {
                    labels[next] = start;
                    stack.push(next);
                }
            }
        }
    }
    labels
}

/// Returns `true` when `edges` contain no cycle over `node_count` nodes.
pub(super) fn is_acyclic(node_count: usize, edges: &[(usize, usize, Weight)]) -> bool {
    let mut labels: Vec<usize> = (0..node_count).collect();
    for &(left, right, _) in edges {
        let (a, b) = (labels[left], labels[right]);
        if a == b {
            return false;
        }
        for label in &mut labels {
            if *label == a {
                *label = b;
            }
        }
    }
    true
}

/// Returns the set of undirected pairs present in the case.
pub(super) fn input_pairs(case: &GraphCase) -> HashSet<(usize, usize, Weight)> {
    case.edges
        .iter()
        .map(|&(a, b, w)| if a <= b { (a, b, w) } else { (b, a, w) })
        .collect()
}

fn adjacency(case: &GraphCase) -> Vec<Vec<(Weight, usize)>> {
    let mut adjacency = vec![Vec::new(); case.node_count];
    for &(left, right, weight) in &case.edges {
        adjacency[left].push((weight, right));
        adjacency[right].push((weight, left));
    }
    adjacency
}

fn lightest_uncovered(frontier: &[(Weight, usize)], covered: &[bool]) -> Option<usize> {
    frontier
        .iter()
        .enumerate()
        .filter(|(_, (_, node))| !covered[*node])
        .min_by_key(|(_, (weight, _))| *weight)
        .map(|(index, _)| index)
}
