//! Structural checks on a computed spanning forest.

use crate::{KruskalBuilder, SpanningForest, Weight};

use super::oracle::{component_labels, input_pairs, is_acyclic};
use super::types::GraphCase;

/// Runs the default driver and checks the forest's shape against the input.
pub(super) fn run_structural_property(case: &GraphCase) -> Result<(), String> {
    let graph = case.graph();
    let forest = KruskalBuilder::new()
        .build()
        .run(&graph)
        .map_err(|err| format!("{}: run failed: {err}", case.context()))?;
    check_forest(case, &forest)
}

pub(super) fn check_forest(case: &GraphCase, forest: &SpanningForest) -> Result<(), String> {
    let ctx = case.context();
    let accepted: Vec<(usize, usize, Weight)> = forest
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.weight()))
        .collect();

    let pairs = input_pairs(case);
    for edge in &accepted {
        if !pairs.contains(edge) {
            return Err(format!("{ctx}: accepted edge {edge:?} is not in the input"));
        }
    }

    if !is_acyclic(case.node_count, &accepted) {
        return Err(format!("{ctx}: accepted edges contain a cycle"));
    }

    let labels = component_labels(case);
    let input_components = labels
        .iter()
        .enumerate()
        .filter(|(node, label)| node == *label)
        .count();
    if forest.component_count() != input_components {
        return Err(format!(
            "{ctx}: {} forest components but the input has {input_components}",
            forest.component_count()
        ));
    }
    if accepted.len() != case.node_count - input_components {
        return Err(format!(
            "{ctx}: accepted {} edges, expected {}",
            accepted.len(),
            case.node_count - input_components
        ));
    }

    for (node, parent) in forest.parents().iter().enumerate() {
        if let Some(parent) = *parent {
            if parent <= node {
                return Err(format!("{ctx}: node {node} links back to {parent}"));
            }
            if labels[node] != labels[parent] {
                return Err(format!("{ctx}: node {node} links across components"));
            }
        }
    }

    for node in 0..case.node_count {
        let path: Vec<usize> = forest.rootward_path(node).collect();
        if path.len() > case.node_count {
            return Err(format!("{ctx}: path from {node} exceeds the node count"));
        }
        let Some(&last) = path.last() else {
            return Err(format!("{ctx}: path from {node} is empty"));
        };
        if forest.parent(last).is_some() {
            return Err(format!("{ctx}: path from {node} does not reach a root"));
        }
    }

    Ok(())
}
