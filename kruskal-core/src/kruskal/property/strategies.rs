//! Graph generation strategies for Kruskal property-based tests.
//!
//! Each generator produces unique undirected pairs so the adjacency matrix
//! holds exactly the generated edges.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{GraphCase, WeightProfile};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs; each selection step rescans the
/// full matrix, so cases stay small.
const MAX_NODES: usize = 16;

/// Generates graph cases covering every weight profile.
pub(super) fn graph_case_strategy() -> impl Strategy<Value = GraphCase> {
    (any::<WeightProfile>(), any::<u64>()).prop_map(|(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_case(profile, &mut rng)
    })
}

/// Generates a case for a specific profile.
pub(super) fn generate_case(profile: WeightProfile, rng: &mut SmallRng) -> GraphCase {
    match profile {
        WeightProfile::Unique => generate_unique(rng),
        WeightProfile::ManyIdentical => generate_identical(rng),
        WeightProfile::Mixed => generate_mixed(rng),
        WeightProfile::Sparse => generate_sparse(rng),
        WeightProfile::Disconnected => generate_disconnected(rng),
    }
}

fn generate_unique(rng: &mut SmallRng) -> GraphCase {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = random_pairs(rng, 0, node_count, 0.5);
    let mut weights: Vec<Weight> = (1..=Weight::try_from(edges.len()).unwrap_or(0)).collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in edges.iter_mut().zip(weights) {
        edge.2 = weight;
    }
    GraphCase {
        node_count,
        edges,
        profile: WeightProfile::Unique,
    }
}

fn generate_identical(rng: &mut SmallRng) -> GraphCase {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let mut edges = random_pairs(rng, 0, node_count, 0.6);
    for edge in &mut edges {
        edge.2 = pool[rng.gen_range(0..pool.len())];
    }
    GraphCase {
        node_count,
        edges,
        profile: WeightProfile::ManyIdentical,
    }
}

fn generate_mixed(rng: &mut SmallRng) -> GraphCase {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = random_pairs(rng, 0, node_count, 0.4);
    for edge in &mut edges {
        edge.2 = rng.gen_range(-500..500);
    }
    GraphCase {
        node_count,
        edges,
        profile: WeightProfile::Mixed,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> GraphCase {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for window in order.windows(2) {
        let pair = canonical(window[0], window[1]);
        if seen.insert(pair) {
            edges.push((pair.0, pair.1, rng.gen_range(1..1000)));
        }
    }
    for _ in 0..node_count / 2 {
        let pair = canonical(rng.gen_range(0..node_count), rng.gen_range(0..node_count));
        if pair.0 != pair.1 && seen.insert(pair) {
            edges.push((pair.0, pair.1, rng.gen_range(1..1000)));
        }
    }

    GraphCase {
        node_count,
        edges,
        profile: WeightProfile::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphCase {
    let component_count = rng.gen_range(2..=4);
    let mut node_count = 0;
    let mut edges = Vec::new();
    for _ in 0..component_count {
        let size = rng.gen_range(1..=5);
        let mut component = random_pairs(rng, node_count, size, 0.7);
        for edge in &mut component {
            edge.2 = rng.gen_range(1..100);
        }
        edges.extend(component);
        node_count += size;
    }
    GraphCase {
        node_count,
        edges,
        profile: WeightProfile::Disconnected,
    }
}

/// Returns each pair of `offset..offset + size` with probability `p`, in
/// canonical order, weighted 1.
fn random_pairs(
    rng: &mut SmallRng,
    offset: usize,
    size: usize,
    p: f64,
) -> Vec<(usize, usize, Weight)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            if rng.gen_bool(p) {
                pairs.push((offset + i, offset + j, 1));
            }
        }
    }
    pairs
}

fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
