//! Property-based tests for the Kruskal selection loop.
//!
//! Verifies the selection loop against independent oracles, validates the
//! structural invariants of the produced forest (acyclicity, edge count,
//! parent-link orientation, path termination), and checks that both
//! disjoint-set strategies produce identical forests.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
