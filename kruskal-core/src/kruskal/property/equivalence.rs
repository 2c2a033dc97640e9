//! Oracle and cross-strategy equivalence checks.

use crate::{DisjointSetStrategy, KruskalBuilder, SpanningForest};

use super::oracle::{brute_force_total, prim_summary};
use super::types::GraphCase;

fn run_with(case: &GraphCase, strategy: DisjointSetStrategy) -> Result<SpanningForest, String> {
    KruskalBuilder::new()
        .with_disjoint_set(strategy)
        .build()
        .run(&case.graph())
        .map_err(|err| format!("{}: {} run failed: {err}", case.context(), strategy.as_str()))
}

/// The forest weight matches Prim's algorithm, and the exhaustive minimum
/// when the case is small enough to enumerate.
pub(super) fn run_oracle_property(case: &GraphCase) -> Result<(), String> {
    let ctx = case.context();
    let forest = run_with(case, DisjointSetStrategy::OwnerTable)?;
    let expected = prim_summary(case);

    if forest.total_weight() != expected.total_weight {
        return Err(format!(
            "{ctx}: total weight {} but Prim found {}",
            forest.total_weight(),
            expected.total_weight
        ));
    }
    if forest.edges().len() != expected.edge_count {
        return Err(format!(
            "{ctx}: {} edges but Prim found {}",
            forest.edges().len(),
            expected.edge_count
        ));
    }
    if let Some(best) = brute_force_total(case)
        && best != forest.total_weight()
    {
        return Err(format!(
            "{ctx}: total weight {} but exhaustive minimum is {best}",
            forest.total_weight()
        ));
    }
    Ok(())
}

/// Both disjoint-set strategies accept the same edges and leave the same
/// parent links.
pub(super) fn run_strategy_equivalence_property(case: &GraphCase) -> Result<(), String> {
    let owner = run_with(case, DisjointSetStrategy::OwnerTable)?;
    let ranked = run_with(case, DisjointSetStrategy::RankedForest)?;
    if owner != ranked {
        return Err(format!(
            "{}: strategies disagree\nowner-table: {:?}\nranked-forest: {:?}",
            case.context(),
            owner.edges(),
            ranked.edges()
        ));
    }
    Ok(())
}
