use crate::core::models::bond::BondOrder;
use crate::core::models::edge::Edge;
use crate::core::models::ids::AtomId;
use crate::core::models::registry::AtomRegistry;
use crate::engine::error::EngineError;
use slotmap::SecondaryMap;
use tracing::{info, instrument};

type ExtendFn =
    fn(&AtomRegistry, &mut SecondaryMap<AtomId, Vec<AtomId>>, AtomId, AtomId) -> Result<(), EngineError>;

/// Walks one primary bond beyond each endpoint of the source edges and installs the
/// resulting neighbor sets for `target`. Order 2 expands the order-1 edge list,
/// order 3 the materialized order-2 edge list; both lists are taken as produced,
/// before canonicalization, so duplicated source edges widen the candidate lists
/// exactly as duplicated input bonds do.
#[instrument(skip_all, name = "higher_order_expansion_task", fields(order = %target))]
pub fn run(
    registry: &mut AtomRegistry,
    source_edges: &[Edge],
    target: BondOrder,
) -> Result<(), EngineError> {
    let extend: ExtendFn = match target {
        BondOrder::Primary => {
            return Err(EngineError::Internal(
                "expansion derives the secondary and tertiary orders only".to_string(),
            ));
        }
        BondOrder::Secondary => extend_secondary,
        BondOrder::Tertiary => extend_tertiary,
    };

    if !registry.is_derived(BondOrder::Primary) {
        return Err(EngineError::OrderNotDerived {
            order: BondOrder::Primary,
        });
    }

    info!(
        num_source_edges = source_edges.len(),
        "Expanding neighbor sets."
    );

    let mut adjacency = registry.blank_adjacency();

    for edge in source_edges {
        extend(registry, &mut adjacency, edge.source, edge.target)?;
        extend(registry, &mut adjacency, edge.target, edge.source)?;
    }

    registry.install_adjacency(target, adjacency);

    info!("Neighbor set expansion complete.");

    Ok(())
}

/// Pushes every primary neighbor of `from` into `into`'s list, excluding only `into`
/// and `from` themselves. A candidate that is already primary-bonded to `into` is
/// still included.
fn extend_secondary(
    registry: &AtomRegistry,
    adjacency: &mut SecondaryMap<AtomId, Vec<AtomId>>,
    into: AtomId,
    from: AtomId,
) -> Result<(), EngineError> {
    let candidates = registry
        .neighbors_of(from, BondOrder::Primary)
        .ok_or_else(|| EngineError::unknown_key(from))?;
    let list = adjacency
        .get_mut(into)
        .ok_or_else(|| EngineError::unknown_key(into))?;

    for &candidate in candidates {
        if candidate != into && candidate != from {
            list.push(candidate);
        }
    }

    Ok(())
}

/// Pushes every primary neighbor of `from` into `into`'s list, excluding candidates
/// that are already primary neighbors of `into` (a 3-hop walk must not re-discover a
/// directly bonded atom). When `into` has no primary neighbors the exclusion is
/// vacuously true and every candidate is taken. The rule does not exclude `into`
/// itself: a cycle can surface `into` as its own candidate, and canonicalization
/// removes that self-edge later.
fn extend_tertiary(
    registry: &AtomRegistry,
    adjacency: &mut SecondaryMap<AtomId, Vec<AtomId>>,
    into: AtomId,
    from: AtomId,
) -> Result<(), EngineError> {
    let candidates = registry
        .neighbors_of(from, BondOrder::Primary)
        .ok_or_else(|| EngineError::unknown_key(from))?;
    let near = registry
        .neighbors_of(into, BondOrder::Primary)
        .ok_or_else(|| EngineError::unknown_key(into))?;
    let list = adjacency
        .get_mut(into)
        .ok_or_else(|| EngineError::unknown_key(into))?;

    for &candidate in candidates {
        if !near.contains(&candidate) {
            list.push(candidate);
        }
    }

    Ok(())
}
