use crate::core::models::bond::BondOrder;
use crate::core::models::edge::Edge;
use crate::core::models::registry::AtomRegistry;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

/// Flags atoms with exactly one incident edge in the given order's canonicalized
/// edge set, then propagates the flag onto every edge touching such an atom.
///
/// The two steps are distinct on purpose: an edge is isolated-tagged because one
/// of its *atoms* is isolated at this order, not because of the edge's own degree
/// contribution. Runs on the canonicalized set, so mirrored records never double
/// an atom's count.
#[instrument(skip_all, name = "isolation_annotation_task", fields(order = %order))]
pub fn run(
    registry: &mut AtomRegistry,
    edges: &mut [Edge],
    order: BondOrder,
) -> Result<(), EngineError> {
    let mut num_isolated_atoms = 0;

    // Collected up front: marking borrows the registry mutably.
    let atom_ids: Vec<_> = registry.atom_ids().to_vec();
    for atom_id in atom_ids {
        let incident = edges.iter().filter(|e| e.contains(atom_id)).count();
        if incident == 1 {
            registry
                .mark_isolated(atom_id, order)
                .ok_or_else(|| EngineError::unknown_key(atom_id))?;
            num_isolated_atoms += 1;
        }
    }

    let mut num_isolated_edges = 0;
    for edge in edges.iter_mut() {
        let source = registry
            .atom(edge.source)
            .ok_or_else(|| EngineError::unknown_key(edge.source))?;
        let target = registry
            .atom(edge.target)
            .ok_or_else(|| EngineError::unknown_key(edge.target))?;

        if source.isolated.get(order) || target.isolated.get(order) {
            edge.isolated = true;
            num_isolated_edges += 1;
        }
    }

    info!(
        num_isolated_atoms = num_isolated_atoms,
        num_isolated_edges = num_isolated_edges,
        "Isolation annotation complete."
    );

    Ok(())
}
