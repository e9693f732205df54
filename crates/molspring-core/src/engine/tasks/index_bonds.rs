use crate::core::models::bond::BondOrder;
use crate::core::models::edge::Edge;
use crate::core::models::records::BondRecord;
use crate::core::models::registry::AtomRegistry;
use crate::engine::error::EngineError;
use tracing::{info, instrument, warn};

#[instrument(skip_all, name = "primary_bond_indexing_task")]
pub fn run(registry: &mut AtomRegistry, bonds: &[BondRecord]) -> Result<Vec<Edge>, EngineError> {
    info!(num_bonds = bonds.len(), "Indexing primary bonds.");

    let mut adjacency = registry.blank_adjacency();
    let mut edges = Vec::with_capacity(bonds.len());

    for bond in bonds {
        let source = registry
            .find_atom_by_name(&bond.source)
            .ok_or_else(|| EngineError::UnknownAtom {
                id: bond.source.clone(),
            })?;
        let target = registry
            .find_atom_by_name(&bond.target)
            .ok_or_else(|| EngineError::UnknownAtom {
                id: bond.target.clone(),
            })?;

        if source == target {
            warn!(atom = %bond.source, "Dropping self-bond.");
            continue;
        }

        // Duplicate input bonds stay duplicated here; canonicalization collapses
        // the edge set later.
        adjacency[source].push(target);
        adjacency[target].push(source);
        edges.push(Edge::new(source, target, BondOrder::Primary, bond.multiplicity));
    }

    registry.install_adjacency(BondOrder::Primary, adjacency);

    info!(num_edges = edges.len(), "Primary bond indexing complete.");

    Ok(edges)
}
