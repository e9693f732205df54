use crate::core::models::bond::BondOrder;
use crate::core::models::edge::Edge;
use crate::core::models::registry::AtomRegistry;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

/// Turns a derived order's neighbor sets into concrete edge records, one per
/// (atom, neighbor) pair, walking atoms in registration order. Order-1 edges are
/// materialized by the indexer directly from the bond records, so only the derived
/// orders are accepted here.
#[instrument(skip_all, name = "edge_materialization_task", fields(order = %order))]
pub fn run(registry: &AtomRegistry, order: BondOrder) -> Result<Vec<Edge>, EngineError> {
    if order == BondOrder::Primary {
        return Err(EngineError::Internal(
            "order-1 edges are materialized by the indexer".to_string(),
        ));
    }
    if !registry.is_derived(order) {
        return Err(EngineError::OrderNotDerived { order });
    }

    let mut edges = Vec::new();
    for &atom_id in registry.atom_ids() {
        let neighbors = registry
            .neighbors_of(atom_id, order)
            .ok_or_else(|| EngineError::unknown_key(atom_id))?;
        for &neighbor in neighbors {
            edges.push(Edge::derived(atom_id, neighbor, order));
        }
    }

    info!(num_edges = edges.len(), "Materialized edge records.");

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::ids::AtomId;
    use crate::core::models::records::BondRecord;
    use crate::engine::tasks::{expand, index_bonds};
    use nalgebra::Point3;

    fn path_registry(names: &[&str], bonds: &[(&str, &str)]) -> (AtomRegistry, Vec<AtomId>) {
        let mut registry = AtomRegistry::new();
        let ids: Vec<AtomId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                registry
                    .add_atom(Atom::new(name, Point3::new(i as f64, 0.0, 0.0)))
                    .unwrap()
            })
            .collect();

        let records: Vec<BondRecord> = bonds
            .iter()
            .map(|(source, target)| BondRecord {
                source: source.to_string(),
                target: target.to_string(),
                multiplicity: 1.0,
            })
            .collect();
        let primary = index_bonds::run(&mut registry, &records).unwrap();
        expand::run(&mut registry, &primary, BondOrder::Secondary).unwrap();

        (registry, ids)
    }

    #[test]
    fn edges_follow_atom_registration_order() {
        let (registry, ids) = path_registry(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
        );
        let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);

        let edges = run(&registry, BondOrder::Secondary).unwrap();

        let pairs: Vec<(AtomId, AtomId)> = edges.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(
            pairs,
            vec![(a, c), (b, d), (c, a), (c, e), (d, b), (e, c)]
        );
    }

    #[test]
    fn derived_edges_carry_seeded_annotation_fields() {
        let (registry, _) = path_registry(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        let edges = run(&registry, BondOrder::Secondary).unwrap();

        assert!(!edges.is_empty());
        for edge in &edges {
            assert_eq!(edge.order, BondOrder::Secondary);
            assert_eq!(edge.multiplicity, 1.0);
            assert!(!edge.ring);
            assert_eq!(edge.distance, 0.0);
            assert!(!edge.isolated);
        }
    }

    #[test]
    fn materialization_requires_the_order_to_be_derived() {
        let mut registry = AtomRegistry::new();
        registry
            .add_atom(Atom::new("a", Point3::origin()))
            .unwrap();

        let result = run(&registry, BondOrder::Tertiary);

        assert!(matches!(
            result,
            Err(EngineError::OrderNotDerived {
                order: BondOrder::Tertiary
            })
        ));
    }

    #[test]
    fn materialization_rejects_the_primary_order() {
        let (registry, _) = path_registry(&["a", "b"], &[("a", "b")]);

        let result = run(&registry, BondOrder::Primary);

        assert!(matches!(result, Err(EngineError::Internal(_))));
    }
}
