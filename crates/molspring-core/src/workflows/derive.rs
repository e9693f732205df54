use crate::core::models::atom::Atom;
use crate::core::models::bond::BondOrder;
use crate::core::models::edge::Edge;
use crate::core::models::records::{DerivedAtom, DerivedEdge, StructureInput};
use crate::core::models::registry::AtomRegistry;
use crate::engine::config::DerivationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use nalgebra::Point3;
use tracing::{info, instrument, warn};

/// The finished output of one derivation run: the annotated atom list plus one
/// canonicalized, annotated edge set per bond order. Owns all of its data, so it can
/// be handed to a rendering or simulation thread without further synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedGraph {
    pub atoms: Vec<DerivedAtom>,
    pub primary: Vec<DerivedEdge>,
    pub secondary: Vec<DerivedEdge>,
    pub tertiary: Vec<DerivedEdge>,
}

impl DerivedGraph {
    /// Selects one order's edge set.
    pub fn edges(&self, order: BondOrder) -> &[DerivedEdge] {
        match order {
            BondOrder::Primary => &self.primary,
            BondOrder::Secondary => &self.secondary,
            BondOrder::Tertiary => &self.tertiary,
        }
    }
}

/// Runs the complete bond graph derivation over one structure input.
///
/// The pipeline registers the atoms, indexes the primary bonds, expands and
/// materializes the second- and third-order neighbor relations, canonicalizes each
/// order's edge list, and annotates rings, distances, and isolation. Degenerate
/// input (no atoms or no bonds) short-circuits into empty edge sets; every
/// structural problem aborts with an [`EngineError`] and no partial graph.
#[instrument(skip_all, name = "derivation_workflow")]
pub fn run(
    input: &StructureInput,
    config: &DerivationConfig,
    reporter: &ProgressReporter,
) -> Result<DerivedGraph, EngineError> {
    // === Phase 0: Atom registration ===
    reporter.report(Progress::PhaseStart {
        name: "Registering Atoms",
    });
    info!(num_atoms = input.atoms.len(), "Registering atoms.");
    let mut registry = register_atoms(input)?;
    reporter.report(Progress::PhaseFinish);

    if input.is_degenerate() {
        warn!("Degenerate input (no atoms or no bonds); returning empty edge sets.");
        reporter.report(Progress::Message(
            "Degenerate input; nothing to derive.".to_string(),
        ));
        return finalize(&registry, &[], &[], &[]);
    }

    // === Phase 1: Primary bond indexing ===
    reporter.report(Progress::PhaseStart {
        name: "Indexing Primary Bonds",
    });
    let primary_raw = tasks::index_bonds::run(&mut registry, &input.bonds)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Higher-order expansion and materialization ===
    // Both expansions walk the raw (pre-canonicalization) edge list of the order
    // below, so duplicated input bonds widen the candidate lists before the
    // canonical pass cleans everything up.
    reporter.report(Progress::PhaseStart {
        name: "Expanding Higher Orders",
    });
    tasks::expand::run(&mut registry, &primary_raw, BondOrder::Secondary)?;
    let secondary_raw = tasks::materialize::run(&registry, BondOrder::Secondary)?;
    tasks::expand::run(&mut registry, &secondary_raw, BondOrder::Tertiary)?;
    let tertiary_raw = tasks::materialize::run(&registry, BondOrder::Tertiary)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Canonicalization ===
    reporter.report(Progress::PhaseStart {
        name: "Canonicalizing Edge Sets",
    });
    let mut primary = tasks::canonicalize::run(primary_raw);
    let mut secondary = tasks::canonicalize::run(secondary_raw);
    let mut tertiary = tasks::canonicalize::run(tertiary_raw);
    for (order, edges) in [
        (BondOrder::Primary, &primary),
        (BondOrder::Secondary, &secondary),
        (BondOrder::Tertiary, &tertiary),
    ] {
        info!(order = %order, num_edges = edges.len(), "Edge set canonicalized.");
        reporter.report(Progress::OrderDerived {
            order,
            edges: edges.len() as u64,
        });
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Annotation ===
    reporter.report(Progress::PhaseStart {
        name: "Annotating Edges",
    });
    annotate(
        &mut registry,
        config,
        &mut primary,
        &mut secondary,
        &mut tertiary,
    )?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 5: Resolution ===
    let graph = finalize(&registry, &primary, &secondary, &tertiary)?;

    info!(
        num_primary = graph.primary.len(),
        num_secondary = graph.secondary.len(),
        num_tertiary = graph.tertiary.len(),
        "Derivation complete."
    );
    Ok(graph)
}

fn register_atoms(input: &StructureInput) -> Result<AtomRegistry, EngineError> {
    let mut registry = AtomRegistry::new();

    for record in &input.atoms {
        let mut atom = Atom::new(
            &record.id,
            Point3::new(record.position[0], record.position[1], record.position[2]),
        );
        if let Some(element) = &record.element {
            atom.element = element.clone();
        }
        atom.ring_member = record.ring;

        if registry.add_atom(atom).is_none() {
            return Err(EngineError::DuplicateAtom {
                id: record.id.clone(),
            });
        }
    }

    Ok(registry)
}

/// Ring flags first (the smoothing pass reads them), then distances, then isolation
/// on the final per-order sets.
fn annotate(
    registry: &mut AtomRegistry,
    config: &DerivationConfig,
    primary: &mut [Edge],
    secondary: &mut [Edge],
    tertiary: &mut [Edge],
) -> Result<(), EngineError> {
    tasks::annotate_rings::run(registry, primary)?;
    tasks::annotate_rings::run(registry, secondary)?;
    tasks::annotate_rings::run(registry, tertiary)?;

    tasks::annotate_distances::run(registry, primary)?;
    tasks::annotate_distances::run(registry, secondary)?;
    tasks::annotate_distances::run(registry, tertiary)?;
    if config.smooth_ring_distances {
        tasks::annotate_distances::smooth_secondary_rings(secondary);
        tasks::annotate_distances::smooth_tertiary_closure(tertiary)?;
    }

    tasks::annotate_isolation::run(registry, primary, BondOrder::Primary)?;
    tasks::annotate_isolation::run(registry, secondary, BondOrder::Secondary)?;
    tasks::annotate_isolation::run(registry, tertiary, BondOrder::Tertiary)?;

    Ok(())
}

fn finalize(
    registry: &AtomRegistry,
    primary: &[Edge],
    secondary: &[Edge],
    tertiary: &[Edge],
) -> Result<DerivedGraph, EngineError> {
    let atoms = registry
        .atoms_iter()
        .map(|(_, atom)| DerivedAtom {
            id: atom.name.clone(),
            element: atom.element.clone(),
            position: [atom.position.x, atom.position.y, atom.position.z],
            ring: atom.ring_member,
            isolated: atom.isolated,
        })
        .collect();

    Ok(DerivedGraph {
        atoms,
        primary: resolve_edges(registry, primary)?,
        secondary: resolve_edges(registry, secondary)?,
        tertiary: resolve_edges(registry, tertiary)?,
    })
}

fn resolve_edges(registry: &AtomRegistry, edges: &[Edge]) -> Result<Vec<DerivedEdge>, EngineError> {
    edges
        .iter()
        .map(|edge| {
            let source = registry
                .atom(edge.source)
                .ok_or_else(|| EngineError::unknown_key(edge.source))?;
            let target = registry
                .atom(edge.target)
                .ok_or_else(|| EngineError::unknown_key(edge.target))?;

            Ok(DerivedEdge {
                source: source.name.clone(),
                target: target.name.clone(),
                multiplicity: edge.multiplicity,
                ring: edge.ring,
                distance: edge.distance,
                isolated: edge.isolated,
            })
        })
        .collect()
}
