use crate::core::models::edge::Edge;
use crate::core::models::registry::AtomRegistry;
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument};

/// The fixed number of leading tertiary edges averaged by
/// [`smooth_tertiary_closure`]. The reference structure closes its ring with exactly
/// three tertiary edges; see the workflow documentation for the limits of this rule.
pub const TERTIARY_CLOSURE_EDGES: usize = 3;

/// Fills in the Euclidean distance between the endpoints of every edge.
///
/// Distances are geometric only; the per-order scaling into spring rest lengths is
/// the simulation layer's job (see [`SpringTuning`](crate::core::layout::SpringTuning)).
#[instrument(skip_all, name = "distance_annotation_task")]
pub fn run(registry: &AtomRegistry, edges: &mut [Edge]) -> Result<(), EngineError> {
    for edge in edges.iter_mut() {
        let source = registry
            .atom(edge.source)
            .ok_or_else(|| EngineError::unknown_key(edge.source))?;
        let target = registry
            .atom(edge.target)
            .ok_or_else(|| EngineError::unknown_key(edge.target))?;

        edge.distance = (source.position - target.position).norm();
    }

    info!(num_edges = edges.len(), "Distance annotation complete.");

    Ok(())
}

/// Overwrites every ring edge's distance with the mean over the ring edges,
/// uniformizing ring spring lengths. Applied to the order-2 set when smoothing is
/// enabled; a set without ring edges is left untouched.
#[instrument(skip_all, name = "ring_distance_smoothing")]
pub fn smooth_secondary_rings(edges: &mut [Edge]) {
    let ring_distances: Vec<f64> = edges.iter().filter(|e| e.ring).map(|e| e.distance).collect();
    if ring_distances.is_empty() {
        debug!("No ring edges present; skipping smoothing.");
        return;
    }

    let mean = ring_distances.iter().sum::<f64>() / ring_distances.len() as f64;
    for edge in edges.iter_mut().filter(|e| e.ring) {
        edge.distance = mean;
    }

    info!(
        num_ring = ring_distances.len(),
        mean_distance = mean,
        "Uniformized ring edge distances."
    );
}

/// Overwrites the distances of the first [`TERTIARY_CLOSURE_EDGES`] edges with their
/// mean. Applied to the order-3 set when smoothing is enabled; fails with
/// [`EngineError::InsufficientTertiaryData`] when the set is too small, instead of
/// averaging over a partial window.
#[instrument(skip_all, name = "tertiary_closure_smoothing")]
pub fn smooth_tertiary_closure(edges: &mut [Edge]) -> Result<(), EngineError> {
    if edges.len() < TERTIARY_CLOSURE_EDGES {
        return Err(EngineError::InsufficientTertiaryData {
            available: edges.len(),
        });
    }

    let window = &mut edges[..TERTIARY_CLOSURE_EDGES];
    let mean = window.iter().map(|e| e.distance).sum::<f64>() / TERTIARY_CLOSURE_EDGES as f64;
    for edge in window {
        edge.distance = mean;
    }

    info!(mean_distance = mean, "Averaged tertiary closure distances.");

    Ok(())
}
