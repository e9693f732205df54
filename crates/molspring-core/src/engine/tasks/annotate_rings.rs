use crate::core::models::edge::Edge;
use crate::core::models::registry::AtomRegistry;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

/// Marks every edge whose endpoints are both ring atoms as a ring edge.
///
/// The annotation is monotonic: an edge already flagged stays flagged, and an edge
/// whose endpoints are not both ring members keeps whatever value it carries. The
/// ring flags themselves are reader-supplied atom properties; no cycle detection
/// happens here.
#[instrument(skip_all, name = "ring_annotation_task")]
pub fn run(registry: &AtomRegistry, edges: &mut [Edge]) -> Result<(), EngineError> {
    let mut num_ring = 0;

    for edge in edges.iter_mut() {
        let source = registry
            .atom(edge.source)
            .ok_or_else(|| EngineError::unknown_key(edge.source))?;
        let target = registry
            .atom(edge.target)
            .ok_or_else(|| EngineError::unknown_key(edge.target))?;

        if source.ring_member && target.ring_member {
            edge.ring = true;
        }
        if edge.ring {
            num_ring += 1;
        }
    }

    info!(
        num_edges = edges.len(),
        num_ring = num_ring,
        "Ring annotation complete."
    );

    Ok(())
}
