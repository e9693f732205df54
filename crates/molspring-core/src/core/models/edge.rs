use super::bond::BondOrder;
use super::ids::AtomId;

/// A single edge of the bond graph at a given order.
///
/// Semantically the pair is unordered, but the edge stores a direction (the traversal
/// that produced it); canonicalization later collapses mirrored and repeated records so
/// each undirected pair survives exactly once per order. Edges are created fresh per
/// derivation run and never outlive it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Arena key of the atom the edge was emitted from.
    pub source: AtomId,
    /// Arena key of the atom the edge points at.
    pub target: AtomId,
    /// The bond order this edge belongs to.
    pub order: BondOrder,
    /// The input bond multiplicity for order-1 edges; fixed at 1 for derived orders.
    pub multiplicity: f64,
    /// Whether both endpoints are ring atoms (set by the ring annotator).
    pub ring: bool,
    /// Euclidean distance between the endpoints, 0 until computed.
    pub distance: f64,
    /// Whether either endpoint is isolated at this order (set by the isolation annotator).
    pub isolated: bool,
}

impl Edge {
    /// Creates an edge with annotation fields at their seeded defaults
    /// (`ring = false`, `distance = 0`, `isolated = false`).
    pub fn new(source: AtomId, target: AtomId, order: BondOrder, multiplicity: f64) -> Self {
        Self {
            source,
            target,
            order,
            multiplicity,
            ring: false,
            distance: 0.0,
            isolated: false,
        }
    }

    /// Creates a derived (order-2 or order-3) edge, which always carries multiplicity 1.
    pub fn derived(source: AtomId, target: AtomId, order: BondOrder) -> Self {
        Self::new(source, target, order, 1.0)
    }

    /// Returns whether the edge touches the given atom.
    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.source == atom_id || self.target == atom_id
    }

    /// Returns whether `other` covers the same pair in the opposite direction.
    /// A self-edge mirrors itself.
    pub fn is_mirror_of(&self, other: &Edge) -> bool {
        self.source == other.target && self.target == other.source
    }

    /// Returns whether `other` covers the same pair in the same direction.
    pub fn same_direction_as(&self, other: &Edge) -> bool {
        self.source == other.source && self.target == other.target
    }
}
