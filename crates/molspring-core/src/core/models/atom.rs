use super::bond::BondOrder;
use crate::core::utils::elements;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Per-order isolation flags for a single atom.
///
/// An atom is "isolated" with respect to one bond order when it has exactly one
/// incident edge in that order's canonicalized edge set. The flag is order-specific:
/// an atom may be isolated in the order-1 graph but well-connected in the order-2
/// graph, so the three flags are tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IsolationFlags {
    /// Isolated within the order-1 edge set.
    pub primary: bool,
    /// Isolated within the order-2 edge set.
    pub secondary: bool,
    /// Isolated within the order-3 edge set.
    pub tertiary: bool,
}

impl IsolationFlags {
    /// Reads the flag for one bond order.
    pub fn get(&self, order: BondOrder) -> bool {
        match order {
            BondOrder::Primary => self.primary,
            BondOrder::Secondary => self.secondary,
            BondOrder::Tertiary => self.tertiary,
        }
    }

    /// Raises the flag for one bond order. Annotation never clears a flag.
    pub fn mark(&mut self, order: BondOrder) {
        match order {
            BondOrder::Primary => self.primary = true,
            BondOrder::Secondary => self.secondary = true,
            BondOrder::Tertiary => self.tertiary = true,
        }
    }
}

/// Represents an atom in the bond graph with its input properties and annotation state.
///
/// Atoms are created once per derivation run from the external reader's records and
/// are owned exclusively by the
/// [`AtomRegistry`](crate::core::models::registry::AtomRegistry). All fields except
/// [`isolated`](Atom::isolated) are immutable after registration; edges refer to
/// atoms by arena key, never by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The unique atom identifier supplied by the structure reader (e.g. "C12", "O3").
    pub name: String,
    /// The element symbol, derived from the first character of the name unless the
    /// reader supplied one explicitly.
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Whether the atom participates in a cyclic substructure (reader-supplied).
    pub ring_member: bool,
    /// Per-order isolation flags set by the isolation annotator.
    pub isolated: IsolationFlags,
}

impl Atom {
    /// Creates a new `Atom` with default values for the annotation fields.
    ///
    /// The element symbol is derived from the name's first character; assign
    /// [`element`](Atom::element) afterward when the reader supplies one explicitly.
    ///
    /// # Arguments
    ///
    /// * `name` - The unique atom identifier.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element: elements::element_symbol(name),
            position,
            ring_member: false,
            isolated: IsolationFlags::default(),
        }
    }
}
