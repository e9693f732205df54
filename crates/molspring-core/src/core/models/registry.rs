use super::atom::Atom;
use super::bond::BondOrder;
use super::ids::AtomId;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;

/// Holds the atoms of one derivation run and the neighbor sets built over them.
///
/// This is the central data structure of a derivation pass: an arena of atoms
/// keyed by [`AtomId`], a name index for resolving the reader's string ids, and
/// one adjacency table per bond order. The registry is constructed fresh per run
/// and never retained across runs; the indexing and expansion stages install the
/// per-order adjacency, and every later stage reads it through
/// [`neighbors_of`](AtomRegistry::neighbors_of).
///
/// Atoms are immutable after registration except for their isolation flags,
/// which only [`mark_isolated`](AtomRegistry::mark_isolated) can raise.
#[derive(Debug, Clone, Default)]
pub struct AtomRegistry {
    /// Primary storage for atoms using a slot map for efficient key management.
    atoms: SlotMap<AtomId, Atom>,
    /// Atom keys in registration order; drives every atom-major iteration.
    registration_order: Vec<AtomId>,
    /// Lookup map for resolving reader-supplied atom names to arena keys.
    name_map: HashMap<String, AtomId>,
    /// Per-order neighbor lists, indexed by atom key.
    adjacency: [SecondaryMap<AtomId, Vec<AtomId>>; 3],
    /// Which orders have had their adjacency installed.
    derived: [bool; 3],
}

impl AtomRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an atom, assigning it the next arena key.
    ///
    /// Atom names must be unique within a run: registering a second atom with an
    /// already-taken name fails, because the name index could no longer resolve
    /// bonds unambiguously.
    ///
    /// # Arguments
    ///
    /// * `atom` - The atom to register.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` on success, or `None` if the name is already taken.
    pub fn add_atom(&mut self, atom: Atom) -> Option<AtomId> {
        if self.name_map.contains_key(&atom.name) {
            return None;
        }

        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);
        self.registration_order.push(atom_id);
        self.name_map.insert(name, atom_id);
        Some(atom_id)
    }

    /// Retrieves an immutable reference to an atom by its key.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom key to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns the atom keys in registration order.
    pub fn atom_ids(&self) -> &[AtomId] {
        &self.registration_order
    }

    /// Returns an iterator over all atoms in registration order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.registration_order.iter().map(|&id| (id, &self.atoms[id]))
    }

    /// Returns the number of registered atoms.
    pub fn len(&self) -> usize {
        self.registration_order.len()
    }

    /// Returns whether the registry holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.registration_order.is_empty()
    }

    /// Finds an atom key by the reader-supplied name.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name to resolve.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if the atom exists, otherwise `None`.
    pub fn find_atom_by_name(&self, name: &str) -> Option<AtomId> {
        self.name_map.get(name).copied()
    }

    /// Returns whether the given order's adjacency has been installed.
    pub fn is_derived(&self, order: BondOrder) -> bool {
        self.derived[order.index()]
    }

    /// Retrieves the neighbor list of an atom at a given order.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom key to query.
    /// * `order` - The bond order of the adjacency to read.
    ///
    /// # Return
    ///
    /// Returns `Some(&[AtomId])` with the neighbors in insertion order, or `None`
    /// if the order has not been derived yet or the atom key is not part of this
    /// registry (check [`is_derived`](AtomRegistry::is_derived) to tell the two
    /// apart).
    pub fn neighbors_of(&self, id: AtomId, order: BondOrder) -> Option<&[AtomId]> {
        if !self.derived[order.index()] {
            return None;
        }
        self.adjacency[order.index()].get(id).map(|v| v.as_slice())
    }

    /// Raises the isolation flag of an atom for one order.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom key to mark.
    /// * `order` - The order the atom is isolated in.
    ///
    /// # Return
    ///
    /// Returns `Some(())` if the atom exists, otherwise `None`.
    pub fn mark_isolated(&mut self, id: AtomId, order: BondOrder) -> Option<()> {
        self.atoms.get_mut(id)?.isolated.mark(order);
        Some(())
    }

    /// Creates an adjacency table with an empty neighbor list for every registered
    /// atom, ready to be filled by an indexing or expansion stage. Seeding every
    /// atom keeps `neighbors_of` total over registry keys even for atoms that end
    /// up with no neighbors at the order.
    pub(crate) fn blank_adjacency(&self) -> SecondaryMap<AtomId, Vec<AtomId>> {
        let mut adjacency = SecondaryMap::new();
        for &id in &self.registration_order {
            adjacency.insert(id, Vec::new());
        }
        adjacency
    }

    /// Installs the adjacency table for one order and marks the order derived.
    /// A repeated install replaces the previous table wholesale.
    pub(crate) fn install_adjacency(
        &mut self,
        order: BondOrder,
        adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
    ) {
        self.adjacency[order.index()] = adjacency;
        self.derived[order.index()] = true;
    }
}
