use super::atom::IsolationFlags;
use serde::{Deserialize, Serialize};

/// One atom as supplied by the external structure reader.
///
/// The reader owns file parsing entirely; the engine only defines this record shape.
/// `element` may be omitted, in which case it is derived from the first character of
/// `id` during registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    pub position: [f64; 3],
    #[serde(default)]
    pub ring: bool,
}

/// One primary bond as supplied by the external structure reader.
///
/// Endpoints are atom id strings; `multiplicity` defaults to 1 when omitted and is
/// passed through untouched (no chemical validity checking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    pub source: String,
    pub target: String,
    #[serde(default = "default_multiplicity")]
    pub multiplicity: f64,
}

fn default_multiplicity() -> f64 {
    1.0
}

/// The complete input of one derivation run: an ordered atom list and an ordered
/// primary bond list. Ordering is significant: it determines the ordering of every
/// derived edge set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructureInput {
    #[serde(default)]
    pub atoms: Vec<AtomRecord>,
    #[serde(default)]
    pub bonds: Vec<BondRecord>,
}

impl StructureInput {
    /// Degenerate input (no atoms or no bonds) produces empty edge sets rather
    /// than an error.
    pub fn is_degenerate(&self) -> bool {
        self.atoms.is_empty() || self.bonds.is_empty()
    }
}

/// One atom of the finished graph, annotated with the derived element symbol and
/// the per-order isolation flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedAtom {
    pub id: String,
    pub element: String,
    pub position: [f64; 3],
    pub ring: bool,
    pub isolated: IsolationFlags,
}

/// One edge of the finished graph, with endpoints resolved back to atom id strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedEdge {
    pub source: String,
    pub target: String,
    pub multiplicity: f64,
    pub ring: bool,
    pub distance: f64,
    pub isolated: bool,
}
