use crate::core::models::bond::BondOrder;
use crate::core::models::ids::AtomId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown atom id '{id}' referenced during derivation")]
    UnknownAtom { id: String },

    #[error("Duplicate atom id '{id}' in the input atom list")]
    DuplicateAtom { id: String },

    #[error("{order} neighbor sets queried before they were derived")]
    OrderNotDerived { order: BondOrder },

    #[error(
        "Ring-distance smoothing requires at least 3 tertiary edges, but only {available} exist"
    )]
    InsufficientTertiaryData { available: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl EngineError {
    /// An `UnknownAtom` error for a stale or foreign arena key, where no reader-supplied
    /// name is available.
    pub(crate) fn unknown_key(key: AtomId) -> Self {
        EngineError::UnknownAtom {
            id: format!("{key:?}"),
        }
    }
}
