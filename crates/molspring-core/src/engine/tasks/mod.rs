//! Tasks for bond graph derivation and annotation.
//!
//! Tasks are the computational stages of a derivation run. Each submodule implements
//! one stage: indexing the primary bonds, expanding them into higher-order neighbor
//! sets, materializing edge records, collapsing duplicate records, and annotating
//! edges with ring membership, spring distances, and isolation flags. Stages are
//! pure over their inputs and composed by the workflow layer in a fixed order.

pub mod annotate_distances;
pub mod annotate_isolation;
pub mod annotate_rings;
pub mod canonicalize;
pub mod expand;
pub mod index_bonds;
pub mod materialize;
