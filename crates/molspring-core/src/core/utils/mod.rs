//! Small, stateless helpers shared across the derivation stages and frontends.

pub mod elements;
