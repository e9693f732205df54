//! # Core Module
//!
//! This module provides the fundamental building blocks for bond graph derivation:
//! the data structures a derivation run operates on and the small, stateless
//! utilities shared by the engine stages.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bond orders, edges, boundary
//!   records, and the per-run atom registry with its adjacency indexes
//! - **Layout Tuning** ([`layout`]) - Named spring/charge constants consumed by the
//!   external force simulation, loadable from TOML profiles
//! - **Utilities** ([`utils`]) - Element classification and display metadata

pub mod layout;
pub mod models;
pub mod utils;
