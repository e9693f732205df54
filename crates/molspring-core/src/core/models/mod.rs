//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a molecule's
//! bond graph during derivation, providing the foundation for all engine stages.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for representing atoms, derived
//! edges, and their connectivity at each bond order. These models are designed to:
//!
//! - **Represent the derivation state** - Atoms, per-order adjacency, and edge records
//! - **Support deterministic iteration** - Registration and insertion order drive every
//!   loop; no hash-map iteration order ever reaches an output sequence
//! - **Keep ownership simple** - Atoms live in an arena owned by the registry; edges
//!   refer to atoms by key, never by reference
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with coordinates and annotation flags
//! - [`bond`] - Bond order classification (primary/secondary/tertiary)
//! - [`edge`] - A single derived edge between two atoms
//! - [`records`] - Serializable boundary records exchanged with external readers and
//!   renderers
//! - [`registry`] - The per-run atom registry: arena, id index, and adjacency
//! - [`ids`] - Arena key types

pub mod atom;
pub mod bond;
pub mod edge;
pub mod ids;
pub mod records;
pub mod registry;
