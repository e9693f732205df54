//! # Molspring Core Library
//!
//! A bond graph derivation engine for force-directed molecular visualization: from an atom
//! list and a primary bond list, it derives canonicalized first-, second-, and third-order
//! bond edge sets annotated with ring membership, pairwise distance, and isolation flags,
//! ready to be consumed as spring constraints by an external layout simulation.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation
//! of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`AtomRegistry`, edge and
//!   record types), the layout tuning profile consumed by external simulations, and small
//!   classification utilities.
//!
//! - **[`engine`]: The Logic Core.** The derivation stages themselves: primary bond indexing,
//!   higher-order neighbor expansion, edge materialization, duplicate canonicalization, and
//!   the ring/distance/isolation annotators, plus the error, configuration, and progress
//!   plumbing they share.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It chains the
//!   engine stages into the complete derivation pass and returns the finished
//!   [`DerivedGraph`](workflows::derive::DerivedGraph).

pub mod core;
pub mod engine;
pub mod workflows;
