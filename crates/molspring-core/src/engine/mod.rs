//! # Engine Module
//!
//! This module implements the bond graph derivation engine: the staged transformation
//! that turns a registered atom list and primary bond list into canonicalized,
//! annotated edge sets for all three bond orders.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Configuration** ([`config`]) - Per-run derivation options
//! - **Progress Monitoring** ([`progress`]) - Progress reporting and user feedback
//! - **Error Handling** ([`error`]) - Engine-specific error types and propagation
//! - **Tasks** (internal) - One module per derivation stage: primary bond indexing,
//!   higher-order expansion, edge materialization, duplicate canonicalization, and
//!   the ring/distance/isolation annotators
//!
//! Each stage is a pure function over the registry and the current edge lists; the
//! [`workflows`](crate::workflows) layer chains them in the required order.

pub mod config;
pub mod error;
pub mod progress;
pub(crate) mod tasks;
