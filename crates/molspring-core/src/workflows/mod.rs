//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate a complete
//! bond graph derivation run.
//!
//! ## Overview
//!
//! Workflows are the top-level API of molspring. They encapsulate the entire
//! derivation pipeline, from atom registration through the annotated, canonicalized
//! edge sets, handling progress reporting and error propagation so callers get a
//! single function with a single result type.
//!
//! ## Architecture
//!
//! - **Derivation Workflow** ([`derive`]) - Full first/second/third-order bond graph
//!   derivation with ring, distance, and isolation annotation.

pub mod derive;
