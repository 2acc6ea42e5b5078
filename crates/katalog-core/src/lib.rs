//! Core data model for katalog.
//!
//! This crate defines the types behind catalog generation: dependency
//! coordinates, deterministic alias derivation, the per-run dependency
//! aggregator (filter, dedup, version grouping), and the version
//! catalog document (render and order-preserving parse).
//!
//! This crate performs no file I/O; callers feed it text and write out
//! what it returns.

pub mod aggregator;
pub mod alias;
pub mod catalog;
pub mod coordinate;
