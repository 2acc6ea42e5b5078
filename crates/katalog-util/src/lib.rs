//! Shared utilities for the katalog build-maintenance library.
//!
//! This crate provides the cross-cutting concerns used by the other
//! katalog crates: error types and filesystem helpers for discovering
//! build-declaration files.

pub mod errors;
pub mod fs;
