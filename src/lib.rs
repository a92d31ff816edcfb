//! Derivation and conflict-resolution engine for production shoot rosters
//!
//! This crate provides the pure calculation core behind a shoot tracker:
//! field normalization for loosely-typed records, monthly roaster matrix
//! construction with conflict detection, per-artist availability windows,
//! and coordinator amount quotes.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod normalize;
pub mod roaster;
pub mod validate;
