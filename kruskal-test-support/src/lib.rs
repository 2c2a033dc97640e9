//! Shared test utilities used across kruskal crates.

pub mod fixtures;
pub mod profile;
pub mod tracing;
