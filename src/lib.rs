//! Thunderhead - A hierarchical datastore
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use thunderhead_schema as schema;
