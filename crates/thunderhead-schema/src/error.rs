//! Error types for schema-tree construction

use crate::NodeKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Why a name was refused by the naming rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("name must not be empty")]
    Empty,

    #[error("name exceeds {max} characters")]
    TooLong { max: usize },

    #[error("character {0:?} is not allowed")]
    DisallowedChar(char),
}

/// Errors from building a schema tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// E-SCHEMA-001: The identifier fails the naming rules
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: NameViolation },

    /// E-SCHEMA-002: The parent already has a child with this name
    #[error("duplicate name {name:?} in store {parent}: slot already holds a {existing}")]
    DuplicateName {
        /// Display name of the parent store (`<root>` when unnamed)
        parent: String,
        name: String,
        /// Variant occupying the slot
        existing: NodeKind,
    },
}

impl SchemaError {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidName { .. } => "E-SCHEMA-001",
            SchemaError::DuplicateName { .. } => "E-SCHEMA-002",
        }
    }

    /// The offending identifier
    pub fn name(&self) -> &str {
        match self {
            SchemaError::InvalidName { name, .. } => name,
            SchemaError::DuplicateName { name, .. } => name,
        }
    }
}
