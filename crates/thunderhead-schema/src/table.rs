//! Table declarations

use crate::{validate_name, Result};
use serde::Serialize;

/// What content-level creation does when a table of the same name exists
///
/// This governs table *content*. Namespace slots are never overwritten,
/// whatever the mode: see [`Store::add_table`](crate::Store::add_table).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationMode {
    /// Create the table, or update the existing definition in place
    #[default]
    CreateOrSet,
    /// Create the table; fail if it already exists
    Create,
    /// Update an existing table; fail if it does not exist
    Set,
}

impl CreationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreationMode::CreateOrSet => "create_or_set",
            CreationMode::Create => "create",
            CreationMode::Set => "set",
        }
    }
}

impl std::fmt::Display for CreationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf of the schema tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    name: String,
    mode: CreationMode,
}

impl Table {
    /// Declare a table with the default [`CreationMode::CreateOrSet`] policy
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::unchecked(name, CreationMode::default()))
    }

    /// Build a table whose name was already validated by its parent
    pub(crate) fn unchecked(name: String, mode: CreationMode) -> Self {
        Self { name, mode }
    }

    /// Replace the creation policy before the table is attached
    pub fn with_mode(mut self, mode: CreationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> CreationMode {
        self.mode
    }
}
