//! Identifier validation
//!
//! The core only requires names to be non-empty. An embedding engine that
//! has stricter naming rules supplies them through [`NamingRules`] when it
//! creates the root store; every substore inherits the rules of its parent.

use crate::{NameViolation, Result, SchemaError};
use serde::Serialize;

/// Characters a name may contain
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Charset {
    /// Any character
    #[default]
    Any,
    /// ASCII alphanumerics and `_`, not starting with a digit
    Identifier,
}

/// Naming rules applied to every store and table name
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamingRules {
    /// Maximum length in characters
    pub max_len: Option<usize>,
    pub charset: Charset,
}

impl NamingRules {
    /// Non-empty names only
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Conventional identifiers, e.g. `user_profiles`
    pub fn identifier() -> Self {
        Self {
            max_len: None,
            charset: Charset::Identifier,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Check a name against these rules
    pub fn validate(&self, name: &str) -> Result<()> {
        self.violation(name).map_or(Ok(()), |reason| {
            Err(SchemaError::InvalidName {
                name: name.to_string(),
                reason,
            })
        })
    }

    fn violation(&self, name: &str) -> Option<NameViolation> {
        if name.is_empty() {
            return Some(NameViolation::Empty);
        }

        if let Some(max) = self.max_len {
            if name.chars().count() > max {
                return Some(NameViolation::TooLong { max });
            }
        }

        match self.charset {
            Charset::Any => None,
            Charset::Identifier => name.chars().enumerate().find_map(|(i, c)| {
                let allowed = c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit());
                (!allowed).then_some(NameViolation::DisallowedChar(c))
            }),
        }
    }
}

/// Validate a name against the default rules (non-empty only)
pub fn validate_name(name: &str) -> Result<()> {
    NamingRules::default().validate(name)
}
