//! Slash-separated addressing of schema nodes

use crate::{validate_name, NameViolation, Result, SchemaError};
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};
use std::str::FromStr;

pub const SEPARATOR: char = '/';

/// Escapes a literal `/` or `\` inside a segment
pub const ESCAPE: char = '\\';

/// A path from a root store to a descendant, e.g. `/users/profile`
///
/// The empty path (`/`) addresses the root itself. Segments are node names;
/// a name containing `/` or `\` is written with those characters escaped,
/// so the table `a/b` under the root is `/a\/b`, distinct from `/a/b`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SchemaPath {
    segments: Vec<String>,
}

impl SchemaPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse `a/b/c` or `/a/b/c`; every segment must be a valid name
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.strip_prefix(SEPARATOR).unwrap_or(path);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = trimmed.chars();
        while let Some(c) = chars.next() {
            match c {
                SEPARATOR => segments.push(finish_segment(std::mem::take(&mut current))?),
                ESCAPE => match chars.next() {
                    Some(escaped @ (SEPARATOR | ESCAPE)) => current.push(escaped),
                    _ => {
                        return Err(SchemaError::InvalidName {
                            name: path.to_string(),
                            reason: NameViolation::DisallowedChar(ESCAPE),
                        })
                    }
                },
                other => current.push(other),
            }
        }
        segments.push(finish_segment(current)?);
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; the root has depth 0
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment, if any
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn parent(&self) -> Option<SchemaPath> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    pub fn join(&self, name: &str) -> SchemaPath {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }
}

fn finish_segment(segment: String) -> Result<String> {
    validate_name(&segment)?;
    Ok(segment)
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_char(SEPARATOR);
        }
        for segment in &self.segments {
            f.write_char(SEPARATOR)?;
            for c in segment.chars() {
                if c == SEPARATOR || c == ESCAPE {
                    f.write_char(ESCAPE)?;
                }
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for SchemaPath {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SchemaPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
