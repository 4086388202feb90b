//! The two node variants of a schema tree

use crate::{Store, Table};
use serde::Serialize;

/// Which variant a node is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Table,
    Store,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Table => f.write_str("table"),
            NodeKind::Store => f.write_str("store"),
        }
    }
}

/// A borrowed view of one child slot of a [`Store`]
///
/// Children are only ever created by [`Store::add_store`] and
/// [`Store::add_table`], so every node has exactly one parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node<'a> {
    #[serde(rename = "table")]
    Table(&'a Table),
    #[serde(rename = "multi")]
    Store(&'a Store),
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Node::Table(table) => table.name(),
            // Children always carry a name; only a root store may be unnamed.
            Node::Store(store) => store.name().unwrap_or_default(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Table(_) => NodeKind::Table,
            Node::Store(_) => NodeKind::Store,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Node::Table(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Node::Store(_))
    }

    pub fn as_table(&self) -> Option<&'a Table> {
        match *self {
            Node::Table(table) => Some(table),
            Node::Store(_) => None,
        }
    }

    pub fn as_store(&self) -> Option<&'a Store> {
        match *self {
            Node::Store(store) => Some(store),
            Node::Table(_) => None,
        }
    }

    /// Whether both views point at the same child slot
    pub fn same_slot(&self, other: &Node<'_>) -> bool {
        match (*self, *other) {
            (Node::Table(a), Node::Table(b)) => std::ptr::eq(a, b),
            (Node::Store(a), Node::Store(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }
}
