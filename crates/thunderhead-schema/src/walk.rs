//! Read-only traversal of a finished schema tree

use crate::store::Children;
use crate::{Node, SchemaPath, Store};
use serde::Serialize;

/// Pre-order, depth-first iterator over every descendant of a store
///
/// Siblings come out in insertion order. The walk keeps an explicit stack,
/// one frame per open store.
pub struct Walk<'a> {
    stack: Vec<(SchemaPath, Children<'a>)>,
}

impl<'a> Walk<'a> {
    fn new(root: &'a Store) -> Self {
        Self {
            stack: vec![(SchemaPath::root(), root.children())],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (SchemaPath, Node<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, siblings) = self.stack.last_mut()?;
            let Some(node) = siblings.next() else {
                self.stack.pop();
                continue;
            };

            let path = prefix.join(node.name());
            if let Node::Store(store) = node {
                self.stack.push((path.clone(), store.children()));
            }
            return Some((path, node));
        }
    }
}

/// Summary counts for a schema tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaStats {
    /// Stores below the root
    pub stores: usize,
    pub tables: usize,
    /// Depth of the deepest node; 0 for an empty root
    pub max_depth: usize,
}

impl std::fmt::Display for SchemaStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Schema Statistics:")?;
        writeln!(f, "  Stores: {}", self.stores)?;
        writeln!(f, "  Tables: {}", self.tables)?;
        writeln!(f, "  Max depth: {}", self.max_depth)?;
        Ok(())
    }
}

impl Store {
    /// Walk every descendant, yielding its path and node
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    pub fn stats(&self) -> SchemaStats {
        self.walk()
            .fold(SchemaStats::default(), |mut stats, (path, node)| {
                match node {
                    Node::Table(_) => stats.tables += 1,
                    Node::Store(_) => stats.stores += 1,
                }
                stats.max_depth = stats.max_depth.max(path.depth());
                stats
            })
    }
}
