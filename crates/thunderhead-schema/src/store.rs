//! Store containers and the namespace-slot rules

use crate::{CreationMode, NamingRules, Node, NodeKind, Result, SchemaError, SchemaPath, Table};
use log::{debug, warn};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::slice;

const ROOT_DISPLAY_NAME: &str = "<root>";

/// Position of a child within its variant's list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Table(usize),
    Store(usize),
}

/// A namespace owning named children
///
/// Every child name is unique within its store, whichever variant holds it.
/// Children are enumerated in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    /// `None` only for a root store
    name: Option<String>,

    tables: Vec<Table>,
    stores: Vec<Store>,

    /// Children in insertion order
    order: Vec<Slot>,

    /// Name to child slot
    by_name: HashMap<String, Slot>,

    /// Inherited by every substore
    rules: NamingRules,
}

impl Store {
    /// Create an unnamed, empty root store
    pub fn root() -> Self {
        Self::root_with_rules(NamingRules::default())
    }

    /// Create an unnamed root store enforcing `rules` throughout its tree
    pub fn root_with_rules(rules: NamingRules) -> Self {
        Self {
            name: None,
            tables: Vec::new(),
            stores: Vec::new(),
            order: Vec::new(),
            by_name: HashMap::new(),
            rules,
        }
    }

    /// Create an empty, named store
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_rules(name, NamingRules::default())
    }

    /// Create an empty, named store enforcing `rules` throughout its tree
    pub fn with_rules(name: impl Into<String>, rules: NamingRules) -> Result<Self> {
        let name = name.into();
        rules.validate(&name)?;
        Ok(Self {
            name: Some(name),
            ..Self::root_with_rules(rules)
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn rules(&self) -> &NamingRules {
        &self.rules
    }

    /// Create an empty substore named `name` and return it for population
    ///
    /// Fails with [`SchemaError::DuplicateName`] if any child already uses
    /// `name`. On failure the store is left unchanged.
    pub fn add_store(&mut self, name: &str) -> Result<&mut Store> {
        self.check_slot(name, NodeKind::Store)?;

        let index = self.stores.len();
        self.stores.push(Store {
            name: Some(name.to_string()),
            ..Store::root_with_rules(self.rules)
        });
        self.record(name, Slot::Store(index));
        Ok(&mut self.stores[index])
    }

    /// Declare a table named `name` with the default creation policy
    ///
    /// Fails with [`SchemaError::DuplicateName`] if any child already uses
    /// `name`: declaring the same slot twice is an error, not an upsert.
    pub fn add_table(&mut self, name: &str) -> Result<&Table> {
        self.add_table_with_mode(name, CreationMode::default())
    }

    /// Declare a table named `name` with an explicit creation policy
    pub fn add_table_with_mode(&mut self, name: &str, mode: CreationMode) -> Result<&Table> {
        self.check_slot(name, NodeKind::Table)?;

        let index = self.tables.len();
        self.tables.push(Table::unchecked(name.to_string(), mode));
        self.record(name, Slot::Table(index));
        Ok(&self.tables[index])
    }

    /// Validate `name` and make sure its slot is free
    fn check_slot(&self, name: &str, kind: NodeKind) -> Result<()> {
        self.rules
            .validate(name)
            .and_then(|()| match self.get(name) {
                Some(existing) => Err(SchemaError::DuplicateName {
                    parent: self.display_name().to_string(),
                    name: name.to_string(),
                    existing: existing.kind(),
                }),
                None => Ok(()),
            })
            .inspect_err(|err| {
                warn!(
                    "event=schema_add module=schema status=rejected kind={} parent={} code={} error={}",
                    kind,
                    self.display_name(),
                    err.code(),
                    err
                )
            })
    }

    /// Register a child pushed after `check_slot` passed
    fn record(&mut self, name: &str, slot: Slot) {
        let kind = match slot {
            Slot::Table(_) => NodeKind::Table,
            Slot::Store(_) => NodeKind::Store,
        };
        debug!(
            "event=schema_add module=schema status=ok kind={} parent={} name={}",
            kind,
            self.display_name(),
            name
        );

        self.by_name.insert(name.to_string(), slot);
        self.order.push(slot);
    }

    fn node(&self, slot: Slot) -> Node<'_> {
        match slot {
            Slot::Table(index) => Node::Table(&self.tables[index]),
            Slot::Store(index) => Node::Store(&self.stores[index]),
        }
    }

    /// The store's name, or `<root>` when unnamed
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ROOT_DISPLAY_NAME)
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get a direct child by name
    pub fn get(&self, name: &str) -> Option<Node<'_>> {
        self.by_name.get(name).map(|&slot| self.node(slot))
    }

    /// Get a direct child table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        match *self.by_name.get(name)? {
            Slot::Table(index) => Some(&self.tables[index]),
            Slot::Store(_) => None,
        }
    }

    /// Get a direct child store by name
    pub fn store(&self, name: &str) -> Option<&Store> {
        match *self.by_name.get(name)? {
            Slot::Store(index) => Some(&self.stores[index]),
            Slot::Table(_) => None,
        }
    }

    /// Get a direct child store by name, for further population
    pub fn store_mut(&mut self, name: &str) -> Option<&mut Store> {
        match *self.by_name.get(name)? {
            Slot::Store(index) => Some(&mut self.stores[index]),
            Slot::Table(_) => None,
        }
    }

    /// Iterate over direct children in insertion order
    pub fn children(&self) -> Children<'_> {
        Children {
            store: self,
            order: self.order.iter(),
        }
    }

    /// Iterate over direct child names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children().map(|node| node.name())
    }

    /// Resolve a path to a descendant node
    ///
    /// The empty path addresses this store itself, which is not a child
    /// node, so it resolves to `None`; use [`Store::resolve_store`] for it.
    pub fn resolve(&self, path: &SchemaPath) -> Option<Node<'_>> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.store(segment)?;
        }
        current.get(last)
    }

    /// Resolve a path to a store; the empty path returns `self`
    pub fn resolve_store(&self, path: &SchemaPath) -> Option<&Store> {
        path.segments()
            .iter()
            .try_fold(self, |current, segment| current.store(segment))
    }

    /// Parse `path` and resolve it to a descendant node
    pub fn resolve_str(&self, path: &str) -> Result<Option<Node<'_>>> {
        let path = SchemaPath::parse(path)?;
        Ok(self.resolve(&path))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::root()
    }
}

/// Iterator over the direct children of a [`Store`], in insertion order
#[derive(Debug, Clone)]
pub struct Children<'a> {
    store: &'a Store,
    order: slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = *self.order.next()?;
        Some(self.store.node(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Store", 2)?;
        match &self.name {
            Some(name) => state.serialize_field("name", name)?,
            None => state.skip_field("name")?,
        }
        state.serialize_field("substores", &Substores(self))?;
        state.end()
    }
}

/// Children as a name-keyed map, in insertion order
struct Substores<'a>(&'a Store);

impl Serialize for Substores<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for node in self.0.children() {
            map.serialize_entry(node.name(), &node)?;
        }
        map.end()
    }
}
