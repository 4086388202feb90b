//! thunderhead-schema: Schema-tree builder
//!
//! This crate declares the logical layout of a Thunderhead datastore:
//! - `Store` nodes are namespaces owning uniquely named children
//! - `Table` nodes are leaves naming one data collection and its creation policy
//! - Children are only created through `add_store`/`add_table`, so every
//!   tree is finite, acyclic and singly parented
//!
//! The finished tree is a plain value; binding it to storage is done elsewhere.
//!
//! # Example
//!
//! ```
//! use thunderhead_schema::{CreationMode, SchemaError, Store};
//!
//! let mut root = Store::root();
//! root.add_store("users")?.add_table("profile")?;
//!
//! let profile = root.resolve_str("/users/profile")?.unwrap();
//! assert_eq!(profile.as_table().unwrap().mode(), CreationMode::CreateOrSet);
//!
//! // A namespace slot is taken whatever the variant holding it.
//! assert!(matches!(
//!     root.add_table("users"),
//!     Err(SchemaError::DuplicateName { .. })
//! ));
//! # Ok::<(), SchemaError>(())
//! ```

mod error;
mod name;
mod node;
mod path;
mod store;
mod table;
mod walk;

pub use error::{NameViolation, Result, SchemaError};
pub use name::{validate_name, Charset, NamingRules};
pub use node::{Node, NodeKind};
pub use path::{SchemaPath, SEPARATOR};
pub use store::{Children, Store};
pub use table::{CreationMode, Table};
pub use walk::{SchemaStats, Walk};
