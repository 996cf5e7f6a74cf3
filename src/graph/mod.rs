//! The attributed graph, its nodes and edges, and the ways to refer to them.
//!
//! # Ids, indices and handles
//!
//! Every node and edge has a string id, unique within its graph,
//! and an index, its current slot in the graph's dense storage.
//! Removing an element may move another one into the freed slot,
//! so indices must not be kept across removals.
//!
//! Handles ([`NodeHandle`](crate::low_level::NodeHandle), [`EdgeHandle`](crate::low_level::EdgeHandle))
//! are copyable and stay valid until their element is removed.
//! They are the idiomatic way to hold on to an element while mutating the graph,
//! since a `&Node` borrowed from the graph cannot outlive the next mutation.
//!
//! Every operation taking a node accepts `impl Into<NodeRef>`:
//! an id (`&str`), an index (`usize`), a handle or a `&Node`.
//! Edges likewise take `impl Into<EdgeRef>`.
//!
//! # Policies
//!
//! * `strict`: edge creation requires both endpoints to exist.
//! * `auto_create`: when not strict, missing endpoint ids are created on the fly.
//! * `null_attributes_are_errors`: reading a missing attribute fails instead of giving `None`.

mod config;
pub use self::config::*;
mod node;
pub use self::node::*;
mod edge;
pub use self::edge::*;
mod reference;
pub use self::reference::*;
mod sets;
pub use self::sets::*;
mod attributed;
pub use self::attributed::*;
mod view;
pub use self::view::*;
