//! A mutable multigraph whose graph, nodes and edges carry typed attributes.
//!
//! * [`graph::AttributedGraph`] is the entry point. Nodes and edges are unique by string id,
//!   densely indexed, and reachable by id, index or handle.
//! * [`attribute`] holds the attribute values and the [`attribute::Element`] trait
//!   shared by graphs, nodes and edges.
//! * [`export`] writes graphs as DGS, compressed DGS, GML, graphviz or TikZ.
//! * [`low_level`] is the handle-only topology underneath.
//!
//! ```rust
//! use attrgraph::{attribute::*, graph::*};
//!
//! let mut g = AttributedGraph::new("g");
//! g.add_node("A").unwrap();
//! g.add_node("B").unwrap();
//! g.add_edge("AB", "A", "B", false).unwrap();
//! g.edge_mut("AB").unwrap().add_attribute("weight", 3).unwrap();
//!
//! assert_eq!(g.edge("AB").unwrap().number("weight"), Some(3.0));
//! assert!(g.add_edge("AC", "A", "C", false).is_err());
//! ```

pub mod attribute;
pub mod error;
pub mod export;
pub mod graph;
pub mod low_level;
