use crate::{
    attribute::Element,
    graph::{Edge, Node},
    low_level::{EdgeHandle, NodeHandle},
};

/// The ways of naming a node: by id, by current index, by handle or by a `&Node`.
///
/// All of them resolve through one lookup in the graph.
/// A `&Node` resolves only if this graph holds a node with both its handle and its id,
/// so a node taken from another graph is not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Id(&'a str),
    Index(usize),
    Handle(NodeHandle),
    Node { handle: NodeHandle, id: &'a str },
}

/// The ways of naming an edge: by id, by current index, by handle or by an `&Edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRef<'a> {
    Id(&'a str),
    Index(usize),
    Handle(EdgeHandle),
    Edge { handle: EdgeHandle, id: &'a str },
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(id: &'a str) -> Self {
        NodeRef::Id(id)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(id: &'a String) -> Self {
        NodeRef::Id(id.as_str())
    }
}

impl From<usize> for NodeRef<'_> {
    fn from(index: usize) -> Self {
        NodeRef::Index(index)
    }
}

impl From<NodeHandle> for NodeRef<'_> {
    fn from(handle: NodeHandle) -> Self {
        NodeRef::Handle(handle)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        NodeRef::Node {
            handle: node.handle(),
            id: node.id(),
        }
    }
}

impl<'a> From<&'a str> for EdgeRef<'a> {
    fn from(id: &'a str) -> Self {
        EdgeRef::Id(id)
    }
}

impl<'a> From<&'a String> for EdgeRef<'a> {
    fn from(id: &'a String) -> Self {
        EdgeRef::Id(id.as_str())
    }
}

impl From<usize> for EdgeRef<'_> {
    fn from(index: usize) -> Self {
        EdgeRef::Index(index)
    }
}

impl From<EdgeHandle> for EdgeRef<'_> {
    fn from(handle: EdgeHandle) -> Self {
        EdgeRef::Handle(handle)
    }
}

impl<'a> From<&'a Edge> for EdgeRef<'a> {
    fn from(edge: &'a Edge) -> Self {
        EdgeRef::Edge {
            handle: edge.handle(),
            id: edge.id(),
        }
    }
}

impl std::fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRef::Id(id) => write!(f, "id {:?}", id),
            NodeRef::Index(i) => write!(f, "index {}", i),
            NodeRef::Handle(h) => write!(f, "handle {}", h.to_raw()),
            NodeRef::Node { handle, id } => write!(f, "node {:?} at handle {}", id, handle.to_raw()),
        }
    }
}

impl std::fmt::Display for EdgeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeRef::Id(id) => write!(f, "id {:?}", id),
            EdgeRef::Index(i) => write!(f, "index {}", i),
            EdgeRef::Handle(h) => write!(f, "handle {}", h.to_raw()),
            EdgeRef::Edge { handle, id } => write!(f, "edge {:?} at handle {}", id, handle.to_raw()),
        }
    }
}

