use crate::{attribute::*, low_level::NodeHandle};

/// A node of an [`AttributedGraph`](crate::graph::AttributedGraph).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    handle: NodeHandle,
    id: String,
    index: usize,
    attributes: Attributes,
}

impl Node {
    pub(crate) fn new(handle: NodeHandle, id: String, index: usize, attributes: Attributes) -> Self {
        Self {
            handle,
            id,
            index,
            attributes,
        }
    }

    /// A copyable reference to this node, valid until the node is removed.
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Current position among the nodes of the graph.
    ///
    /// Removing any node may move another one into its slot,
    /// so do not keep indices across removals.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl Element for Node {
    fn id(&self) -> &str {
        &self.id
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
