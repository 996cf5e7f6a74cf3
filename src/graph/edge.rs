use crate::{
    attribute::*,
    low_level::{EdgeHandle, NodeHandle},
};

/// An edge of an [`AttributedGraph`](crate::graph::AttributedGraph).
///
/// Endpoints and directedness are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    handle: EdgeHandle,
    id: String,
    index: usize,
    source: (NodeHandle, String),
    target: (NodeHandle, String),
    directed: bool,
    attributes: Attributes,
}

impl Edge {
    pub(crate) fn new(
        handle: EdgeHandle,
        id: String,
        index: usize,
        source: (NodeHandle, String),
        target: (NodeHandle, String),
        directed: bool,
        attributes: Attributes,
    ) -> Self {
        Self {
            handle,
            id,
            index,
            source,
            target,
            directed,
            attributes,
        }
    }

    pub fn handle(&self) -> EdgeHandle {
        self.handle
    }

    /// Current position among the edges of the graph. Not stable across removals.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Id of the source node.
    pub fn source(&self) -> &str {
        &self.source.1
    }

    /// Id of the target node.
    pub fn target(&self) -> &str {
        &self.target.1
    }

    pub fn source_handle(&self) -> NodeHandle {
        self.source.0
    }

    pub fn target_handle(&self) -> NodeHandle {
        self.target.0
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_loop(&self) -> bool {
        self.source.0 == self.target.0
    }

    /// Id of the endpoint across from `node_id`,
    /// or `None` if `node_id` is not an endpoint.
    pub fn opposite(&self, node_id: &str) -> Option<&str> {
        if self.source.1 == node_id {
            Some(&self.target.1)
        } else if self.target.1 == node_id {
            Some(&self.source.1)
        } else {
            None
        }
    }
}

impl Element for Edge {
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
