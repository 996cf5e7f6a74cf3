use crate::graph::*;

/// A read-only view over the nodes of a graph.
///
/// Iteration yields every node exactly once, in index order.
#[derive(Clone, Copy)]
pub struct NodeSet<'a> {
    graph: &'a AttributedGraph,
}

/// A read-only view over the edges of a graph.
#[derive(Clone, Copy)]
pub struct EdgeSet<'a> {
    graph: &'a AttributedGraph,
}

impl<'a> NodeSet<'a> {
    pub(crate) fn new(graph: &'a AttributedGraph) -> Self {
        Self { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains<'r>(&self, r: impl Into<NodeRef<'r>>) -> bool {
        self.graph.contains_node(r)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Node> {
        self.graph.nodes()
    }
}

impl<'a> EdgeSet<'a> {
    pub(crate) fn new(graph: &'a AttributedGraph) -> Self {
        Self { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains<'r>(&self, r: impl Into<EdgeRef<'r>>) -> bool {
        self.graph.contains_edge(r)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Edge> {
        self.graph.edges()
    }
}

impl<'a> IntoIterator for NodeSet<'a> {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for EdgeSet<'a> {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for NodeSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::attribute::Element;
        f.debug_set().entries(self.iter().map(|n| n.id())).finish()
    }
}

impl std::fmt::Debug for EdgeSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::attribute::Element;
        f.debug_set().entries(self.iter().map(|e| e.id())).finish()
    }
}
