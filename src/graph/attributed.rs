use crate::{attribute::*, error::*, graph::*, low_level::*};
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// A mutable multigraph whose graph, nodes and edges carry typed attributes.
///
/// Nodes and edges are unique by string id and stored densely:
/// their indices run from `0` to `count - 1`,
/// and removing an element moves the last one into the freed slot.
/// Handles, unlike indices, stay valid until their element is removed.
///
/// Each edge is directed or not on its own, so one graph may mix both.
///
/// ```rust
/// use attrgraph::{attribute::*, graph::*};
///
/// let mut g = AttributedGraph::with_policy("g", false, true);
/// g.add_edge("AB", "A", "B", true).unwrap();
/// assert_eq!(g.node_count(), 2);
///
/// g.node_mut("A").unwrap().add_attribute("weight", 1.5).unwrap();
/// assert!(g.node("A").unwrap().has_number("weight"));
///
/// g.remove_node("B").unwrap();
/// assert_eq!(g.edge_count(), 0);
/// assert!(g.edge("AB").is_none());
/// ```
#[derive(Clone)]
pub struct AttributedGraph {
    id: String,
    config: GraphConfig,
    attributes: Attributes,
    topology: TreeBackedTopology,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: BiHashMap<NodeHandle, String, RandomState, RandomState>,
    edge_ids: BiHashMap<EdgeHandle, String, RandomState, RandomState>,
    node_slots: HashMap<NodeHandle, usize, RandomState>,
    edge_slots: HashMap<EdgeHandle, usize, RandomState>,
}

impl std::fmt::Debug for AttributedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributedGraph")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("attributes", &self.attributes)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}

impl AttributedGraph {
    /// Creates an empty graph with the default policies: strict, no auto-creation.
    pub fn new(id: &str) -> Self {
        Self::with_config(id, GraphConfig::default())
    }

    pub fn with_policy(id: &str, strict: bool, auto_create: bool) -> Self {
        Self::with_config(
            id,
            GraphConfig::default().strict(strict).auto_create(auto_create),
        )
    }

    pub fn with_config(id: &str, config: GraphConfig) -> Self {
        let (nc, ec) = (config.node_capacity, config.edge_capacity);
        Self {
            id: id.to_owned(),
            config,
            attributes: Attributes::with_null_is_error(config.null_attributes_are_errors),
            topology: TreeBackedTopology::new(),
            nodes: Vec::with_capacity(nc),
            edges: Vec::with_capacity(ec),
            node_ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            edge_ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            node_slots: HashMap::with_capacity_and_hasher(nc, RandomState::new()),
            edge_slots: HashMap::with_capacity_and_hasher(ec, RandomState::new()),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    pub fn set_strict(&mut self, on: bool) {
        self.config.strict = on;
    }

    pub fn is_auto_create_enabled(&self) -> bool {
        self.config.auto_create
    }

    pub fn set_auto_create(&mut self, on: bool) {
        self.config.auto_create = on;
    }

    pub fn null_attributes_are_errors(&self) -> bool {
        self.config.null_attributes_are_errors
    }

    /// Switches whether reading a missing attribute fails,
    /// for the graph and every node and edge in it.
    pub fn set_null_attributes_are_errors(&mut self, on: bool) {
        self.config.null_attributes_are_errors = on;
        self.attributes.set_null_is_error(on);
        for n in self.nodes.iter_mut() {
            n.attributes_mut().set_null_is_error(on);
        }
        for e in self.edges.iter_mut() {
            e.attributes_mut().set_null_is_error(on);
        }
    }

    /// Removes all nodes, edges and graph attributes. Id and policies are kept.
    pub fn clear(&mut self) {
        debug!(graph = %self.id, nodes = self.nodes.len(), edges = self.edges.len(), "clearing graph");
        self.topology.clear();
        self.nodes.clear();
        self.edges.clear();
        self.node_ids.clear();
        self.edge_ids.clear();
        self.node_slots.clear();
        self.edge_slots.clear();
        self.attributes.clear();
    }
}

// Resolution of references. Every lookup by id, index or handle goes through here.
impl AttributedGraph {
    fn node_slot(&self, r: NodeRef<'_>) -> Option<usize> {
        match r {
            NodeRef::Id(id) => self
                .node_ids
                .get_by_right(id)
                .and_then(|h| self.node_slots.get(h))
                .copied(),
            NodeRef::Index(i) => (i < self.nodes.len()).then_some(i),
            NodeRef::Handle(h) => self.node_slots.get(&h).copied(),
            NodeRef::Node { handle, id } => self
                .node_slots
                .get(&handle)
                .copied()
                .filter(|s| self.nodes[*s].id() == id),
        }
    }

    fn edge_slot(&self, r: EdgeRef<'_>) -> Option<usize> {
        match r {
            EdgeRef::Id(id) => self
                .edge_ids
                .get_by_right(id)
                .and_then(|h| self.edge_slots.get(h))
                .copied(),
            EdgeRef::Index(i) => (i < self.edges.len()).then_some(i),
            EdgeRef::Handle(h) => self.edge_slots.get(&h).copied(),
            EdgeRef::Edge { handle, id } => self
                .edge_slots
                .get(&handle)
                .copied()
                .filter(|s| self.edges[*s].id() == id),
        }
    }

    fn node_handle(&self, r: NodeRef<'_>) -> Option<NodeHandle> {
        self.node_slot(r).map(|s| self.nodes[s].handle())
    }

    fn edge_by_link(&self, link: &Link) -> Option<&Edge> {
        self.edge_slots.get(&link.handle).map(|s| &self.edges[*s])
    }

    fn node_by_handle(&self, handle: &NodeHandle) -> Option<&Node> {
        self.node_slots.get(handle).map(|s| &self.nodes[*s])
    }
}

fn node_not_found(r: NodeRef<'_>) -> GraphError {
    GraphError::NotFound {
        kind: ElementKind::Node,
        reference: r.to_string(),
    }
}

fn edge_not_found(r: EdgeRef<'_>) -> GraphError {
    GraphError::NotFound {
        kind: ElementKind::Edge,
        reference: r.to_string(),
    }
}

// Nodes
impl AttributedGraph {
    /// Adds a node. Fails with [`GraphError::DuplicateId`] if the id is taken.
    pub fn add_node(&mut self, id: &str) -> Result<&mut Node> {
        if self.node_ids.contains_right(id) {
            return Err(GraphError::DuplicateId {
                kind: ElementKind::Node,
                id: id.to_owned(),
            });
        }
        let slot = self.insert_node(id);
        Ok(&mut self.nodes[slot])
    }

    fn insert_node(&mut self, id: &str) -> usize {
        let handle = self.topology.add_node();
        let slot = self.nodes.len();
        let attributes = Attributes::with_null_is_error(self.config.null_attributes_are_errors);
        self.nodes
            .push(Node::new(handle, id.to_owned(), slot, attributes));
        self.node_ids.insert(handle, id.to_owned());
        self.node_slots.insert(handle, slot);
        debug!(graph = %self.id, node = id, index = slot, "added node");
        slot
    }

    /// Removes a node and every edge touching it, and returns the node.
    pub fn remove_node<'r>(&mut self, r: impl Into<NodeRef<'r>>) -> Result<Node> {
        let r = r.into();
        let slot = self.node_slot(r).ok_or_else(|| node_not_found(r))?;
        let handle = self.nodes[slot].handle();
        for link in self.topology.remove_node(&handle) {
            if let Some(edge) = self.detach_edge(&link.handle) {
                trace!(graph = %self.id, edge = edge.id(), "removed incident edge");
            }
        }
        let node = self.detach_node(slot);
        debug!(graph = %self.id, node = node.id(), "removed node");
        Ok(node)
    }

    fn detach_node(&mut self, slot: usize) -> Node {
        let node = self.nodes.swap_remove(slot);
        self.node_slots.remove(&node.handle());
        self.node_ids.remove_by_left(&node.handle());
        if let Some(moved) = self.nodes.get_mut(slot) {
            moved.set_index(slot);
            self.node_slots.insert(moved.handle(), slot);
        }
        node
    }

    pub fn node<'r>(&self, r: impl Into<NodeRef<'r>>) -> Option<&Node> {
        self.node_slot(r.into()).map(|s| &self.nodes[s])
    }

    pub fn node_mut<'r>(&mut self, r: impl Into<NodeRef<'r>>) -> Option<&mut Node> {
        self.node_slot(r.into()).map(move |s| &mut self.nodes[s])
    }

    pub fn contains_node<'r>(&self, r: impl Into<NodeRef<'r>>) -> bool {
        self.node_slot(r.into()).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over nodes in index order.
    ///
    /// The graph cannot change shape while the iterator lives;
    /// use [`AttributedGraph::nodes_mut`] to edit attributes on the way.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }

    pub fn node_set(&self) -> NodeSet<'_> {
        NodeSet::new(self)
    }

    /// Number of edges touching a node, a self-loop counting once.
    pub fn degree<'r>(&self, r: impl Into<NodeRef<'r>>) -> Option<usize> {
        self.node_handle(r.into())
            .map(|h| self.topology.incident_links(&h).count())
    }

    pub fn incident_edges<'r>(&self, r: impl Into<NodeRef<'r>>) -> Box<dyn Iterator<Item = &Edge> + '_> {
        match self.node_handle(r.into()) {
            Some(h) => Box::new(
                self.topology
                    .incident_links(&h)
                    .filter_map(move |l| self.edge_by_link(&l)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Edges that can be walked away from a node: its out-going directed edges
    /// and all its undirected ones.
    pub fn leaving_edges<'r>(&self, r: impl Into<NodeRef<'r>>) -> Box<dyn Iterator<Item = &Edge> + '_> {
        match self.node_handle(r.into()) {
            Some(h) => Box::new(
                self.topology
                    .leaving_links(&h)
                    .filter_map(move |l| self.edge_by_link(&l)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Edges that can be walked into a node.
    pub fn entering_edges<'r>(&self, r: impl Into<NodeRef<'r>>) -> Box<dyn Iterator<Item = &Edge> + '_> {
        match self.node_handle(r.into()) {
            Some(h) => Box::new(
                self.topology
                    .entering_links(&h)
                    .filter_map(move |l| self.edge_by_link(&l)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Distinct nodes sharing an edge with a node, in edge creation order.
    pub fn neighbors<'r>(&self, r: impl Into<NodeRef<'r>>) -> Box<dyn Iterator<Item = &Node> + '_> {
        let h = match self.node_handle(r.into()) {
            Some(h) => h,
            None => return Box::new(std::iter::empty()),
        };
        let mut seen = HashSet::with_hasher(RandomState::new());
        let it = self
            .topology
            .incident_links(&h)
            .filter_map(move |l| l.opposite(&h))
            .filter(move |v| seen.insert(*v))
            .filter_map(move |v| self.node_by_handle(&v));
        Box::new(it)
    }
}

// Edges
impl AttributedGraph {
    /// Adds an edge between two nodes.
    ///
    /// Endpoints may be given by id, index, handle or `&Node`.
    /// When an endpoint id is missing, it is created if the graph is not strict
    /// and auto-creation is enabled; otherwise the call fails with
    /// [`GraphError::NotFound`]. Indices and handles are never auto-created.
    /// On failure the graph is left unchanged.
    pub fn add_edge<'s, 't>(
        &mut self,
        id: &str,
        source: impl Into<NodeRef<'s>>,
        target: impl Into<NodeRef<'t>>,
        directed: bool,
    ) -> Result<&mut Edge> {
        if self.edge_ids.contains_right(id) {
            return Err(GraphError::DuplicateId {
                kind: ElementKind::Edge,
                id: id.to_owned(),
            });
        }
        let source = source.into();
        let target = target.into();
        for r in [source, target] {
            if self.node_slot(r).is_some() {
                continue;
            }
            let creatable = matches!(r, NodeRef::Id(_)) && self.config.creates_missing_endpoints();
            if !creatable {
                if self.config.strict {
                    warn!(graph = %self.id, edge = id, endpoint = %r, "strict graph rejects edge to missing node");
                }
                return Err(node_not_found(r));
            }
        }
        let src = self.materialize(source)?;
        let tgt = self.materialize(target)?;
        let slot = self.insert_edge(id, src, tgt, directed);
        Ok(&mut self.edges[slot])
    }

    fn materialize(&mut self, r: NodeRef<'_>) -> Result<usize> {
        match (self.node_slot(r), r) {
            (Some(slot), _) => Ok(slot),
            (None, NodeRef::Id(id)) => {
                debug!(graph = %self.id, node = id, "auto-creating endpoint");
                Ok(self.insert_node(id))
            }
            (None, _) => Err(node_not_found(r)),
        }
    }

    fn insert_edge(&mut self, id: &str, src: usize, tgt: usize, directed: bool) -> usize {
        let source = (self.nodes[src].handle(), self.nodes[src].id().to_owned());
        let target = (self.nodes[tgt].handle(), self.nodes[tgt].id().to_owned());
        let handle = self.topology.add_edge(source.0, target.0, directed);
        let slot = self.edges.len();
        debug!(graph = %self.id, edge = id, source = %source.1, target = %target.1, directed, "added edge");
        let attributes = Attributes::with_null_is_error(self.config.null_attributes_are_errors);
        self.edges.push(Edge::new(
            handle,
            id.to_owned(),
            slot,
            source,
            target,
            directed,
            attributes,
        ));
        self.edge_ids.insert(handle, id.to_owned());
        self.edge_slots.insert(handle, slot);
        slot
    }

    /// Removes an edge given by id, index, handle or `&Edge`, and returns it.
    pub fn remove_edge<'r>(&mut self, r: impl Into<EdgeRef<'r>>) -> Result<Edge> {
        let r = r.into();
        let slot = self.edge_slot(r).ok_or_else(|| edge_not_found(r))?;
        let handle = self.edges[slot].handle();
        self.topology.remove_edge(&handle);
        self.detach_edge(&handle).ok_or_else(|| edge_not_found(r))
    }

    /// Removes the earliest created edge that can be walked from `source` to `target`:
    /// a directed edge `source -> target`, or an undirected edge between them.
    ///
    /// Fails with [`GraphError::NotFound`] naming whichever node or edge is missing.
    pub fn remove_edge_between<'s, 't>(
        &mut self,
        source: impl Into<NodeRef<'s>>,
        target: impl Into<NodeRef<'t>>,
    ) -> Result<Edge> {
        let (source, target) = (source.into(), target.into());
        for r in [source, target] {
            if !self.contains_node(r) {
                return Err(node_not_found(r));
            }
        }
        let handle = self
            .edge_toward(source, target)
            .map(Edge::handle)
            .ok_or_else(|| GraphError::NotFound {
                kind: ElementKind::Edge,
                reference: format!("from {} to {}", source, target),
            })?;
        self.remove_edge(handle)
    }

    /// The earliest created edge that can be walked from `source` to `target`.
    pub fn edge_toward<'s, 't>(
        &self,
        source: impl Into<NodeRef<'s>>,
        target: impl Into<NodeRef<'t>>,
    ) -> Option<&Edge> {
        let s = self.node_handle(source.into())?;
        let t = self.node_handle(target.into())?;
        self.topology
            .links_leading(&s, &t)
            .find_map(|l| self.edge_by_link(&l))
    }

    /// Any edge joining two nodes, whatever its direction.
    pub fn edge_between<'a, 'b>(
        &self,
        a: impl Into<NodeRef<'a>>,
        b: impl Into<NodeRef<'b>>,
    ) -> Option<&Edge> {
        let a = self.node_handle(a.into())?;
        let b = self.node_handle(b.into())?;
        self.topology
            .links_leading(&a, &b)
            .chain(self.topology.links_leading(&b, &a))
            .find_map(|l| self.edge_by_link(&l))
    }

    pub fn has_edge_between<'a, 'b>(&self, a: impl Into<NodeRef<'a>>, b: impl Into<NodeRef<'b>>) -> bool {
        self.edge_between(a, b).is_some()
    }

    fn detach_edge(&mut self, handle: &EdgeHandle) -> Option<Edge> {
        let slot = self.edge_slots.remove(handle)?;
        let edge = self.edges.swap_remove(slot);
        self.edge_ids.remove_by_left(handle);
        if let Some(moved) = self.edges.get_mut(slot) {
            moved.set_index(slot);
            self.edge_slots.insert(moved.handle(), slot);
        }
        debug!(graph = %self.id, edge = edge.id(), "removed edge");
        Some(edge)
    }

    /// Looks an edge up. Absence is not an error.
    pub fn edge<'r>(&self, r: impl Into<EdgeRef<'r>>) -> Option<&Edge> {
        self.edge_slot(r.into()).map(|s| &self.edges[s])
    }

    pub fn edge_mut<'r>(&mut self, r: impl Into<EdgeRef<'r>>) -> Option<&mut Edge> {
        self.edge_slot(r.into()).map(move |s| &mut self.edges[s])
    }

    pub fn contains_edge<'r>(&self, r: impl Into<EdgeRef<'r>>) -> bool {
        self.edge_slot(r.into()).is_some()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over edges in index order.
    pub fn edges(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> std::slice::IterMut<'_, Edge> {
        self.edges.iter_mut()
    }

    pub fn edge_set(&self) -> EdgeSet<'_> {
        EdgeSet::new(self)
    }

    /// Whether any edge is directed.
    pub fn has_directed_edges(&self) -> bool {
        self.edges.iter().any(Edge::is_directed)
    }
}

impl Element for AttributedGraph {
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
