//! Handle-level topology underneath [`crate::graph::AttributedGraph`].
//!
//! Nodes and links here are lightweight handles, essentially `usize`,
//! with no ids and no attributes.
//! Callers may feel free to copy and store them.
//! Links carry their own directedness, so one topology mixes directed and undirected links.

mod handle;
pub use self::handle::*;
mod link;
pub use self::link::*;
mod r#trait;
pub use self::r#trait::*;
mod tree_backed;
pub use self::tree_backed::*;

#[cfg(test)]
pub(crate) mod tests {
    use crate::low_level::*;
    use petgraph::{
        stable_graph::{EdgeIndex, NodeIndex, StableDiGraph},
        visit::EdgeRef,
        Direction,
    };
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddNode(NodeHandle),
        RemoveNode(NodeHandle),
        AddEdge(NodeHandle, NodeHandle, EdgeHandle, bool),
        RemoveEdge(EdgeHandle),
    }

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }
    }

    fn pick<T: Copy>(g: &mut quickcheck::Gen, known: &BTreeSet<T>) -> T {
        let idx = usize::arbitrary(g) % known.len();
        *known.iter().nth(idx).unwrap()
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut node_factory = NodeHandleFactory::new();
            let mut edge_factory = EdgeHandleFactory::new();
            let mut known_nodes = BTreeSet::new();
            let mut known_edges: BTreeSet<(EdgeHandle, NodeHandle, NodeHandle)> = BTreeSet::new();
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .filter_map(|_| match u8::arbitrary(g) % 4 {
                    0 => {
                        let v = node_factory.one_more();
                        known_nodes.insert(v);
                        Some(Op::AddNode(v))
                    }
                    1 => {
                        if known_nodes.is_empty() {
                            None
                        } else {
                            let v = pick(g, &known_nodes);
                            known_nodes.remove(&v);
                            known_edges.retain(|(_, s, t)| *s != v && *t != v);
                            Some(Op::RemoveNode(v))
                        }
                    }
                    2 => {
                        if known_nodes.is_empty() {
                            None
                        } else {
                            let s = pick(g, &known_nodes);
                            let t = pick(g, &known_nodes);
                            let e = edge_factory.one_more();
                            known_edges.insert((e, s, t));
                            Some(Op::AddEdge(s, t, e, bool::arbitrary(g)))
                        }
                    }
                    3 => {
                        if known_edges.is_empty() {
                            None
                        } else {
                            let picked = pick(g, &known_edges);
                            known_edges.remove(&picked);
                            Some(Op::RemoveEdge(picked.0))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| Ops {
                ops: me.ops[0..n].to_vec(),
            });
            Box::new(it)
        }
    }

    /// Reference topology on top of petgraph, used to cross-check [`TreeBackedTopology`].
    pub struct PetgraphOracle {
        graph: StableDiGraph<(), Link>,
        node_factory: NodeHandleFactory,
        edge_factory: EdgeHandleFactory,
        nodes: HashMap<NodeHandle, NodeIndex>,
        edges: HashMap<EdgeHandle, EdgeIndex>,
    }

    impl GrowableGraph for PetgraphOracle {
        fn new() -> Self {
            Self {
                graph: StableDiGraph::default(),
                node_factory: NodeHandleFactory::new(),
                edge_factory: EdgeHandleFactory::new(),
                nodes: HashMap::new(),
                edges: HashMap::new(),
            }
        }

        fn add_node(&mut self) -> NodeHandle {
            let v = self.node_factory.one_more();
            self.nodes.insert(v, self.graph.add_node(()));
            v
        }

        fn add_edge(&mut self, source: NodeHandle, sink: NodeHandle, directed: bool) -> EdgeHandle {
            let handle = self.edge_factory.one_more();
            let link = Link {
                handle,
                source,
                sink,
                directed,
            };
            let idx = self
                .graph
                .add_edge(self.nodes[&source], self.nodes[&sink], link);
            self.edges.insert(handle, idx);
            handle
        }
    }

    impl EdgeShrinkableGraph for PetgraphOracle {
        fn remove_edge(&mut self, edge: &EdgeHandle) -> Option<Link> {
            let idx = self.edges.remove(edge)?;
            self.graph.remove_edge(idx)
        }
    }

    impl NodeShrinkableGraph for PetgraphOracle {
        fn remove_node(&mut self, node: &NodeHandle) -> Box<dyn Iterator<Item = Link> + 'static> {
            let links: Vec<Link> = self.incident_links(node).collect();
            for l in links.iter() {
                self.edges.remove(&l.handle);
            }
            if let Some(idx) = self.nodes.remove(node) {
                self.graph.remove_node(idx);
            }
            Box::new(links.into_iter())
        }

        fn clear(&mut self) {
            self.graph.clear();
            self.nodes.clear();
            self.edges.clear();
        }
    }

    impl QueryableGraph for PetgraphOracle {
        fn node_size(&self) -> usize {
            self.graph.node_count()
        }

        fn iter_nodes(&self) -> Box<dyn Iterator<Item = NodeHandle> + '_> {
            Box::new(self.nodes.keys().copied())
        }

        fn contains_node(&self, v: &NodeHandle) -> bool {
            self.nodes.contains_key(v)
        }

        fn edge_size(&self) -> usize {
            self.graph.edge_count()
        }

        fn iter_links(&self) -> Box<dyn Iterator<Item = Link> + '_> {
            Box::new(
                self.edges
                    .values()
                    .filter_map(|idx| self.graph.edge_weight(*idx))
                    .copied(),
            )
        }

        fn contains_edge(&self, e: &EdgeHandle) -> bool {
            self.edges.contains_key(e)
        }

        fn find_link(&self, e: &EdgeHandle) -> Option<Link> {
            self.edges
                .get(e)
                .and_then(|idx| self.graph.edge_weight(*idx))
                .copied()
        }

        fn links_leading(
            &self,
            from: &NodeHandle,
            to: &NodeHandle,
        ) -> Box<dyn Iterator<Item = Link> + '_> {
            let (from, to) = (*from, *to);
            Box::new(self.incident_links(&from).filter(move |l| l.leads(&from, &to)))
        }

        fn incident_links(&self, v: &NodeHandle) -> Box<dyn Iterator<Item = Link> + '_> {
            let idx = match self.nodes.get(v) {
                Some(idx) => *idx,
                None => return Box::new(std::iter::empty()),
            };
            let links: BTreeSet<Link> = self
                .graph
                .edges_directed(idx, Direction::Outgoing)
                .chain(self.graph.edges_directed(idx, Direction::Incoming))
                .map(|e| *e.weight())
                .collect();
            Box::new(links.into_iter())
        }
    }
}
