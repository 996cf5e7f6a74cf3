use crate::low_level::*;
use std::collections::{BTreeMap, BTreeSet};

/// A tree-backed topology mixing directed and undirected links.
///
/// It keeps only handles, no ids or attributes.
/// Point queries are $O(\log n)$ and iterations are amortized $O(1)$.
/// Iterations are always in the order of node/link creation.
///
/// |                    | Complexity                                                       |
/// | ------------------ | ---------------------------------------------------------------- |
/// | `add_node`         | $O(\log \|V\|)$                                                  |
/// | `add_edge`         | $O(\log \|E\|)$                                                  |
/// | `remove_edge`      | $O(\log \|E\|)$                                                  |
/// | `remove_node`      | $O(\log \|V\| + \|E'\| \log \|E\|)$, $E'$ being the links touching the node. |
/// | `links_leading`    | returns in $O(\log \|E\|)$, amortized $O(1)$ on each `.next`.    |
/// | `incident_links`   | returns in $O(\log \|E\|)$, amortized $O(1)$ on each `.next`.    |
#[derive(Clone, Default)]
pub struct TreeBackedTopology {
    node_factory: NodeHandleFactory,
    edge_factory: EdgeHandleFactory,
    nodes: BTreeSet<NodeHandle>,
    links: BTreeMap<EdgeHandle, Link>,
    // (endpoint, link) for both endpoints
    incidence: BTreeSet<(NodeHandle, EdgeHandle)>,
    // (from, to, link) for every walkable direction
    walks: BTreeSet<(NodeHandle, NodeHandle, EdgeHandle)>,
}

impl std::fmt::Debug for TreeBackedTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedTopology {{")?;
        for v in self.nodes.iter() {
            writeln!(f, "{:?}:", v)?;
            for l in self.leaving_links(v) {
                let to = l.opposite(v).unwrap_or(l.sink);
                let arrow = if l.directed { "->" } else { "--" };
                writeln!(f, "  {} {:?} by {:?}", arrow, to, l.handle)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl TreeBackedTopology {
    fn walk_keys(link: &Link) -> impl Iterator<Item = (NodeHandle, NodeHandle, EdgeHandle)> {
        let forth = (link.source, link.sink, link.handle);
        let back = if link.directed {
            None
        } else {
            Some((link.sink, link.source, link.handle))
        };
        std::iter::once(forth).chain(back)
    }
}

impl GrowableGraph for TreeBackedTopology {
    fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self) -> NodeHandle {
        let v = self.node_factory.one_more();
        self.nodes.insert(v);
        v
    }

    fn add_edge(&mut self, source: NodeHandle, sink: NodeHandle, directed: bool) -> EdgeHandle {
        debug_assert!(self.nodes.contains(&source));
        debug_assert!(self.nodes.contains(&sink));
        let handle = self.edge_factory.one_more();
        let link = Link {
            handle,
            source,
            sink,
            directed,
        };
        self.links.insert(handle, link);
        self.incidence.insert((source, handle));
        self.incidence.insert((sink, handle));
        for key in Self::walk_keys(&link) {
            self.walks.insert(key);
        }
        handle
    }
}

impl EdgeShrinkableGraph for TreeBackedTopology {
    fn remove_edge(&mut self, edge: &EdgeHandle) -> Option<Link> {
        let link = self.links.remove(edge)?;
        self.incidence.remove(&(link.source, link.handle));
        self.incidence.remove(&(link.sink, link.handle));
        for key in Self::walk_keys(&link) {
            self.walks.remove(&key);
        }
        Some(link)
    }
}

impl NodeShrinkableGraph for TreeBackedTopology {
    fn remove_node(&mut self, node: &NodeHandle) -> Box<dyn Iterator<Item = Link> + 'static> {
        if !self.nodes.contains(node) {
            return Box::new(std::iter::empty());
        }
        let doomed: Vec<EdgeHandle> = self.incident_links(node).map(|l| l.handle).collect();
        let res: Vec<Link> = doomed
            .iter()
            .filter_map(|e| self.remove_edge(e))
            .collect();
        self.nodes.remove(node);
        Box::new(res.into_iter())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
        self.incidence.clear();
        self.walks.clear();
    }
}

impl QueryableGraph for TreeBackedTopology {
    fn node_size(&self) -> usize {
        self.nodes.len()
    }

    fn iter_nodes(&self) -> Box<dyn Iterator<Item = NodeHandle> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn contains_node(&self, v: &NodeHandle) -> bool {
        self.nodes.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.links.len()
    }

    fn iter_links(&self) -> Box<dyn Iterator<Item = Link> + '_> {
        Box::new(self.links.values().copied())
    }

    fn contains_edge(&self, e: &EdgeHandle) -> bool {
        self.links.contains_key(e)
    }

    fn find_link(&self, e: &EdgeHandle) -> Option<Link> {
        self.links.get(e).copied()
    }

    fn links_leading(
        &self,
        from: &NodeHandle,
        to: &NodeHandle,
    ) -> Box<dyn Iterator<Item = Link> + '_> {
        let start = (*from, *to, EdgeHandle::MIN);
        let end = (*from, *to, EdgeHandle::MAX);
        let it = self
            .walks
            .range(start..=end)
            .filter_map(move |(_, _, e)| self.links.get(e).copied());
        Box::new(it)
    }

    fn incident_links(&self, v: &NodeHandle) -> Box<dyn Iterator<Item = Link> + '_> {
        let start = (*v, EdgeHandle::MIN);
        let end = (v.next(), EdgeHandle::MIN);
        let it = self
            .incidence
            .range(start..end)
            .filter_map(move |(_, e)| self.links.get(e).copied());
        Box::new(it)
    }
}
