use crate::low_level::*;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_node(&mut self) -> NodeHandle;
    fn add_edge(&mut self, source: NodeHandle, sink: NodeHandle, directed: bool) -> EdgeHandle;
}

pub trait EdgeShrinkableGraph {
    fn remove_edge(&mut self, edge: &EdgeHandle) -> Option<Link>;
}

pub trait NodeShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a node together with every link touching it
    /// and returns those links.
    fn remove_node(&mut self, node: &NodeHandle) -> Box<dyn Iterator<Item = Link> + 'static>;
    fn clear(&mut self);
}

pub trait QueryableGraph {
    fn node_size(&self) -> usize;
    fn iter_nodes(&self) -> Box<dyn Iterator<Item = NodeHandle> + '_>;
    fn contains_node(&self, v: &NodeHandle) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_links(&self) -> Box<dyn Iterator<Item = Link> + '_>;
    fn contains_edge(&self, e: &EdgeHandle) -> bool;
    fn find_link(&self, e: &EdgeHandle) -> Option<Link>;
    /// Links that can be walked from `from` to `to`, in creation order.
    fn links_leading(
        &self,
        from: &NodeHandle,
        to: &NodeHandle,
    ) -> Box<dyn Iterator<Item = Link> + '_>;
    /// Every link touching `v`, each exactly once, in creation order.
    fn incident_links(&self, v: &NodeHandle) -> Box<dyn Iterator<Item = Link> + '_>;

    /// Links that can be walked away from `v`.
    fn leaving_links(&self, v: &NodeHandle) -> Box<dyn Iterator<Item = Link> + '_> {
        let v = *v;
        Box::new(
            self.incident_links(&v)
                .filter(move |l| !l.directed || l.source == v),
        )
    }

    /// Links that can be walked into `v`.
    fn entering_links(&self, v: &NodeHandle) -> Box<dyn Iterator<Item = Link> + '_> {
        let v = *v;
        Box::new(
            self.incident_links(&v)
                .filter(move |l| !l.directed || l.sink == v),
        )
    }
}
