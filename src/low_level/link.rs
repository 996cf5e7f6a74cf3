use super::{EdgeHandle, NodeHandle};

/// Information about a low-level edge.
///
/// An undirected link can be traversed both ways;
/// `source` and `sink` then only record the order the endpoints were given in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Link {
    pub handle: EdgeHandle,
    pub source: NodeHandle,
    pub sink: NodeHandle,
    pub directed: bool,
}

impl Link {
    /// Tests whether the link can be walked from `from` to `to`.
    pub fn leads(&self, from: &NodeHandle, to: &NodeHandle) -> bool {
        (self.source == *from && self.sink == *to)
            || (!self.directed && self.source == *to && self.sink == *from)
    }

    /// The endpoint across the link from `node`, if `node` is one of its endpoints.
    pub fn opposite(&self, node: &NodeHandle) -> Option<NodeHandle> {
        if self.source == *node {
            Some(self.sink)
        } else if self.sink == *node {
            Some(self.source)
        } else {
            None
        }
    }
}
