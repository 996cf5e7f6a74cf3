/// Handle to a node, which is essentially `usize`.
///
/// Unlike a node index, a handle never changes while the node lives
/// and is never reused by the factory that produced it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(usize);

/// Handle to an edge, which is essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeHandle(usize);

/// A factory to generate `NodeHandle` uniquely.
#[derive(Debug, Clone, Default)]
pub struct NodeHandleFactory(usize);

/// A factory to generate `EdgeHandle` uniquely.
#[derive(Debug, Clone, Default)]
pub struct EdgeHandleFactory(usize);

impl NodeHandleFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> NodeHandle {
        let cur = self.0;
        self.0 += 1;
        NodeHandle(cur)
    }
}

impl EdgeHandleFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeHandle {
        let cur = self.0;
        self.0 += 1;
        EdgeHandle(cur)
    }
}

impl NodeHandle {
    pub const MIN: NodeHandle = NodeHandle(0);
    pub const MAX: NodeHandle = NodeHandle(usize::MAX);

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl EdgeHandle {
    pub const MIN: EdgeHandle = EdgeHandle(0);
    pub const MAX: EdgeHandle = EdgeHandle(usize::MAX);

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_never_repeat() {
        let mut nf = NodeHandleFactory::new();
        let a = nf.one_more();
        let b = nf.one_more();
        assert_ne!(a, b);
        assert_eq!(a.next(), b);

        let mut ef = EdgeHandleFactory::default();
        assert_eq!(ef.one_more().to_raw(), 0);
        assert_eq!(ef.one_more().to_raw(), 1);
    }
}
