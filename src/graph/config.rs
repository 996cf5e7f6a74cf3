/// Policies and capacity hints of an [`AttributedGraph`](crate::graph::AttributedGraph).
///
/// The defaults are `strict = true`, `auto_create = false`
/// and `null_attributes_are_errors = false`.
/// Capacity hints only preallocate storage.
///
/// ```rust
/// use attrgraph::graph::*;
///
/// let config = GraphConfig::default()
///     .strict(false)
///     .auto_create(true)
///     .node_capacity(16);
/// let g = AttributedGraph::with_config("g", config);
/// assert!(!g.is_strict());
/// assert!(g.is_auto_create_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    pub strict: bool,
    pub auto_create: bool,
    pub null_attributes_are_errors: bool,
    pub node_capacity: usize,
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            strict: true,
            auto_create: false,
            null_attributes_are_errors: false,
            node_capacity: 0,
            edge_capacity: 0,
        }
    }
}

impl GraphConfig {
    pub fn strict(mut self, on: bool) -> Self {
        self.strict = on;
        self
    }

    pub fn auto_create(mut self, on: bool) -> Self {
        self.auto_create = on;
        self
    }

    pub fn null_attributes_are_errors(mut self, on: bool) -> Self {
        self.null_attributes_are_errors = on;
        self
    }

    pub fn node_capacity(mut self, n: usize) -> Self {
        self.node_capacity = n;
        self
    }

    pub fn edge_capacity(mut self, n: usize) -> Self {
        self.edge_capacity = n;
        self
    }

    /// Whether a missing endpoint id may be created on edge insertion.
    /// Strictness wins over auto-creation.
    pub fn creates_missing_endpoints(&self) -> bool {
        !self.strict && self.auto_create
    }
}
