use crate::{attribute::*, graph::*};

/// A printable rendering of a graph with customized indentation.
///
/// Lists every node with its attributes, then the edges leaving it.
/// Undirected edges show up under both endpoints.
///
/// ```rust
/// use attrgraph::graph::*;
///
/// let mut g = AttributedGraph::new("g");
/// g.add_node("A").unwrap();
/// g.add_node("B").unwrap();
/// g.add_edge("AB", "A", "B", true).unwrap();
/// assert_eq!(
///     g.display().to_string(),
///     "graph \"g\"\n\"A\"\n  --\"AB\"-> \"B\"\n\"B\"\n"
/// );
/// ```
pub struct GraphView<'a> {
    graph: &'a AttributedGraph,
    init_indent: usize,
    indent_step: usize,
}

impl<'a> GraphView<'a> {
    pub fn new(graph: &'a AttributedGraph) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }

    fn display_attributes(f: &mut std::fmt::Formatter<'_>, attrs: &Attributes) -> std::fmt::Result {
        if attrs.is_empty() {
            return Ok(());
        }
        write!(f, " {{")?;
        for (i, (k, v)) in attrs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {:?}: {}", k, v)?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for GraphView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_indent(f, 0)?;
        write!(f, "graph {:?}", self.graph.id())?;
        Self::display_attributes(f, self.graph.attributes())?;
        writeln!(f)?;
        for v in self.graph.nodes() {
            self.display_indent(f, 0)?;
            write!(f, "{:?}", v.id())?;
            Self::display_attributes(f, v.attributes())?;
            writeln!(f)?;
            for e in self.graph.leaving_edges(v) {
                let to = e.opposite(v.id()).unwrap_or_else(|| e.target());
                let arrow = if e.is_directed() { "->" } else { "--" };
                self.display_indent(f, 1)?;
                write!(f, "--{:?}{} {:?}", e.id(), arrow, to)?;
                Self::display_attributes(f, e.attributes())?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for GraphView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl AttributedGraph {
    /// Renders the graph as text. See [`GraphView`].
    pub fn display(&self) -> GraphView<'_> {
        GraphView::new(self)
    }
}
