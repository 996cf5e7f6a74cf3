//! Visualize attributed graphs in the graphviz format.
use crate::{
    attribute::*,
    export::{plain_text, quoted},
    graph::*,
};
use std::io::Write;

/**
 * Dumps a graph into graphviz format.
 *
 * A graph with any directed edge is written as a `digraph`,
 * its undirected edges carrying `dir=none`.
 * Otherwise it is written as a plain `graph`.
 * Every edge carries its id; attributes follow as quoted graphviz attributes.
 *
 * # Examples
 *
 * ```rust
 * use attrgraph::{attribute::*, export::*, graph::*};
 *
 * let mut g = AttributedGraph::with_policy("trial", false, true);
 * g.add_edge("e0", "0", "1", true).unwrap();
 * g.add_edge("e1", "0", "0", false).unwrap();
 * g.node_mut("1").unwrap().add_attribute("shape", "rectangle").unwrap();
 * g.edge_mut("e0").unwrap().add_attribute("color", "red").unwrap();
 *
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf).unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph "trial" {
 *   "0" ;
 *   "1" ["shape"="rectangle"] ;
 *   "0" -> "1" ["id"="e0", "color"="red"] ;
 *   "0" -> "0" ["id"="e1", "dir"="none"] ;
 * }
 * "#
 * );
 *
 * // without directed edges
 * g.remove_edge("e0").unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf).unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph "trial" {
 *   "0" ;
 *   "1" ["shape"="rectangle"] ;
 *   "0" -- "0" ["id"="e1"] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz {
    /**
     * Dumps a graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl DumpInGraphviz for AttributedGraph {
    fn dump_in_graphviz<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let directed = self.has_directed_edges();
        if directed {
            writeln!(out, "digraph {} {{", quoted(self.id()))?;
        } else {
            writeln!(out, "graph {} {{", quoted(self.id()))?;
        }
        let graph_attrs = labels(self.attributes());
        if !graph_attrs.is_empty() {
            writeln!(out, "  graph [{}] ;", graph_attrs.join(", "))?;
        }
        for v in self.nodes() {
            let attrs = labels(v.attributes());
            if attrs.is_empty() {
                writeln!(out, "  {} ;", quoted(v.id()))?;
            } else {
                writeln!(out, "  {} [{}] ;", quoted(v.id()), attrs.join(", "))?;
            }
        }
        let dir = if directed { "->" } else { "--" };
        for e in self.edges() {
            let mut attrs = vec![format!("\"id\"={}", quoted(e.id()))];
            if directed && !e.is_directed() {
                attrs.push("\"dir\"=\"none\"".to_owned());
            }
            attrs.extend(labels(e.attributes()));
            writeln!(
                out,
                "  {} {} {} [{}] ;",
                quoted(e.source()),
                dir,
                quoted(e.target()),
                attrs.join(", ")
            )?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

fn labels(attrs: &Attributes) -> Vec<String> {
    attrs
        .iter()
        .map(|(k, v)| format!("{}={}", quoted(k), quoted(&plain_text(v))))
        .collect()
}
