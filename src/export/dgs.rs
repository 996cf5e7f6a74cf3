use crate::{attribute::*, export::quoted, graph::*};
use std::io::Write;

/**
 * Dumps a graph as a DGS event stream.
 *
 * The stream starts with the `DGS004` header and the graph id,
 * then one `cg` event per graph attribute, one `an` event per node
 * and one `ae` event per edge. Directed edges put `>` between their endpoints.
 *
 * Values are written the DGS way: strings quoted, numbers bare,
 * vectors and arrays as `{a,b}`, hashes as `[k:v,...]`.
 *
 * ```rust
 * use attrgraph::{attribute::*, export::*, graph::*};
 *
 * let mut g = AttributedGraph::with_policy("g", false, true);
 * g.add_edge("AB", "A", "B", true).unwrap();
 * g.node_mut("A").unwrap().add_attribute("w", 2).unwrap();
 *
 * let mut buf = vec![];
 * g.dump_in_dgs(&mut buf).unwrap();
 * assert_eq!(
 *     String::from_utf8(buf).unwrap(),
 *     r#"DGS004
 * "g" 0 0
 * an "A" "w"=2
 * an "B"
 * ae "AB" "A" > "B"
 * "#
 * );
 * ```
 */
pub trait DumpInDgs {
    fn dump_in_dgs<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl DumpInDgs for AttributedGraph {
    fn dump_in_dgs<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "DGS004")?;
        writeln!(out, "{} 0 0", quoted(self.id()))?;
        for (k, v) in self.attributes().iter() {
            writeln!(out, "cg {}={}", quoted(k), dgs_value(v))?;
        }
        for v in self.nodes() {
            write!(out, "an {}", quoted(v.id()))?;
            dump_attributes(out, v.attributes())?;
            writeln!(out)?;
        }
        for e in self.edges() {
            let dir = if e.is_directed() { " >" } else { "" };
            write!(
                out,
                "ae {} {}{} {}",
                quoted(e.id()),
                quoted(e.source()),
                dir,
                quoted(e.target())
            )?;
            dump_attributes(out, e.attributes())?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn dump_attributes<W: Write>(out: &mut W, attrs: &Attributes) -> std::io::Result<()> {
    for (k, v) in attrs.iter() {
        write!(out, " {}={}", quoted(k), dgs_value(v))?;
    }
    Ok(())
}

fn dgs_value(v: &AttributeValue) -> String {
    fn seq(xs: &[AttributeValue]) -> String {
        let items: Vec<_> = xs.iter().map(dgs_value).collect();
        format!("{{{}}}", items.join(","))
    }

    match v {
        AttributeValue::String(s) => quoted(s),
        AttributeValue::Number(x) => x.to_string(),
        AttributeValue::Vector(xs) => seq(xs),
        AttributeValue::Array(xs) => seq(xs),
        AttributeValue::Hash(m) => {
            let items: Vec<_> = AttributeValue::sorted_entries(m)
                .into_iter()
                .map(|(k, v)| format!("{}:{}", quoted(k), dgs_value(v)))
                .collect();
            format!("[{}]", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn values() {
        assert_eq!(dgs_value(&"a".into()), "\"a\"");
        assert_eq!(dgs_value(&1.25.into()), "1.25");
        assert_eq!(dgs_value(&vec![1, 2].into()), "{1,2}");
        assert_eq!(dgs_value(&["x", "y"].into()), "{\"x\",\"y\"}");
        let hm: HashMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(dgs_value(&hm.into()), "[\"a\":1,\"b\":2]");
    }

    #[test]
    fn undirected_edges_and_graph_attributes() {
        let mut g = AttributedGraph::with_policy("g", false, true);
        g.add_attribute("ui.title", "t").unwrap();
        g.add_edge("AB", "A", "B", false).unwrap();
        g.edge_mut("AB").unwrap().add_attribute("len", 3).unwrap();
        let mut buf = vec![];
        g.dump_in_dgs(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[2], "cg \"ui.title\"=\"t\"");
        assert_eq!(lines[5], "ae \"AB\" \"A\" \"B\" \"len\"=3");
    }
}
