use crate::{attribute::*, graph::*};
use std::io::Write;

/// Dumps a graph in GML.
///
/// Attribute keys become GML keys, with every character outside `[A-Za-z0-9_]`
/// replaced by `_` and a leading digit prefixed by `_`.
/// Vectors and arrays become nested lists of `item` entries, hashes nested lists keyed by their keys.
pub trait DumpInGml {
    fn dump_in_gml<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl DumpInGml for AttributedGraph {
    fn dump_in_gml<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "graph [")?;
        writeln!(out, "  id {}", gml_string(self.id()))?;
        writeln!(out, "  directed {}", u8::from(self.has_directed_edges()))?;
        dump_attributes(out, self.attributes(), 1)?;
        for v in self.nodes() {
            writeln!(out, "  node [")?;
            writeln!(out, "    id {}", gml_string(v.id()))?;
            dump_attributes(out, v.attributes(), 2)?;
            writeln!(out, "  ]")?;
        }
        for e in self.edges() {
            writeln!(out, "  edge [")?;
            writeln!(out, "    id {}", gml_string(e.id()))?;
            writeln!(out, "    source {}", gml_string(e.source()))?;
            writeln!(out, "    target {}", gml_string(e.target()))?;
            writeln!(out, "    directed {}", u8::from(e.is_directed()))?;
            dump_attributes(out, e.attributes(), 2)?;
            writeln!(out, "  ]")?;
        }
        writeln!(out, "]")
    }
}

fn dump_attributes<W: Write>(out: &mut W, attrs: &Attributes, level: usize) -> std::io::Result<()> {
    for (k, v) in attrs.iter() {
        dump_value(out, &gml_key(k), v, level)?;
    }
    Ok(())
}

fn dump_value<W: Write>(out: &mut W, key: &str, v: &AttributeValue, level: usize) -> std::io::Result<()> {
    let pad = "  ".repeat(level);
    match v {
        AttributeValue::String(s) => writeln!(out, "{}{} {}", pad, key, gml_string(s)),
        AttributeValue::Number(x) => writeln!(out, "{}{} {}", pad, key, x),
        AttributeValue::Vector(xs) => dump_list(out, key, xs, level),
        AttributeValue::Array(xs) => dump_list(out, key, xs, level),
        AttributeValue::Hash(m) => {
            writeln!(out, "{}{} [", pad, key)?;
            for (k, v) in AttributeValue::sorted_entries(m) {
                dump_value(out, &gml_key(k), v, level + 1)?;
            }
            writeln!(out, "{}]", pad)
        }
    }
}

fn dump_list<W: Write>(out: &mut W, key: &str, xs: &[AttributeValue], level: usize) -> std::io::Result<()> {
    let pad = "  ".repeat(level);
    writeln!(out, "{}{} [", pad, key)?;
    for x in xs {
        dump_value(out, "item", x, level + 1)?;
    }
    writeln!(out, "{}]", pad)
}

fn gml_key(key: &str) -> String {
    let mut res: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if res.starts_with(|c: char| c.is_ascii_digit()) {
        res.insert(0, '_');
    }
    res
}

/// GML strings cannot hold `"`; it is written as an HTML entity.
fn gml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('&', "&amp;").replace('"', "&quot;"))
}
