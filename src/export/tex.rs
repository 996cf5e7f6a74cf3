use crate::{attribute::*, graph::*};
use std::io::Write;

/// Dumps a graph as a standalone LaTeX document drawing it with TikZ.
///
/// Nodes sit on a circle in index order and are named `n0`, `n1`, ...
/// Self-loops are drawn above their node.
pub trait DumpInTikz {
    fn dump_in_tikz<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl DumpInTikz for AttributedGraph {
    fn dump_in_tikz<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "\\documentclass{{article}}")?;
        writeln!(out, "\\usepackage{{tikz}}")?;
        writeln!(out, "\\begin{{document}}")?;
        writeln!(out, "% graph {}", tex_escape(self.id()))?;
        writeln!(out, "\\begin{{tikzpicture}}[every node/.style={{draw, circle}}]")?;
        let n = self.node_count();
        let radius = (n as f64 * 0.4).max(2.0);
        for v in self.nodes() {
            let angle = 360.0 * v.index() as f64 / n as f64;
            writeln!(
                out,
                "  \\node (n{}) at ({:.2}:{:.2}cm) {{{}}};",
                v.index(),
                angle,
                radius,
                tex_escape(v.id())
            )?;
        }
        for e in self.edges() {
            let (s, t) = match (self.node(e.source_handle()), self.node(e.target_handle())) {
                (Some(s), Some(t)) => (s.index(), t.index()),
                _ => continue,
            };
            let style = if e.is_directed() { "[->]" } else { "" };
            if e.is_loop() {
                writeln!(out, "  \\draw{} (n{}) edge[loop above] (n{});", style, s, t)?;
            } else {
                writeln!(out, "  \\draw{} (n{}) -- (n{});", style, s, t)?;
            }
        }
        writeln!(out, "\\end{{tikzpicture}}")?;
        writeln!(out, "\\end{{document}}")
    }
}

fn tex_escape(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => res.push_str("\\textbackslash{}"),
            '~' => res.push_str("\\textasciitilde{}"),
            '^' => res.push_str("\\textasciicircum{}"),
            '{' | '}' | '#' | '$' | '%' | '&' | '_' => {
                res.push('\\');
                res.push(c);
            }
            _ => res.push(c),
        }
    }
    res
}
