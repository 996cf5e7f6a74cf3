//! Writing attributed graphs to files.
//!
//! The format follows the file extension:
//!
//! | extension | format |
//! |---|---|
//! | `.dgs` | DGS text |
//! | `.dgsz` | gzip-compressed DGS |
//! | `.gml` | GML |
//! | `.dot`, `.gv` | graphviz |
//! | `.tex` | LaTeX document drawing the graph with TikZ |
//!
//! Image extensions (`.png`, `.jpg`, `.jpeg`, `.svg`) name formats this crate does not render;
//! they fail with [`GraphError::Io`] of kind [`std::io::ErrorKind::Unsupported`].
//! Any other extension is [`GraphError::UnsupportedFormat`].

mod dgs;
pub use self::dgs::*;
mod gml;
pub use self::gml::*;
mod graphviz;
pub use self::graphviz::*;
mod tex;
pub use self::tex::*;

use crate::{attribute::*, error::*, graph::*};
use flate2::{write::GzEncoder, Compression};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Dgs,
    CompressedDgs,
    Gml,
    Graphviz,
    Tikz,
}

impl FileFormat {
    /// Picks a format from the extension of `path`, case-insensitively.
    ///
    /// Image extensions fail with an `Unsupported` I/O error,
    /// unknown ones with [`GraphError::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|x| x.to_str())
            .map(|x| x.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "dgs" => Ok(FileFormat::Dgs),
            "dgsz" => Ok(FileFormat::CompressedDgs),
            "gml" => Ok(FileFormat::Gml),
            "dot" | "gv" => Ok(FileFormat::Graphviz),
            "tex" => Ok(FileFormat::Tikz),
            "png" | "jpg" | "jpeg" | "svg" => Err(GraphError::Io(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("cannot render a graph as {} image", ext),
            ))),
            _ => Err(GraphError::UnsupportedFormat(ext)),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Dgs => "dgs",
            FileFormat::CompressedDgs => "dgsz",
            FileFormat::Gml => "gml",
            FileFormat::Graphviz => "dot",
            FileFormat::Tikz => "tex",
        }
    }
}

impl AttributedGraph {
    /// Writes the graph to a file, in the format its extension names.
    ///
    /// The extension is checked before the file is created.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        debug!(graph = %self.id(), path = %path.display(), ?format, "writing graph");
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out, format)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: FileFormat) -> Result<()> {
        match format {
            FileFormat::Dgs => self.dump_in_dgs(out)?,
            FileFormat::CompressedDgs => {
                let mut gz = GzEncoder::new(out, Compression::default());
                self.dump_in_dgs(&mut gz)?;
                gz.finish()?;
            }
            FileFormat::Gml => self.dump_in_gml(out)?,
            FileFormat::Graphviz => self.dump_in_graphviz(out)?,
            FileFormat::Tikz => self.dump_in_tikz(out)?,
        }
        Ok(())
    }
}

/// Quotes a string with backslash escapes for `"` and `\`.
pub(crate) fn quoted(s: &str) -> String {
    let mut res = String::with_capacity(s.len() + 2);
    res.push('"');
    for c in s.chars() {
        match c {
            '"' => res.push_str("\\\""),
            '\\' => res.push_str("\\\\"),
            '\n' => res.push_str("\\n"),
            _ => res.push(c),
        }
    }
    res.push('"');
    res
}

/// Plain text of a value: strings unquoted, everything else as displayed.
pub(crate) fn plain_text(v: &AttributeValue) -> String {
    match v {
        AttributeValue::String(s) => s.clone(),
        _ => v.to_string(),
    }
}
