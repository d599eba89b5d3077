//! Graphviz DOT export.
//!
//! Output layout:
//!
//! ```text
//! digraph G {
//!     "A";
//!     "B";
//!     "A" -> "B";
//! }
//! ```
//!
//! Node statements come first in label order, then edge statements ordered by
//! source and destination. Labels are rendered with `Display` and quoted;
//! backslashes, double quotes and line breaks are escaped.

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use super::graph::{Graph, GraphError};

const INDENT: &str = "    ";

/// Types that can render themselves as a DOT document.
pub trait ToDot {
    fn to_dot(&self) -> String;
}

impl<T: Ord + Display> ToDot for Graph<T> {
    fn to_dot(&self) -> String {
        Dot(self).to_string()
    }
}

/// Writes `graph` as a DOT `digraph` to `out`.
pub fn write_dot<T, W>(graph: &Graph<T>, mut out: W) -> io::Result<()>
where
    T: Ord + Display,
    W: Write,
{
    write!(out, "{}", Dot(graph))?;
    out.flush()
}

struct Dot<'a, T>(&'a Graph<T>);

impl<T: Ord + Display> fmt::Display for Dot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        for node in self.0.nodes() {
            writeln!(f, "{}{};", INDENT, quote(node))?;
        }
        for (from, to) in self.0.edges() {
            writeln!(f, "{}{} -> {};", INDENT, quote(from), quote(to))?;
        }
        writeln!(f, "}}")
    }
}

/// Writes `graph` in DOT format to the file at `path`, replacing any existing file.
pub fn generate_dot_graph<T, P>(graph: &Graph<T>, path: P) -> Result<(), GraphError>
where
    T: Ord + Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "writing DOT graph");
    let file = File::create(path)?;
    write_dot(graph, BufWriter::new(file))?;
    info!(
        path = %path.display(),
        nodes = graph.nodes().count(),
        edges = graph.edges().count(),
        "wrote DOT graph"
    );
    Ok(())
}

fn quote<T: Display>(label: &T) -> String {
    let label = label.to_string();
    let mut quoted = String::with_capacity(label.len() + 2);
    quoted.push('"');
    for c in label.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
