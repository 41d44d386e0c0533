//! Graph rendering
//!
//! Produces the DOT text form of a dependency graph and, best-effort,
//! a PNG via the external graphviz `dot` binary. The text form is the
//! primary output; PNG rendering can fail (graphviz absent, bad output
//! path) without affecting the run.

use crate::api::dependency_graph::DependencyGraph;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Rendering I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("graphviz `dot` exited with status {status}")]
    GraphvizFailed { status: std::process::ExitStatus },
}

/// Render the graph as DOT text, one quoted edge statement per edge
///
/// Node labels are the `name@version` keys; layout flows left to right.
/// Edge statements come out in discovery order.
pub fn to_dot(graph: &DependencyGraph) -> String {
    let mut dot = String::from("digraph dependencies {\n");
    dot.push_str("    rankdir=LR;\n");

    for (parent, child) in graph.edge_list() {
        dot.push_str(&format!("    \"{parent}\" -> \"{child}\";\n"));
    }

    dot.push_str("}\n");
    dot
}

/// Render DOT source to a PNG file by invoking graphviz
///
/// The DOT source is staged in a temp file; `dot -Tpng` writes the
/// output. Callers are expected to treat failure as a diagnostic, not a
/// fatal condition - the text form has already been produced.
pub fn render_png(dot_source: &str, output_file: &Path) -> Result<(), RenderError> {
    let mut staging = tempfile::NamedTempFile::new()?;
    staging.write_all(dot_source.as_bytes())?;
    staging.flush()?;

    debug!(output = %output_file.display(), "invoking graphviz");

    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(staging.path())
        .arg("-o")
        .arg(output_file)
        .status()?;

    if !status.success() {
        return Err(RenderError::GraphvizFailed { status });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("render.test.rs");
}
