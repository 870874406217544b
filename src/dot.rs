//! DOT serialization of a colored, partitioned graph.
//!
//! ```text
//! digraph dg {
//! 	0 [fillcolor ="12,200,7"];
//! 	0->1;
//! }
//! ```

use crate::color::{Color, ColorAssignment};
use crate::error::{Result, VisualizerError};
use crate::graph::{Graph, VertexId};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};

const DOT_HEADER: &str = "digraph dg {";
const DOT_FOOTER: &str = "}";
const DOT_FILL_COLOR_OPEN: &str = "[fillcolor =\"";
const DOT_FILL_COLOR_CLOSE: &str = "\"]";
const DOT_OUT_EDGE: &str = "->";
const DOT_LINE_ENDING: &str = ";";

/// Writes `graph` as a DOT document to `out`. All vertex statements come
/// before the first edge statement. An empty graph writes nothing at all.
///
/// Vertex colors are resolved before the first byte is written, so a vertex
/// without a partition or a partition without a color fails with nothing
/// written to `out`.
pub fn write_dot_to<W: Write>(
    out: &mut W,
    graph: &Graph,
    colors: &ColorAssignment,
) -> Result<()> {
    if graph.is_empty() {
        return Ok(());
    }
    let fills = resolve_colors(graph, colors)?;
    write_document(out, graph, &fills).map_err(VisualizerError::DotWrite)
}

/// [`write_dot_to`] into a `String`.
pub fn render_dot(graph: &Graph, colors: &ColorAssignment) -> Result<String> {
    let mut buf = Vec::new();
    write_dot_to(&mut buf, graph, colors)?;
    // ascii punctuation, integers and color tokens that came from a &str
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Renders the whole document before touching `path`, so a failed render
/// never leaves a truncated file that looks complete. An empty graph leaves
/// an empty file.
pub fn write_dot(path: impl AsRef<Path>, graph: &Graph, colors: &ColorAssignment) -> Result<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    write_dot_to(&mut buf, graph, colors).inspect_err(|e| {
        error!(path = %path.display(), error = %e, "dot output aborted");
    })?;
    fs::write(path, buf).map_err(|e| VisualizerError::io(path, e))?;

    if graph.is_empty() {
        info!(path = %path.display(), "graph is empty");
    } else {
        info!(path = %path.display(), vertices = graph.vertex_count(), ".dot created");
    }
    Ok(())
}

fn resolve_colors<'a>(
    graph: &Graph,
    colors: &'a ColorAssignment,
) -> Result<Vec<(VertexId, &'a Color)>> {
    graph
        .vertices()
        .map(|(v, _)| {
            let partition = graph.require_partition(v)?;
            colors
                .get(partition)
                .map(|color| (v, color))
                .ok_or(VisualizerError::MissingPartitionColor { vertex: v, partition })
        })
        .collect()
}

fn write_document<W: Write>(
    out: &mut W,
    graph: &Graph,
    fills: &[(VertexId, &Color)],
) -> io::Result<()> {
    writeln!(out, "{DOT_HEADER}")?;
    for (v, color) in fills {
        writeln!(
            out,
            "\t{v} {DOT_FILL_COLOR_OPEN}{color}{DOT_FILL_COLOR_CLOSE}{DOT_LINE_ENDING}"
        )?;
    }
    for (v, nbr) in graph.edges() {
        writeln!(out, "\t{v}{DOT_OUT_EDGE}{nbr}{DOT_LINE_ENDING}")?;
    }
    writeln!(out, "{DOT_FOOTER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::VertexRecord;

    fn sample() -> (Graph, ColorAssignment) {
        let graph = Graph::from_records(vec![
            VertexRecord::new(0, 0, vec![1]),
            VertexRecord::new(1, 1, vec![0, 2]),
            VertexRecord::new(2, 0, vec![1]),
        ]);
        let mut colors = ColorAssignment::new();
        colors.insert(0, Color::new(10, 20, 30));
        colors.insert(1, Color::new(1, 2, 3));
        (graph, colors)
    }

    #[test]
    fn test_render_layout() {
        let (graph, colors) = sample();
        let expected = "digraph dg {\n\
                        \t0 [fillcolor =\"10,20,30\"];\n\
                        \t1 [fillcolor =\"1,2,3\"];\n\
                        \t2 [fillcolor =\"10,20,30\"];\n\
                        \t0->1;\n\
                        \t1->0;\n\
                        \t1->2;\n\
                        \t2->1;\n\
                        }\n";
        assert_eq!(render_dot(&graph, &colors).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_graph() {
        let dot = render_dot(&Graph::default(), &ColorAssignment::new()).unwrap();
        assert_eq!(dot, "");
    }

    #[test]
    fn test_write_to_any_writer() {
        let (graph, colors) = sample();
        let mut out = io::Cursor::new(Vec::new());
        write_dot_to(&mut out, &graph, &colors).unwrap();
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            render_dot(&graph, &colors).unwrap()
        );
    }

    #[test]
    fn test_loaded_tokens_rendered_verbatim() {
        let graph = Graph::from_records(vec![
            VertexRecord::new(0, 0, vec![1]),
            VertexRecord::new(1, 1, vec![]),
        ]);
        let mut colors = ColorAssignment::new();
        colors.insert(0, "#ff0000".parse().unwrap());
        colors.insert(1, "1, 2, 3".parse().unwrap());

        let dot = render_dot(&graph, &colors).unwrap();
        assert!(dot.contains("\t0 [fillcolor =\"#ff0000\"];\n"));
        assert!(dot.contains("\t1 [fillcolor =\"1, 2, 3\"];\n"));
    }

    #[test]
    fn test_missing_color_fails() {
        let (graph, _) = sample();
        let mut colors = ColorAssignment::new();
        colors.insert(0, Color::new(1, 1, 1));

        let mut out = Vec::new();
        let err = write_dot_to(&mut out, &graph, &colors).unwrap_err();
        assert!(out.is_empty());
        assert!(matches!(
            err,
            VisualizerError::MissingPartitionColor {
                vertex: 1,
                partition: 1
            }
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let (graph, colors) = sample();
        assert_eq!(
            render_dot(&graph, &colors).unwrap(),
            render_dot(&graph, &colors).unwrap()
        );
    }
}
