//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and edges.
//!
//! Every node is written explicitly, so isolated nodes show up too. Undirected edges are written
//! once. Nodes of a traversal result can be highlighted:
//! ```
//! use algographs::{prelude::*, io::*, algo::*};
//!
//! let graph = UndirectedGraph::from_edges(["a", "b", "c"], [("a", "b")]).unwrap();
//! let visited: Vec<NodeId> = graph.bfs("a").cloned().collect();
//!
//! let mut out = Vec::new();
//! DotWriter::new()
//!     .highlight_color(DotColor::Red)
//!     .try_write_highlighted(&graph, &visited, &mut out)
//!     .unwrap();
//!
//! let dot = String::from_utf8(out).unwrap();
//! assert!(dot.contains("\"a\"--\"b\";"));
//! assert!(dot.contains("\"b\"[style=filled, fillcolor=red]"));
//! ```
//!
//! Note that for nodes, the latest coloring is the one that will be applied in a visualizer.
use std::{fmt::Display, io::Write};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Fill color of highlighted nodes
    highlight_color: DotColor,
    /// Pin nodes to their stored coordinates
    positions: bool,
    /// Fill nodes with their stored color
    node_colors: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            highlight_color: DotColor::Orange,
            positions: false,
            node_colors: false,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill color for nodes passed to [`DotWriter::try_write_highlighted`] (orange by default)
    pub fn highlight_color(mut self, color: DotColor) -> Self {
        self.highlight_color = color;
        self
    }

    /// If *true*, nodes are pinned to their `x`/`y` attributes (`pos="x,y!"`)
    pub fn positions(mut self, positions: bool) -> Self {
        self.positions = positions;
        self
    }

    /// If *true*, nodes are filled with their `color` attribute
    pub fn node_colors(mut self, node_colors: bool) -> Self {
        self.node_colors = node_colors;
        self
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a node as quoted DOT id
    fn format_node(&self, u: &str) -> String {
        format!("\"{}\"", u.replace('\\', "\\\\").replace('"', "\\\""))
    }

    /// Writes one statement per node, carrying the attributes selected by the settings
    pub fn write_nodes<'a, W, I>(&self, writer: &mut W, nodes: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a NodeRecord>,
    {
        for record in nodes {
            let attributes = record.attributes();
            let mut properties = Vec::new();
            if self.positions {
                properties.push(format!("pos=\"{},{}!\"", attributes.x, attributes.y));
            }
            if self.node_colors {
                properties.push(format!(
                    "style=filled, fillcolor={}",
                    self.format_node(&attributes.color)
                ));
            }

            write!(writer, "{}", self.format_node(record.id()))?;
            if !properties.is_empty() {
                write!(writer, "[{}]", properties.join(", "))?;
            }
            write!(writer, ";")?;
        }
        writeln!(writer)
    }

    /// Writes an iterator of edges to `writer`. Must know if the edges are directed and if they
    /// should be colored.
    pub fn write_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        directed: bool,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        let edge_dir = if directed { "->" } else { "--" };

        let edge_color = if let Some(c) = color {
            &format!("[color={c}]")
        } else {
            ""
        };

        for Edge(u, v) in edges.into_iter() {
            write!(
                writer,
                "{}{edge_dir}{}{edge_color};",
                self.format_node(&u),
                self.format_node(&v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored nodes to `writer`.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for u in nodes.into_iter() {
            write!(
                writer,
                "{}[style=filled, fillcolor={color}]",
                self.format_node(u.as_ref())
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }

    /// Writes the whole graph and fills `highlighted` with the highlight color.
    /// Highlighted ids that are not nodes of `graph` are skipped.
    pub fn try_write_highlighted<G, W>(
        &self,
        graph: &G,
        highlighted: &[NodeId],
        mut writer: W,
    ) -> Result<()>
    where
        G: AdjacencyList + GraphType,
        W: Write,
    {
        let directed = G::is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_nodes(&mut writer, graph.vertices().filter_map(|u| graph.node(u)))?;
        self.write_edges(&mut writer, graph.edges(!directed), directed, None)?;
        if !highlighted.is_empty() {
            self.color_nodes(
                &mut writer,
                highlighted.iter().filter(|u| graph.has_node(u)),
                self.highlight_color,
            )?;
        }
        self.finish_graph(&mut writer)
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList + GraphType,
{
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.try_write_highlighted(graph, &[], writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> DotWrite for G
where
    G: AdjacencyList + GraphType,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the SVG color names understood by GraphViz, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    Cyan,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    LightGray,
    Magenta,
    Orange,
    Pink,
    Purple,
    Red,
    SkyBlue,
    Teal,
    Tomato,
    White,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<G: AdjacencyList + GraphType>(writer: &DotWriter, graph: &G, highlighted: &[NodeId]) -> String {
        let mut out = Vec::new();
        writer.try_write_highlighted(graph, highlighted, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn undirected_edges_written_once() {
        let graph = UndirectedGraph::from_edges(["b", "a", "c"], [("b", "a")]).unwrap();

        let mut out = Vec::new();
        graph.try_write_dot(&mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert_eq!(dot, "graph {\n\"b\";\"a\";\"c\";\n\"a\"--\"b\";\n}\n");
    }

    #[test]
    fn directed_edges_and_highlight() {
        let dag = Dag::from_edges(["x", "y"], [("y", "x")]).unwrap();
        let dot = render(
            &DotWriter::new().highlight_color(DotColor::Crimson),
            &dag,
            &["y".into(), "ghost".into()],
        );

        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("\"y\"->\"x\";"));
        assert!(dot.contains("\"y\"[style=filled, fillcolor=crimson]"));
        assert!(!dot.contains("ghost"));
    }

    #[test]
    fn attributes_and_quoting() {
        let mut graph = UndirectedGraph::new();
        graph
            .add_node_with("say \"hi\"", Attributes::default().at(1.5, 2.0))
            .unwrap();

        let dot = render(&DotWriter::new().positions(true).node_colors(true), &graph, &[]);
        assert!(dot.contains("\"say \\\"hi\\\"\"[pos=\"1.5,2!\", style=filled, fillcolor=\"#4CAF50\"];"));
    }

    #[test]
    fn color_names() {
        assert_eq!(DotColor::LightBlue.to_string(), "lightblue");
        assert_eq!(DotColor::Orange.to_string(), "orange");
    }
}
