/*!
# IO

Utilities for handing a graph to a renderer.

## Output Formats

- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

Node identifiers are written as quoted DOT ids, so any non-empty identifier is valid output.

## Traits

- [`GraphWriter`] is implemented by writers for a specific format.
- [`DotWrite`] is a shorthand to write any graph with default settings.
*/

pub mod dot;

use std::io::{Result, Write};

use crate::prelude::*;

pub use dot::*;

/// Trait for types that can write graphs in a specific format to any [`Write`] instance.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;
}
